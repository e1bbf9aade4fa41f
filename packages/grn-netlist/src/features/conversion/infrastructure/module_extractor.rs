// Module Extractor - Document → Root Module Definition

use tracing::debug;

use crate::errors::{NetlistError, Result};
use crate::shared::models::{Document, ModuleDefinition};

/// Pick the root module definition to convert
///
/// Without a requested name the first root in document order is taken; a
/// document without roots yields `Ok(None)`. With a name, the root whose
/// display id matches is taken and a missing one is an error.
pub fn select_root<'a>(
    document: &'a Document,
    requested: Option<&str>,
) -> Result<Option<&'a ModuleDefinition>> {
    let mut roots = document.root_module_definitions();

    match requested {
        None => {
            let root = roots.next();
            if let Some(extra) = roots.next() {
                debug!(
                    "Document has several root modules, converting the first and ignoring '{}'",
                    extra.display_id
                );
            }
            Ok(root)
        }
        Some(name) => roots
            .find(|md| md.display_id == name)
            .map(Some)
            .ok_or_else(|| NetlistError::RootModuleNotFound(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Module;

    fn document() -> Document {
        let mut top = ModuleDefinition::new("urn:md:top", "top");
        top.modules.push(Module {
            identity: "urn:md:top/sub".into(),
            display_id: "sub_instance".into(),
            definition: "urn:md:sub".into(),
        });
        Document {
            component_definitions: vec![],
            module_definitions: vec![
                ModuleDefinition::new("urn:md:sub", "sub"),
                top,
                ModuleDefinition::new("urn:md:alt", "alt"),
            ],
        }
    }

    #[test]
    fn test_first_root_selected() {
        let doc = document();
        let root = select_root(&doc, None).unwrap().unwrap();
        assert_eq!(root.display_id, "top");
    }

    #[test]
    fn test_no_roots_is_not_an_error() {
        let doc = Document::new();
        assert!(select_root(&doc, None).unwrap().is_none());
    }

    #[test]
    fn test_named_root() {
        let doc = document();
        let root = select_root(&doc, Some("alt")).unwrap().unwrap();
        assert_eq!(root.identity, "urn:md:alt");
    }

    #[test]
    fn test_named_root_must_be_a_root() {
        let doc = document();
        let err = select_root(&doc, Some("sub")).unwrap_err();
        assert!(matches!(err, NetlistError::RootModuleNotFound(name) if name == "sub"));
    }
}
