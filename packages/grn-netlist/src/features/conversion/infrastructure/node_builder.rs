// Node Builder - Functional Components → Netlist Nodes
//
// One node per component definition, named after the definition's display id.

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::errors::{NetlistError, ReferenceKind, Result};
use crate::features::conversion::domain::NodeTable;
use crate::features::netlist::Netlist;
use crate::shared::models::{ComponentDefinition, Document, ModuleDefinition};

/// Add one node per component definition referenced by `root`
///
/// When several functional components share a definition the later one wins:
/// the definition keeps a single node, placed where the later component
/// occurs. Returns the definition → node table for the remaining stages.
pub fn build_nodes<'a>(
    document: &Document,
    root: &'a ModuleDefinition,
    netlist: &mut Netlist,
) -> Result<NodeTable<'a>> {
    let definitions: AHashMap<&str, &ComponentDefinition> = document
        .component_definitions
        .iter()
        .map(|cd| (cd.identity.as_str(), cd))
        .collect();

    // Slots emptied by a later component with the same definition
    let mut slots: Vec<Option<(&'a str, &str)>> =
        Vec::with_capacity(root.functional_components.len());
    let mut slot_of: AHashMap<&'a str, usize> = AHashMap::new();

    for fc in &root.functional_components {
        let definition = definitions
            .get(fc.definition.as_str())
            .copied()
            .ok_or_else(|| NetlistError::unresolved(ReferenceKind::Definition, &fc.definition))?;
        let key = fc.definition.as_str();

        if let Some(previous) = slot_of.insert(key, slots.len()) {
            warn!(
                "Functional component '{}' reuses definition '{}'; replacing the earlier node",
                fc.display_id, definition.display_id
            );
            slots[previous] = None;
        }
        slots.push(Some((key, definition.display_id.as_str())));
    }

    let mut table = NodeTable::with_capacity(slot_of.len());
    for (key, name) in slots.into_iter().flatten() {
        let id = netlist.add_node(name);
        table.insert(key, id);
    }

    debug!("Built {} nodes for module '{}'", table.len(), root.display_id);
    Ok(table)
}
