//! Parsed regulatory network document
//!
//! Every top-level object is identified by its URI (`identity`); cross
//! references (`definition`, `participant`) hold the target's URI.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::{LogicOperator, SboTerm};

/// A parsed document: component definitions plus module definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub component_definitions: Vec<ComponentDefinition>,

    #[serde(default)]
    pub module_definitions: Vec<ModuleDefinition>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a component definition by identity
    pub fn component_definition(&self, identity: &str) -> Option<&ComponentDefinition> {
        self.component_definitions
            .iter()
            .find(|cd| cd.identity == identity)
    }

    /// Look up a module definition by identity
    pub fn module_definition(&self, identity: &str) -> Option<&ModuleDefinition> {
        self.module_definitions
            .iter()
            .find(|md| md.identity == identity)
    }

    /// Module definitions not instantiated by any other module, in document order
    pub fn root_module_definitions(&self) -> impl Iterator<Item = &ModuleDefinition> {
        let instantiated: AHashSet<&str> = self
            .module_definitions
            .iter()
            .flat_map(|md| md.modules.iter().map(|m| m.definition.as_str()))
            .collect();

        self.module_definitions
            .iter()
            .filter(move |md| !instantiated.contains(md.identity.as_str()))
    }
}

/// Definition of a molecular species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub identity: String,
    pub display_id: String,
}

impl ComponentDefinition {
    pub fn new(identity: impl Into<String>, display_id: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            display_id: display_id.into(),
        }
    }
}

/// Subgraph description: functional components wired by interactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub identity: String,
    pub display_id: String,

    #[serde(default)]
    pub functional_components: Vec<FunctionalComponent>,

    #[serde(default)]
    pub interactions: Vec<Interaction>,

    /// Instances of other module definitions nested in this one
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl ModuleDefinition {
    pub fn new(identity: impl Into<String>, display_id: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            display_id: display_id.into(),
            ..Self::default()
        }
    }

    /// Look up a functional component of this module by identity
    pub fn functional_component(&self, identity: &str) -> Option<&FunctionalComponent> {
        self.functional_components
            .iter()
            .find(|fc| fc.identity == identity)
    }
}

/// Instance of a module definition inside another module definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub identity: String,
    pub display_id: String,
    pub definition: String,
}

/// Use of a component definition inside a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalComponent {
    pub identity: String,
    pub display_id: String,
    pub definition: String,
}

impl FunctionalComponent {
    pub fn new(
        identity: impl Into<String>,
        display_id: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            display_id: display_id.into(),
            definition: definition.into(),
        }
    }
}

/// Regulatory interaction between functional components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub identity: String,
    pub display_id: String,

    #[serde(default)]
    pub types: Vec<SboTerm>,

    #[serde(default)]
    pub participations: Vec<Participation>,

    /// Boolean operator from the logic annotation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<LogicOperator>,
}

impl Interaction {
    pub fn has_type(&self, term: &SboTerm) -> bool {
        self.types.contains(term)
    }
}

/// Role-tagged reference from an interaction to a functional component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub identity: String,
    pub display_id: String,

    /// Identity of the participating functional component
    pub participant: String,

    #[serde(default)]
    pub roles: Vec<SboTerm>,
}

impl Participation {
    pub fn has_role(&self, term: &SboTerm) -> bool {
        self.roles.contains(term)
    }
}
