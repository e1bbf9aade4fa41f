//! Test data builders
//!
//! Builder patterns for regulatory network documents. Every species `X` gets
//! a component definition `urn:cd:X` (display id `X`) and a functional
//! component `urn:fc:X` in the root module.

use grn_netlist::shared::models::{
    ComponentDefinition, Document, FunctionalComponent, Interaction, Module, ModuleDefinition,
    Participation, SboTerm,
};
use grn_netlist::LogicOperator;

/// Builder for a single-root Document
#[derive(Debug)]
pub struct DocumentBuilder {
    root: ModuleDefinition,
    definitions: Vec<ComponentDefinition>,
    extra_modules: Vec<ModuleDefinition>,
}

impl DocumentBuilder {
    /// Create a builder whose root module has the given display id
    pub fn new(root: &str) -> Self {
        Self {
            root: ModuleDefinition::new(format!("urn:md:{}", root), root),
            definitions: Vec::new(),
            extra_modules: Vec::new(),
        }
    }

    /// Add a species: component definition plus functional component
    pub fn species(mut self, name: &str) -> Self {
        self.definitions
            .push(ComponentDefinition::new(format!("urn:cd:{}", name), name));
        self.root.functional_components.push(FunctionalComponent::new(
            format!("urn:fc:{}", name),
            name,
            format!("urn:cd:{}", name),
        ));
        self
    }

    /// Add several species
    pub fn species_list(self, names: &[&str]) -> Self {
        names.iter().fold(self, |builder, name| builder.species(name))
    }

    /// Add a functional component pointing at an existing species' definition
    pub fn component_of(mut self, component: &str, species: &str) -> Self {
        self.root.functional_components.push(FunctionalComponent::new(
            format!("urn:fc:{}", component),
            component,
            format!("urn:cd:{}", species),
        ));
        self
    }

    /// Add an interaction to the root module
    pub fn interaction(mut self, interaction: InteractionBuilder) -> Self {
        self.root.interactions.push(interaction.build());
        self
    }

    /// Add another module definition instantiating the root (making it a non-root)
    pub fn wrapped_by(mut self, parent: &str) -> Self {
        let mut md = ModuleDefinition::new(format!("urn:md:{}", parent), parent);
        md.modules.push(Module {
            identity: format!("urn:md:{}/{}", parent, self.root.display_id),
            display_id: format!("{}_instance", self.root.display_id),
            definition: self.root.identity.clone(),
        });
        self.extra_modules.push(md);
        self
    }

    /// Add an unrelated root module after the main one
    pub fn with_extra_root(mut self, name: &str) -> Self {
        self.extra_modules
            .push(ModuleDefinition::new(format!("urn:md:{}", name), name));
        self
    }

    /// Build the final Document
    pub fn build(self) -> Document {
        let mut module_definitions = vec![self.root];
        module_definitions.extend(self.extra_modules);
        Document {
            component_definitions: self.definitions,
            module_definitions,
        }
    }
}

/// Builder for Interaction
#[derive(Debug)]
pub struct InteractionBuilder {
    name: String,
    types: Vec<SboTerm>,
    participations: Vec<Participation>,
    logic: Option<LogicOperator>,
}

impl InteractionBuilder {
    /// Interaction with an explicit type set
    pub fn typed(name: &str, types: Vec<SboTerm>) -> Self {
        Self {
            name: name.to_string(),
            types,
            participations: Vec::new(),
            logic: None,
        }
    }

    /// Stimulation interaction
    pub fn stimulation(name: &str) -> Self {
        Self::typed(name, vec![SboTerm::Stimulation])
    }

    /// Inhibition interaction
    pub fn inhibition(name: &str) -> Self {
        Self::typed(name, vec![SboTerm::Inhibition])
    }

    /// Add a participation of `species` with the given roles
    ///
    /// The participation display id is `<interaction>_<species>`.
    pub fn participant(mut self, species: &str, roles: Vec<SboTerm>) -> Self {
        let display_id = format!("{}_{}", self.name, species);
        self.participations.push(Participation {
            identity: format!("urn:p:{}", display_id),
            display_id,
            participant: format!("urn:fc:{}", species),
            roles,
        });
        self
    }

    pub fn stimulator(self, species: &str) -> Self {
        self.participant(species, vec![SboTerm::Stimulator])
    }

    pub fn inhibitor(self, species: &str) -> Self {
        self.participant(species, vec![SboTerm::Inhibitor])
    }

    pub fn stimulated(self, species: &str) -> Self {
        self.participant(species, vec![SboTerm::Stimulated])
    }

    pub fn inhibited(self, species: &str) -> Self {
        self.participant(species, vec![SboTerm::Inhibited])
    }

    pub fn logic(mut self, logic: LogicOperator) -> Self {
        self.logic = Some(logic);
        self
    }

    /// Build the final Interaction
    pub fn build(self) -> Interaction {
        Interaction {
            identity: format!("urn:i:{}", self.name),
            display_id: self.name,
            types: self.types,
            participations: self.participations,
            logic: self.logic,
        }
    }
}
