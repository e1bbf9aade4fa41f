//! Netlist Converter UseCase
//!
//! Runs the conversion stages in order under a `ConverterConfig`:
//! root module → nodes → resolved interactions → edges → gate types.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{ClassifierKind, ConverterConfig, Validatable};
use crate::errors::Result;
use crate::features::conversion::infrastructure::{
    build_edges, build_nodes, resolve_interactions, select_root, SinglePassClassifier,
    TwoPassClassifier,
};
use crate::features::conversion::ports::GateClassifier;
use crate::features::netlist::Netlist;
use crate::shared::models::Document;

/// Converts parsed regulatory network documents into netlists
///
/// Holds no per-conversion state: every call builds its own lookup tables,
/// so one converter can serve many documents, also from several threads.
pub struct NetlistConverter {
    config: ConverterConfig,
    classifier: Box<dyn GateClassifier>,
}

impl NetlistConverter {
    /// Converter using the classifier named by `config`
    pub fn new(config: ConverterConfig) -> Self {
        let classifier = classifier_for(config.classifier);
        Self { config, classifier }
    }

    /// Converter with a caller-supplied classifier; `config.classifier` is ignored
    pub fn with_classifier(config: ConverterConfig, classifier: Box<dyn GateClassifier>) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Convert one document
    ///
    /// A document without a root module yields an empty, unnamed netlist.
    /// Any error means no netlist was produced.
    pub fn convert(&self, document: &Document) -> Result<Netlist> {
        self.config.validate()?;

        let Some(root) = select_root(document, self.config.root_module.as_deref())? else {
            debug!("Document has no root module, returning an empty netlist");
            return Ok(Netlist::new());
        };

        let mut netlist = Netlist::named(root.display_id.as_str());
        let nodes = build_nodes(document, root, &mut netlist)?;
        let interactions = resolve_interactions(root, &nodes)?;
        build_edges(&mut netlist, &interactions)?;
        let netlist = self.classifier.classify(netlist, &interactions)?;

        let stats = netlist.stats();
        info!(
            "Converted module '{}' with {} classifier: {} nodes ({} inputs, {} outputs, {} gates, {} unset), {} edges",
            root.display_id,
            self.classifier.name(),
            stats.nodes,
            stats.primary_inputs,
            stats.primary_outputs,
            stats.logic_gates,
            stats.unset,
            stats.edges
        );
        Ok(netlist)
    }

    /// Convert independent documents in parallel, one result per document
    pub fn convert_batch(&self, documents: &[Document]) -> Vec<Result<Netlist>> {
        documents.par_iter().map(|doc| self.convert(doc)).collect()
    }
}

impl Default for NetlistConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl std::fmt::Debug for NetlistConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetlistConverter")
            .field("config", &self.config)
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

/// Classifier implementation for a configured strategy
pub fn classifier_for(kind: ClassifierKind) -> Box<dyn GateClassifier> {
    match kind {
        ClassifierKind::TwoPass => Box::new(TwoPassClassifier::new()),
        ClassifierKind::SinglePass => Box::new(SinglePassClassifier::new()),
    }
}
