// Conversion Infrastructure
//
// Stage implementations plus both gate classifiers

pub mod boundary;
pub mod edge_builder;
pub mod module_extractor;
pub mod node_builder;
pub mod role_resolver;
pub mod single_pass;
pub mod two_pass;

pub use edge_builder::build_edges;
pub use module_extractor::select_root;
pub use node_builder::build_nodes;
pub use role_resolver::resolve_interactions;
pub use single_pass::SinglePassClassifier;
pub use two_pass::TwoPassClassifier;
