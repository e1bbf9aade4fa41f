// Conversion - Regulatory Network Document → Netlist
//
// Stages (leaves first):
// 1. Module extraction  : pick the root module definition
// 2. Node building      : one node per component definition
// 3. Role resolution    : modified/modifier roles per interaction
// 4. Edge building      : modifier → modified edges
// 5. Gate classification: gate type per node (two-pass or single-pass)
//
// ## Architecture
// - Domain: Roles and resolved interactions
// - Ports: GateClassifier trait
// - Infrastructure: Stage implementations and both classifiers
// - Application: NetlistConverter orchestration

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::NetlistConverter;
pub use domain::{
    InteractionRoles, NodeTable, ParticipantRef, ParticipationRole, ResolvedInteraction, RoleSet,
};
pub use infrastructure::{SinglePassClassifier, TwoPassClassifier};
pub use ports::GateClassifier;
