// Netlist - Logic Gate Graph
//
// Directed graph of gate-typed nodes shared by every downstream stage
// (technology mapping, placement, export).
//
// ## Architecture
// - Domain: Pure models (Netlist, NetlistNode, NetlistEdge, GateType)

pub mod domain;

pub use domain::{EdgeId, GateType, Netlist, NetlistEdge, NetlistNode, NetlistStats, NodeId};
