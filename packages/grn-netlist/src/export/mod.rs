//! Netlist writers
//!
//! - json : netlist document consumed by the downstream stages
//! - dot  : Graphviz rendering of the imported netlist

pub mod dot;
pub mod json;

pub use dot::{to_digraph, to_dot, write_dot};
pub use json::{to_json_string, write_json, EdgeJson, NetlistJson, NodeJson};
