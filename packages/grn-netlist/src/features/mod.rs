//! Feature modules
//!
//! - netlist    : Output graph (nodes, edges, gate types)
//! - conversion : Document → netlist stages and gate classifiers

pub mod conversion;
pub mod netlist;
