//! Netlist DOT writer (petgraph)

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::path::Path;

use crate::errors::Result;
use crate::features::netlist::{GateType, Netlist};

/// Copy a netlist into a petgraph graph labelled for rendering
///
/// Node indices match `NodeId`s; node weights are `name: GATE` (just the name
/// when unset), edge weights are edge names.
pub fn to_digraph(netlist: &Netlist) -> DiGraph<String, String> {
    let mut graph = DiGraph::with_capacity(netlist.node_count(), netlist.edge_count());

    for node in netlist.nodes() {
        let label = match node.gate_type() {
            GateType::Unset => node.name().to_string(),
            gate_type => format!("{}: {}", node.name(), gate_type),
        };
        graph.add_node(label);
    }
    for edge in netlist.edges() {
        graph.add_edge(
            NodeIndex::new(edge.src().index()),
            NodeIndex::new(edge.dst().index()),
            edge.name().to_string(),
        );
    }

    graph
}

/// Graphviz source for a netlist
pub fn to_dot(netlist: &Netlist) -> String {
    format!("{}", Dot::new(&to_digraph(netlist)))
}

/// Write Graphviz source for a netlist to `path`
pub fn write_dot(netlist: &Netlist, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, to_dot(netlist))?;
    Ok(())
}
