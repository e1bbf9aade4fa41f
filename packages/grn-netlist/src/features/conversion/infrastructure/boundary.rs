// Boundary Labelling - Primary Inputs / Outputs
//
// Shared first step of both classifiers.

use crate::errors::Result;
use crate::features::netlist::{GateType, Netlist, NodeId};

/// Label nodes without in-edges `PrimaryInput` and the remaining nodes
/// without out-edges `PrimaryOutput`
///
/// Returns the interior nodes (at least one in-edge and one out-edge) in
/// netlist order.
pub fn label_boundary_nodes(netlist: &mut Netlist) -> Result<Vec<NodeId>> {
    let mut interior = Vec::new();
    let labels: Vec<(NodeId, Option<GateType>)> = netlist
        .nodes()
        .iter()
        .map(|node| {
            let label = if node.num_in_edges() == 0 {
                Some(GateType::PrimaryInput)
            } else if node.num_out_edges() == 0 {
                Some(GateType::PrimaryOutput)
            } else {
                None
            };
            (node.id(), label)
        })
        .collect();

    for (id, label) in labels {
        match label {
            Some(gate_type) => netlist.set_gate_type(id, gate_type)?,
            None => interior.push(id),
        }
    }
    Ok(interior)
}
