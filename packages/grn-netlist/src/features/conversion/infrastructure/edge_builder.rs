// Edge Builder - Resolved Interactions → Netlist Edges
//
// One edge per modifier participation, pointing at the modified participant.

use tracing::debug;

use crate::errors::Result;
use crate::features::conversion::domain::ResolvedInteraction;
use crate::features::netlist::Netlist;

/// Add `modifier → modified` edges for every resolved interaction
///
/// Edges are named after the modifier participation. Returns the number of
/// edges added.
pub fn build_edges(netlist: &mut Netlist, interactions: &[ResolvedInteraction<'_>]) -> Result<usize> {
    let mut added = 0;
    for interaction in interactions {
        let dst = interaction.modified.node;
        for modifier in &interaction.modifiers {
            netlist.add_edge(modifier.name, modifier.node, dst)?;
            added += 1;
        }
    }

    debug!("Built {} edges from {} interactions", added, interactions.len());
    Ok(added)
}
