// Two-Pass Gate Classifier
//
// Pass 1 aggregates, per node and across all interactions, the modifier
// participations driving it (inputs) and the modifier participations it plays
// itself (outputs). Pass 2 infers each interior node's gate from those role
// patterns plus the logic tag of its governing interaction.
//
// 2 inputs:
//   all stimulator, outputs all inhibitor:  or → NOR,  and → NAND
//   all inhibitor,  outputs all inhibitor:  nor → NAND, nand → NOR
// 1 input:
//   first output stimulator → BUF, inhibitor → NOT
// anything else stays unset.

use ahash::AHashMap;
use tracing::{debug, warn};

use super::boundary::label_boundary_nodes;
use crate::errors::Result;
use crate::features::conversion::domain::{ParticipantRef, ParticipationRole, ResolvedInteraction};
use crate::features::conversion::ports::GateClassifier;
use crate::features::netlist::{GateType, Netlist, NodeId};
use crate::shared::models::LogicOperator;

/// Reference classifier: role-pattern inference
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPassClassifier;

impl TwoPassClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl GateClassifier for TwoPassClassifier {
    fn name(&self) -> &'static str {
        "two-pass"
    }

    fn classify(
        &self,
        mut netlist: Netlist,
        interactions: &[ResolvedInteraction<'_>],
    ) -> Result<Netlist> {
        let interior = label_boundary_nodes(&mut netlist)?;

        // Pass 1: aggregate role patterns per node
        let mut inputs: AHashMap<NodeId, Vec<&ParticipantRef<'_>>> = AHashMap::new();
        let mut outputs: AHashMap<NodeId, Vec<&ParticipantRef<'_>>> = AHashMap::new();
        let mut governing: AHashMap<NodeId, &ResolvedInteraction<'_>> = AHashMap::new();

        for interaction in interactions {
            let target = interaction.modified.node;
            governing.insert(target, interaction);
            inputs
                .entry(target)
                .or_default()
                .extend(interaction.modifiers.iter());
            for modifier in &interaction.modifiers {
                outputs.entry(modifier.node).or_default().push(modifier);
            }
        }

        // Pass 2: infer interior gates
        for id in interior {
            let node_inputs = inputs.get(&id).map(Vec::as_slice).unwrap_or_default();
            let node_outputs = outputs.get(&id).map(Vec::as_slice).unwrap_or_default();
            let logic = governing.get(&id).and_then(|interaction| interaction.logic);

            let gate_type = infer_gate_type(node_inputs, node_outputs, logic);
            let name = netlist.node(id).map(|n| n.name()).unwrap_or_default();
            if gate_type == GateType::Unset {
                warn!(
                    "No gate type for node '{}' ({} inputs, {} outputs, logic {:?})",
                    name,
                    node_inputs.len(),
                    node_outputs.len(),
                    logic
                );
            } else {
                debug!("Node '{}' classified as {}", name, gate_type);
            }
            netlist.set_gate_type(id, gate_type)?;
        }

        Ok(netlist)
    }
}

/// Gate type of an interior node from its accumulated inputs and outputs
pub fn infer_gate_type(
    inputs: &[&ParticipantRef<'_>],
    outputs: &[&ParticipantRef<'_>],
    logic: Option<LogicOperator>,
) -> GateType {
    let all = |refs: &[&ParticipantRef<'_>], role| refs.iter().all(|r| r.has_role(role));
    let mut gate_type = GateType::Unset;

    match inputs.len() {
        2 => {
            let inhibiting_outputs = all(outputs, ParticipationRole::Inhibitor);
            if all(inputs, ParticipationRole::Stimulator) && inhibiting_outputs {
                match logic {
                    Some(LogicOperator::Or) => gate_type = GateType::Nor,
                    Some(LogicOperator::And) => gate_type = GateType::Nand,
                    _ => {}
                }
            }
            if all(inputs, ParticipationRole::Inhibitor) && inhibiting_outputs {
                match logic {
                    Some(LogicOperator::Nor) => gate_type = GateType::Nand,
                    Some(LogicOperator::Nand) => gate_type = GateType::Nor,
                    _ => {}
                }
            }
        }
        1 => {
            if let Some(output) = outputs.first() {
                if output.has_role(ParticipationRole::Stimulator) {
                    gate_type = GateType::Buf;
                }
                if output.has_role(ParticipationRole::Inhibitor) {
                    gate_type = GateType::Not;
                }
            }
        }
        _ => {}
    }

    gate_type
}
