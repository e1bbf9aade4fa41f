// Single-Pass Gate Classifier
//
// One scan over the resolved interactions: the modified node takes its gate
// straight from the interaction's logic tag. Roles are not consulted, and a
// node governed by several interactions keeps the last one's gate.

use tracing::debug;

use super::boundary::label_boundary_nodes;
use crate::errors::Result;
use crate::features::conversion::domain::ResolvedInteraction;
use crate::features::conversion::ports::GateClassifier;
use crate::features::netlist::{GateType, Netlist};
use crate::shared::models::LogicOperator;

/// Simplified classifier: fixed operator → gate table
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePassClassifier;

impl SinglePassClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Gate produced for a logic tag
    pub fn gate_for(logic: LogicOperator) -> GateType {
        match logic {
            LogicOperator::Nor => GateType::Nand,
            LogicOperator::Nand => GateType::Nor,
            LogicOperator::Or => GateType::And,
            LogicOperator::And => GateType::Or,
            LogicOperator::Not => GateType::Buf,
            LogicOperator::Equivalent => GateType::Not,
        }
    }
}

impl GateClassifier for SinglePassClassifier {
    fn name(&self) -> &'static str {
        "single-pass"
    }

    fn classify(
        &self,
        mut netlist: Netlist,
        interactions: &[ResolvedInteraction<'_>],
    ) -> Result<Netlist> {
        label_boundary_nodes(&mut netlist)?;

        for interaction in interactions {
            let target = interaction.modified.node;
            let is_boundary = netlist
                .node(target)
                .map_or(false, |node| node.gate_type().is_boundary());
            if is_boundary {
                continue;
            }

            let gate_type = interaction.logic.map_or(GateType::Unset, Self::gate_for);
            debug!(
                "Interaction '{}' sets node {:?} to '{}'",
                interaction.name, target, gate_type
            );
            netlist.set_gate_type(target, gate_type)?;
        }

        Ok(netlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversion::domain::{
        InteractionRoles, ParticipantRef, ParticipationRole, RoleSet,
    };
    use crate::features::netlist::NodeId;

    #[test]
    fn test_operator_table() {
        let expected = [
            (LogicOperator::Nor, GateType::Nand),
            (LogicOperator::Nand, GateType::Nor),
            (LogicOperator::Or, GateType::And),
            (LogicOperator::And, GateType::Or),
            (LogicOperator::Not, GateType::Buf),
            (LogicOperator::Equivalent, GateType::Not),
        ];
        for (logic, gate) in expected {
            assert_eq!(SinglePassClassifier::gate_for(logic), gate);
        }
    }

    fn interaction(
        name: &'static str,
        src: NodeId,
        dst: NodeId,
        logic: Option<LogicOperator>,
    ) -> ResolvedInteraction<'static> {
        let roles = InteractionRoles {
            modified: ParticipationRole::Inhibited,
            modifier: ParticipationRole::Inhibitor,
        };
        let part = |node, role| {
            let mut set = RoleSet::default();
            set.insert(role);
            ParticipantRef {
                name,
                node,
                roles: set,
            }
        };
        ResolvedInteraction {
            name,
            logic,
            roles,
            modified: part(dst, roles.modified),
            modifiers: vec![part(src, roles.modifier)],
        }
    }

    #[test]
    fn test_last_governing_interaction_wins() {
        let mut netlist = Netlist::new();
        let a = netlist.add_node("A");
        let b = netlist.add_node("B");
        let c = netlist.add_node("C");
        let interactions = vec![
            interaction("i1", a, b, Some(LogicOperator::Or)),
            interaction("i2", a, b, Some(LogicOperator::Nand)),
            interaction("i3", b, c, Some(LogicOperator::Not)),
        ];
        for i in &interactions {
            netlist
                .add_edge(i.modifiers[0].name, i.modifiers[0].node, i.modified.node)
                .unwrap();
        }

        let netlist = SinglePassClassifier.classify(netlist, &interactions).unwrap();
        assert_eq!(netlist.node(a).unwrap().gate_type(), GateType::PrimaryInput);
        assert_eq!(netlist.node(b).unwrap().gate_type(), GateType::Nor);
        // Boundary label takes precedence over the table
        assert_eq!(netlist.node(c).unwrap().gate_type(), GateType::PrimaryOutput);
    }

    #[test]
    fn test_missing_tag_is_unset() {
        let mut netlist = Netlist::new();
        let a = netlist.add_node("A");
        let b = netlist.add_node("B");
        let c = netlist.add_node("C");
        let interactions = vec![
            interaction("i1", a, b, None),
            interaction("i2", b, c, Some(LogicOperator::Or)),
        ];
        netlist.add_edge("e1", a, b).unwrap();
        netlist.add_edge("e2", b, c).unwrap();

        let netlist = SinglePassClassifier.classify(netlist, &interactions).unwrap();
        assert_eq!(netlist.node(b).unwrap().gate_type(), GateType::Unset);
    }
}
