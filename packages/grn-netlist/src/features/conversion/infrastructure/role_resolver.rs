// Role Resolver - Interactions → Resolved Interactions
//
// Maps every regulatory interaction of the root module onto netlist nodes.
// Interactions declaring neither stimulation nor inhibition, or lacking a
// modified participation, are skipped.

use ahash::AHashMap;
use tracing::debug;

use crate::errors::{NetlistError, ReferenceKind, Result};
use crate::features::conversion::domain::{
    InteractionRoles, NodeTable, ParticipantRef, ResolvedInteraction, RoleSet,
};
use crate::shared::models::{FunctionalComponent, ModuleDefinition, Participation};

/// Resolve the interactions of `root` in document order
///
/// Fails with a mapping error when an interaction has more than one modified
/// participation, and with an unresolved reference when a participant does
/// not lead to a node.
pub fn resolve_interactions<'a>(
    root: &'a ModuleDefinition,
    nodes: &NodeTable<'a>,
) -> Result<Vec<ResolvedInteraction<'a>>> {
    let components: AHashMap<&str, &FunctionalComponent> = root
        .functional_components
        .iter()
        .map(|fc| (fc.identity.as_str(), fc))
        .collect();

    let participant = |participation: &'a Participation| -> Result<ParticipantRef<'a>> {
        let fc = components
            .get(participation.participant.as_str())
            .ok_or_else(|| {
                NetlistError::unresolved(ReferenceKind::Participant, &participation.participant)
            })?;
        let node = nodes
            .get(fc.definition.as_str())
            .copied()
            .ok_or_else(|| NetlistError::unresolved(ReferenceKind::Definition, &fc.definition))?;
        Ok(ParticipantRef {
            name: participation.display_id.as_str(),
            node,
            roles: RoleSet::from_terms(&participation.roles),
        })
    };

    let mut resolved = Vec::with_capacity(root.interactions.len());
    for interaction in &root.interactions {
        let Some(roles) = InteractionRoles::resolve(&interaction.types) else {
            debug!(
                "Skipping interaction '{}': neither stimulation nor inhibition",
                interaction.display_id
            );
            continue;
        };

        let modified_term = roles.modified.term();
        let mut modified = interaction
            .participations
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_role(&modified_term));
        let Some((modified_idx, modified_participation)) = modified.next() else {
            debug!(
                "Skipping interaction '{}': no {:?} participation",
                interaction.display_id, roles.modified
            );
            continue;
        };
        let extra = modified.count();
        if extra > 0 {
            return Err(NetlistError::mapping(&interaction.display_id, extra + 1));
        }

        let modifier_term = roles.modifier.term();
        let modifiers = interaction
            .participations
            .iter()
            .enumerate()
            .filter(|(idx, p)| *idx != modified_idx && p.has_role(&modifier_term))
            .map(|(_, p)| participant(p))
            .collect::<Result<Vec<_>>>()?;

        resolved.push(ResolvedInteraction {
            name: interaction.display_id.as_str(),
            logic: interaction.logic,
            roles,
            modified: participant(modified_participation)?,
            modifiers,
        });
    }

    debug!(
        "Resolved {} of {} interactions in module '{}'",
        resolved.len(),
        root.interactions.len(),
        root.display_id
    );
    Ok(resolved)
}
