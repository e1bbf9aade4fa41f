// Conversion Domain Models
//
// Pure models shared by the conversion stages: participation roles, the roles
// an interaction assigns, and interactions resolved onto netlist nodes.

use ahash::AHashMap;

use crate::features::netlist::NodeId;
use crate::shared::models::{LogicOperator, SboTerm};

/// Component definition identity → netlist node, scoped to one conversion
pub type NodeTable<'a> = AHashMap<&'a str, NodeId>;

// ============================================================
// Participation Roles
// ============================================================

/// Role a participation plays in a regulatory interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipationRole {
    Stimulator,
    Inhibitor,
    Stimulated,
    Inhibited,
}

impl ParticipationRole {
    pub const ALL: [ParticipationRole; 4] = [
        Self::Stimulator,
        Self::Inhibitor,
        Self::Stimulated,
        Self::Inhibited,
    ];

    /// SBO term carrying this role
    pub fn term(&self) -> SboTerm {
        match self {
            Self::Stimulator => SboTerm::Stimulator,
            Self::Inhibitor => SboTerm::Inhibitor,
            Self::Stimulated => SboTerm::Stimulated,
            Self::Inhibited => SboTerm::Inhibited,
        }
    }

    pub fn from_term(term: &SboTerm) -> Option<Self> {
        match term {
            SboTerm::Stimulator => Some(Self::Stimulator),
            SboTerm::Inhibitor => Some(Self::Inhibitor),
            SboTerm::Stimulated => Some(Self::Stimulated),
            SboTerm::Inhibited => Some(Self::Inhibited),
            _ => None,
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Self::Stimulator => 1,
            Self::Inhibitor => 1 << 1,
            Self::Stimulated => 1 << 2,
            Self::Inhibited => 1 << 3,
        }
    }
}

/// Set of interpreted roles on one participation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub fn from_terms<'t>(terms: impl IntoIterator<Item = &'t SboTerm>) -> Self {
        let mut set = Self::default();
        for role in terms.into_iter().filter_map(ParticipationRole::from_term) {
            set.insert(role);
        }
        set
    }

    pub fn insert(&mut self, role: ParticipationRole) {
        self.0 |= role.bit();
    }

    pub fn contains(&self, role: ParticipationRole) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ParticipationRole> + '_ {
        ParticipationRole::ALL
            .into_iter()
            .filter(move |role| self.contains(*role))
    }
}

// ============================================================
// Interaction Roles
// ============================================================

/// Role of the regulated participant for an interaction's type set
///
/// Inhibition is checked after stimulation, so it wins when both are declared.
pub fn modified_role(types: &[SboTerm]) -> Option<ParticipationRole> {
    let mut role = None;
    if types.contains(&SboTerm::Stimulation) {
        role = Some(ParticipationRole::Stimulated);
    }
    if types.contains(&SboTerm::Inhibition) {
        role = Some(ParticipationRole::Inhibited);
    }
    role
}

/// Role of the regulating participants for an interaction's type set
///
/// Same precedence as [`modified_role`].
pub fn modifier_role(types: &[SboTerm]) -> Option<ParticipationRole> {
    let mut role = None;
    if types.contains(&SboTerm::Stimulation) {
        role = Some(ParticipationRole::Stimulator);
    }
    if types.contains(&SboTerm::Inhibition) {
        role = Some(ParticipationRole::Inhibitor);
    }
    role
}

/// Modified/modifier role pair of a regulatory interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionRoles {
    pub modified: ParticipationRole,
    pub modifier: ParticipationRole,
}

impl InteractionRoles {
    /// `None` when the type set declares neither stimulation nor inhibition
    pub fn resolve(types: &[SboTerm]) -> Option<Self> {
        Some(Self {
            modified: modified_role(types)?,
            modifier: modifier_role(types)?,
        })
    }
}

// ============================================================
// Resolved Interactions
// ============================================================

/// Participation mapped onto its netlist node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRef<'a> {
    /// Participation display id
    pub name: &'a str,
    pub node: NodeId,
    pub roles: RoleSet,
}

impl ParticipantRef<'_> {
    pub fn has_role(&self, role: ParticipationRole) -> bool {
        self.roles.contains(role)
    }
}

/// Regulatory interaction with its participants resolved to nodes
///
/// `modified` is the single regulated participant; `modifiers` are the other
/// participations carrying the modifier role, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInteraction<'a> {
    /// Interaction display id
    pub name: &'a str,
    pub logic: Option<LogicOperator>,
    pub roles: InteractionRoles,
    pub modified: ParticipantRef<'a>,
    pub modifiers: Vec<ParticipantRef<'a>>,
}
