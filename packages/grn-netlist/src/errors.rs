//! Error types for grn-netlist
//!
//! Provides unified error handling across the crate. Any error returned from
//! a conversion means no netlist was produced.

use thiserror::Error;

use crate::config::ConfigError;

/// Kind of reference that failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Functional component → component definition
    Definition,
    /// Participation → functional component
    Participant,
    /// Edge endpoint → netlist node
    Node,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Definition => "definition",
            ReferenceKind::Participant => "participant",
            ReferenceKind::Node => "node",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for netlist conversion
#[derive(Debug, Error)]
pub enum NetlistError {
    /// An interaction declares more than one modified participation
    #[error("Cannot map node: interaction '{interaction}' has {count} modified participations")]
    Mapping { interaction: String, count: usize },

    /// A reference inside the document does not resolve
    #[error("Unresolved {kind} reference '{reference}'")]
    UnresolvedReference {
        kind: ReferenceKind,
        reference: String,
    },

    /// The configured root module is not a root of the document
    #[error("Root module '{0}' not found")]
    RootModuleNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetlistError {
    /// Create a mapping error
    pub fn mapping(interaction: impl Into<String>, count: usize) -> Self {
        NetlistError::Mapping {
            interaction: interaction.into(),
            count,
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved(kind: ReferenceKind, reference: impl Into<String>) -> Self {
        NetlistError::UnresolvedReference {
            kind,
            reference: reference.into(),
        }
    }
}

/// Result type alias for netlist operations
pub type Result<T> = std::result::Result<T, NetlistError>;
