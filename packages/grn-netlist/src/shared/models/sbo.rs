//! Systems Biology Ontology terms used by interaction types and participation roles

use serde::{Deserialize, Serialize};

/// Base URI used when rendering a term back to a string
pub const SBO_BASE_URI: &str = "http://identifiers.org/biomodels.sbo/";

/// SBO term referenced by an interaction type or a participation role
///
/// Only the six terms the converter interprets are named; everything else is
/// carried through verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SboTerm {
    /// Interaction type SBO:0000170
    Stimulation,
    /// Interaction type SBO:0000169
    Inhibition,
    /// Participation role SBO:0000459
    Stimulator,
    /// Participation role SBO:0000020
    Inhibitor,
    /// Participation role SBO:0000643
    Stimulated,
    /// Participation role SBO:0000642
    Inhibited,
    /// Any other term, stored as given
    Other(String),
}

impl SboTerm {
    /// Accession (`SBO:nnnnnnn`) of a named term
    pub fn accession(&self) -> Option<&'static str> {
        match self {
            Self::Stimulation => Some("SBO:0000170"),
            Self::Inhibition => Some("SBO:0000169"),
            Self::Stimulator => Some("SBO:0000459"),
            Self::Inhibitor => Some("SBO:0000020"),
            Self::Stimulated => Some("SBO:0000643"),
            Self::Inhibited => Some("SBO:0000642"),
            Self::Other(_) => None,
        }
    }

    /// Parse a term from a full identifiers.org URI or a bare accession
    pub fn from_uri(uri: &str) -> Self {
        let accession = uri.rsplit('/').next().unwrap_or(uri);
        match accession {
            "SBO:0000170" => Self::Stimulation,
            "SBO:0000169" => Self::Inhibition,
            "SBO:0000459" => Self::Stimulator,
            "SBO:0000020" => Self::Inhibitor,
            "SBO:0000643" => Self::Stimulated,
            "SBO:0000642" => Self::Inhibited,
            _ => Self::Other(uri.to_string()),
        }
    }

    /// Full URI of this term
    pub fn uri(&self) -> String {
        match (self, self.accession()) {
            (Self::Other(uri), _) => uri.clone(),
            (_, Some(accession)) => format!("{}{}", SBO_BASE_URI, accession),
            (_, None) => String::new(),
        }
    }
}

impl From<String> for SboTerm {
    fn from(uri: String) -> Self {
        Self::from_uri(&uri)
    }
}

impl From<&str> for SboTerm {
    fn from(uri: &str) -> Self {
        Self::from_uri(uri)
    }
}

impl From<SboTerm> for String {
    fn from(term: SboTerm) -> Self {
        term.uri()
    }
}

impl std::fmt::Display for SboTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}
