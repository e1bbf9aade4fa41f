//! Boolean operator carried by an interaction's logic annotation

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Namespace of the OpenMath `logic1` content dictionary
pub const OPENMATH_LOGIC1: &str = "https://www.openmath.org/cd/logic1#";

/// Logic tag of an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicOperator {
    Or,
    And,
    Nor,
    Nand,
    Not,
    Equivalent,
}

impl LogicOperator {
    pub const ALL: [LogicOperator; 6] = [
        Self::Or,
        Self::And,
        Self::Nor,
        Self::Nand,
        Self::Not,
        Self::Equivalent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Nor => "nor",
            Self::Nand => "nand",
            Self::Not => "not",
            Self::Equivalent => "equivalent",
        }
    }

    /// Resolve an annotation value such as `https://www.openmath.org/cd/logic1#nor`
    ///
    /// Returns `None` for values outside the `logic1` vocabulary.
    pub fn from_uri(uri: &str) -> Option<Self> {
        uri.strip_prefix(OPENMATH_LOGIC1)
            .and_then(|op| op.parse().ok())
    }

    /// Full OpenMath URI of this operator
    pub fn uri(&self) -> String {
        format!("{}{}", OPENMATH_LOGIC1, self.as_str())
    }
}

impl FromStr for LogicOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown logic operator '{}'. Valid operators: or, and, nor, nand, not, equivalent",
                    s
                )
            })
    }
}

impl std::fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
