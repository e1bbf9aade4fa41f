//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading and saving live in converter_config.rs.

use serde::{Deserialize, Serialize};

/// Schema versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// classifier: two-pass
/// root_module: toggle_switch
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Gate classifier name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    /// Display id of the root module to convert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_module: Option<String>,
}
