//! Converter Configuration
//!
//! Two levels:
//! - Builder API: `ConverterConfig::default().classifier(ClassifierKind::SinglePass)`
//! - YAML file: versioned schema loaded with `ConverterConfig::from_yaml`
//!
//! # Examples
//!
//! ```rust,ignore
//! use grn_netlist::config::{ClassifierKind, ConverterConfig};
//!
//! let config = ConverterConfig::default()
//!     .classifier(ClassifierKind::SinglePass)
//!     .root_module("toggle_switch");
//!
//! let config = ConverterConfig::from_yaml("converter.yaml")?;
//! ```

pub mod converter_config;
pub mod error;
pub mod io;
pub mod validation;

// Re-exports
pub use converter_config::{ClassifierKind, ConverterConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
pub use validation::Validatable;
