//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use grn_netlist::config::Validatable;
///
/// fn build<C: Validatable>(config: C) -> Result<Converter, ConfigError> {
///     config.validate()?;
///     // ...
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}
