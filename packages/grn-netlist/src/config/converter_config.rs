//! Converter configuration
//!
//! Selects the gate classifier and, optionally, the root module to convert.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;

// ═══════════════════════════════════════════════════════════════════════════
// Classifier Kind
// ═══════════════════════════════════════════════════════════════════════════

/// Gate classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierKind {
    /// Role-pattern inference with 2-input disambiguation
    #[default]
    TwoPass,

    /// Fixed operator → gate table, no role checks
    SinglePass,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoPass => "two-pass",
            Self::SinglePass => "single-pass",
        }
    }
}

impl FromStr for ClassifierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "two-pass" | "twopass" => Ok(Self::TwoPass),
            "single-pass" | "singlepass" => Ok(Self::SinglePass),
            _ => Err(ConfigError::UnknownClassifier(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Converter Config
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration of a `NetlistConverter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Gate classification strategy
    pub classifier: ClassifierKind,

    /// Display id of the root module to convert; first root when `None`
    pub root_module: Option<String>,
}

impl ConverterConfig {
    pub fn classifier(mut self, classifier: ClassifierKind) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn root_module(mut self, display_id: impl Into<String>) -> Self {
        self.root_module = Some(display_id.into());
        self
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();
        if let Some(classifier) = export.classifier {
            config.classifier = classifier.parse()?;
        }
        config.root_module = export.root_module;

        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            classifier: Some(self.classifier.to_string()),
            root_module: self.root_module.clone(),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}

impl Validatable for ConverterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(root) = &self.root_module {
            if root.trim().is_empty() {
                return Err(ConfigError::validation(
                    "root_module",
                    "must not be empty when set",
                ));
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ConverterConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_classifier_parsing() {
        assert_eq!("two-pass".parse::<ClassifierKind>().unwrap(), ClassifierKind::TwoPass);
        assert_eq!("TWO_PASS".parse::<ClassifierKind>().unwrap(), ClassifierKind::TwoPass);
        assert_eq!(
            "singlepass".parse::<ClassifierKind>().unwrap(),
            ClassifierKind::SinglePass
        );
        assert!(matches!(
            "three-pass".parse::<ClassifierKind>(),
            Err(ConfigError::UnknownClassifier(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.classifier, ClassifierKind::TwoPass);
        assert!(config.root_module.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ConverterConfig::default()
            .classifier(ClassifierKind::SinglePass)
            .root_module("toggle");

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("classifier: single-pass"));

        let loaded = ConverterConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
classifier: single_pass
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ConverterConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.classifier, ClassifierKind::SinglePass);
        assert!(config.root_module.is_none());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = ConverterConfig::from_yaml_str("classifier: two-pass\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = ConverterConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = ConverterConfig::from_yaml_str("version: 1\nstrict: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_empty_root_module_rejected() {
        let result = ConverterConfig::from_yaml_str("version: 1\nroot_module: \"  \"\n");
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }
}
