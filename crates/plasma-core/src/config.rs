use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which halves of the project conventions the plugin applies at startup.
///
/// Directory names and the marker segment are fixed; only the behaviors toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionsConfig {
    /// Register `src/` and the composed `src/` as extra discovery roots
    #[serde(default = "default_true")]
    pub register_roots: bool,
    /// Install the id provider that strips `src.` prefixes
    #[serde(default = "default_true")]
    pub normalize_ids: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        Self {
            register_roots: true,
            normalize_ids: true,
        }
    }
}

impl ConventionsConfig {
    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load config from a specific path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_enabled() {
        let config = ConventionsConfig::from_yaml("normalize_ids: false\n").unwrap();
        assert!(config.register_roots);
        assert!(!config.normalize_ids);

        let config = ConventionsConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ConventionsConfig::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ConventionsConfig {
            register_roots: false,
            normalize_ids: true,
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ConventionsConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = ConventionsConfig::load(&temp.path().join("plasma.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = ConventionsConfig::from_yaml("register_roots: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
