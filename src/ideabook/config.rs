use crate::error::StoreResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for ideabook, stored next to the data file as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeabookConfig {
    /// Whether the listing shows a one-line description preview
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
}

fn default_show_descriptions() -> bool {
    true
}

impl Default for IdeabookConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
        }
    }
}

impl IdeabookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> StoreResult<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: IdeabookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> StoreResult<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IdeabookConfig::default();
        assert!(config.show_descriptions);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = IdeabookConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, IdeabookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = IdeabookConfig {
            show_descriptions: false,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = IdeabookConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.show_descriptions);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = IdeabookConfig {
            show_descriptions: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: IdeabookConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
