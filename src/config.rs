// History configuration (RON or JSON files)

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Options for a CommandManager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undoable commands to keep
    ///
    /// `None` keeps every command. When the limit is exceeded the oldest
    /// command is dropped first. `Some(0)` records nothing.
    pub max_history: Option<usize>,
}

impl HistoryConfig {
    /// Configuration keeping at most `max_history` commands
    pub fn bounded(max_history: usize) -> Self {
        Self {
            max_history: Some(max_history),
        }
    }

    /// Parse a configuration from RON
    pub fn from_ron_str(ron_data: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(ron_data)?)
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json_data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_data)?)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Load a configuration file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Ron => Self::from_ron_str(&contents),
            ConfigFormat::Json => Self::from_json_str(&contents),
        }
    }

    /// Write the configuration, picking the format from the path extension
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Ron => self.to_ron_string()?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No history config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Per-user configuration file location (`<config dir>/undo_redo/history.ron`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("undo_redo").join("history.ron"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Ok(ConfigFormat::Ron),
            Some("json") => Ok(ConfigFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(HistoryConfig::default().max_history, None);
    }

    #[test]
    fn test_from_ron() {
        let config = HistoryConfig::from_ron_str("(max_history: Some(50))").unwrap();
        assert_eq!(config, HistoryConfig::bounded(50));
    }

    #[test]
    fn test_from_json() {
        let config = HistoryConfig::from_json_str(r#"{"max_history": 3}"#).unwrap();
        assert_eq!(config.max_history, Some(3));

        let config = HistoryConfig::from_json_str("{}").unwrap();
        assert_eq!(config.max_history, None);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = HistoryConfig::bounded(7);
        let ron_data = config.to_ron_string().unwrap();
        assert_eq!(HistoryConfig::from_ron_str(&ron_data).unwrap(), config);
    }

    #[test]
    fn test_invalid_ron() {
        let result = HistoryConfig::from_ron_str("(max_history: \"lots\")");
        assert!(matches!(result, Err(ConfigError::RonParse(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = HistoryConfig::load(Path::new("history.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(ext)) if ext == "yaml"));
    }
}
