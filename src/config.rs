//! Driver configuration
//!
//! Loaded from a TOML file; every field is optional.
//!
//! ```toml
//! units = ["core", "text"]
//! json = false
//! ```

use std::path::Path;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for the dispatch driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchOptions {
    /// Command units to load, in load order. Later units win keyword conflicts.
    pub units: Vec<String>,
    /// Report results as JSON (stdout, stderr, exitCode)
    pub json: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            units: vec!["core".to_string(), "text".to_string()],
            json: false,
        }
    }
}

impl DispatchOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let options = DispatchOptions::from_toml_str("").unwrap();
        assert_eq!(options, DispatchOptions::default());
        assert_eq!(options.units, vec!["core", "text"]);
    }

    #[test]
    fn test_units_override() {
        let options = DispatchOptions::from_toml_str("units = [\"text\"]\njson = true\n").unwrap();
        assert_eq!(options.units, vec!["text"]);
        assert!(options.json);
    }

    #[test]
    fn test_malformed_toml() {
        let err = DispatchOptions::from_toml_str("units = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(DispatchOptions::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = DispatchOptions::load("/nonexistent/dispatch.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dispatch.toml"));
    }
}
