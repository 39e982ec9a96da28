use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings for a [`MotionSensorAdapter`](crate::adapter::MotionSensorAdapter),
/// fixed for as long as the adapter lives.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Every axis is multiplied by this. Rotation rates are not.
    pub multiplier: f64,
    /// Read acceleration including gravity instead of the gravity-free vector
    pub use_gravity: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        AdapterConfig {
            multiplier: 1.0,
            use_gravity: true,
        }
    }
}

impl AdapterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn use_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    /// Missing keys keep their defaults.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(src).map_err(ConfigError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&src)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(_) => write!(f, "could not read adapter config"),
            ConfigError::Parse(_) => write!(f, "invalid adapter config"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AdapterConfig, ConfigError};

    #[test]
    fn defaults() {
        let config = AdapterConfig::default();
        assert_eq!(config.multiplier, 1.0);
        assert!(config.use_gravity);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AdapterConfig::from_json(r#"{ "multiplier": 3 }"#).unwrap();
        assert_eq!(config, AdapterConfig::new().with_multiplier(3.0));

        let config = AdapterConfig::from_json(r#"{ "use_gravity": false }"#).unwrap();
        assert_eq!(config, AdapterConfig::new().use_gravity(false));

        assert_eq!(AdapterConfig::from_json("{}").unwrap(), AdapterConfig::default());
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = AdapterConfig::from_json(r#"{ "multiplier": "lots" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AdapterConfig::load("/nonexistent/zmotion/adapter.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
