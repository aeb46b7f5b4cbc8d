use super::types::Config;
use crate::{DeckError, Result};
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "card-deck.yaml";

/// Loads and validates the service configuration file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read, parse and validate the configuration at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let path_str = path.display();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DeckError::Config(format!("Failed to read config file {}: {}", path_str, e))
        })?;

        let config = Self::parse(&contents).map_err(|e| match e {
            DeckError::Config(msg) => DeckError::Config(format!("{}: {}", path_str, msg)),
            other => other,
        })?;

        tracing::debug!(path = %path_str, "configuration loaded");
        Ok(config)
    }

    /// Parse and validate a YAML document. An empty document yields defaults.
    pub fn parse(contents: &str) -> Result<Config> {
        let config: Config = if contents.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml_ng::from_str(contents)
                .map_err(|e| DeckError::Config(format!("Failed to parse config: {}", e)))?
        };

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<()> {
        if config.app.listening == 0 {
            return Err(DeckError::Config(
                "app.listening must be a non-zero port".to_string(),
            ));
        }

        if config.app.host.trim().is_empty() {
            return Err(DeckError::Config("app.host must not be empty".to_string()));
        }

        if config.app.shutdown_timeout_secs == 0 {
            return Err(DeckError::Config(
                "app.shutdown_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if config.db.path.trim().is_empty() {
            return Err(DeckError::Config("db.path must not be empty".to_string()));
        }

        Ok(())
    }
}
