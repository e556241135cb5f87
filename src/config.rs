use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{CommandResult, HelloError};

pub const DEFAULT_NAME: &str = "world";

/// User configuration read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name greeted when no names are given on the command line.
    #[serde(rename = "name_to_greet", alias = "name")]
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CommandResult<Self> {
        let Some(path) = path else {
            tracing::debug!(name = DEFAULT_NAME, "no config file given, using defaults");
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path).map_err(|source| HelloError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&raw).map_err(|source| HelloError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), name = %config.name, "loaded config file");
        Ok(config)
    }

    fn validate(&self) -> CommandResult<()> {
        if self.name.trim().is_empty() {
            return Err(HelloError::InvalidArgument(
                "name_to_greet must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
