//! Configuration file formats.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::ConfigError;

/// Serialization format of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `quire.toml`
    Toml,
    /// `quire.json`, same shape the generator reads.
    Json,
    /// `quire.yaml` / `quire.yml`
    Yaml,
}

impl ConfigFormat {
    /// Detect format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse `content` in this format.
    pub(crate) fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ConfigError> {
        let malformed = |message: String| ConfigError::Malformed {
            format: self,
            message,
        };

        match self {
            Self::Toml => toml::from_str(content).map_err(|e| malformed(e.to_string())),
            Self::Json => serde_json::from_str(content).map_err(|e| malformed(e.to_string())),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| malformed(e.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        };
        f.write_str(name)
    }
}
