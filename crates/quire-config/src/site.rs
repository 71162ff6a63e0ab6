//! The site configuration descriptor and its loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::ConfigFormat;
use crate::nav::NavItem;
use crate::sidebar::Sidebar;
use crate::{CONFIG_FILENAMES, CliSettings, ConfigError, builtin, expand};

/// Site configuration consumed by the generator.
///
/// Equality compares the descriptor's content only; `loaded_from` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Human-readable site name.
    pub title: String,
    /// Human-readable site summary.
    pub description: String,
    /// Markdown rendering options.
    pub markdown: MarkdownConfig,
    /// Sidebar and navigation.
    #[serde(rename = "themeConfig", alias = "theme_config")]
    pub theme: ThemeConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

/// Markdown rendering options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Annotate code blocks with line numbers.
    #[serde(rename = "lineNumbers", alias = "line_numbers")]
    pub line_numbers: bool,
}

/// Theme configuration: sidebar per path prefix and top-level navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Sidebar groups keyed by path prefix.
    pub sidebar: Sidebar,
    /// Navigation entries in display order.
    pub nav: Vec<NavItem>,
}

impl PartialEq for SiteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.markdown == other.markdown
            && self.theme == other.theme
    }
}

impl Eq for SiteConfig {}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `quire.toml`, `quire.json` or `quire.yaml` in the current directory
    /// and its parents, falling back to the built-in descriptor.
    ///
    /// CLI settings are applied after loading and before validation.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No config file found, using built-in site config");
            builtin::site_config()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a string in the given format.
    ///
    /// Environment variables are expanded; the result is not validated.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if the content does not match the
    /// expected shape, or `ConfigError::EnvVar` if expansion fails.
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let mut config: Self = format.parse(content)?;
        config.expand_env_vars()?;
        Ok(config)
    }

    /// Parse configuration from the generator's JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if the JSON does not match.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(content)
    }

    /// Serialize to the JSON shape the generator reads.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Serialize to a `quire.toml` document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Serialize in the given format.
    ///
    /// JSON output is indented.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => self.to_toml(),
            ConfigFormat::Json => self.to_json_pretty(),
            ConfigFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Checks required fields, then the sidebar, then navigation. Called
    /// automatically by [`SiteConfig::load`].
    ///
    /// # Errors
    ///
    /// Returns the first failure found: `MissingRequiredField`,
    /// `DuplicateSidebarKey` or `Validation`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField("description"));
        }

        self.theme.sidebar.validate()?;

        for (index, item) in self.theme.nav.iter().enumerate() {
            item.validate(index)?;
        }

        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &settings.description {
            self.description.clone_from(description);
        }
        if let Some(line_numbers) = settings.line_numbers {
            self.markdown.line_numbers = line_numbers;
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    /// Search for a config file starting at `start` and walking up.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILENAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.exists())
        })
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str_with_format(&content, format)?;
        config.loaded_from = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            %format,
            sidebar_sections = config.theme.sidebar.len(),
            nav_items = config.theme.nav.len(),
            "Loaded site config"
        );

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;

        for (index, item) in self.theme.nav.iter_mut().enumerate() {
            item.expand_env_vars(index)?;
        }

        Ok(())
    }
}
