//! Site configuration descriptor for Quire.
//!
//! Holds the typed configuration an external static-site generator consumes:
//! display metadata, markdown toggles, the sidebar keyed by URL path prefix and
//! the top-level navigation. The value is built once, validated, and then
//! handed to whatever needs it; nothing here mutates a loaded descriptor.
//!
//! Configuration comes from one of:
//!
//! - an explicit file passed to [`SiteConfig::load`]
//! - `quire.toml`, `quire.json` or `quire.yaml` discovered in the current
//!   directory or one of its parents
//! - the built-in blog descriptor ([`builtin::site_config`])
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values loaded from a file support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Bare `$VAR` is left as written, so literal dollar signs need no escaping.
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `themeConfig.nav[*].link` (including dropdown items)
//!
//! ## Output Shape
//!
//! [`SiteConfig::to_json`] produces the shape the generator reads:
//!
//! ```json
//! {
//!   "title": "...",
//!   "description": "...",
//!   "markdown": { "lineNumbers": true },
//!   "themeConfig": {
//!     "sidebar": { "/frontend/": [{ "title": "...", "children": ["", "select"] }] },
//!     "nav": [{ "text": "...", "link": "/frontend/" }]
//!   }
//! }
//! ```

pub mod builtin;
mod expand;
mod format;
mod handle;
mod nav;
mod pages;
mod sidebar;
mod site;

use std::path::PathBuf;

pub use format::ConfigFormat;
pub use handle::ConfigHandle;
pub use nav::{NavDropdown, NavItem, NavLink};
pub use pages::MissingPage;
pub use sidebar::{ActivePage, PageRef, Sidebar, SidebarEntry, SidebarGroup};
pub use site::{MarkdownConfig, SiteConfig, ThemeConfig};

/// Configuration filenames to search for, in priority order.
pub const CONFIG_FILENAMES: [&str; 3] = ["quire.toml", "quire.json", "quire.yaml"];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Clone, Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override site description.
    pub description: Option<String>,
    /// Override the markdown line numbers flag.
    pub line_numbers: Option<bool>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file could not be parsed into a site configuration.
    #[error("Malformed {format} configuration: {message}")]
    Malformed {
        /// Format the content was parsed as.
        format: ConfigFormat,
        /// Parser message.
        message: String,
    },
    /// File extension is not one of the supported formats.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A required top-level field is absent or empty.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// The same path prefix appears twice in the sidebar.
    #[error("Duplicate sidebar path prefix: {0}")]
    DuplicateSidebarKey(String),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`themeConfig.nav[0].link`").
        field: String,
        /// Error message (e.g., "${`BLOG_URL`} not set").
        message: String,
    },
    /// The descriptor could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
