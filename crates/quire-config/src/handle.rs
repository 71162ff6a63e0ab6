//! Swappable snapshot of the loaded configuration.
//!
//! A reload builds a new [`SiteConfig`] and replaces the shared pointer.
//! Readers holding an earlier `Arc` keep a consistent view; no value is ever
//! modified after it is published.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use crate::site::SiteConfig;
use crate::{CliSettings, ConfigError};

/// Shared handle to the current site configuration.
///
/// # Thread Safety
///
/// - `get()` clones the current `Arc` under a short read lock
/// - `reload()` is serialized by an internal mutex; the swap itself takes the
///   write lock only for the pointer assignment
pub struct ConfigHandle {
    config_path: Option<PathBuf>,
    cli_settings: CliSettings,
    reload_lock: Mutex<()>,
    current: RwLock<Arc<SiteConfig>>,
}

impl ConfigHandle {
    /// Wrap an already loaded configuration.
    ///
    /// Reloads read from the file the configuration was loaded from, and
    /// re-apply `cli_settings` on every reload.
    #[must_use]
    pub fn new(config: SiteConfig, cli_settings: CliSettings) -> Self {
        Self {
            config_path: config.loaded_from.clone(),
            cli_settings,
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Load configuration and wrap it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`SiteConfig::load`].
    pub fn load(config_path: Option<&Path>, cli_settings: CliSettings) -> Result<Self, ConfigError> {
        let config = SiteConfig::load(config_path, Some(&cli_settings))?;
        Ok(Self::new(config, cli_settings))
    }

    /// File the configuration is reloaded from, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Current configuration snapshot.
    #[must_use]
    pub fn get(&self) -> Arc<SiteConfig> {
        Arc::clone(&*self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Reload from the source file and publish the new snapshot.
    ///
    /// Without a source file (built-in configuration) the current snapshot is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the load or validation error; the previous snapshot stays
    /// current.
    pub fn reload(&self) -> Result<Arc<SiteConfig>, ConfigError> {
        let Some(path) = self.config_path.as_deref() else {
            return Ok(self.get());
        };

        let _guard = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let start = Instant::now();

        let config = match SiteConfig::load(Some(path), Some(&self.cli_settings)) {
            Ok(config) => Arc::new(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Config reload failed");
                return Err(e);
            }
        };

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&config);

        tracing::info!(
            path = %path.display(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Config reloaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    const CONFIG: &str = r#"
title = "Blog"
description = "Notes"
"#;

    #[test]
    fn test_builtin_reload_is_noop() {
        let handle = ConfigHandle::new(builtin::site_config(), CliSettings::default());
        let before = handle.get();
        let after = handle.reload().unwrap();

        assert!(handle.config_path().is_none());
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_reload_publishes_new_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.toml");
        std::fs::write(&path, CONFIG).unwrap();

        let handle = ConfigHandle::load(Some(&path), CliSettings::default()).unwrap();
        let before = handle.get();
        assert_eq!(before.title, "Blog");

        std::fs::write(&path, CONFIG.replace("Blog", "Journal")).unwrap();
        let after = handle.reload().unwrap();

        assert_eq!(after.title, "Journal");
        assert_eq!(handle.get().title, "Journal");
        // Earlier readers keep their snapshot
        assert_eq!(before.title, "Blog");
    }

    #[test]
    fn test_reload_failure_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.toml");
        std::fs::write(&path, CONFIG).unwrap();

        let handle = ConfigHandle::load(Some(&path), CliSettings::default()).unwrap();
        std::fs::write(&path, "title = \"\"\ndescription = \"Notes\"").unwrap();

        let err = handle.reload().unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequiredField("title")));
        assert_eq!(handle.get().title, "Blog");
    }

    #[test]
    fn test_reload_reapplies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.toml");
        std::fs::write(&path, CONFIG).unwrap();

        let settings = CliSettings {
            line_numbers: Some(true),
            ..Default::default()
        };
        let handle = ConfigHandle::load(Some(&path), settings).unwrap();
        std::fs::write(&path, CONFIG.replace("Notes", "More notes")).unwrap();

        let config = handle.reload().unwrap();
        assert_eq!(config.description, "More notes");
        assert!(config.markdown.line_numbers);
    }
}
