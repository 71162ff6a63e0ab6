//! `quire init` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use quire_config::{ConfigFormat, builtin};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// File to create; format follows the extension (default: quire.toml).
    #[arg(short, long, default_value = "quire.toml")]
    output: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    /// Execute the init command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        write_builtin(&self.output, self.force)?;
        output.success(&format!("Created {}", self.output.display()));
        output.detail("Run `quire check` to validate it");
        Ok(())
    }
}

/// Write the built-in configuration to `path`.
fn write_builtin(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let format = ConfigFormat::from_path(path)?;
    let content = builtin::site_config().to_string_with_format(format)?;
    std::fs::write(path, content)?;

    tracing::debug!(path = %path.display(), %format, "Wrote built-in site config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_config::SiteConfig;

    #[test]
    fn test_write_builtin_json_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.json");

        write_builtin(&path, false).unwrap();

        let config = SiteConfig::load(Some(&path), None).unwrap();
        assert_eq!(config.loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(config, builtin::site_config());
    }

    #[test]
    fn test_write_builtin_toml_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.toml");

        write_builtin(&path, false).unwrap();

        let config = SiteConfig::load(Some(&path), None).unwrap();
        assert_eq!(config.title, builtin::site_config().title);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_builtin(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_builtin(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("themeConfig"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_builtin(&dir.path().join("config.js"), false).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
