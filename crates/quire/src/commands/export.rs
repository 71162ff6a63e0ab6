//! `quire export` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::SiteConfig;

use super::{ConfigArg, OverrideArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    config: ConfigArg,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact single-line JSON.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = self.overrides.into_settings();
        let config = SiteConfig::load(self.config.config.as_deref(), Some(&settings))?;

        let json = if self.compact {
            config.to_json()?
        } else {
            config.to_json_pretty()?
        };

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, format!("{json}\n"))?;
                output.success(&format!("Exported site config to {}", path.display()));
            }
            None => output.data(&json)?,
        }

        Ok(())
    }
}
