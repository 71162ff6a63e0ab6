//! `quire check` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::SiteConfig;

use super::{ConfigArg, OverrideArgs, source_label};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArg,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Docs directory to check sidebar page references against.
    #[arg(short, long)]
    docs: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Missing pages are reported as warnings and do not fail the command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = self.overrides.into_settings();
        let config = SiteConfig::load(self.config.config.as_deref(), Some(&settings))?;

        let line_numbers = if config.markdown.line_numbers {
            "enabled"
        } else {
            "disabled"
        };

        output.info(&format!("Config: {}", source_label(config.loaded_from.as_deref())));
        output.info(&format!("Title: {}", config.title));
        output.info(&format!("Description: {}", config.description));
        output.info(&format!("Line numbers: {line_numbers}"));
        output.info(&format!("Sidebar: {} section(s)", config.theme.sidebar.len()));
        output.info(&format!("Nav: {} item(s)", config.theme.nav.len()));

        if let Some(docs_dir) = &self.docs {
            if !docs_dir.is_dir() {
                return Err(CliError::Validation(format!(
                    "Docs directory not found: {}",
                    docs_dir.display()
                )));
            }

            let missing = config.missing_pages(docs_dir);
            for page in &missing {
                output.warning(&format!(
                    "Missing page: {} \"{}\" in group \"{}\" (expected {})",
                    page.prefix,
                    page.reference,
                    page.group,
                    docs_dir.join(&page.expected).display()
                ));
            }
            if missing.is_empty() {
                output.info(&format!("All sidebar pages found in {}", docs_dir.display()));
            }
        }

        output.success("Configuration is valid");
        Ok(())
    }
}
