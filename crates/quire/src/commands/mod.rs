//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod init;
pub(crate) mod nav;
pub(crate) mod sidebar;
pub(crate) mod watch;

use std::path::PathBuf;

use clap::Args;
use quire_config::CliSettings;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use init::InitArgs;
pub(crate) use nav::NavArgs;
pub(crate) use sidebar::SidebarArgs;
pub(crate) use watch::WatchArgs;

/// Arguments overriding configuration file values.
#[derive(Args, Debug, Default)]
pub(crate) struct OverrideArgs {
    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Site description (overrides config).
    #[arg(long)]
    description: Option<String>,

    /// Annotate code blocks with line numbers (overrides config).
    #[arg(long)]
    line_numbers: Option<bool>,

    /// Disable code block line numbers.
    #[arg(long, conflicts_with = "line_numbers")]
    no_line_numbers: bool,
}

impl OverrideArgs {
    /// Build CLI settings from the override flags.
    pub(crate) fn into_settings(self) -> CliSettings {
        let line_numbers = self.no_line_numbers.then_some(false).or(self.line_numbers);
        CliSettings {
            title: self.title,
            description: self.description,
            line_numbers,
        }
    }
}

/// Human-readable label for where a configuration came from.
pub(crate) fn source_label(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| "built-in".to_owned(), |p| p.display().to_string())
}

/// Path to configuration file argument shared by all commands.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArg {
    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
