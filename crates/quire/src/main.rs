//! Quire CLI - site configuration tool.
//!
//! Provides commands for:
//! - `check`: Load and validate the site configuration
//! - `export`: Write the configuration as the generator's JSON
//! - `sidebar`: Show the sidebar selected for a page path
//! - `nav`: Print the navigation menu
//! - `init`: Write the built-in configuration to a file
//! - `watch`: Reload the configuration whenever its file changes

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, InitArgs, NavArgs, SidebarArgs, WatchArgs};
use output::Output;

/// Quire - site configuration tool.
#[derive(Parser)]
#[command(name = "quire", version, about)]
struct Cli {
    /// Enable verbose output (config discovery and reload logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the site configuration.
    Check(CheckArgs),
    /// Export the configuration as JSON for the site generator.
    Export(ExportArgs),
    /// Show the sidebar groups selected for a page path.
    Sidebar(SidebarArgs),
    /// Print the navigation menu.
    Nav(NavArgs),
    /// Write the built-in configuration to a file.
    Init(InitArgs),
    /// Watch the configuration file and reload on change.
    Watch(WatchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Init(args) => args.execute(),
        Commands::Watch(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
