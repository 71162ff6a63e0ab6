//! `quire sidebar` command implementation.

use clap::Args;
use quire_config::{SidebarEntry, SiteConfig};

use super::ConfigArg;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path to resolve, e.g. `/frontend/select.html`.
    path: String,

    #[command(flatten)]
    config: ConfigArg,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.config.as_deref(), None)?;
        let sidebar = &config.theme.sidebar;

        let Some(entry) = sidebar.resolve(&self.path) else {
            output.warning(&format!("No sidebar configured for {}", self.path));
            return Ok(());
        };

        let active_route = sidebar
            .active_page(&self.path)
            .map(|active| active.page.route(&active.entry.prefix));

        for line in render_entry(entry, active_route.as_deref()) {
            if line.starts_with('#') {
                output.highlight(line.trim_start_matches("# "));
            } else {
                output.data(&line)?;
            }
        }

        if active_route.is_none() {
            output.detail(&format!("{} is not listed in this sidebar", self.path));
        }

        Ok(())
    }
}

/// Render a sidebar section as text lines, marking the active route with `*`.
///
/// Lines starting with `#` are section headings.
fn render_entry(entry: &SidebarEntry, active_route: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("# Sidebar {}", entry.prefix)];
    for group in &entry.groups {
        lines.push(group.title.clone());
        for page in &group.children {
            let route = page.route(&entry.prefix);
            let marker = if active_route == Some(route.as_str()) { '*' } else { ' ' };
            lines.push(format!("  {marker} {page} -> {route}"));
        }
    }
    lines
}
