//! `quire nav` command implementation.

use clap::Args;
use quire_config::{NavItem, NavLink, SiteConfig};

use super::ConfigArg;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    config: ConfigArg,
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.config.as_deref(), None)?;

        if config.theme.nav.is_empty() {
            output.warning("No navigation items configured");
            return Ok(());
        }

        output.data(&render_nav(&config.theme.nav).join("\n"))?;
        Ok(())
    }
}

fn render_link(link: &NavLink, indent: &str) -> String {
    let suffix = if link.is_external() { " (external)" } else { "" };
    format!("{indent}{} -> {}{suffix}", link.text, link.link)
}

/// Render navigation entries as an indented tree.
fn render_nav(items: &[NavItem]) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        match item {
            NavItem::Link(link) => lines.push(render_link(link, "")),
            NavItem::Dropdown(dropdown) => {
                lines.push(format!("{} ▾", dropdown.text));
                lines.extend(dropdown.items.iter().map(|link| render_link(link, "  ")));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_config::builtin;

    #[test]
    fn test_render_builtin_nav() {
        let lines = render_nav(&builtin::site_config().theme.nav);
        assert_eq!(
            lines,
            vec![
                "算法 -> /algorithm/".to_owned(),
                "前端 -> /frontend/".to_owned(),
                "GitHub ▾".to_owned(),
                "  GitHub地址 -> https://github.com/barry7 (external)".to_owned(),
            ]
        );
    }

    #[test]
    fn test_render_empty_nav() {
        assert!(render_nav(&[]).is_empty());
    }
}
