//! Built-in site descriptor.
//!
//! Used when no configuration file is found, and written out by `quire init`.

use crate::nav::{NavItem, NavLink};
use crate::sidebar::{PageRef, Sidebar, SidebarGroup};
use crate::site::{MarkdownConfig, SiteConfig, ThemeConfig};

/// Return the blog's site configuration.
#[must_use]
pub fn site_config() -> SiteConfig {
    let sidebar = Sidebar::new()
        .with_section(
            "/frontend/",
            vec![SidebarGroup::new(
                "前端开发分享",
                vec![
                    PageRef::index(),
                    PageRef::new("largeList"),
                    PageRef::new("select"),
                ],
            )],
        )
        .with_section(
            "/algorithm/",
            vec![SidebarGroup::new("算法分享", vec![PageRef::index()])],
        );

    let nav = vec![
        NavItem::link("算法", "/algorithm/"),
        NavItem::link("前端", "/frontend/"),
        NavItem::dropdown(
            "GitHub",
            vec![NavLink::new("GitHub地址", "https://github.com/barry7")],
        ),
    ];

    SiteConfig {
        title: "Barry7的个人博客".to_owned(),
        description: "欢迎来到Barry7的个人博客".to_owned(),
        markdown: MarkdownConfig { line_numbers: true },
        theme: ThemeConfig { sidebar, nav },
        loaded_from: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_and_description_present() {
        let config = site_config();
        assert!(!config.title.is_empty());
        assert!(!config.description.is_empty());
        assert!(config.markdown.line_numbers);
    }

    #[test]
    fn test_sidebar_keys_unique_and_non_empty() {
        let config = site_config();
        let prefixes: Vec<&str> = config
            .theme
            .sidebar
            .entries()
            .iter()
            .map(|entry| entry.prefix.as_str())
            .collect();

        assert_eq!(prefixes, vec!["/frontend/", "/algorithm/"]);
    }

    #[test]
    fn test_algorithm_path_resolves_to_index() {
        let config = site_config();
        let active = config.theme.sidebar.active_page("/algorithm/").unwrap();
        assert_eq!(active.group.title, "算法分享");
        assert!(active.page.is_index());
    }

    #[test]
    fn test_github_is_single_dropdown_with_one_link() {
        let config = site_config();
        let dropdowns: Vec<_> = config
            .theme
            .nav
            .iter()
            .filter_map(|item| match item {
                NavItem::Dropdown(dropdown) => Some(dropdown),
                NavItem::Link(_) => None,
            })
            .collect();

        assert_eq!(dropdowns.len(), 1);
        assert_eq!(dropdowns[0].text, "GitHub");
        assert_eq!(
            dropdowns[0].items,
            vec![NavLink::new("GitHub地址", "https://github.com/barry7")]
        );
    }

    #[test]
    fn test_every_dropdown_item_populated() {
        for item in site_config().theme.nav {
            if let NavItem::Dropdown(dropdown) = item {
                assert!(!dropdown.items.is_empty());
                for link in dropdown.items {
                    assert!(!link.text.is_empty());
                    assert!(!link.link.is_empty());
                }
            }
        }
    }
}
