//! Top-level navigation entries.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_non_empty};

/// A single navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    /// Display text.
    pub text: String,
    /// Link target, either a site path (`/frontend/`) or an absolute URL.
    pub link: String,
}

impl NavLink {
    /// Create a link.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Whether the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http://") || self.link.starts_with("https://")
    }

    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        require_non_empty(&self.text, &format!("{field}.text"))?;
        require_non_empty(&self.link, &format!("{field}.link"))?;
        Ok(())
    }
}

/// A labeled dropdown of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavDropdown {
    /// Dropdown label.
    pub text: String,
    /// Links shown when the dropdown opens.
    pub items: Vec<NavLink>,
}

/// Navigation entry: a direct link or a dropdown.
///
/// Untagged on the wire: an object with `items` is a dropdown, an object
/// with `link` is a link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Dropdown entry.
    Dropdown(NavDropdown),
    /// Direct link entry.
    Link(NavLink),
}

impl NavItem {
    /// Create a direct link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(NavLink::new(text, link))
    }

    /// Create a dropdown entry.
    pub fn dropdown(text: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self::Dropdown(NavDropdown {
            text: text.into(),
            items,
        })
    }

    /// Display text of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Dropdown(dropdown) => &dropdown.text,
            Self::Link(link) => &link.text,
        }
    }

    /// Validate the entry at `index` within `themeConfig.nav`.
    pub(crate) fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let field = format!("themeConfig.nav[{index}]");
        match self {
            Self::Link(link) => link.validate(&field),
            Self::Dropdown(dropdown) => {
                require_non_empty(&dropdown.text, &format!("{field}.text"))?;
                if dropdown.items.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{field}.items cannot be empty (dropdown \"{}\")",
                        dropdown.text
                    )));
                }
                for (i, item) in dropdown.items.iter().enumerate() {
                    item.validate(&format!("{field}.items[{i}]"))?;
                }
                Ok(())
            }
        }
    }

    /// Expand environment variables in link targets.
    pub(crate) fn expand_env_vars(&mut self, index: usize) -> Result<(), ConfigError> {
        let field = format!("themeConfig.nav[{index}]");
        match self {
            Self::Link(link) => {
                link.link = crate::expand::expand_env(&link.link, &format!("{field}.link"))?;
            }
            Self::Dropdown(dropdown) => {
                for (i, item) in dropdown.items.iter_mut().enumerate() {
                    item.link =
                        crate::expand::expand_env(&item.link, &format!("{field}.items[{i}].link"))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_link() {
        let item: NavItem = serde_json::from_str(r#"{"text": "算法", "link": "/algorithm/"}"#).unwrap();
        assert_eq!(item, NavItem::link("算法", "/algorithm/"));
    }

    #[test]
    fn test_deserialize_dropdown() {
        let json = r#"{
            "text": "GitHub",
            "items": [{"text": "GitHub地址", "link": "https://github.com/barry7"}]
        }"#;
        let item: NavItem = serde_json::from_str(json).unwrap();

        let NavItem::Dropdown(dropdown) = &item else {
            panic!("Expected dropdown, got {item:?}");
        };
        assert_eq!(dropdown.text, "GitHub");
        assert_eq!(dropdown.items.len(), 1);
        assert_eq!(dropdown.items[0].text, "GitHub地址");
        assert!(dropdown.items[0].is_external());
    }

    #[test]
    fn test_deserialize_entry_without_link_or_items_fails() {
        let result: Result<NavItem, _> = serde_json::from_str(r#"{"text": "Orphan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_unknown_field_fails() {
        let link: Result<NavItem, _> =
            serde_json::from_str(r#"{"text": "Home", "link": "/", "target": "_blank"}"#);
        assert!(link.is_err());

        let dropdown: Result<NavItem, _> = serde_json::from_str(
            r#"{"text": "GitHub", "items": [{"text": "Repo", "url": "https://github.com"}]}"#,
        );
        assert!(dropdown.is_err());
    }

    #[test]
    fn test_serialize_is_untagged() {
        let item = NavItem::dropdown("GitHub", vec![NavLink::new("Repo", "https://github.com")]);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "GitHub",
                "items": [{"text": "Repo", "link": "https://github.com"}]
            })
        );
    }

    #[test]
    fn test_is_external() {
        assert!(NavLink::new("a", "http://example.com").is_external());
        assert!(!NavLink::new("a", "/frontend/").is_external());
    }

    #[test]
    fn test_validate_empty_dropdown() {
        let item = NavItem::dropdown("GitHub", Vec::new());
        let err = item.validate(2).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let msg = err.to_string();
        assert!(msg.contains("themeConfig.nav[2].items"));
        assert!(msg.contains("GitHub"));
    }

    #[test]
    fn test_validate_dropdown_item_missing_link() {
        let item = NavItem::dropdown("GitHub", vec![NavLink::new("Repo", "")]);
        let err = item.validate(0).unwrap_err();
        assert!(err.to_string().contains("themeConfig.nav[0].items[0].link"));
    }

    #[test]
    fn test_validate_link_missing_text() {
        let item = NavItem::link("  ", "/frontend/");
        let err = item.validate(1).unwrap_err();
        assert!(err.to_string().contains("themeConfig.nav[1].text"));
    }
}
