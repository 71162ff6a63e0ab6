//! Sidebar groups keyed by URL path prefix.
//!
//! The generator picks the sidebar for a page by matching the page's URL
//! against the configured prefixes; the most specific (longest) matching
//! prefix wins. [`Sidebar::resolve`] mirrors that selection so tools can
//! preview which groups a page gets.
//!
//! # Example
//!
//! ```
//! use quire_config::{PageRef, Sidebar, SidebarGroup};
//!
//! let sidebar = Sidebar::new().with_section(
//!     "/algorithm/",
//!     vec![SidebarGroup::new("算法分享", vec![PageRef::index()])],
//! );
//!
//! let active = sidebar.active_page("/algorithm/").unwrap();
//! assert_eq!(active.group.title, "算法分享");
//! assert!(active.page.is_index());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ConfigError, require_non_empty};

/// Reference to a page from a sidebar group.
///
/// Relative references resolve under the section's path prefix; references
/// starting with `/` are site-absolute. The empty reference is the section's
/// index page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRef(String);

impl PageRef {
    /// Create a page reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The section index reference (`""`).
    #[must_use]
    pub fn index() -> Self {
        Self(String::new())
    }

    /// Raw reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this refers to the section index page.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.0.is_empty()
    }

    /// URL route of the referenced page under `prefix`.
    ///
    /// - `""` under `/frontend/` -> `/frontend/`
    /// - `"select"` under `/frontend/` -> `/frontend/select.html`
    /// - `"/algorithm/test"` -> `/algorithm/test.html`
    #[must_use]
    pub fn route(&self, prefix: &str) -> String {
        let joined = self.join(prefix);
        if joined.ends_with('/') {
            return joined;
        }
        let stem = joined.strip_suffix(".md").unwrap_or(&joined);
        if stem.ends_with(".html") {
            stem.to_owned()
        } else {
            format!("{stem}.html")
        }
    }

    /// Markdown source path of the referenced page, relative to the docs root.
    ///
    /// - `""` under `/frontend/` -> `frontend/README.md`
    /// - `"select"` under `/frontend/` -> `frontend/select.md`
    #[must_use]
    pub fn source_path(&self, prefix: &str) -> PathBuf {
        let joined = self.join(prefix);
        let relative = joined.trim_start_matches('/');
        if relative.is_empty() || relative.ends_with('/') {
            return PathBuf::from(format!("{relative}README.md"));
        }
        let stem = relative
            .strip_suffix(".md")
            .or_else(|| relative.strip_suffix(".html"))
            .unwrap_or(relative);
        PathBuf::from(format!("{stem}.md"))
    }

    fn join(&self, prefix: &str) -> String {
        if self.0.starts_with('/') {
            self.0.clone()
        } else {
            format!("{}/{}", prefix.trim_end_matches('/'), self.0)
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_index() {
            f.write_str("(index)")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Titled, ordered list of pages shown in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Pages in display order.
    pub children: Vec<PageRef>,
}

impl SidebarGroup {
    /// Create a group.
    pub fn new(title: impl Into<String>, children: Vec<PageRef>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

/// Sidebar groups for one path prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    /// URL path prefix, e.g. `/frontend/`.
    pub prefix: String,
    /// Groups shown for pages under the prefix.
    pub groups: Vec<SidebarGroup>,
}

/// Page selected by [`Sidebar::active_page`].
#[derive(Clone, Copy, Debug)]
pub struct ActivePage<'a> {
    /// Section the page belongs to.
    pub entry: &'a SidebarEntry,
    /// Group listing the page.
    pub group: &'a SidebarGroup,
    /// Matching page reference.
    pub page: &'a PageRef,
}

/// Sidebar configuration: path prefix -> groups, in declaration order.
///
/// Serialized as a map. Deserialization keeps every entry, including repeated
/// prefixes, so validation can report them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    entries: Vec<SidebarEntry>,
}

impl Sidebar {
    /// Create an empty sidebar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    #[must_use]
    pub fn with_section(mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> Self {
        self.entries.push(SidebarEntry {
            prefix: prefix.into(),
            groups,
        });
        self
    }

    /// Sections in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sections are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups configured for exactly `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .map(|entry| entry.groups.as_slice())
    }

    /// Section whose prefix is the longest match for the page `path`.
    ///
    /// Paths without a file extension are treated as directories, so
    /// `/algorithm` selects the `/algorithm/` section.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&SidebarEntry> {
        let path = normalize_for_prefix(path);
        self.entries
            .iter()
            .filter(|entry| path.starts_with(entry.prefix.as_str()))
            .max_by_key(|entry| entry.prefix.len())
    }

    /// Page reference the page `path` corresponds to, within its section.
    #[must_use]
    pub fn active_page(&self, path: &str) -> Option<ActivePage<'_>> {
        let entry = self.resolve(path)?;
        let target = route_key(path);
        entry.groups.iter().find_map(|group| {
            group
                .children
                .iter()
                .find(|page| route_key(&page.route(&entry.prefix)) == target)
                .map(|page| ActivePage { entry, group, page })
        })
    }

    /// Validate prefixes and groups.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for entry in &self.entries {
            let prefix = entry.prefix.as_str();
            if prefix.is_empty() {
                return Err(ConfigError::Validation(
                    "themeConfig.sidebar path prefix cannot be empty".to_owned(),
                ));
            }
            if !seen.insert(prefix) {
                return Err(ConfigError::DuplicateSidebarKey(prefix.to_owned()));
            }
            if !prefix.starts_with('/') || !prefix.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "themeConfig.sidebar path prefix \"{prefix}\" must start and end with '/'"
                )));
            }

            for (i, group) in entry.groups.iter().enumerate() {
                let field = format!("themeConfig.sidebar[\"{prefix}\"][{i}]");
                require_non_empty(&group.title, &format!("{field}.title"))?;
                if group.children.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{field}.children cannot be empty (group \"{}\")",
                        group.title
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Leading slash, and a trailing slash for extension-less paths.
fn normalize_for_prefix(path: &str) -> String {
    let mut path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if !path.ends_with('/') && !last_segment.contains('.') {
        path.push('/');
    }
    path
}

/// Comparable form of a route: no `.html`, no trailing slash except root.
fn route_key(path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };
    let path = path.strip_suffix(".html").unwrap_or(&path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.prefix, &entry.groups)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SidebarVisitor)
    }
}

struct SidebarVisitor;

impl<'de> Visitor<'de> for SidebarVisitor {
    type Value = Sidebar;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map from path prefix to sidebar groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Sidebar, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((prefix, groups)) = access.next_entry::<String, Vec<SidebarGroup>>()? {
            entries.push(SidebarEntry { prefix, groups });
        }
        Ok(Sidebar { entries })
    }
}
