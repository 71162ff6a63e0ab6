//! Check sidebar page references against a docs directory.

use std::path::{Path, PathBuf};

use crate::site::SiteConfig;

/// Sidebar page reference with no markdown source on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingPage {
    /// Section path prefix.
    pub prefix: String,
    /// Title of the group listing the page.
    pub group: String,
    /// The page reference as written.
    pub reference: String,
    /// Expected source path, relative to the docs directory.
    pub expected: PathBuf,
}

impl SiteConfig {
    /// List sidebar page references whose markdown source is missing.
    ///
    /// Index references accept either `README.md` or `index.md`.
    #[must_use]
    pub fn missing_pages(&self, docs_dir: &Path) -> Vec<MissingPage> {
        let mut missing = Vec::new();

        for entry in self.theme.sidebar.entries() {
            for group in &entry.groups {
                for page in &group.children {
                    let expected = page.source_path(&entry.prefix);
                    if source_exists(docs_dir, &expected) {
                        continue;
                    }
                    missing.push(MissingPage {
                        prefix: entry.prefix.clone(),
                        group: group.title.clone(),
                        reference: page.as_str().to_owned(),
                        expected,
                    });
                }
            }
        }

        tracing::debug!(
            docs_dir = %docs_dir.display(),
            missing = missing.len(),
            "Checked sidebar pages"
        );

        missing
    }
}

fn source_exists(docs_dir: &Path, expected: &Path) -> bool {
    if docs_dir.join(expected).is_file() {
        return true;
    }
    expected.file_name().is_some_and(|name| name == "README.md")
        && docs_dir.join(expected.with_file_name("index.md")).is_file()
}
