//! Shared types passed from the scanner to the renderer and console output.
//!
//! Everything here is built once per run and never mutated after the scan
//! hands it over.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the fixed top-level project groupings of the portfolio.
///
/// The declaration order is the rendering order: web, mobile, scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Scripts,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Web, Category::Mobile, Category::Scripts];

    /// Directory name under the repository root, also used in project paths.
    pub fn key(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Scripts => "scripts",
        }
    }

    /// Section heading on the generated page.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Web => "Web projects",
            Category::Mobile => "Mobile projects",
            Category::Scripts => "Scripts and utilities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Metadata extracted for one project directory that has a README.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Subdirectory name; unique within its category only
    pub name: String,
    /// First `# heading` of the README, or `name` as fallback
    pub title: String,
    /// Body of the description section, or the configured placeholder
    pub description: String,
    /// `{category}/{name}`
    pub path: String,
    /// Link to the project on the source host
    pub readme_url: String,
}

/// Projects discovered per category, in directory-listing order.
///
/// Categories that were never scanned read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryResult {
    projects: BTreeMap<Category, Vec<ProjectRecord>>,
}

impl CategoryResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scan result of one category, replacing any earlier one.
    pub fn insert(&mut self, category: Category, projects: Vec<ProjectRecord>) {
        self.projects.insert(category, projects);
    }

    pub fn projects(&self, category: Category) -> &[ProjectRecord] {
        self.projects
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count(&self, category: Category) -> usize {
        self.projects(category).len()
    }

    pub fn total(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }
}

impl FromIterator<(Category, Vec<ProjectRecord>)> for CategoryResult {
    fn from_iter<I: IntoIterator<Item = (Category, Vec<ProjectRecord>)>>(iter: I) -> Self {
        Self {
            projects: iter.into_iter().collect(),
        }
    }
}
