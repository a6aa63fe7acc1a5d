//! Category scanning and README metadata extraction.
//!
//! Walks the category directories of a portfolio repository and turns every
//! project directory that carries a README into a [`ProjectRecord`].
//!
//! ## Directory Structure
//!
//! ```text
//! portfolio/                       # Repository root
//! ├── web/                         # Category
//! │   ├── alpha/
//! │   │   └── README.md            # → project "web/alpha"
//! │   └── drafts/                  # No README: skipped
//! ├── mobile/
//! │   └── weather-app/
//! │       └── README.md
//! └── scripts/
//!     └── backup-tool/
//!         └── README.md
//! ```
//!
//! Only direct children of a category directory are considered, in the order
//! the filesystem lists them. Nothing is sorted.
//!
//! ## README Conventions
//!
//! - **Title**: the first line that starts with exactly `# `. Falls back to
//!   the directory name.
//! - **Description**: the body of the `## Описание` section, up to the next
//!   line that starts with `#` or the end of the file, trimmed. Falls back to
//!   the configured placeholder.
//!
//! ## Failure Policy
//!
//! A missing category directory or a project without a README is not an
//! error. A README that exists but cannot be read (permissions, invalid
//! UTF-8) is logged as a warning and the project is left out; one broken
//! project never stops the build.

use crate::config::SiteConfig;
use crate::types::{Category, CategoryResult, ProjectRecord};
use regex::Regex;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid README pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Title and description extraction for README text.
///
/// Both patterns are compiled once and reused for every README of a scan.
#[derive(Debug, Clone)]
pub struct ReadmeParser {
    title_re: Regex,
    description_re: Regex,
}

impl ReadmeParser {
    /// Build a parser whose description section starts at `## {heading}`.
    pub fn new(description_heading: &str) -> Result<Self, ScanError> {
        let title_re = Regex::new(r"(?m)^# (.+)$")?;
        let description_re = Regex::new(&format!(
            r"(?ms)^## {}[ \t]*\r?\n(.*?)(?:^#|\z)",
            regex::escape(description_heading)
        ))?;
        Ok(Self {
            title_re,
            description_re,
        })
    }

    /// Text of the first level-1 heading, if any.
    pub fn title(&self, content: &str) -> Option<String> {
        self.title_re
            .captures(content)
            .map(|caps| caps[1].trim().to_string())
            .filter(|title| !title.is_empty())
    }

    /// Body of the description section, trimmed.
    pub fn description(&self, content: &str) -> Option<String> {
        self.description_re
            .captures(content)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Scan every configured category of the repository at `root`.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<CategoryResult, ScanError> {
    let parser = ReadmeParser::new(&config.readme.description_heading)?;
    Ok(config
        .categories
        .iter()
        .map(|&category| {
            let projects = scan_with_parser(root, category, config, &parser);
            (category, projects)
        })
        .collect())
}

/// Scan a single category directory.
pub fn scan_category(
    root: &Path,
    category: Category,
    config: &SiteConfig,
) -> Result<Vec<ProjectRecord>, ScanError> {
    let parser = ReadmeParser::new(&config.readme.description_heading)?;
    Ok(scan_with_parser(root, category, config, &parser))
}

fn scan_with_parser(
    root: &Path,
    category: Category,
    config: &SiteConfig,
    parser: &ReadmeParser,
) -> Vec<ProjectRecord> {
    let category_dir = root.join(category.key());
    if !category_dir.is_dir() {
        debug!(category = %category, path = %category_dir.display(), "category directory missing");
        return Vec::new();
    }

    let mut projects = Vec::new();
    for entry in WalkDir::new(&category_dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(category = %category, error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        // `Path::is_dir` follows symlinks, unlike the entry's own file type
        let project_dir = entry.path();
        if !project_dir.is_dir() {
            continue;
        }

        let readme_path = project_dir.join(&config.readme.file_name);
        if !readme_path.is_file() {
            debug!(path = %project_dir.display(), "no README, skipping");
            continue;
        }

        let content = match fs::read_to_string(&readme_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    path = %readme_path.display(),
                    error = %e,
                    "failed to read README, skipping project"
                );
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        projects.push(build_record(category, name, &content, config, parser));
    }

    projects
}

fn build_record(
    category: Category,
    name: String,
    content: &str,
    config: &SiteConfig,
    parser: &ReadmeParser,
) -> ProjectRecord {
    let title = parser.title(content).unwrap_or_else(|| name.clone());
    let description = parser
        .description(content)
        .unwrap_or_else(|| config.readme.description_placeholder.clone());

    ProjectRecord {
        path: format!("{}/{}", category.key(), name),
        readme_url: config.cards.project_url(category, &name),
        name,
        title,
        description,
    }
}
