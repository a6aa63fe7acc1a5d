//! Companion listing of the script directories.
//!
//! Lists the subdirectories of `scripts/python/` (configurable) by name, the
//! way `ls` would: hidden entries skipped, sorted by name. It is informational
//! only; the build never reads it.

use crate::config::SiteConfig;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("cannot list {dir}: {source}")]
    Walk {
        dir: String,
        source: walkdir::Error,
    },
}

/// Result of listing the scripts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptListing {
    /// Listed directory as configured, relative to the repository root
    pub dir: String,
    /// Subdirectory names, or `None` when the directory does not exist
    pub entries: Option<Vec<String>>,
}

impl ScriptListing {
    pub fn count(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }
}

/// List the subdirectory names of the configured scripts directory.
pub fn list_scripts(root: &Path, config: &SiteConfig) -> Result<ScriptListing, ListingError> {
    let dir = config.listing.scripts_dir.clone();
    let path = root.join(&dir);
    if !path.is_dir() {
        return Ok(ScriptListing { dir, entries: None });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ListingError::Walk {
            dir: dir.clone(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }
        entries.push(name);
    }

    Ok(ScriptListing {
        dir,
        entries: Some(entries),
    })
}
