//! Site configuration module.
//!
//! Every value the generator used to hard-code lives here: the category
//! list, the README heading that marks the description, the placeholder used
//! when that section is missing, the URL template of project links, and the
//! output location. Stock defaults reproduce the stock page exactly, so a
//! repository without a config file builds the same site as always.
//!
//! ## Config File Location
//!
//! An optional `portfolio.toml` in the repository root overrides the stock
//! defaults key by key:
//!
//! ```text
//! portfolio/
//! ├── portfolio.toml           # Optional overrides
//! ├── web/
//! ├── mobile/
//! └── scripts/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Project Portfolio"
//! output_dir = "_site"                  # Relative to the repository root
//! categories = ["web", "mobile", "scripts"]
//! timestamp_format = "%d.%m.%Y %H:%M"   # chrono strftime syntax
//!
//! [readme]
//! file_name = "README.md"
//! description_heading = "Описание"      # Matched as `## Описание`
//! description_placeholder = "No description yet"
//!
//! [cards]
//! description_limit = 150               # Characters shown before "..."
//! link_text = "View project →"
//! url_template = "https://github.com/RomanLarichev/portfolio/tree/main/{category}/{name}"
//!
//! [listing]
//! scripts_dir = "scripts/python"        # Directory shown by `list-scripts`
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::Category;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file in the repository root.
pub const CONFIG_FILE_NAME: &str = "portfolio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `portfolio.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title, shown in `<title>` and the page header.
    pub site_title: String,
    /// Output directory, relative to the repository root.
    pub output_dir: String,
    /// Categories to scan, in order.
    pub categories: Vec<Category>,
    /// strftime pattern for the generation timestamps.
    pub timestamp_format: String,
    /// README discovery and extraction settings.
    pub readme: ReadmeConfig,
    /// Project card settings.
    pub cards: CardsConfig,
    /// Companion script listing settings.
    pub listing: ListingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Project Portfolio".to_string(),
            output_dir: "_site".to_string(),
            categories: Category::ALL.to_vec(),
            timestamp_format: "%d.%m.%Y %H:%M".to_string(),
            readme: ReadmeConfig::default(),
            cards: CardsConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation("output_dir must not be empty".into()));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "categories must not be empty".into(),
            ));
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(ConfigError::Validation(format!(
                    "category '{category}' is listed more than once"
                )));
            }
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "timestamp_format '{}' is not a valid strftime pattern",
                self.timestamp_format
            )));
        }
        if self.readme.file_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "readme.file_name must not be empty".into(),
            ));
        }
        if self.readme.description_heading.trim().is_empty() {
            return Err(ConfigError::Validation(
                "readme.description_heading must not be empty".into(),
            ));
        }
        if self.cards.description_limit == 0 {
            return Err(ConfigError::Validation(
                "cards.description_limit must be greater than 0".into(),
            ));
        }
        if !self.cards.url_template.contains("{name}") {
            return Err(ConfigError::Validation(
                "cards.url_template must contain {name}".into(),
            ));
        }
        Ok(())
    }

    /// Path of the generated index page under `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join("index.html")
    }
}

/// README discovery and extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadmeConfig {
    /// File looked up directly inside each project directory.
    pub file_name: String,
    /// Text of the level-2 heading that opens the description section.
    pub description_heading: String,
    /// Description used when the README has no description section.
    pub description_placeholder: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            file_name: "README.md".to_string(),
            description_heading: "Описание".to_string(),
            description_placeholder: "No description yet".to_string(),
        }
    }
}

/// Project card settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardsConfig {
    /// Maximum number of description characters shown on a card.
    pub description_limit: usize,
    /// Text of the link to the project.
    pub link_text: String,
    /// Project link, with `{category}` and `{name}` placeholders.
    pub url_template: String,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            description_limit: 150,
            link_text: "View project →".to_string(),
            url_template: "https://github.com/RomanLarichev/portfolio/tree/main/{category}/{name}"
                .to_string(),
        }
    }
}

impl CardsConfig {
    /// Expand the URL template for one project.
    pub fn project_url(&self, category: Category, name: &str) -> String {
        self.url_template
            .replace("{category}", category.key())
            .replace("{name}", name)
    }
}

/// Companion script listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Directory whose subdirectories are listed, relative to the root.
    pub scripts_dir: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            scripts_dir: "scripts/python".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `portfolio.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config of the repository at `root`.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `portfolio.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r###"# Portfolio Index Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the repository root as portfolio.toml.
# Unknown keys will cause an error.

# Title shown in the browser tab and the page header.
site_title = "Project Portfolio"

# Output directory, relative to the repository root. The page is written
# to <output_dir>/index.html.
output_dir = "_site"

# Category directories to scan, in order. Allowed: web, mobile, scripts.
# The page always shows all three sections; unscanned ones stay empty.
categories = ["web", "mobile", "scripts"]

# Format of the generation timestamps (chrono strftime syntax).
timestamp_format = "%d.%m.%Y %H:%M"

# ---------------------------------------------------------------------------
# README extraction
# ---------------------------------------------------------------------------
[readme]
# File looked up directly inside each project directory.
file_name = "README.md"

# The description is the body of the "## <heading>" section.
description_heading = "Описание"

# Used when a README has no description section.
description_placeholder = "No description yet"

# ---------------------------------------------------------------------------
# Project cards
# ---------------------------------------------------------------------------
[cards]
# Characters of the description shown on a card. "..." is always appended.
description_limit = 150

# Text of the link at the bottom of each card.
link_text = "View project →"

# Project link. {category} and {name} are replaced per project.
url_template = "https://github.com/RomanLarichev/portfolio/tree/main/{category}/{name}"

# ---------------------------------------------------------------------------
# Script listing (list-scripts command)
# ---------------------------------------------------------------------------
[listing]
scripts_dir = "scripts/python"
"###
}
