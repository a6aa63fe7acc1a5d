//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each project is shown
//! by its positional index and title, with its source directory and a short
//! description as indented context lines. The result reads as a content
//! inventory while still letting users trace every card back to a README.
//!
//! # Output Format
//!
//! ## Scan / Check
//!
//! ```text
//! Web projects (2)
//! 001 Alpha
//!     Source: web/alpha
//!     Description: A sample project.
//! 002 Landing Page
//!     Source: web/landing-page
//!     Description: One-page landing site for a coffee shop with a respo...
//!
//! Mobile projects (0)
//!
//! Scripts and utilities (1)
//! 001 backup-tool
//!     Source: scripts/backup-tool
//! ```
//!
//! ## Build
//!
//! The scan output above, followed by:
//!
//! ```text
//! Generated 3 projects (web 2, mobile 0, scripts 1) → _site/index.html
//! ```
//!
//! ## Script Listing
//!
//! ```text
//! ========================================
//! Python scripts: scripts/python
//! ========================================
//! file-organizer
//! rename-photos
//! ========================================
//! Total: 2
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::SiteConfig;
use crate::listing::ScriptListing;
use crate::types::{Category, CategoryResult, ProjectRecord};
use std::path::Path;

const DESCRIPTION_PREVIEW: usize = 60;
const BANNER_WIDTH: usize = 40;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Section header: category heading with its project count.
fn section_header(category: Category, count: usize) -> String {
    format!("{} ({})", category.heading(), count)
}

/// Shorten text to `max` characters for console display, on one line.
///
/// Unlike card descriptions, `...` is only added when something was cut.
fn truncate_desc(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let head: String = flat.chars().take(max).collect();
        format!("{}...", head)
    }
}

fn project_lines(index: usize, project: &ProjectRecord, placeholder: &str) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", format_index(index), project.title),
        format!("{}Source: {}", indent(1), project.path),
    ];
    if project.description != placeholder {
        lines.push(format!(
            "{}Description: {}",
            indent(1),
            truncate_desc(&project.description, DESCRIPTION_PREVIEW)
        ));
    }
    lines
}

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the discovered projects, grouped by category in page order.
pub fn format_scan_output(result: &CategoryResult, config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, category) in Category::ALL.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        let projects = result.projects(category);
        lines.push(section_header(category, projects.len()));
        for (pos, project) in projects.iter().enumerate() {
            lines.extend(project_lines(
                pos + 1,
                project,
                &config.readme.description_placeholder,
            ));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(result: &CategoryResult, config: &SiteConfig) {
    for line in format_scan_output(result, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the one-line build summary: counts per category and output path.
pub fn format_build_summary(result: &CategoryResult, output_path: &Path) -> Vec<String> {
    let counts = Category::ALL
        .iter()
        .map(|&c| format!("{} {}", c.key(), result.count(c)))
        .collect::<Vec<_>>()
        .join(", ");
    let total = result.total();
    let noun = if total == 1 { "project" } else { "projects" };

    vec![format!(
        "Generated {} {} ({}) → {}",
        total,
        noun,
        counts,
        output_path.display()
    )]
}

/// Print the build summary to stdout.
pub fn print_build_summary(result: &CategoryResult, output_path: &Path) {
    for line in format_build_summary(result, output_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Script listing output
// ============================================================================

/// Format the script listing between header and footer banners.
pub fn format_script_listing(listing: &ScriptListing) -> Vec<String> {
    let mut lines = vec![
        banner(),
        format!("Python scripts: {}", listing.dir),
        banner(),
    ];

    match &listing.entries {
        Some(entries) => lines.extend(entries.iter().cloned()),
        None => lines.push(format!("Directory not found: {}", listing.dir)),
    }

    lines.push(banner());
    lines.push(format!("Total: {}", listing.count()));
    lines
}

/// Print the script listing to stdout.
pub fn print_script_listing(listing: &ScriptListing) {
    for line in format_script_listing(listing) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
