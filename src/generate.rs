//! HTML index generation.
//!
//! Takes the scan result and produces the single page of the site:
//!
//! ```text
//! _site/
//! └── index.html
//! ```
//!
//! ## Page Layout
//!
//! - **Header**: site title and generation timestamp
//! - **Sections**: web, mobile, scripts in that fixed order, each titled with
//!   its heading and project count, followed by a grid of project cards
//! - **Cards**: title, description cut to the configured limit with `...`
//!   appended, and a link to the project
//! - **Footer**: timestamp again and a note that the page is generated
//!
//! Every category section is always present; an empty category renders
//! `(0)` and an empty grid.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! README text is untrusted and all interpolation is auto-escaped. The
//! renderer never reads the clock: the timestamp is an argument, so equal
//! input renders byte-identical output.

use crate::config::{CardsConfig, SiteConfig};
use crate::types::{Category, CategoryResult, ProjectRecord};
use chrono::NaiveDateTime;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

const CSS_STATIC: &str = include_str!("../static/style.css");

const FOOTER_NOTE: &str =
    "This page is generated automatically from the project READMEs and updated on every build.";

/// Render the index page and write it to `<root>/<output_dir>/index.html`.
///
/// Missing parent directories are created. An existing file is overwritten
/// in place. Returns the path written.
pub fn generate(
    root: &Path,
    categorized: &CategoryResult,
    config: &SiteConfig,
    generated_at: NaiveDateTime,
) -> Result<PathBuf, GenerateError> {
    let output_path = config.output_path(root);

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let page = render_index(categorized, config, generated_at);
    fs::write(&output_path, page.into_string()).map_err(|source| GenerateError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(output_path)
}

/// Cut `text` to `limit` characters and append `...`.
///
/// The marker is appended even when nothing was cut, matching the stock
/// page.
pub fn truncate_description(text: &str, limit: usize) -> String {
    let head: String = text.chars().take(limit).collect();
    format!("{head}...")
}

fn format_timestamp(at: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_err() {
        return at.format("%Y-%m-%d %H:%M").to_string();
    }
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(title: &str, timestamp: &str) -> Markup {
    html! {
        header.site-header {
            h1 { (title) }
            p.generated { "Generated: " (timestamp) }
        }
    }
}

fn site_footer(timestamp: &str) -> Markup {
    html! {
        footer.site-footer {
            p { "Last updated: " (timestamp) }
            p.note { (FOOTER_NOTE) }
        }
    }
}

/// Renders one category section with its card grid
fn category_section(category: Category, projects: &[ProjectRecord], cards: &CardsConfig) -> Markup {
    html! {
        section.category id=(category.key()) {
            h2 { (category.heading()) " (" (projects.len()) ")" }
            div.projects-grid {
                @for project in projects {
                    (project_card(project, cards))
                }
            }
        }
    }
}

fn project_card(project: &ProjectRecord, cards: &CardsConfig) -> Markup {
    html! {
        article.project-card {
            h3.project-title { (project.title) }
            p.project-description {
                (truncate_description(&project.description, cards.description_limit))
            }
            a.project-link href=(project.readme_url) target="_blank" rel="noopener" {
                (cards.link_text)
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the complete index page.
pub fn render_index(
    categorized: &CategoryResult,
    config: &SiteConfig,
    generated_at: NaiveDateTime,
) -> Markup {
    let timestamp = format_timestamp(generated_at, &config.timestamp_format);

    let content = html! {
        (site_header(&config.site_title, &timestamp))
        main.index-page {
            @for category in Category::ALL {
                (category_section(category, categorized.projects(category), &config.cards))
            }
        }
        (site_footer(&timestamp))
    };

    base_document(&config.site_title, CSS_STATIC, content)
}

// ============================================================================
// Tests
// ============================================================================
