//! # Portfolio Index
//!
//! Builds a single HTML page listing the projects of a portfolio repository.
//! The repository layout is the data source: every directory under `web/`,
//! `mobile/` or `scripts/` that carries a `README.md` becomes a card.
//!
//! # Pipeline
//!
//! ```text
//! 1. Config    portfolio.toml  →  SiteConfig        (stock defaults when absent)
//! 2. Scan      web/ mobile/ scripts/  →  CategoryResult
//! 3. Generate  CategoryResult  →  _site/index.html
//! ```
//!
//! Each run rebuilds the page from scratch. Nothing is cached between runs
//! and the output file is simply overwritten.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `portfolio.toml` loading, merging over stock defaults, validation |
//! | [`types`] | `Category`, `ProjectRecord`, `CategoryResult` shared by all stages |
//! | [`scan`] | Walks the category directories and extracts README titles and descriptions |
//! | [`generate`] | Renders the index page with Maud and writes it |
//! | [`listing`] | Companion listing of the `scripts/python/` directories |
//! | [`output`] | CLI output formatting for scan, build and listing |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The page is produced by [Maud](https://maud.lambda.xyz/) templates
//! compiled into the binary. README text is interpolated auto-escaped, so a
//! stray `<` in a description cannot break the page.
//!
//! ## Best-Effort Scanning
//!
//! A missing category directory, a project without a README, or a README
//! that cannot be read all reduce the number of cards; none of them fail the
//! build. Only failing to write the page is fatal.
//!
//! ## Pure Rendering
//!
//! [`generate::render_index`] takes the generation time as an argument
//! instead of reading the clock, so the same input always renders the same
//! bytes.

pub mod config;
pub mod generate;
pub mod listing;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
