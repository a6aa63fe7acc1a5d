//! Shared test utilities for the portfolio-index test suite.
//!
//! Provides fixture setup, project builders, and lookup helpers that work
//! with scan results (`ProjectRecord`, `CategoryResult`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let result = scan(tmp.path(), &SiteConfig::default()).unwrap();
//!
//! let alpha = find_project(result.projects(Category::Web), "alpha");
//! assert_eq!(alpha.title, "Alpha");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::ProjectRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/portfolio/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/portfolio");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create `<root>/<category>/<name>/README.md` with the given content.
pub fn write_project(root: &Path, category: &str, name: &str, readme: &str) {
    let dir = root.join(category).join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("README.md"), readme).unwrap();
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find a project by directory name. Panics if not found.
pub fn find_project<'a>(projects: &'a [ProjectRecord], name: &str) -> &'a ProjectRecord {
    projects.iter().find(|p| p.name == name).unwrap_or_else(|| {
        let names = project_names(projects);
        panic!("project '{name}' not found. Available: {names:?}")
    })
}

/// All project names in scan order.
pub fn project_names(projects: &[ProjectRecord]) -> Vec<&str> {
    projects.iter().map(|p| p.name.as_str()).collect()
}
