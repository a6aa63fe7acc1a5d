//! End-to-end tests: the library pipeline and the `portfolio-index` binary
//! run against throwaway repositories.

use chrono::NaiveDate;
use portfolio_index::config::{self, SiteConfig};
use portfolio_index::generate::{generate, render_index};
use portfolio_index::scan::scan;
use portfolio_index::types::Category;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn write_readme(root: &Path, category: &str, name: &str, content: &str) {
    let dir = root.join(category).join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("README.md"), content).unwrap();
}

fn alpha_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_readme(
        tmp.path(),
        "web",
        "alpha",
        "# Alpha\n## Описание\nA sample project.\n",
    );
    tmp
}

/// Run the binary with `root` as working directory.
fn run_in(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_portfolio-index"))
        .args(args)
        .current_dir(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run portfolio-index")
}

/// Replace the two timestamp lines so runs at different minutes compare equal.
fn without_timestamps(html: &str) -> String {
    let generated = regex::Regex::new(r"Generated: [^<]*").unwrap();
    let updated = regex::Regex::new(r"Last updated: [^<]*").unwrap();
    let html = generated.replace_all(html, "Generated: <ts>");
    updated.replace_all(&html, "Last updated: <ts>").into_owned()
}

// ---------------------------------------------------------------------------
// Library pipeline
// ---------------------------------------------------------------------------

#[test]
fn single_web_project_end_to_end() {
    let tmp = alpha_repo();
    let site_config = config::load_config(tmp.path()).unwrap();
    let result = scan(tmp.path(), &site_config).unwrap();
    let at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap();

    let path = generate(tmp.path(), &result, &site_config, at).unwrap();
    let html = fs::read_to_string(path).unwrap();

    assert!(html.contains("Web projects (1)"));
    assert!(html.contains("Mobile projects (0)"));
    assert!(html.contains("Scripts and utilities (0)"));
    assert!(html.contains(">Alpha</h3>"));
    assert!(html.contains("A sample project...."));
    assert!(html.contains("https://github.com/RomanLarichev/portfolio/tree/main/web/alpha"));
    assert!(html.contains("Generated: 19.10.2026 09:05"));
}

#[test]
fn frozen_clock_renders_identical_pages() {
    let tmp = alpha_repo();
    let site_config = SiteConfig::default();
    let at = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let first = render_index(&scan(tmp.path(), &site_config).unwrap(), &site_config, at);
    let second = render_index(&scan(tmp.path(), &site_config).unwrap(), &site_config, at);
    assert_eq!(first.into_string(), second.into_string());
}

#[test]
fn config_file_changes_output_location_and_heading() {
    let tmp = TempDir::new().unwrap();
    write_readme(
        tmp.path(),
        "mobile",
        "notes",
        "# Notes\n## Description\nOffline notes app.\n## Build\n",
    );
    fs::write(
        tmp.path().join(config::CONFIG_FILE_NAME),
        r#"
output_dir = "public"

[readme]
description_heading = "Description"
"#,
    )
    .unwrap();

    let site_config = config::load_config(tmp.path()).unwrap();
    let result = scan(tmp.path(), &site_config).unwrap();
    assert_eq!(result.projects(Category::Mobile)[0].description, "Offline notes app.");

    let at = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let path = generate(tmp.path(), &result, &site_config, at).unwrap();
    assert_eq!(path, tmp.path().join("public/index.html"));
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_builds_site() {
    let tmp = alpha_repo();
    let out = run_in(tmp.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Web projects (1)"));
    assert!(stdout.contains("Generated 1 project (web 1, mobile 0, scripts 0)"));
    assert!(stdout.contains("index.html"));

    let html = fs::read_to_string(tmp.path().join("_site/index.html")).unwrap();
    assert!(html.contains("A sample project...."));
}

#[test]
fn rerun_is_idempotent() {
    let tmp = alpha_repo();
    assert!(run_in(tmp.path(), &[]).status.success());
    let first = fs::read_to_string(tmp.path().join("_site/index.html")).unwrap();

    assert!(run_in(tmp.path(), &["build"]).status.success());
    let second = fs::read_to_string(tmp.path().join("_site/index.html")).unwrap();

    assert_eq!(without_timestamps(&first), without_timestamps(&second));
}

#[test]
fn empty_repository_builds_empty_page() {
    let tmp = TempDir::new().unwrap();
    let out = run_in(tmp.path(), &[]);
    assert!(out.status.success());

    let html = fs::read_to_string(tmp.path().join("_site/index.html")).unwrap();
    assert!(html.contains("Web projects (0)"));
    assert!(html.contains("Mobile projects (0)"));
    assert!(html.contains("Scripts and utilities (0)"));
}

#[test]
fn write_failure_exits_non_zero() {
    let tmp = alpha_repo();
    fs::write(tmp.path().join("_site"), "a file where the directory should be").unwrap();

    let out = run_in(tmp.path(), &[]);
    assert!(!out.status.success());
    assert!(!out.stderr.is_empty());
}

#[test]
fn root_flag_points_at_repository() {
    let repo = alpha_repo();
    let elsewhere = TempDir::new().unwrap();
    let root = repo.path().to_str().unwrap();

    let out = run_in(elsewhere.path(), &["--root", root, "check"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("001 Alpha"));
    // check never writes
    assert!(!repo.path().join("_site").exists());
}

#[test]
fn scan_prints_json() {
    let tmp = alpha_repo();
    let out = run_in(tmp.path(), &["scan"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["web"][0]["title"], "Alpha");
    assert_eq!(json["web"][0]["description"], "A sample project.");
    assert_eq!(json["mobile"].as_array().map(Vec::len), Some(0));
}

#[test]
fn list_scripts_prints_banners_and_names() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("scripts/python/file-organizer")).unwrap();
    fs::create_dir_all(tmp.path().join("scripts/python/backup")).unwrap();

    let out = run_in(tmp.path(), &["list-scripts"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("===="));
    assert_eq!(lines[1], "Python scripts: scripts/python");
    assert_eq!(&lines[3..5], &["backup", "file-organizer"]);
    assert_eq!(lines.last(), Some(&"Total: 2"));
}

#[test]
fn version_flag_prints_version() {
    let tmp = TempDir::new().unwrap();
    let out = run_in(tmp.path(), &["--version"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let version = stdout.trim().strip_prefix("portfolio-index ").unwrap();
    assert!(
        version.starts_with("dev@") || version == env!("CARGO_PKG_VERSION"),
        "unexpected version: {version}"
    );
}

#[test]
fn gen_config_output_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let out = run_in(tmp.path(), &["gen-config"]);
    assert!(out.status.success());

    fs::write(tmp.path().join(config::CONFIG_FILE_NAME), &out.stdout).unwrap();
    assert!(config::load_config(tmp.path()).is_ok());
}

#[test]
fn invalid_config_is_fatal() {
    let tmp = alpha_repo();
    fs::write(tmp.path().join(config::CONFIG_FILE_NAME), "[cards]\nbogus = 1\n").unwrap();

    let out = run_in(tmp.path(), &[]);
    assert!(!out.status.success());
    assert!(!tmp.path().join("_site").exists());
}
