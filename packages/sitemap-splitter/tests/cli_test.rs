//! Tests for the `sitemap-splitter` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn copy_fixture(dir: &Path) -> std::path::PathBuf {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sitemap.xml");
    let path = dir.join("sitemap.xml");
    fs::copy(fixture, &path).expect("Failed to copy fixture");
    path
}

fn cmd() -> Command {
    Command::cargo_bin("sitemap-splitter").expect("binary should build")
}

#[test]
fn test_cli_split_writes_files() {
    let dir = tempdir().unwrap();
    let path = copy_fixture(dir.path());

    cmd()
        .args(["split", "--limit", "10"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("sitemap-3.xml"))
        .stdout(predicate::str::contains("Index saved to:"));

    assert!(dir.path().join("sitemap-1.xml").exists());
    assert!(dir.path().join("sitemap-index.xml").exists());
}

#[test]
fn test_cli_split_json_output() {
    let dir = tempdir().unwrap();
    let path = copy_fixture(dir.path());

    let output = cmd()
        .args(["split", "--limit", "10", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chunks = summary["chunks"].as_array().unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2]["url_count"], 5);
    assert_eq!(
        chunks[0]["sitemap"]["location"],
        "https://example.com/sitemap-1.xml"
    );
}

#[test]
fn test_cli_zero_limit_fails() {
    let dir = tempdir().unwrap();
    let path = copy_fixture(dir.path());

    cmd()
        .args(["split", "--limit", "0"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("limit must be greater than 0"));

    assert!(!dir.path().join("sitemap-index.xml").exists());
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempdir().unwrap();

    cmd()
        .arg("split")
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read sitemap"));
}
