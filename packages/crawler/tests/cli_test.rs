//! Command-line tests for the crawler binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn crawler() -> Command {
    let mut cmd = Command::cargo_bin("bookquest-crawler").unwrap();
    cmd.env_remove("BOOKQUEST_CURATORS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_writes_spreadsheet() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tour.xlsx");

    crawler()
        .arg(fixture_dir("tour2022"))
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 3"))
        .stdout(predicate::str::contains("Saved to:"));

    assert!(std::fs::read(&out).unwrap().starts_with(b"PK"));
}

#[test]
fn test_cli_tour_2023() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tour2023.xlsx");

    crawler()
        .arg(fixture_dir("tour2023"))
        .arg(&out)
        .args(["--tour", "2023", "--curators", "devga,Sotofa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Without curator: 1"));

    assert!(out.exists());
}

#[test]
fn test_cli_rejects_url() {
    let dir = tempfile::tempdir().unwrap();

    crawler()
        .arg("https://www.livelib.ru/game/bookquest")
        .arg(dir.path().join("tour.xlsx"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Crawler supports only saved HTML files",
        ));
}

#[test]
fn test_cli_rejects_missing_path() {
    let dir = tempfile::tempdir().unwrap();

    crawler()
        .arg(dir.path().join("missing"))
        .arg(dir.path().join("tour.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path or URL does not exist"));
}

#[test]
fn test_cli_rejects_missing_path_with_glob_chars() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tour.xlsx");

    crawler()
        .arg(dir.path().join("pages?"))
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Path or URL does not exist"));

    assert!(!out.exists());
}

#[test]
fn test_cli_rejects_unknown_tour() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tour.xlsx");

    crawler()
        .arg(fixture_dir("tour2022"))
        .arg(&out)
        .args(["-t", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tour: '2024'"));

    assert!(!out.exists());
}

#[test]
fn test_cli_curators_from_env() {
    let dir = tempfile::tempdir().unwrap();

    crawler()
        .env("BOOKQUEST_CURATORS", "nobody")
        .arg(fixture_dir("tour2022"))
        .arg(dir.path().join("tour.xlsx"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Without curator: 3"));
}
