//! Integration tests for the command-line interface.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn fixture_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let root = temp_dir.path().join("service");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("Cargo.toml"), "[package]\nname = \"service\"\n").unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(root.join("src/util.rs"), "").unwrap();
    (temp_dir, root)
}

#[test]
fn test_analyze_writes_context_documents() {
    let (_temp_dir, root) = fixture_project();

    cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing project structure"))
        .stdout(predicate::str::contains("Created .claude directory"))
        .stdout(predicate::str::contains("Analysis complete! Context saved to"));

    let context = root.join(".claude/context");
    let overview = fs::read_to_string(context.join("project-overview.md")).unwrap();
    assert!(overview.contains("- **Project Types:** rust\n"));
    assert!(overview.contains("- `cargo build`"));
    assert!(context.join("task-tracker.md").exists());
}

#[test]
fn test_second_run_reports_updates() {
    let (_temp_dir, root) = fixture_project();

    cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(&root)
        .assert()
        .success();

    cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(&root)
        .arg("--update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .claude directory").not())
        .stdout(predicate::str::contains("Updated existing project overview"))
        .stdout(predicate::str::contains("Updated existing task tracker"));

    assert!(root.join(".claude/context/project-overview.md.bak").exists());
}

#[test]
fn test_verbose_prints_summary() {
    let (_temp_dir, root) = fixture_project();

    cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(&root)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Types: rust"))
        .stdout(predicate::str::contains("Total Files: 3"))
        .stdout(predicate::str::contains("rust: 2"));
}

#[test]
fn test_json_output_is_machine_readable() {
    let (_temp_dir, root) = fixture_project();

    let out = cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(&root)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(json["analysis"]["tags"], serde_json::json!(["rust"]));
    assert_eq!(json["analysis"]["structure"]["total_files"], 3);
    assert_eq!(
        json["analysis"]["structure"]["languages"],
        serde_json::json!([["rust", 2]])
    );
    assert_eq!(json["outcome"]["overview"], "created");
    assert_eq!(json["created_metadata_dir"], true);
}

#[test]
fn test_missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(temp_dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error during analysis"));
}

#[test]
fn test_io_error_is_reported_once() {
    let (_temp_dir, root) = fixture_project();
    // A plain file where the metadata directory should go
    fs::write(root.join(".claude"), "").unwrap();

    let out = cargo_bin_cmd!("context-analyzer")
        .arg("--path")
        .arg(&root)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8_lossy(&out);
    let line = stderr
        .lines()
        .find(|line| line.contains("Error during analysis"))
        .expect("error line on stderr");
    assert!(line.contains("IO error: "));
    assert_eq!(line.matches("os error").count(), 1);
}
