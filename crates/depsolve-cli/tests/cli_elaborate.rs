use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn depsolve_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("depsolve").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn write_index(tmp: &TempDir, index: serde_json::Value) -> PathBuf {
    let path = tmp.path().join("index.json");
    fs::write(&path, index.to_string()).unwrap();
    path
}

#[test]
fn test_elaborate_reports_missing_packages() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(
        &tmp,
        serde_json::json!({
            "pip-accel(0.9.10)": [["coloredlogs", "==0.4.3"], ["pip", ">=1.3"]],
            "coloredlogs(0.4.3)": []
        }),
    );

    depsolve_cmd(&tmp)
        .args(["elaborate", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages without version information:\n  pip\n"))
        .stdout(predicate::str::contains("  pip-accel(0.9.10)"));
}

#[test]
fn test_elaborate_complete_index() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, serde_json::json!({ "x(1)": [["b", ""]], "b(1)": [] }));

    depsolve_cmd(&tmp)
        .args(["elaborate", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("All referenced packages have version information."));
}

#[test]
fn test_elaborate_malformed_index() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("index.json");
    fs::write(&path, r#"{"x1": []}"#).unwrap();

    depsolve_cmd(&tmp)
        .args(["elaborate", "--index"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency index error"));
}

#[test]
fn test_index_from_environment() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, serde_json::json!({ "x(1)": [] }));

    depsolve_cmd(&tmp)
        .env("DEPSOLVE_INDEX", &index)
        .args(["elaborate"])
        .assert()
        .success();
}

#[test]
fn test_why_prints_chain() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(
        &tmp,
        serde_json::json!({
            "x(1)": [["b", ""], ["c", ""]],
            "b(1)": [["e", ""]],
            "c(1)": [["d", ""]],
            "d(1)": [["e", "==1"]],
            "e(1)": [],
            "e(2)": []
        }),
    );

    depsolve_cmd(&tmp)
        .args(["why", "x(1)", "e", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to e:\nx(1)\n  b(1)\n    e(1)\n"))
        .stdout(predicate::str::contains("Depended on by:"));
}

#[test]
fn test_why_unknown_package() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, serde_json::json!({ "x(1)": [] }));

    depsolve_cmd(&tmp)
        .args(["why", "x(1)", "nothing", "--index"])
        .arg(&index)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not part of the resolution"));
}
