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

fn backtracking_index() -> serde_json::Value {
    serde_json::json!({
        "x(1)": [["b", ""], ["c", ""]],
        "b(2)": [],
        "b(1)": [],
        "c(1)": [["b", "<=1"]]
    })
}

#[test]
fn test_resolve_prints_sorted_solution() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, backtracking_index());

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout("b(1)\nc(1)\nx(1)\n")
        .stderr(predicate::str::contains("Resolved"));
}

#[test]
fn test_resolve_dot_output() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, backtracking_index());

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--dot", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph G {"))
        .stdout(predicate::str::contains("x -> c;"))
        .stdout(predicate::str::contains("b[label = \"b(1)\"];"));
}

#[test]
fn test_resolve_tree_output() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, backtracking_index());

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--tree", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("└── c(1)"));
}

#[test]
fn test_resolve_trace_disabled_by_config() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, backtracking_index());
    let config = tmp.path().join("depsolve.toml");
    fs::write(&config, "[trace]\nenabled = false\n").unwrap();

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--dot", "--index"])
        .arg(&index)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph").not())
        .stderr(predicate::str::contains("trace output is disabled"));
}

#[test]
fn test_resolve_order_from_flag_and_config() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(
        &tmp,
        serde_json::json!({ "x(1)": [["b", ""]], "b(9)": [], "b(10)": [] }),
    );

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("b(10)"));

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--order", "lexical", "--index"])
        .arg(&index)
        .assert()
        .success()
        .stdout(predicate::str::contains("b(9)"));

    let config = tmp.path().join("depsolve.toml");
    fs::write(&config, "[resolve]\nversion-order = \"lexical\"\n").unwrap();
    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--index"])
        .arg(&index)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("b(9)"));
}

#[test]
fn test_resolve_unresolvable_fails() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(
        &tmp,
        serde_json::json!({
            "x(1)": [["b", ">=2"], ["c", ""]],
            "b(2)": [],
            "b(1)": [],
            "c(1)": [["b", "<=1"]]
        }),
    );

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--index"])
        .arg(&index)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unresolvable_conflict"));
}

#[test]
fn test_resolve_rejects_bad_distkey() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, backtracking_index());

    depsolve_cmd(&tmp)
        .args(["resolve", "x-1", "--index"])
        .arg(&index)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid distribution key"));
}

#[test]
fn test_resolve_missing_index_file() {
    let tmp = TempDir::new().unwrap();

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--index"])
        .arg(tmp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_resolve_invalid_order() {
    let tmp = TempDir::new().unwrap();
    let index = write_index(&tmp, backtracking_index());

    depsolve_cmd(&tmp)
        .args(["resolve", "x(1)", "--order", "random", "--index"])
        .arg(&index)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown version order"));
}
