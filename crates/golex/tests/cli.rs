//! End-to-end tests for the golex binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn golex() -> Command {
    let mut cmd = Command::cargo_bin("golex").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn workspace(source: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.go"), source).unwrap();
    dir
}

#[test]
fn prints_token_stream() {
    let dir = workspace("x = 42;\n");
    golex()
        .current_dir(dir.path())
        .arg("main.go")
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier       \"x\""))
        .stdout(predicate::str::contains("IntLiteral       \"42\""))
        .stdout(predicate::str::contains("Eof"));
}

#[test]
fn reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    golex()
        .current_dir(dir.path())
        .arg("-")
        .write_stdin("func")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Func"));
}

#[test]
fn json_output_without_eof() {
    let dir = workspace("a + 1");
    let output = golex()
        .current_dir(dir.path())
        .args(["main.go", "--format", "json", "--no-eof"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        tokens,
        serde_json::json!([
            { "kind": "Identifier", "literal": "a" },
            { "kind": "Plus", "literal": "+" },
            { "kind": "IntLiteral", "literal": "1" },
        ])
    );
}

#[test]
fn illegal_tokens_fail_the_run() {
    let dir = workspace("x ? y");
    golex()
        .current_dir(dir.path())
        .args(["main.go", "--check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 illegal token(s), 0 warning(s) found."))
        .stderr(predicate::str::contains("error: illegal token '?'"));
}

#[test]
fn config_can_allow_illegal_tokens() {
    let dir = workspace("x ? y");
    fs::write(
        dir.path().join("Golex.toml"),
        "[check]\ndeny_illegal = false\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();
    golex()
        .current_dir(dir.path())
        .arg("main.go")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Illegal\""));
}

#[test]
fn config_is_found_from_nested_input() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("pkg").join("util");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("util.go"), "x").unwrap();
    fs::write(dir.path().join("Golex.toml"), "[output]\nshow_eof = false\n").unwrap();
    golex()
        .current_dir(dir.path())
        .arg(nested.join("util.go"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Eof").not());
}

#[test]
fn invalid_config_is_an_error() {
    let dir = workspace("x");
    fs::write(dir.path().join("Golex.toml"), "[output]\nformat = \"yaml\"\n").unwrap();
    golex()
        .current_dir(dir.path())
        .arg("main.go")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'yaml'"));
}

#[test]
fn check_reports_clean_input() {
    let dir = workspace("func main() { return 0; }");
    golex()
        .current_dir(dir.path())
        .args(["main.go", "--check"])
        .assert()
        .success()
        .stdout("No illegal tokens.\n");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    golex()
        .current_dir(dir.path())
        .arg("missing.go")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read 'missing.go'"));
}

#[test]
fn quiet_hides_warnings() {
    let dir = workspace("0xZZ");
    golex()
        .current_dir(dir.path())
        .args(["main.go", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 illegal token(s), 1 warning(s) found."))
        .stderr(predicate::str::contains("warning: integer literal '0xZZ'"));
    golex()
        .current_dir(dir.path())
        .args(["main.go", "--check", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
