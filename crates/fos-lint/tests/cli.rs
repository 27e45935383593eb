//! Command line tests
//!
//! Runs the `fos-lint` binary on documents written to a temporary
//! directory and checks output and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CLEAN: &str = r#"{
    "elements": [{
        "name": "button",
        "children": [{"type": "text", "value": "Save"}]
    }]
}"#;

const BROKEN: &str = r#"{
    "source": "Broken.jsx",
    "elements": [{
        "name": "div",
        "attributes": [
            {"type": "attribute", "name": "role", "value": {"type": "string", "value": "button"}},
            {"type": "attribute", "name": "onClick", "value": {"type": "function"}}
        ]
    }]
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn fos_lint(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fos-lint"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_clean_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "clean.json", CLEAN);

    let output = fos_lint(&[&file]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 problem(s) in 1 file(s)"));
}

#[test]
fn test_diagnostics_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write(dir.path(), "clean.json", CLEAN);
    let broken = write(dir.path(), "broken.json", BROKEN);

    let output = fos_lint(&[&clean, &broken]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Broken.jsx: <div> control-has-associated-label:"));
    assert!(stdout.contains("Broken.jsx: <div> onclick-has-focus:"));
    assert!(stdout.contains("2 problem(s) in 2 file(s)"));
}

#[test]
fn test_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write(dir.path(), "broken.json", BROKEN);

    let output = fos_lint(&[Path::new("--format"), Path::new("json"), &broken]);
    assert_eq!(output.status.code(), Some(1));

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diagnostics = reports[0]["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[1]["rule"], "onclick-has-focus");
    assert_eq!(diagnostics[1]["target"]["kind"], "openingElement");
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write(dir.path(), "broken.json", BROKEN);
    let config = write(
        dir.path(),
        "lint.json",
        r#"{
            "onclick-has-focus": {"enabled": false},
            "control-has-associated-label": {"options": {"ignoreRoles": ["button"]}}
        }"#,
    );

    let output = fos_lint(&[Path::new("--config"), &config, &broken]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_errors_exit_two() {
    let dir = tempfile::tempdir().unwrap();
    let invalid = write(dir.path(), "invalid.json", "{ not json");
    let output = fos_lint(&[&invalid]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load"));

    let missing = dir.path().join("missing.json");
    assert_eq!(fos_lint(&[&missing]).status.code(), Some(2));

    let broken = write(dir.path(), "broken.json", BROKEN);
    let config = write(dir.path(), "lint.json", r#"{"no-such-rule": {}}"#);
    assert_eq!(fos_lint(&[Path::new("--config"), &config, &broken]).status.code(), Some(2));
}
