//! End-to-end tests for the docschema binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary, run inside `dir` with no inherited configuration.
fn docschema(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docschema").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("DOCSCHEMA_DEFAULT_LOCALE")
        .env_remove("DOCSCHEMA_DOCUMENT_TYPE")
        .env_remove("DOCSCHEMA_COMPACT")
        .env_remove("DOCSCHEMA_MINT_STAMP");
    cmd
}

const SCRIPT: &str = r#"
document:
  type: page
  slug: home
  name: Home
  path: /
commands:
  - op: add
    kind: string
  - op: add
    kind: list
  - op: rename
    index: 0
    text: page title
  - op: rename
    index: 1
    text: gallery
  - op: add
    kind: wysiwyg
  - op: rename
    index: 2
    text: body
  - op: reorder
    from: 2
    to: 1
"#;

#[test]
fn test_apply_prints_fields_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("edits.yaml"), SCRIPT).unwrap();

    let output = docschema(dir.path())
        .args(["apply", "edits.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["type"], "page");
    assert_eq!(doc["name"], "Home");

    let fields = doc["config"]["fields"].as_object().unwrap();
    let keys: Vec<_> = fields.keys().map(String::as_str).collect();
    // serde_json without preserve_order sorts keys, so check the raw text too.
    assert_eq!(keys.len(), 3);
    let positions: Vec<_> = ["\"page_title\":", "\"body\":", "\"gallery\":"]
        .iter()
        .map(|key| stdout.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(fields["gallery"]["type"], "list");
    assert_eq!(fields["gallery"]["fields"], serde_json::json!({}));
    assert_eq!(fields["body"]["type"], "wysiwyg");
}

#[test]
fn test_apply_with_fixed_stamp_is_reproducible() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("edits.json"),
        r#"{"commands":[{"op":"add","kind":"url"},{"op":"add","kind":"url"}]}"#,
    )
    .unwrap();

    docschema(dir.path())
        .env("DOCSCHEMA_MINT_STAMP", "1700000000000")
        .args(["apply", "edits.json", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""fields":{"url_1700000000000":{"type":"url","label":{"en":""}},"url_1700000000001":{"type":"url","label":{"en":""}}}"#,
        ));
}

#[test]
fn test_config_file_sets_locale_and_type() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("docschema.toml"),
        "default_locale = \"fr\"\ndocument_type = \"article\"\ncompact = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("edits.json"),
        r#"{"commands":[{"op":"add","kind":"text"},{"op":"rename","index":0,"text":"intro"}]}"#,
    )
    .unwrap();

    docschema(dir.path())
        .args(["apply", "edits.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"type":"article""#))
        .stdout(predicate::str::contains(
            r#""intro":{"type":"text","label":{"fr":""}}"#,
        ));
}

#[test]
fn test_apply_from_document_to_output_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("edits.yaml"), SCRIPT).unwrap();

    docschema(dir.path())
        .args(["apply", "edits.yaml", "-o", "first.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    fs::write(
        dir.path().join("more.yaml"),
        "commands:\n  - op: remove\n    index: 0\n",
    )
    .unwrap();
    docschema(dir.path())
        .args(["apply", "more.yaml", "--from", "first.json", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""page_title""#).not())
        .stdout(predicate::str::contains(r#""body""#));
}

#[test]
fn test_apply_reports_failing_command() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("edits.json"),
        r#"{"commands":[{"op":"add","kind":"image"},{"op":"reorder","from":0,"to":3}]}"#,
    )
    .unwrap();

    docschema(dir.path())
        .args(["apply", "edits.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Command 1 (reorder fields) failed"))
        .stderr(predicate::str::contains("index 3 out of range for 1 fields"));
}

#[test]
fn test_apply_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("edits.json"),
        r#"{"commands":[{"op":"add","kind":"video"}]}"#,
    )
    .unwrap();

    docschema(dir.path())
        .args(["apply", "edits.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn test_check_round_trips_apply_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("edits.yaml"), SCRIPT).unwrap();
    docschema(dir.path())
        .args(["apply", "edits.yaml", "--output", "doc.json"])
        .assert()
        .success();

    docschema(dir.path())
        .args(["check", "doc.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok, page document with 3 fields (1 list)",
        ));
}

#[test]
fn test_check_fails_on_invalid_document() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("doc.json"),
        r#"{"config":{"fields":{"":{"type":"url","label":{}}}}}"#,
    )
    .unwrap();

    docschema(dir.path())
        .args(["check", "doc.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field identifier is empty"));
}

#[test]
fn test_kinds_lists_wire_names() {
    let dir = TempDir::new().unwrap();
    docschema(dir.path())
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("wysiwyg"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("edits.json"),
        r#"{"commands":[{"op":"add","kind":"string"}]}"#,
    )
    .unwrap();

    docschema(dir.path())
        .args(["--debug", "apply", "edits.json", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("operation applied"));
}
