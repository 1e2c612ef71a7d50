//! CLI exit codes and JSON output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("my-template.dart.template"), "class MyTemplate {}\n").unwrap();
    fs::write(dir.path().join("app.dart"), "// import components here\n// bind components here\n").unwrap();
    fs::write(
        dir.path().join("scaffold.json"),
        r#"{"targets": [{"path": "app.dart", "insertions": [
            {"anchor": "// bind components here", "lines": ["bind({{title}}Component);"]}
        ]}]}"#,
    )
    .unwrap();
    dir
}

fn scaffold() -> Command {
    Command::cargo_bin("component-scaffold").unwrap()
}

#[test]
fn test_words_and_quoted_phrase() {
    let dir = project();
    scaffold()
        .arg("-C")
        .arg(dir.path())
        .args(["note", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"title_concat\": \"NoteCard\""));

    assert_eq!(fs::read_to_string(dir.path().join("note-card.dart")).unwrap(), "class NoteCard {}\n");

    scaffold().arg("-C").arg(dir.path()).arg("search box").assert().success();
    assert!(dir.path().join("search-box.css").exists());
    let app = fs::read_to_string(dir.path().join("app.dart")).unwrap();
    assert!(app.contains("bind(NoteCardComponent);"));
    assert!(app.contains("bind(SearchBoxComponent);"));
}

#[test]
fn test_missing_template_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    scaffold()
        .arg("--dir")
        .arg(dir.path())
        .arg("widget")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"success\":false"))
        .stdout(predicate::str::contains("my-template.dart.template"));
    assert!(!dir.path().join("widget.dart").exists());
}

#[test]
fn test_unsafe_name_exits_two() {
    let dir = project();
    scaffold()
        .arg("-C")
        .arg(dir.path())
        .arg("a/b")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("file_safe"));
}

#[test]
fn test_name_matching_patch_target_exits_one() {
    let dir = project();
    scaffold()
        .arg("-C")
        .arg(dir.path())
        .arg("app")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("also a patch target"));
    assert_eq!(
        fs::read_to_string(dir.path().join("app.dart")).unwrap(),
        "// import components here\n// bind components here\n"
    );
    assert!(!dir.path().join("app.html").exists());
}

#[test]
fn test_once_flag_with_interleaved_names() {
    let dir = project();
    for name in ["alpha", "beta", "alpha"] {
        scaffold().arg("-C").arg(dir.path()).args(["--once", name]).assert().success();
    }
    let app = fs::read_to_string(dir.path().join("app.dart")).unwrap();
    assert_eq!(app.matches("bind(AlphaComponent);").count(), 1);
    assert_eq!(app.matches("bind(BetaComponent);").count(), 1);
}

#[test]
fn test_missing_name_is_usage_error() {
    scaffold().assert().failure();
}

#[test]
fn test_once_and_dry_run_flags() {
    let dir = project();
    for _ in 0..2 {
        scaffold().arg("-C").arg(dir.path()).args(["--once", "pin"]).assert().success();
    }
    let app = fs::read_to_string(dir.path().join("app.dart")).unwrap();
    assert_eq!(app.matches("bind(PinComponent);").count(), 1);

    scaffold()
        .arg("-C")
        .arg(dir.path())
        .args(["--dry-run", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dry_run\": true"));
    assert!(!dir.path().join("ghost.dart").exists());
}
