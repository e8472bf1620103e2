//! Tests for the demo binary.

use std::{fs, process::Command};

use tempfile::tempdir;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ra_lexer"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn ra_lexer")
}

#[test]
fn cli_renders_both_examples() {
    let output = run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("INTERSECT"));
    assert!(stdout.contains("'Цикл ГСЕ дисциплін вибору'"));
    assert_eq!(stdout.matches("| Token").count(), 2);
}

#[test]
fn cli_analyzes_file_argument() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("statement.ra");
    fs::write(&path, "R_1 := S_2 JOIN T_3;\n").expect("write statement");

    let output = run(&[path.to_str().expect("utf-8 path")]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("| Token").count(), 1);
    assert!(stdout.contains("walrus"));
    assert!(stdout.contains("JOIN"));
    assert!(stdout.contains("semicolon"));
    assert!(!stdout.contains("INTERSECT"));
}

#[test]
fn cli_reports_missing_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing.ra");

    let output = run(&[path.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read"),
        "missing file should be reported; stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_rejects_extra_arguments() {
    let output = run(&["a.ra", "b.ra"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
