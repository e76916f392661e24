//! End-to-end tests of the `bialetdoc` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn bialetdoc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bialetdoc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bialetdoc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn no_command_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    let output = bialetdoc(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: bialetdoc"));
}

#[test]
fn unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    let output = bialetdoc(dir.path(), &["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}

#[test]
fn lex_lists_spans() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.wren"), "foo.if").unwrap();
    let output = bialetdoc(dir.path(), &["lex", "a.wren"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        concat!(
            "Spans for 'a.wren' (3 spans):\n",
            "  Name @ 0..3 \"foo\"\n",
            "  Operator @ 3..4 \".\"\n",
            "  Name @ 4..6 \"if\"\n",
        )
    );
}

#[test]
fn lex_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = bialetdoc(dir.path(), &["lex", "nope.wren"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file 'nope.wren'"));
}

#[test]
fn highlight_directory_in_path_order() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(src.join("b.wren"), "var b").unwrap();
    std::fs::write(src.join("a.wren"), "var a").unwrap();

    let output = bialetdoc(dir.path(), &["highlight", "--format=spans", "src"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    let a = text.find("a.wren").unwrap();
    let b = text.find("b.wren").unwrap();
    assert!(a < b, "{text}");
}

#[test]
fn highlight_reads_config_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bialetdoc.toml"),
        "suppress_warnings = []\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("a.wren"), "\"open").unwrap();

    let output = bialetdoc(dir.path(), &["highlight", "a.wren"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: a.wren: input ends inside string_double"));
}

#[test]
fn highlight_bad_format_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = bialetdoc(dir.path(), &["highlight", "--format=pdf", "a.wren"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown format 'pdf'"));
}

#[test]
fn highlight_counts_failed_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ok.wren"), "x").unwrap();
    let output = bialetdoc(dir.path(), &["highlight", "ok.wren", "gone.wren"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("<span class=\"n\">x</span>"));
    assert!(stderr(&output).contains("1 of 2 files could not be highlighted"));
}

#[test]
fn config_prints_defaults_as_json() {
    let dir = TempDir::new().unwrap();
    let output = bialetdoc(dir.path(), &["config"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["project"], "Bialet");
}

#[test]
fn config_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.toml"), "project = [").unwrap();
    let output = bialetdoc(dir.path(), &["config", "bad.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse bad.toml"));
}
