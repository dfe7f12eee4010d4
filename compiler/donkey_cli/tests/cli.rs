//! End-to-end tests for the `donkey` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run_donkey(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_donkey"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("run donkey")
}

fn write_source(dir: &Path, name: &str, source: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, source).expect("write source file");
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn lex_prints_token_dump() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "main.dk", "if x\n");

    let output = run_donkey(&["lex", "main.dk"], dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(
        stdout(&output),
        "Tokens for 'main.dk' (4 tokens):\n\
         \x20 ReservedKeyword \"if\" @ 0..2\n\
         \x20 Whitespace \" \" @ 2..3\n\
         \x20 Identifier \"x\" @ 3..4\n\
         \x20 Whitespace \"\\n\" @ 4..5\n"
    );
}

#[test]
fn lex_keeps_argument_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "b.dk", "x");
    write_source(dir.path(), "a.dk", "y");

    let output = run_donkey(&["lex", "b.dk", "a.dk"], dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    let out = stdout(&output);
    let b = out.find("Tokens for 'b.dk'").expect("dump for b.dk");
    let a = out.find("Tokens for 'a.dk'").expect("dump for a.dk");
    assert!(b < a, "dumps out of order: {out}");
}

#[test]
fn lex_applies_fix_flag() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "n.dk", "-12.5");

    let faithful = run_donkey(&["lex", "n.dk"], dir.path());
    assert!(stdout(&faithful).contains("  Punctuation \"-\" @ 0..1\n"));

    let fixed = run_donkey(
        &["lex", "n.dk", "--fix=signed-numbers-before-punctuation"],
        dir.path(),
    );
    assert!(fixed.status.success(), "process failed: {fixed:?}");
    assert!(stdout(&fixed).contains("  Number \"-12.5\" @ 0..5\n"));
}

#[test]
fn lex_missing_file_fails_but_prints_others() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "ok.dk", "x");

    let output = run_donkey(&["lex", "missing.dk", "ok.dk"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot find file 'missing.dk'"));
    assert!(stdout(&output).contains("Tokens for 'ok.dk'"));
}

#[test]
fn lex_without_paths_prints_usage() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_donkey(&["lex"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage: donkey lex"));
}

#[test]
fn unknown_fix_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "main.dk", "x");

    let output = run_donkey(&["lex", "main.dk", "--fix=everything"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown correction 'everything'"));
}

#[test]
fn html_renders_spans() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "main.dk", "if a<b\n");

    let output = run_donkey(&["html", "main.dk", "--class=code"], dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(
        stdout(&output),
        "<div class=\"code\"><pre><span class=\"kr\">if</span><span class=\"w\"> </span>\
         <span class=\"n\">a</span>&lt;<span class=\"n\">b</span><span class=\"w\">\n</span>\
         </pre></div>\n"
    );
}

#[test]
fn html_without_pre() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_source(dir.path(), "main.dk", "x");

    let output = run_donkey(&["html", "main.dk", "--no-pre"], dir.path());

    assert_eq!(
        stdout(&output),
        "<div class=\"highlight\"><span class=\"n\">x</span></div>\n"
    );
}

#[test]
fn html_requires_exactly_one_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_donkey(&["html", "a.dk", "b.dk"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage: donkey html"));
}

#[test]
fn lexers_lists_donkey() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_donkey(&["lexers"], dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    let out = stdout(&output);
    assert!(out.contains("  donkey\n"));
    assert!(out.contains("  split-until-while\n"));
}

#[test]
fn version_and_help() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let version = run_donkey(&["version"], dir.path());
    assert_eq!(
        stdout(&version),
        format!("Donkey Lexer {}\n", env!("CARGO_PKG_VERSION"))
    );

    let help = run_donkey(&["--help"], dir.path());
    assert!(stdout(&help).contains("Usage: donkey <command> [options]"));
}

#[test]
fn unknown_command_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_donkey(&["frobnicate"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}
