//! Integration tests for end-to-end scanning.
//!
//! These tests run the file driver and the `kpl_scanner` binary against the
//! KPL sources under `tests/fixtures`.

use std::{fs, path::PathBuf, process::Command};

use kpl_scanner::{
    driver::driver::{scan_file, ScanSummary},
    lexer::{lexer::Scanner, tokens::TokenKind},
    reader::reader::Reader,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_scan_example_program() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = scan_file(fixture("example1.kpl"), &mut out, &mut err).unwrap();

    let expected = fs::read_to_string(fixture("example1.out")).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert!(err.is_empty());
    assert_eq!(
        summary,
        ScanSummary {
            tokens: 10,
            diagnostics: 0
        }
    );
}

#[test]
fn test_scan_recovers_from_every_error_kind() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = scan_file(fixture("errors.kpl"), &mut out, &mut err).unwrap();

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1-1:KW_VAR",
            "1-5:TK_IDENT(a)",
            "1-7:SB_COLON",
            "1-9:KW_INTEGER",
            "1-16:SB_SEMICOLON",
            "2-1:KW_BEGIN",
            "3-3:TK_IDENT(a)",
            "3-5:SB_ASSIGN",
            "3-8:TK_NONE",
            "3-20:TK_NONE",
            "3-22:TK_NONE",
            "3-24:TK_IDENT(y)",
            "3-25:TK_NONE",
            "3-27:TK_NONE",
        ]
    );

    let err = String::from_utf8(err).unwrap();
    let headers: Vec<&str> = err
        .lines()
        .filter(|line| line.contains(":Error: "))
        .map(|line| line.split(" (").next().unwrap_or(line))
        .collect();
    assert_eq!(
        headers,
        vec![
            "3-8:Error: NumericOverflow",
            "3-20:Error: InvalidSymbol",
            "3-22:Error: InvalidCharConstant",
            "3-25:Error: InvalidCharConstant",
            "3-27:Error: InvalidSymbol",
            "4-1:Error: UnterminatedComment",
        ]
    );
    assert_eq!(
        summary,
        ScanSummary {
            tokens: 14,
            diagnostics: 6
        }
    );
}

#[test]
fn test_independent_scanners_do_not_share_position() {
    let mut first = Scanner::new(Reader::new("a\nb".as_bytes()));
    let mut second = Scanner::new(Reader::new("c".as_bytes()));

    first.next_token();
    let b = first.next_token();
    let c = second.next_token();

    assert_eq!((b.kind, b.position.line()), (TokenKind::Identifier, 2));
    assert_eq!((c.kind, c.position.line()), (TokenKind::Identifier, 1));
}

#[test]
fn test_binary_prints_tokens() {
    let output = Command::new(env!("CARGO_BIN_EXE_kpl_scanner"))
        .arg(fixture("example1.kpl"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        fs::read_to_string(fixture("example1.out")).unwrap()
    );
}

#[test]
fn test_binary_lexical_errors_still_succeed() {
    let output = Command::new(env!("CARGO_BIN_EXE_kpl_scanner"))
        .arg(fixture("errors.kpl"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("UnterminatedComment"));
}

#[test]
fn test_binary_without_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_kpl_scanner"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "scanner: no input file.\n"
    );
}

#[test]
fn test_binary_unreadable_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_kpl_scanner"))
        .arg(fixture("does_not_exist.kpl"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .starts_with("Can't read input file!"));
}
