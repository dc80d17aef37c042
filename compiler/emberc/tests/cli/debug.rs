use emberc::commands::{explain_error, lex_source, parse_source_dump, Outcome};
use emberc::CliError;
use pretty_assertions::assert_eq;

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn lex_dump() {
    let mut out = Vec::new();
    let outcome = lex_source("let x = 5;", &mut out).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        text(out),
        "Tokens (6):\n  \
         Let(\"let\") @ 1:1\n  \
         Ident(\"x\") @ 1:5\n  \
         Assign(\"=\") @ 1:7\n  \
         Int(\"5\") @ 1:9\n  \
         Semicolon(\";\") @ 1:10\n  \
         Eof(\"\") @ 1:11\n"
    );
}

#[test]
fn parse_dump() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = parse_source_dump("let x = 1 + 2 * 3; x", &mut out, &mut err).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        text(out),
        "Statements: 2\n  let x = (1 + (2 * 3));\n  x;\n"
    );
    assert!(err.is_empty());
}

#[test]
fn parse_dump_with_errors() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = parse_source_dump("let x 5; let y = 2;", &mut out, &mut err).unwrap();
    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(text(out), "Statements: 2\n  <null statement>\n  let y = 2;\n");
    let err = text(err);
    assert!(err.starts_with("Errors: 1\n"), "{err}");
    assert!(err.contains("[E1001]"), "{err}");
}

#[test]
fn explain_known_code() {
    let mut out = Vec::new();
    let outcome = explain_error("e1003", &mut out).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        text(out),
        "E1003: an integer literal does not fit in a signed 64-bit integer\n"
    );
}

#[test]
fn parse_dump_of_runaway_nesting() {
    let source = format!("{}1", "-".repeat(100_000));
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = parse_source_dump(&source, &mut out, &mut err).unwrap();
    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(text(out), "Statements: 1\n  <null statement>\n");
    assert!(text(err).contains("[E1004]"));
}

#[test]
fn explain_unknown_code() {
    let mut out = Vec::new();
    let err = explain_error("E9999", &mut out).unwrap_err();
    assert!(matches!(err, CliError::UnknownErrorCode { .. }));
    assert!(out.is_empty());
}
