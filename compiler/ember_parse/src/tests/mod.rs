//! Parser tests.
//!
//! - `statements`: `let`, `return`, expression statements and blocks
//! - `expressions`: literals, operators and precedence, calls, indexing
//! - `errors`: diagnostics and recovery


use ember_ir::Program;
use pretty_assertions::assert_eq;

use crate::parse_source;

/// Parse `source`, asserting it produced no diagnostics.
fn parse_ok(source: &str) -> Program {
    let program = parse_source(source);
    let messages: Vec<String> = program.errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages, Vec::<String>::new(), "unexpected diagnostics for {source:?}");
    program
}

/// Canonical rendering of a source text that must parse cleanly.
fn render(source: &str) -> String {
    parse_ok(source).to_string()
}
