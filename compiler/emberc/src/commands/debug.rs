//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use ember_lexer::lex;
use ember_parse::parse_source;

use super::{read_file, report_diagnostics, Outcome};
use crate::CliError;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    lex_source(&source, &mut io::stdout())
}

pub fn lex_source(source: &str, out: &mut impl Write) -> Result<Outcome, CliError> {
    let tokens = lex(source);
    writeln!(out, "Tokens ({}):", tokens.len())?;
    for token in tokens.iter() {
        writeln!(out, "  {token:?}")?;
    }
    Ok(Outcome::Success)
}

/// Parse a file and display each statement in canonical form.
pub fn parse_file(path: &str) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    parse_source_dump(&source, &mut io::stdout(), &mut io::stderr())
}

pub fn parse_source_dump(
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CliError> {
    let program = parse_source(source);
    writeln!(out, "Statements: {}", program.statements.len())?;
    for statement in &program.statements {
        writeln!(out, "  {statement}")?;
    }
    if program.has_errors() {
        writeln!(err, "Errors: {}", program.errors.len())?;
        report_diagnostics(&program, err)?;
        return Ok(Outcome::Failure);
    }
    Ok(Outcome::Success)
}
