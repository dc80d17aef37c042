//! Command handlers for the `ember` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! [`read_file`] and the result reporting live here.

use std::io::Write;

use ember_eval::{EvalFault, Value};
use ember_ir::Program;

use crate::CliError;

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source_dump};
pub use explain::explain_error;
pub use repl::{repl, run_repl, PROMPT};
pub use run::{run_file, run_source};

/// How a command ended. Maps onto the process exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Parse diagnostics or a runtime error value.
    Failure,
    /// The interpreter hit an internal fault.
    Fault,
}

impl Outcome {
    pub const fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
            Outcome::Fault => 2,
        }
    }
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))
}

/// Print every diagnostic of `program`, one per line.
pub(crate) fn report_diagnostics(program: &Program, err: &mut impl Write) -> Result<(), CliError> {
    for diagnostic in &program.errors {
        writeln!(err, "{diagnostic}")?;
    }
    Ok(())
}

/// Print the outcome of an evaluation: the value on `out`, a runtime error
/// or fault on `err`.
pub(crate) fn report_result(
    result: Result<Value, EvalFault>,
    out: &mut impl Write,
    err: &mut impl Write,
    show_null: bool,
) -> Result<Outcome, CliError> {
    match result {
        Ok(Value::Error(message)) => {
            writeln!(err, "error: {message}")?;
            Ok(Outcome::Failure)
        }
        Ok(Value::Null) if !show_null => Ok(Outcome::Success),
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(Outcome::Success)
        }
        Err(fault) => {
            writeln!(err, "internal error: {fault}")?;
            Ok(Outcome::Fault)
        }
    }
}
