//! The `run` command: evaluate a whole file.

use std::io::{self, Write};

use ember_eval::{stdout_handler, Environment, SharedPrintHandler};
use ember_parse::parse_source;
use tracing::debug;

use super::{read_file, report_diagnostics, report_result, Outcome};
use crate::{CliError, RunOptions};

/// Run a file, printing to the process's stdout and stderr.
pub fn run_file(path: &str, options: &RunOptions) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    debug!(path, bytes = source.len(), "run file");
    run_source(
        &source,
        options,
        stdout_handler(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

/// Parse and evaluate `source` against a fresh global environment.
///
/// A program with diagnostics is not evaluated. The final value is printed
/// to `out`, a runtime error or fault to `err`.
pub fn run_source(
    source: &str,
    options: &RunOptions,
    print_handler: SharedPrintHandler,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CliError> {
    let program = parse_source(source);
    if program.has_errors() {
        debug!(count = program.errors.len(), "refusing to evaluate");
        report_diagnostics(&program, err)?;
        return Ok(Outcome::Failure);
    }

    let mut interpreter = options.interpreter(print_handler);
    let env = Environment::new();
    let result = interpreter.eval_program(&program, &env);
    report_result(result, out, err, true)
}
