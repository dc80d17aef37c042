//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use ember_eval::{stdout_handler, Environment, SharedPrintHandler};
use ember_parse::parse_source;

use super::{report_diagnostics, report_result, Outcome};
use crate::{CliError, RunOptions};

pub const PROMPT: &str = ">> ";

/// Run the REPL on the process's stdin.
pub fn repl(options: &RunOptions) -> Result<Outcome, CliError> {
    println!("Ember {}", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    run_repl(
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        options,
        stdout_handler(),
    )
}

/// Evaluate one top-level unit per input line against a persistent global
/// environment until `input` is exhausted.
///
/// Diagnostics, runtime errors and faults are reported and the loop goes on.
/// `null` results are not echoed.
pub fn run_repl(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    options: &RunOptions,
    print_handler: SharedPrintHandler,
) -> Result<Outcome, CliError> {
    let env = Environment::new();
    let mut interpreter = options.interpreter(print_handler);

    write!(out, "{PROMPT}")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let program = parse_source(&line);
            if program.has_errors() {
                report_diagnostics(&program, err)?;
            } else {
                let result = interpreter.eval_program(&program, &env);
                report_result(result, out, err, false)?;
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(Outcome::Success)
}
