//! Shared helpers for the CLI tests.

use ember_eval::{buffer_handler, SharedPrintHandler};
use emberc::commands::Outcome;
use emberc::RunOptions;

/// Captured streams of one command invocation.
pub(crate) struct Captured {
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
    pub printed: String,
}

pub(crate) fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub(crate) fn run(source: &str) -> Captured {
    run_with(source, &RunOptions::default())
}

pub(crate) fn run_with(source: &str, options: &RunOptions) -> Captured {
    let handler: SharedPrintHandler = buffer_handler();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome =
        emberc::commands::run_source(source, options, handler.clone(), &mut out, &mut err)
            .unwrap();
    Captured {
        outcome,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
        printed: handler.get_output(),
    }
}

pub(crate) fn repl(input: &str) -> Captured {
    let handler = buffer_handler();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = emberc::commands::run_repl(
        input.as_bytes(),
        &mut out,
        &mut err,
        &RunOptions::default(),
        handler.clone(),
    )
    .unwrap();
    Captured {
        outcome,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
        printed: handler.get_output(),
    }
}
