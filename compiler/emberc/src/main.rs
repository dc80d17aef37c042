//! Ember CLI.

use std::path::Path;

use emberc::commands::{explain_error, lex_file, parse_file, repl, run_file, Outcome};
use emberc::{init_tracing, CliError, RunOptions};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let code = match dispatch(&args) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {err}");
            Outcome::Failure.exit_code()
        }
    };
    std::process::exit(code);
}

fn dispatch(args: &[String]) -> Result<Outcome, CliError> {
    let Some(command) = args.get(1) else {
        return repl(&RunOptions::from_env()?);
    };

    match command.as_str() {
        "run" => run_command(&args[2..]),
        "repl" => {
            let (options, rest) = RunOptions::from_env()?.parse_args(&args[2..])?;
            if let Some(extra) = rest.first() {
                eprintln!("error: unexpected argument '{extra}'");
                eprintln!("Usage: ember repl [--max-depth=<n>]");
                return Ok(Outcome::Failure);
            }
            repl(&options)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: ember lex <file.em>");
                return Ok(Outcome::Failure);
            };
            lex_file(path)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: ember parse <file.em>");
                return Ok(Outcome::Failure);
            };
            parse_file(path)
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: ember explain <ERROR_CODE>");
                eprintln!("Example: ember explain E1001");
                return Ok(Outcome::Failure);
            };
            explain_error(code, &mut std::io::stdout())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Outcome::Success)
        }
        "version" | "--version" | "-V" => {
            println!("Ember {}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Success)
        }
        _ if command.starts_with("--max-depth=") || is_source_file(command) => {
            run_command(&args[1..])
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Ok(Outcome::Failure)
        }
    }
}

fn run_command(args: &[String]) -> Result<Outcome, CliError> {
    let (options, files) = RunOptions::from_env()?.parse_args(args)?;
    let [path] = files.as_slice() else {
        eprintln!("error: expected exactly one file path");
        eprintln!("Usage: ember run <file.em> [--max-depth=<n>]");
        return Ok(Outcome::Failure);
    };
    run_file(path, &options)
}

fn is_source_file(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("em"))
}

fn print_usage() {
    println!("Ember interpreter");
    println!();
    println!("Usage: ember <command> [options]");
    println!();
    println!("Commands:");
    println!("  <file.em>            Run a program (same as `run`)");
    println!("  run <file.em>        Run a program and print its final value");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  lex <file.em>        Tokenize and display tokens");
    println!("  parse <file.em>      Parse and display statements");
    println!("  explain <code>       Explain a diagnostic code (e.g., E1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run/REPL options:");
    println!("  --max-depth=<n>      Maximum call depth (0 = unlimited)");
    println!();
    println!("Environment:");
    println!("  EMBER_MAX_DEPTH      Default for --max-depth");
    println!("  RUST_LOG             Enable tracing output on stderr");
    println!();
    println!("Exit codes: 0 success, 1 diagnostics or runtime error, 2 internal fault");
}
