use emberc::commands::{read_file, Outcome};
use emberc::{CliError, RunOptions};
use pretty_assertions::assert_eq;

use crate::common::{fixture, run, run_with};

#[test]
fn prints_final_value() {
    let result = run("let a = 5; a * 2");
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.stdout, "10\n");
    assert_eq!(result.stderr, "");
}

#[test]
fn prints_null_for_binding_only_programs() {
    let result = run("let a = 5;");
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.stdout, "null\n");
}

#[test]
fn puts_goes_through_print_handler() {
    let result = run("puts(\"hi\"); 1");
    assert_eq!(result.printed, "hi\n");
    assert_eq!(result.stdout, "1\n");
}

#[test]
fn runtime_error_exits_with_failure() {
    let result = run("5 + true");
    assert_eq!(result.outcome, Outcome::Failure);
    assert_eq!(result.outcome.exit_code(), 1);
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "error: type mismatch: INTEGER + BOOLEAN\n");
}

#[test]
fn diagnostics_prevent_evaluation() {
    let result = run("puts(\"never\"); let = 5; let y = 1;");
    assert_eq!(result.outcome, Outcome::Failure);
    assert_eq!(result.printed, "");
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr.lines().count(), 1);
    assert!(result.stderr.contains("[E1001]"), "{}", result.stderr);
    assert!(result.stderr.starts_with("1:20:"), "{}", result.stderr);
}

#[test]
fn recursion_limit_is_a_fault() {
    let options = RunOptions {
        max_depth: Some(25),
    };
    let result = run_with("let f = fn(x) { f(x + 1) }; f(0)", &options);
    assert_eq!(result.outcome, Outcome::Fault);
    assert_eq!(result.outcome.exit_code(), 2);
    assert_eq!(
        result.stderr,
        "internal error: maximum call depth of 25 exceeded\n"
    );
}

#[test]
fn closures_fixture() {
    let source = read_file(&fixture("closures.em")).unwrap();
    let result = run(&source);
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.printed, "adding\n");
    assert_eq!(result.stdout, "5\n");
}

#[test]
fn runtime_error_fixture() {
    let source = read_file(&fixture("runtime_error.em")).unwrap();
    let result = run(&source);
    assert_eq!(result.outcome, Outcome::Failure);
    assert_eq!(result.stderr, "error: type mismatch: INTEGER + BOOLEAN\n");
}

#[test]
fn missing_file() {
    let path = fixture("does_not_exist.em");
    let err = read_file(&path).unwrap_err();
    assert!(matches!(err, CliError::NotFound { .. }));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
}
