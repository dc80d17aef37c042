use emberc::commands::{Outcome, PROMPT};
use pretty_assertions::assert_eq;

use crate::common::repl;

#[test]
fn environment_persists_between_lines() {
    let result = repl("let x = 5;\nx * 2\n");
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.stdout, format!("{PROMPT}{PROMPT}10\n{PROMPT}\n"));
    assert_eq!(result.stderr, "");
}

#[test]
fn closures_across_lines() {
    let input = "let newAdder = fn(x) { fn(y) { x + y } };\nlet addTwo = newAdder(2);\naddTwo(3)\n";
    let result = repl(input);
    assert!(result.stdout.contains("5\n"), "{}", result.stdout);
}

#[test]
fn errors_do_not_end_the_session() {
    let result = repl("let = 1;\nfoo\n1 + 1\n");
    assert_eq!(result.outcome, Outcome::Success);
    let errors: Vec<&str> = result.stderr.lines().collect();
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors[0].contains("[E1001]"));
    assert_eq!(errors[1], "error: identifier not found: foo");
    assert!(result.stdout.contains("2\n"));
}

#[test]
fn blank_lines_are_skipped() {
    let result = repl("\n   \n");
    assert_eq!(result.stdout, format!("{PROMPT}{PROMPT}{PROMPT}\n"));
    assert_eq!(result.stderr, "");
}

#[test]
fn puts_in_repl() {
    let result = repl("puts(1, 2)\n");
    assert_eq!(result.printed, "1\n2\n");
    assert_eq!(result.stdout, format!("{PROMPT}{PROMPT}\n"));
}

#[test]
fn fault_is_reported_and_session_continues() {
    let result = repl("let f = fn() { f() };\nf()\n3\n");
    assert!(result.stderr.starts_with("internal error: maximum call depth"));
    assert!(result.stdout.contains("3\n"));
}
