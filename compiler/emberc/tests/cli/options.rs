use ember_eval::DEFAULT_MAX_CALL_DEPTH;
use emberc::{CliError, RunOptions};
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn default_depth() {
    assert_eq!(
        RunOptions::default().max_depth,
        Some(DEFAULT_MAX_CALL_DEPTH)
    );
    assert_eq!(RunOptions::with_env_depth(None).unwrap(), RunOptions::default());
}

#[test]
fn env_supplies_depth() {
    assert_eq!(
        RunOptions::with_env_depth(Some("64")).unwrap().max_depth,
        Some(64)
    );
    assert_eq!(RunOptions::with_env_depth(Some("0")).unwrap().max_depth, None);
    assert!(matches!(
        RunOptions::with_env_depth(Some("deep")),
        Err(CliError::InvalidMaxDepth { .. })
    ));
}

#[test]
fn flag_overrides_env() {
    let base = RunOptions::with_env_depth(Some("64")).unwrap();
    let (options, rest) = base
        .parse_args(&args(&["main.em", "--max-depth=10"]))
        .unwrap();
    assert_eq!(options.max_depth, Some(10));
    assert_eq!(rest, args(&["main.em"]));
}

#[test]
fn bad_flags() {
    let err = RunOptions::default()
        .parse_args(&args(&["--max-depth=-1"]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid max depth '-1': expected a non-negative integer"
    );

    let err = RunOptions::default()
        .parse_args(&args(&["--verbose"]))
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown option '--verbose'");
}
