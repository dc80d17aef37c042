//! Centralized error constructors for the evaluator.
//!
//! Runtime language errors are plain messages that become [`Value::Error`]
//! at the public boundary. Keeping every message here means their wording is
//! maintained in one place.
//!
//! [`EvalFault`] is the other kind of failure: an internal problem that is
//! not a language error at all.

use ember_ir::{BinaryOp, SentinelKind, UnaryOp};

use crate::Value;

/// An internal evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalFault {
    /// A "nothing parsed here" placeholder reached the evaluator.
    #[error("cannot evaluate a {kind} node")]
    Sentinel { kind: SentinelKind },
    /// The call stack grew past the configured limit.
    #[error("maximum call depth of {depth} exceeded")]
    RecursionLimit { depth: usize },
}

/// Non-local exits of the evaluator, threaded through `Result` with `?`.
pub(crate) enum Unwind {
    Return(Value),
    Error(String),
    Fault(EvalFault),
}

impl From<EvalFault> for Unwind {
    fn from(fault: EvalFault) -> Self {
        Unwind::Fault(fault)
    }
}

pub(crate) type EvalResult = Result<Value, Unwind>;

/// Raise a language error.
#[inline]
pub(crate) fn raise(message: String) -> Unwind {
    Unwind::Error(message)
}

#[cold]
pub(crate) fn sentinel(kind: SentinelKind) -> Unwind {
    Unwind::Fault(EvalFault::Sentinel { kind })
}

// Operator Errors

#[cold]
pub fn type_mismatch(left: &Value, op: BinaryOp, right: &Value) -> String {
    format!(
        "type mismatch: {} {op} {}",
        left.type_name(),
        right.type_name()
    )
}

#[cold]
pub fn unknown_infix_operator(left: &Value, op: BinaryOp, right: &Value) -> String {
    format!(
        "unknown operator: {} {op} {}",
        left.type_name(),
        right.type_name()
    )
}

#[cold]
pub fn unknown_prefix_operator(op: UnaryOp, right: &Value) -> String {
    format!("unknown operator: {op}{}", right.type_name())
}

#[cold]
pub fn integer_overflow(left: i64, op: BinaryOp, right: i64) -> String {
    format!("integer overflow: {left} {op} {right}")
}

#[cold]
pub fn negation_overflow(operand: i64) -> String {
    format!("integer overflow: -{operand}")
}

#[cold]
pub fn division_by_zero() -> String {
    "division by zero".to_string()
}

// Name, Call and Index Errors

#[cold]
pub fn identifier_not_found(name: &str) -> String {
    format!("identifier not found: {name}")
}

#[cold]
pub fn not_a_function(callee: &Value) -> String {
    format!("not a function: {}", callee.type_name())
}

#[cold]
pub fn wrong_function_args(want: usize, got: usize) -> String {
    format!("wrong number of arguments: want={want}, got={got}")
}

#[cold]
pub fn unusable_as_hash_key(key: &Value) -> String {
    format!("unusable as hash key: {}", key.type_name())
}

#[cold]
pub fn index_not_supported(left: &Value) -> String {
    format!("index operator not supported: {}", left.type_name())
}

// Builtin Errors

#[cold]
pub fn builtin_arg_count(got: usize, want: usize) -> String {
    format!("wrong number of arguments. got={got}, want={want}")
}

#[cold]
pub fn builtin_expected_array(builtin: &str, got: &Value) -> String {
    format!(
        "argument to `{builtin}` must be ARRAY, got {}",
        got.type_name()
    )
}

#[cold]
pub fn builtin_unsupported_arg(builtin: &str, got: &Value) -> String {
    format!(
        "argument to `{builtin}` not supported, got {}",
        got.type_name()
    )
}
