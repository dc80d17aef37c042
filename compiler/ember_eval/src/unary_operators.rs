//! Unary operator implementations for the evaluator.

use ember_ir::UnaryOp;

use crate::errors::{negation_overflow, unknown_prefix_operator};
use crate::Value;

/// Evaluate `op operand`. `Err` carries a language error message.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, String> {
    if operand.is_signal() {
        return Err(unknown_prefix_operator(op, operand));
    }
    match (op, operand) {
        // `!` negates truthiness, so it accepts every kind.
        (UnaryOp::Not, _) => Ok(Value::Boolean(!operand.is_truthy())),
        (UnaryOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| negation_overflow(*n)),
        (UnaryOp::Neg, _) => Err(unknown_prefix_operator(op, operand)),
    }
}
