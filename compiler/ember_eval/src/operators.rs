//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value kinds are fixed, so pattern
//! matching gives exhaustiveness checking without trait objects.

use ember_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator,
};
use crate::Value;

/// Evaluate `left op right`. `Err` carries a language error message.
pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value) -> Result<Value, String> {
    if left.is_signal() || right.is_signal() {
        return Err(unknown_infix_operator(left, op, right));
    }
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_int_binary(*a, op, *b),
        (Value::String(a), Value::String(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(&joined))
            }
            BinaryOp::Eq => Ok(Value::Boolean(a == b)),
            BinaryOp::NotEq => Ok(Value::Boolean(a != b)),
            _ => Err(unknown_infix_operator(left, op, right)),
        },
        _ => match op {
            BinaryOp::Eq => Ok(Value::Boolean(left.language_eq(right))),
            BinaryOp::NotEq => Ok(Value::Boolean(!left.language_eq(right))),
            _ if left.type_name() != right.type_name() => Err(type_mismatch(left, op, right)),
            _ => Err(unknown_infix_operator(left, op, right)),
        },
    }
}

/// Integer arithmetic is checked: overflow and division by zero are errors.
fn eval_int_binary(a: i64, op: BinaryOp, b: i64) -> Result<Value, String> {
    let checked = |result: Option<i64>| {
        result
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow(a, op, b))
    };
    match op {
        BinaryOp::Add => checked(a.checked_add(b)),
        BinaryOp::Sub => checked(a.checked_sub(b)),
        BinaryOp::Mul => checked(a.checked_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked(a.checked_div(b))
            }
        }
        BinaryOp::Lt => Ok(Value::Boolean(a < b)),
        BinaryOp::Gt => Ok(Value::Boolean(a > b)),
        BinaryOp::Eq => Ok(Value::Boolean(a == b)),
        BinaryOp::NotEq => Ok(Value::Boolean(a != b)),
    }
}
