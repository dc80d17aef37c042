//! Expression evaluation.

use std::rc::Rc;

use ember_ir::{Expression, HashLiteral, Identifier, SentinelKind};
use ember_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    identifier_not_found, raise, sentinel, unusable_as_hash_key, EvalResult, Unwind,
};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::{FunctionValue, HashValue};
use crate::{builtins, Environment, Value};

impl Interpreter {
    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested expressions and deep
    /// (but bounded) recursion do not overflow the native stack.
    pub(crate) fn eval_expression(
        &mut self,
        expression: &Expression,
        env: &Environment,
    ) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expression, env))
    }

    fn eval_expression_inner(
        &mut self,
        expression: &Expression,
        env: &Environment,
    ) -> EvalResult {
        match expression {
            Expression::Identifier(ident) => Self::eval_identifier(ident, env),
            Expression::Integer(lit) => Ok(Value::Integer(lit.value)),
            Expression::Boolean(lit) => Ok(Value::Boolean(lit.value)),
            Expression::String(lit) => Ok(Value::string(&lit.value)),
            Expression::Array(lit) => {
                let elements = self.eval_expressions(&lit.elements, env)?;
                Ok(Value::Array(Rc::new(elements)))
            }
            Expression::Hash(lit) => self.eval_hash_literal(lit, env),
            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right, env)?;
                evaluate_unary(prefix.operator, &right).map_err(raise)
            }
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left, env)?;
                let right = self.eval_expression(&infix.right, env)?;
                evaluate_binary(&left, infix.operator, &right).map_err(raise)
            }
            Expression::If(conditional) => {
                let condition = self.eval_expression(&conditional.condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(&conditional.consequence, env)
                } else if let Some(alternative) = &conditional.alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Value::Null)
                }
            }
            Expression::Function(literal) => Ok(Value::Function(Rc::new(FunctionValue {
                literal: Rc::clone(literal),
                env: env.clone(),
            }))),
            Expression::Call(call) => {
                let callee = self.eval_expression(&call.function, env)?;
                let arguments = self.eval_expressions(&call.arguments, env)?;
                self.apply_function(&callee, arguments, call)
            }
            Expression::Index(index) => {
                let left = self.eval_expression(&index.left, env)?;
                let key = self.eval_expression(&index.index, env)?;
                Self::eval_index(&left, &key)
            }
            Expression::Null(_) => Err(sentinel(SentinelKind::Expression)),
        }
    }

    /// Environment chain first, then builtins.
    fn eval_identifier(ident: &Identifier, env: &Environment) -> EvalResult {
        if ident.is_null() {
            return Err(sentinel(SentinelKind::Identifier));
        }
        if let Some(value) = env.get(&ident.name) {
            return Ok(value);
        }
        match builtins::lookup(&ident.name) {
            Some(builtin) => Ok(Value::Builtin(builtin)),
            None => Err(raise(identifier_not_found(&ident.name))),
        }
    }

    /// Left to right; the first error wins.
    fn eval_expressions(
        &mut self,
        expressions: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Value>, Unwind> {
        expressions
            .iter()
            .map(|e| self.eval_expression(e, env))
            .collect()
    }

    fn eval_hash_literal(&mut self, literal: &HashLiteral, env: &Environment) -> EvalResult {
        let mut hash = HashValue::new();
        for (key_expr, value_expr) in &literal.pairs {
            let key = self.eval_expression(key_expr, env)?;
            let Some(hash_key) = key.hash_key() else {
                return Err(raise(unusable_as_hash_key(&key)));
            };
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(hash_key, key, value);
        }
        Ok(Value::Hash(Rc::new(hash)))
    }
}
