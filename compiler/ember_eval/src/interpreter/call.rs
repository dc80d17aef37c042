//! Function application and indexing.

use ember_ir::{CallExpression, Expression, SentinelKind};
use tracing::{debug, trace};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::errors::{
    index_not_supported, not_a_function, raise, sentinel, unusable_as_hash_key,
    wrong_function_args, EvalResult, Unwind,
};
use crate::value::FunctionValue;
use crate::{Environment, Value};

impl Interpreter {
    pub(super) fn apply_function(
        &mut self,
        callee: &Value,
        arguments: Vec<Value>,
        call: &CallExpression,
    ) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(function, arguments, call),
            Value::Builtin(builtin) => {
                trace!(builtin = builtin.name, args = arguments.len(), "call builtin");
                (builtin.func)(&arguments, &self.print_handler).map_err(raise)
            }
            other => Err(raise(not_a_function(other))),
        }
    }

    /// Bind arguments in a fresh environment enclosed by the closure's own,
    /// run the body and unwrap its `return`.
    fn call_function(
        &mut self,
        function: &FunctionValue,
        arguments: Vec<Value>,
        call: &CallExpression,
    ) -> EvalResult {
        if function.arity() != arguments.len() {
            return Err(raise(wrong_function_args(function.arity(), arguments.len())));
        }

        let frame_env = Environment::enclosed(&function.env);
        for (parameter, argument) in function.literal.parameters.iter().zip(arguments) {
            if parameter.is_null() {
                return Err(sentinel(SentinelKind::Identifier));
            }
            frame_env.set(parameter.name.as_str(), argument);
        }

        let name = match call.function.as_ref() {
            Expression::Identifier(ident) => ident.name.clone(),
            _ => "<anonymous>".to_string(),
        };
        trace!(callee = %name, depth = self.call_stack.depth(), "call function");
        let frame = CallFrame {
            name,
            position: call.token.position,
        };
        if let Err(fault) = self.call_stack.push(frame) {
            self.log_call_depth_exceeded();
            return Err(fault.into());
        }

        let result = self.eval_block(&function.literal.body, &frame_env);
        self.call_stack.pop();

        match result {
            Err(Unwind::Return(value)) => Ok(value),
            other => other,
        }
    }

    #[cold]
    fn log_call_depth_exceeded(&self) {
        let innermost = self.call_stack.current_frame().map(|frame| frame.to_string());
        let recent: Vec<String> = self
            .call_stack
            .backtrace()
            .take(8)
            .map(ToString::to_string)
            .collect();
        debug!(
            depth = self.call_stack.depth(),
            innermost = ?innermost,
            recent = ?recent,
            "call depth limit reached"
        );
    }

    pub(super) fn eval_index(left: &Value, index: &Value) -> EvalResult {
        match (left, index) {
            (Value::Array(elements), Value::Integer(i)) => Ok(usize::try_from(*i)
                .ok()
                .and_then(|i| elements.get(i))
                .cloned()
                .unwrap_or(Value::Null)),
            (Value::Hash(hash), key) => match key.hash_key() {
                Some(hash_key) => Ok(hash.get(&hash_key).cloned().unwrap_or(Value::Null)),
                None => Err(raise(unusable_as_hash_key(key))),
            },
            _ => Err(raise(index_not_supported(left))),
        }
    }
}
