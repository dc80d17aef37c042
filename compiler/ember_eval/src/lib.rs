//! Ember Eval - tree-walking interpreter for Ember.
//!
//! # Architecture
//!
//! - `value`: runtime values, hash keys and closures
//! - `environment`: name bindings chained through enclosing scopes
//! - `interpreter`: evaluation of programs, statements and expressions
//! - `operators` / `unary_operators`: operator semantics
//! - `builtins`: `len`, `first`, `last`, `rest`, `push`, `puts`
//! - `diagnostics`: call-stack tracking and the recursion limit
//! - `print_handler`: where `puts` writes
//! - `errors`: error messages and [`EvalFault`]
//!
//! Runtime errors are ordinary [`Value::Error`] values. `Err` from the public
//! entry points is reserved for [`EvalFault`]s.

pub mod builtins;
pub mod diagnostics;
mod environment;
pub mod errors;
mod interpreter;
pub mod operators;
mod print_handler;
pub mod unary_operators;
mod value;

use ember_ir::Node;

pub use diagnostics::{CallFrame, CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::EvalFault;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Builtin, BuiltinFn, FunctionValue, HashKey, HashValue, Value};

/// Evaluate `node` in `env` with a default interpreter (stdout output,
/// default call-depth limit).
pub fn eval(node: &Node, env: &Environment) -> Result<Value, EvalFault> {
    Interpreter::new().eval(node, env)
}

#[cfg(test)]
mod tests;
