//! The tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Interpreter`, public entry points, programs and statements
//! - `builder.rs`: `InterpreterBuilder`
//! - `expr.rs`: expression evaluation
//! - `call.rs`: function application and indexing
//!
//! Internally every evaluation step returns `Result<Value, Unwind>`; `return`
//! and runtime errors travel as `Err` and are propagated with `?`. They are
//! turned back into [`Value::ReturnSignal`] / [`Value::Error`] only at the
//! public boundary, where faults become `Err(EvalFault)`.

mod builder;
mod call;
mod expr;

use ember_ir::{BlockStatement, Node, Program, SentinelKind, Statement};
use tracing::debug;

pub use builder::InterpreterBuilder;

use crate::diagnostics::CallStack;
use crate::errors::{sentinel, EvalResult, Unwind};
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalFault, Value};

/// Evaluates syntax trees against environments.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// An interpreter with the default configuration (stdout, default depth limit).
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The handler `puts` writes to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Evaluate a program. A top-level `return` ends the program with its value.
    pub fn eval_program(
        &mut self,
        program: &Program,
        env: &Environment,
    ) -> Result<Value, EvalFault> {
        let result = self.run_program(program, env);
        Self::finish(result)
    }

    /// Evaluate any node.
    ///
    /// Runtime errors come back as `Ok(Value::Error(..))`. A `return` outside
    /// a program comes back as `Ok(Value::ReturnSignal(..))`.
    pub fn eval(&mut self, node: &Node, env: &Environment) -> Result<Value, EvalFault> {
        let result = match node {
            Node::Program(program) => self.run_program(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Expression(expression) => self.eval_expression(expression, env),
            Node::NullProgram => Err(sentinel(SentinelKind::Program)),
        };
        Self::finish(result)
    }

    /// Convert the internal result at the public boundary.
    fn finish(result: EvalResult) -> Result<Value, EvalFault> {
        match result {
            Ok(value) => Ok(value),
            Err(Unwind::Return(value)) => Ok(Value::ReturnSignal(Box::new(value))),
            Err(Unwind::Error(message)) => Ok(Value::Error(message)),
            Err(Unwind::Fault(fault)) => Err(fault),
        }
    }

    fn run_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        debug!(statements = program.statements.len(), "eval program");
        let mut last = Value::Null;
        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => last = value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(other) => return Err(other),
            }
        }
        Ok(last)
    }

    /// Statements of a block, in the block's own environment. Stops at the
    /// first `return` or error and passes it on.
    pub(crate) fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut last = Value::Null;
        for statement in &block.statements {
            last = self.eval_statement(statement, env)?;
        }
        Ok(last)
    }

    pub(crate) fn eval_statement(
        &mut self,
        statement: &Statement,
        env: &Environment,
    ) -> EvalResult {
        match statement {
            Statement::Let(stmt) => {
                if stmt.name.is_null() {
                    return Err(sentinel(SentinelKind::Identifier));
                }
                let value = self.eval_expression(&stmt.value, env)?;
                env.set(stmt.name.name.as_str(), value);
                Ok(Value::Null)
            }
            Statement::Return(stmt) => {
                let value = self.eval_expression(&stmt.value, env)?;
                Err(Unwind::Return(value))
            }
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression, env),
            Statement::Block(block) => self.eval_block(block, env),
            Statement::Null(_) => Err(sentinel(SentinelKind::Statement)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
