//! The syntax tree.
//!
//! Nodes are grouped into three families (statements, expressions and the
//! program root) that [`Node`] wraps into one type, so the evaluator and the
//! rewrite hook have a single entry point.

mod expr;
mod modify;
mod operators;
mod stmt;

use std::fmt;

pub use expr::{
    ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral,
    Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral, NullExpression,
    PrefixExpression, StringLiteral,
};
pub use modify::modify;
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{
    BlockStatement, ExpressionStatement, LetStatement, NullStatement, ReturnStatement, Statement,
};

use crate::ParseDiagnostic;

/// Root of a parsed source unit.
///
/// `errors` holds the diagnostics recorded while parsing. A program with
/// diagnostics is still a well-formed tree of the statements that did parse.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub errors: Vec<ParseDiagnostic>,
}

impl Program {
    pub fn new(statements: Vec<Statement>, errors: Vec<ParseDiagnostic>) -> Self {
        Program { statements, errors }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// Any node of the tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Program(Program),
    Statement(Statement),
    Expression(Expression),
    /// Sentinel: no program was produced.
    NullProgram,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(p) => p.fmt(f),
            Node::Statement(s) => s.fmt(f),
            Node::Expression(e) => e.fmt(f),
            Node::NullProgram => f.write_str("<null program>"),
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Node::Statement(statement)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

/// The four "nothing parsed here" placeholders.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SentinelKind {
    Statement,
    Expression,
    Program,
    Identifier,
}

impl SentinelKind {
    pub const fn name(self) -> &'static str {
        match self {
            SentinelKind::Statement => "NullStatement",
            SentinelKind::Expression => "NullExpression",
            SentinelKind::Program => "NullProgram",
            SentinelKind::Identifier => "NullIdentifier",
        }
    }
}

impl fmt::Display for SentinelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
