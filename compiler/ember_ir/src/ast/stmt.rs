//! Statement nodes.

use std::fmt;

use super::expr::{Expression, Identifier};
use crate::Token;

/// Statement variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
    /// Sentinel: no statement could be parsed here.
    Null(NullStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
            Statement::Block(s) => &s.token,
            Statement::Null(s) => &s.token,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Statement::Null(_))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "let {} = {};", s.name, s.value),
            Statement::Return(s) => write!(f, "return {};", s.value),
            Statement::Expression(s) => write!(f, "{};", s.expression),
            Statement::Block(s) => s.fmt(f),
            Statement::Null(_) => f.write_str("<null statement>"),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

/// `return <value>;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expression,
}

/// An expression evaluated for its value. The token is the expression's
/// first token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl ExpressionStatement {
    pub fn new(expression: Expression) -> Self {
        ExpressionStatement {
            token: expression.token().clone(),
            expression,
        }
    }
}

/// `{ ... }` body of an `if` branch or a function.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{")?;
        for statement in &self.statements {
            write!(f, " {statement}")?;
        }
        f.write_str(" }")
    }
}

/// Sentinel statement, holding the token where parsing gave up.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NullStatement {
    pub token: Token,
}
