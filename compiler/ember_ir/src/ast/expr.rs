//! Expression nodes.
//!
//! Every node owns the token that introduced it. `Display` produces the
//! canonical textual form: fully parenthesised operators, quoted strings and
//! braced blocks, so the output lexes and parses back to the same shape.

use std::fmt;
use std::rc::Rc;

use super::operators::{BinaryOp, UnaryOp};
use super::stmt::BlockStatement;
use crate::Token;

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Array(ArrayLiteral),
    Hash(HashLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    /// Shared so function values can hold the literal without copying its body.
    Function(Rc<FunctionLiteral>),
    Call(CallExpression),
    Index(IndexExpression),
    /// Sentinel: no expression could be parsed here.
    Null(NullExpression),
}

impl Expression {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Integer(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::String(e) => &e.token,
            Expression::Array(e) => &e.token,
            Expression::Hash(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::Function(e) => &e.token,
            Expression::Call(e) => &e.token,
            Expression::Index(e) => &e.token,
            Expression::Null(e) => &e.token,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Expression::Null(_))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => e.fmt(f),
            Expression::Integer(e) => write!(f, "{}", e.value),
            Expression::Boolean(e) => write!(f, "{}", e.value),
            Expression::String(e) => write!(f, "\"{}\"", e.value),
            Expression::Array(e) => {
                f.write_str("[")?;
                write_separated(f, &e.elements)?;
                f.write_str("]")
            }
            Expression::Hash(e) => {
                f.write_str("{")?;
                for (i, (key, value)) in e.pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expression::Prefix(e) => write!(f, "({}{})", e.operator, e.right),
            Expression::Infix(e) => write!(f, "({} {} {})", e.left, e.operator, e.right),
            Expression::If(e) => {
                write!(f, "if ({}) {}", e.condition, e.consequence)?;
                if let Some(alternative) = &e.alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expression::Function(e) => e.fmt(f),
            Expression::Call(e) => {
                write!(f, "{}(", e.function)?;
                write_separated(f, &e.arguments)?;
                f.write_str(")")
            }
            Expression::Index(e) => write!(f, "({}[{}])", e.left, e.index),
            Expression::Null(_) => f.write_str("<null expression>"),
        }
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A name: variable reference, `let` target or function parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }

    /// Sentinel identifier: a name was required at `token` but none was parsed.
    pub fn null(token: Token) -> Self {
        Identifier {
            token,
            name: String::new(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("<null identifier>")
        } else {
            f.write_str(&self.name)
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

/// `{key: value, ...}`. Pairs stay in source order so the rendering matches
/// what was written; evaluation does not depend on the order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: UnaryOp,
    pub right: Box<Expression>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: BinaryOp,
    pub right: Box<Expression>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpression {
    /// The `(` token.
    pub token: Token,
    /// Identifier or function literal being called.
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IndexExpression {
    /// The `[` token.
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

/// Sentinel expression, holding the token where parsing gave up.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NullExpression {
    pub token: Token,
}
