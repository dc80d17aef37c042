//! Ember IR - tokens, source locations and the syntax tree.
//!
//! This crate holds the data that flows between the pipeline stages:
//! - [`Span`] / [`Position`] for source locations
//! - [`Token`], [`TokenKind`] and [`TokenList`] for lexer output
//! - [`ParseDiagnostic`] for recoverable parse errors
//! - the AST ([`Program`], [`Statement`], [`Expression`], [`Node`])
//! - [`modify`], the single-level rewrite hook over the AST
//!
//! # Design Philosophy
//!
//! - **Immutable trees**: nodes are plain owned values; rewriting builds new
//!   nodes and may share unchanged subtrees (`Rc<FunctionLiteral>`).
//! - **Every node keeps its token**: diagnostics and the evaluator can always
//!   point back at the source text that introduced a node.
//! - **Sentinels are explicit**: `Null*` variants mark recovery points and are
//!   never confused with the language's own `null` value.

pub mod ast;
mod diagnostic;
mod span;
mod token;

pub use ast::{
    modify, ArrayLiteral, BinaryOp, BlockStatement, BooleanLiteral, CallExpression, Expression,
    ExpressionStatement, FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexExpression,
    InfixExpression, IntegerLiteral, LetStatement, Node, NullExpression, NullStatement,
    PrefixExpression, Program, ReturnStatement, SentinelKind, Statement, StringLiteral, UnaryOp,
};
pub use diagnostic::{DiagnosticKind, ErrorCode, ParseDiagnostic};
pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenList};
