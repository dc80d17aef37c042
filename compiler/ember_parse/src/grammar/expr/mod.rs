//! Expression parsing.
//!
//! A Pratt parser: a prefix rule chosen by the current token produces the
//! left operand, then infix rules chosen by the peek token extend it for as
//! long as the peek token binds tighter than the caller's precedence.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expression`), precedence table, binary operators
//! - `primary.rs`: Literals, identifiers, prefix operators, grouping, `if`, `fn`
//! - `postfix.rs`: Call and index

mod postfix;
mod primary;

use ember_ir::{BinaryOp, Expression, InfixExpression, ParseDiagnostic, TokenKind};
use ember_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseResult, Parser};

/// How deeply expressions may nest before the parser gives up on them.
///
/// Counts nested sub-expressions as well as operator and call chains, so
/// every tree the parser returns stays shallow enough to display, evaluate
/// and drop on an ordinary thread stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Binding power, weakest first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Binding power of `kind` in infix position.
    pub const fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

impl Parser<'_> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Nesting beyond [`MAX_NESTING_DEPTH`] is a diagnostic. Below the limit,
    /// `ensure_sufficient_stack` keeps the recursion off the end of the stack.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let entry = self.nesting;
        let result = self
            .enter_nesting()
            .and_then(|()| ensure_sufficient_stack(|| self.parse_expression_inner(precedence)));
        self.nesting = entry;
        result
    }

    /// One more level of tree depth. Released when the enclosing
    /// `parse_expression` returns.
    fn enter_nesting(&mut self) -> ParseResult<()> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING_DEPTH {
            return Err(ParseDiagnostic::nested_too_deeply(
                self.cursor.current().clone(),
                MAX_NESTING_DEPTH,
            ));
        }
        Ok(())
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        trace!(token = ?self.cursor.current(), ?precedence, "parse_expression");
        let mut left = self.parse_prefix()?;

        while !self.cursor.check_peek(TokenKind::Semicolon)
            && precedence < Precedence::of(self.cursor.peek_kind())
        {
            let kind = self.cursor.peek_kind();
            self.cursor.advance();
            self.enter_nesting()?;
            left = match kind {
                TokenKind::LParen => self.parse_call(left)?,
                TokenKind::LBracket => self.parse_index(left)?,
                _ => self.parse_infix(left)?,
            };
        }

        Ok(left)
    }

    /// Binary operator with the cursor on the operator. Left associative: the
    /// right operand is parsed at the operator's own precedence.
    fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();
        let precedence = Precedence::of(token.kind);
        let Some(operator) = BinaryOp::from_token(token.kind) else {
            return Err(ParseDiagnostic::no_prefix_rule(token));
        };

        self.cursor.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }
}
