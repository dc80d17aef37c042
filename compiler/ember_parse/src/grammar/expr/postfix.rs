//! Postfix rules: call and index.

use ember_ir::{CallExpression, Expression, IndexExpression, TokenKind};

use super::Precedence;
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `function(arguments)`, with the cursor on `(`.
    pub(super) fn parse_call(&mut self, function: Expression) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// `left[index]`, with the cursor on `[`.
    pub(super) fn parse_index(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        Ok(Expression::Index(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    /// Comma-separated expressions, starting on the opening delimiter and
    /// ending on `end`.
    pub(super) fn parse_expression_list(&mut self, end: TokenKind) -> ParseResult<Vec<Expression>> {
        let mut list = Vec::new();
        if self.cursor.check_peek(end) {
            self.cursor.advance();
            return Ok(list);
        }

        self.cursor.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }
}
