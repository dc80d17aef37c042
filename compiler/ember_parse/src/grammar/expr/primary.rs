//! Prefix rules: everything that can start an expression.

use std::rc::Rc;

use ember_ir::{
    ArrayLiteral, BooleanLiteral, Expression, FunctionLiteral, HashLiteral, Identifier,
    IfExpression, IntegerLiteral, ParseDiagnostic, PrefixExpression, StringLiteral, TokenKind,
    UnaryOp,
};

use super::Precedence;
use crate::{ParseResult, Parser};

impl Parser<'_> {
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();
        match token.kind {
            TokenKind::Ident => Ok(Expression::Identifier(Identifier::new(token))),
            TokenKind::Int => match token.literal.parse::<i64>() {
                Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
                Err(_) => Err(ParseDiagnostic::invalid_integer(token)),
            },
            TokenKind::String => {
                let value = token.literal.clone();
                Ok(Expression::String(StringLiteral { token, value }))
            }
            TokenKind::True | TokenKind::False => {
                let value = token.is(TokenKind::True);
                Ok(Expression::Boolean(BooleanLiteral { token, value }))
            }
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_operator(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Ok(Expression::Array(ArrayLiteral { token, elements }))
            }
            TokenKind::LBrace => self.parse_hash_literal(),
            _ => Err(ParseDiagnostic::no_prefix_rule(token)),
        }
    }

    /// `!x` / `-x`
    fn parse_prefix_operator(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();
        let Some(operator) = UnaryOp::from_token(token.kind) else {
            return Err(ParseDiagnostic::no_prefix_rule(token));
        };
        self.cursor.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// `( expression )`. Grouping leaves no node of its own.
    fn parse_grouped(&mut self) -> ParseResult<Expression> {
        self.cursor.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expression)
    }

    /// `if ( condition ) { ... } else { ... }`
    fn parse_if(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();

        self.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.cursor.check_peek(TokenKind::Else) {
            self.cursor.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `fn ( params ) { body }`
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::Function(Rc::new(FunctionLiteral {
            token,
            parameters,
            body,
        })))
    }

    /// Comma-separated identifiers, starting on `(` and ending on `)`.
    fn parse_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.cursor.check_peek(TokenKind::RParen) {
            self.cursor.advance();
            return Ok(parameters);
        }

        self.cursor.advance();
        self.expect_current(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cursor.current().clone()));

        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            self.expect_current(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cursor.current().clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// `{ key: value, ... }`
    fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.current().clone();
        let mut pairs = Vec::new();

        while !self.cursor.check_peek(TokenKind::RBrace) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.cursor.check_peek(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }
        self.expect_peek(TokenKind::RBrace)?;

        Ok(Expression::Hash(HashLiteral { token, pairs }))
    }
}
