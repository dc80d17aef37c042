//! Grammar rules.
//!
//! Every rule starts with the cursor on its first token and leaves it on its
//! last token.

mod expr;

use ember_ir::{
    BlockStatement, ExpressionStatement, Identifier, LetStatement, ReturnStatement, Statement,
    TokenKind,
};

pub use self::expr::{Precedence, MAX_NESTING_DEPTH};
use crate::{ParseResult, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    /// `let IDENT = expression ;`
    fn parse_let_statement(&mut self) -> ParseResult<LetStatement> {
        let token = self.cursor.current().clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cursor.current().clone());

        self.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.statement_terminator()?;
        Ok(LetStatement { token, name, value })
    }

    /// `return expression ;`
    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let token = self.cursor.current().clone();
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.statement_terminator()?;
        Ok(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        if self.cursor.check_peek(TokenKind::Semicolon) {
            self.cursor.advance();
        }
        Ok(ExpressionStatement::new(expression))
    }

    /// The `;` closing a `let` or `return`, which may be left out before `}`
    /// or the end of input.
    fn statement_terminator(&mut self) -> ParseResult<()> {
        match self.cursor.peek_kind() {
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => self.expect_peek(TokenKind::Semicolon),
        }
    }

    /// `{ statement* }`, starting on the `{`.
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let token = self.cursor.current().clone();
        let mut statements = Vec::new();
        self.cursor.advance();

        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ember_ir::ParseDiagnostic::unexpected_token(
                    TokenKind::RBrace,
                    self.cursor.current().clone(),
                ));
            }
            statements.push(self.parse_statement()?);
            self.cursor.advance();
        }

        Ok(BlockStatement { token, statements })
    }
}
