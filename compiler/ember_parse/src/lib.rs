//! Recursive descent parser for Ember, with Pratt parsing for expressions.
//!
//! Parsing is total: every input produces a [`Program`]. A statement that
//! fails to parse is reported once in [`Program::errors`] and stands in the
//! statement list as a [`NullStatement`] at the offending token; the parser
//! then resumes at the next statement.

mod cursor;
mod grammar;
mod recovery;

use ember_ir::{
    Expression, NullExpression, NullStatement, ParseDiagnostic, Program, Statement, TokenKind,
    TokenList,
};
use tracing::{debug, trace};

use crate::cursor::Cursor;

pub use crate::grammar::{Precedence, MAX_NESTING_DEPTH};

/// Result type for the grammar rules.
pub type ParseResult<T> = Result<T, ParseDiagnostic>;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Current expression nesting, see [`MAX_NESTING_DEPTH`].
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            nesting: 0,
        }
    }

    /// Parse statements until `Eof`.
    pub fn parse_program(mut self) -> Program {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            match self.parse_statement() {
                Ok(statement) => {
                    statements.push(statement);
                    self.cursor.advance();
                }
                Err(diagnostic) => {
                    trace!(%diagnostic, "statement replaced by sentinel");
                    statements.push(Statement::Null(NullStatement {
                        token: diagnostic.found.clone(),
                    }));
                    errors.push(diagnostic);
                    recovery::synchronize(&mut self.cursor, start);
                }
            }
        }

        debug!(
            statements = statements.len(),
            errors = errors.len(),
            "parsed program"
        );
        Program::new(statements, errors)
    }

    /// Parse a single expression spanning the whole input.
    ///
    /// On failure the result is a [`NullExpression`] at the offending token.
    pub fn parse_standalone_expression(mut self) -> (Expression, Vec<ParseDiagnostic>) {
        let result = self
            .parse_expression(Precedence::Lowest)
            .and_then(|expression| {
                if self.cursor.check_peek(TokenKind::Semicolon) {
                    self.cursor.advance();
                }
                self.expect_peek(TokenKind::Eof)?;
                Ok(expression)
            });
        match result {
            Ok(expression) => (expression, Vec::new()),
            Err(diagnostic) => {
                let token = diagnostic.found.clone();
                (Expression::Null(NullExpression { token }), vec![diagnostic])
            }
        }
    }

    /// Require the peek token to be `kind` and move onto it.
    ///
    /// On mismatch the cursor still moves onto the peek token, so the
    /// offending token is always current when an error surfaces.
    fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        let found = self.cursor.peek();
        self.cursor.advance();
        if found.is(kind) {
            Ok(())
        } else {
            Err(ParseDiagnostic::unexpected_token(kind, found.clone()))
        }
    }

    /// Require the current token to be `kind`.
    fn expect_current(&self, kind: TokenKind) -> ParseResult<()> {
        let found = self.cursor.current();
        if found.is(kind) {
            Ok(())
        } else {
            Err(ParseDiagnostic::unexpected_token(kind, found.clone()))
        }
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList) -> Program {
    Parser::new(tokens).parse_program()
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> Program {
    let tokens = ember_lexer::lex(source);
    parse(&tokens)
}

/// Lex and parse source text that should hold exactly one expression.
pub fn parse_expression_source(source: &str) -> (Expression, Vec<ParseDiagnostic>) {
    let tokens = ember_lexer::lex(source);
    Parser::new(&tokens).parse_standalone_expression()
}

#[cfg(test)]
mod tests;
