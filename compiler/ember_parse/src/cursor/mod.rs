//! Token cursor for navigating the token stream.
//!
//! The parser follows the current/peek convention: `current()` is the token
//! being looked at, `peek()` the one after it.

use ember_ir::{Position, Span, Token, TokenKind, TokenList};

/// Returned when reading past the end of a list that lacks its `Eof`.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    literal: String::new(),
    span: Span::DUMMY,
    position: Position::START,
};

/// Cursor over a [`TokenList`].
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Current index into the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos + 1).unwrap_or(&EOF)
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Move to the next token. Never moves past `Eof`.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Net `{`/`}` nesting of the tokens in `start..=end`.
    pub fn brace_depth(&self, start: usize, end: usize) -> i64 {
        let end = end.min(self.tokens.len().saturating_sub(1));
        self.tokens
            .get(start..=end)
            .unwrap_or_default()
            .iter()
            .map(|t| match t.kind {
                TokenKind::LBrace => 1,
                TokenKind::RBrace => -1,
                _ => 0,
            })
            .sum()
    }
}
