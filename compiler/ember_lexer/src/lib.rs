//! Lexer for Ember using logos.
//!
//! The logos DFA recognises the raw lexemes; [`Lexer`] wraps it to attach
//! line/column positions, keyword classification and `Illegal` tokens for
//! anything the DFA rejects. Lexing never fails.

use std::collections::VecDeque;

use ember_ir::{Position, Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw lexeme from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Punctuation
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Literals. No escape processing inside strings.
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    String,
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    // Keywords are picked out of identifiers after matching.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

impl RawToken {
    fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::EqEq => TokenKind::Eq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Star => TokenKind::Asterisk,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Int => TokenKind::Int,
            RawToken::String => TokenKind::String,
            RawToken::UnterminatedString => TokenKind::Illegal,
            RawToken::Ident => TokenKind::lookup_ident(slice),
        }
    }
}

/// Streaming lexer: call [`Lexer::next_token`] until it returns `Eof`.
/// Once exhausted it keeps returning `Eof`.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// Tokens already scanned but not yet handed out (split error runs).
    pending: VecDeque<Token>,
    /// Byte offset up to which `line`/`column` have been computed.
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            pending: VecDeque::new(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The next token of the input.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pending.pop_front() {
            return token;
        }

        let Some(result) = self.raw.next() else {
            let end = self.source.len();
            let position = self.position_at(end);
            return Token::new(TokenKind::Eof, "", Span::from_range(end..end), position);
        };

        let range = self.raw.span();
        let slice = self.raw.slice();
        match result {
            Ok(RawToken::String) => {
                let position = self.position_at(range.start);
                let text = &slice[1..slice.len() - 1];
                Token::new(TokenKind::String, text, Span::from_range(range), position)
            }
            Ok(raw) => {
                let position = self.position_at(range.start);
                Token::new(raw.kind(slice), slice, Span::from_range(range), position)
            }
            Err(()) => {
                // One `Illegal` token per rejected character.
                for (i, ch) in slice.char_indices() {
                    let start = range.start + i;
                    let position = self.position_at(start);
                    self.pending.push_back(Token::new(
                        TokenKind::Illegal,
                        ch.to_string(),
                        Span::from_range(start..start + ch.len_utf8()),
                        position,
                    ));
                }
                self.next_token()
            }
        }
    }

    /// Line/column of byte `offset`, which must not precede earlier queries.
    fn position_at(&mut self, offset: usize) -> Position {
        if let Some(skipped) = self.source.get(self.offset..offset) {
            for ch in skipped.chars() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = offset;
        }
        Position::new(self.line, self.column)
    }
}

/// Lex a whole source text. The result always ends with one `Eof` token.
pub fn lex(source: &str) -> TokenList {
    let mut lexer = Lexer::new(source);
    let mut result = TokenList::with_capacity(source.len() / 2 + 1);
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        result.push(token);
        if done {
            return result;
        }
    }
}
