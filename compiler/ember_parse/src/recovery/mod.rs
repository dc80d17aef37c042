//! Error recovery for the parser.
//!
//! After a statement fails, the parser skips to the end of that statement so
//! the rest of the program can still be parsed. "End" is judged at the brace
//! depth where the statement began, so a `;` inside a function body does not
//! end a broken top-level `let`.

use ember_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

/// A set of token kinds using a bitset for O(1) membership tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind as u8))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u64 << kind as u8) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Keywords that can only begin a statement.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::Return);

/// Skip the rest of a failed statement.
///
/// The cursor must sit on the offending token. On return it sits on the first
/// token of the next statement: just past a `;` at the statement's depth,
/// on a `let`/`return` at that depth, or on `Eof`.
pub fn synchronize(cursor: &mut Cursor<'_>, statement_start: usize) {
    let offending = cursor.position();
    let mut depth = cursor.brace_depth(statement_start, offending);

    // The failed statement's own terminator: the next statement starts right after it.
    if depth <= 0 && cursor.check(TokenKind::Semicolon) {
        cursor.advance();
        trace!(from = offending, to = cursor.position(), "synchronized");
        return;
    }

    // A statement keyword after the start is the next statement, not garbage.
    let keep_offending =
        offending > statement_start && depth <= 0 && STATEMENT_START.contains(cursor.current_kind());
    if !keep_offending {
        cursor.advance();
    }

    loop {
        let kind = cursor.current_kind();
        match kind {
            TokenKind::Eof => break,
            TokenKind::Semicolon if depth <= 0 => {
                cursor.advance();
                break;
            }
            _ if depth <= 0 && STATEMENT_START.contains(kind) => break,
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        cursor.advance();
    }

    trace!(from = offending, to = cursor.position(), "synchronized");
}
