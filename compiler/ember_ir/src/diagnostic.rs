//! Recoverable parse diagnostics.
//!
//! A diagnostic never stops the parser: it is appended to
//! [`Program::errors`](crate::Program) and parsing resumes at the next
//! statement.

use std::fmt;

use crate::{Position, Span, Token, TokenKind};

/// Error codes for parse diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: lexical problems surfaced through the parser
/// - E1xxx: grammar errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Character that is not part of the language
    E0002,
    /// A specific token was required but another was found
    E1001,
    /// No expression can start with the found token
    E1002,
    /// Integer literal does not fit in 64 bits
    E1003,
    /// Expression nested past the parser's depth limit
    E1004,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    /// One-line explanation, used by `ember explain`.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a string literal is missing its closing quote",
            ErrorCode::E0002 => "the source contains a character the language does not use",
            ErrorCode::E1001 => "the parser required a specific token and found another",
            ErrorCode::E1002 => "an expression was expected but the token cannot start one",
            ErrorCode::E1003 => "an integer literal does not fit in a signed 64-bit integer",
            ErrorCode::E1004 => "an expression is nested more deeply than the parser allows",
        }
    }

    /// Parse a code such as `"E1001"` (case-insensitive).
    pub fn from_str_code(code: &str) -> Option<ErrorCode> {
        let code = code.to_ascii_uppercase();
        [
            ErrorCode::E0001,
            ErrorCode::E0002,
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E1004,
        ]
        .into_iter()
        .find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// `expected` was required; the diagnostic's token is what was found.
    UnexpectedToken { expected: TokenKind },
    /// The found token has no prefix rule, so no expression can start here.
    NoPrefixRule,
    /// The found `INT` token does not fit in an `i64`.
    InvalidInteger,
    /// Nesting reached `limit` levels at the found token.
    NestedTooDeeply { limit: usize },
}

/// A recoverable parse error: what was expected, what was found, and where.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseDiagnostic {
    pub kind: DiagnosticKind,
    /// The offending token.
    pub found: Token,
}

impl ParseDiagnostic {
    pub fn unexpected_token(expected: TokenKind, found: Token) -> Self {
        ParseDiagnostic {
            kind: DiagnosticKind::UnexpectedToken { expected },
            found,
        }
    }

    pub fn no_prefix_rule(found: Token) -> Self {
        ParseDiagnostic {
            kind: DiagnosticKind::NoPrefixRule,
            found,
        }
    }

    pub fn invalid_integer(found: Token) -> Self {
        ParseDiagnostic {
            kind: DiagnosticKind::InvalidInteger,
            found,
        }
    }

    pub fn nested_too_deeply(found: Token, limit: usize) -> Self {
        ParseDiagnostic {
            kind: DiagnosticKind::NestedTooDeeply { limit },
            found,
        }
    }

    /// The token kind the parser required, if a specific one was required.
    pub fn expected(&self) -> Option<TokenKind> {
        match self.kind {
            DiagnosticKind::UnexpectedToken { expected } => Some(expected),
            DiagnosticKind::NoPrefixRule
            | DiagnosticKind::InvalidInteger
            | DiagnosticKind::NestedTooDeeply { .. } => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        // Illegal tokens are lexical problems whichever rule tripped over them.
        if self.found.is(TokenKind::Illegal) {
            return if self.found.literal.starts_with('"') {
                ErrorCode::E0001
            } else {
                ErrorCode::E0002
            };
        }
        match self.kind {
            DiagnosticKind::UnexpectedToken { .. } => ErrorCode::E1001,
            DiagnosticKind::NoPrefixRule => ErrorCode::E1002,
            DiagnosticKind::InvalidInteger => ErrorCode::E1003,
            DiagnosticKind::NestedTooDeeply { .. } => ErrorCode::E1004,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.found.position
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.found.span
    }

    /// Human-readable message without location.
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { expected } => format!(
                "expected next token to be {expected}, got {} instead",
                self.found.kind
            ),
            DiagnosticKind::NoPrefixRule => {
                if self.found.is(TokenKind::Illegal) {
                    format!("illegal token {:?}", self.found.literal)
                } else {
                    format!("no prefix parse function for {} found", self.found.kind)
                }
            }
            DiagnosticKind::InvalidInteger => {
                format!("could not parse {:?} as integer", self.found.literal)
            }
            DiagnosticKind::NestedTooDeeply { limit } => {
                format!("expression nested more than {limit} levels deep")
            }
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.position(), self.code(), self.message())
    }
}
