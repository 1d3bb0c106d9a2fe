use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::cursor::EOF_CHAR;
use crate::text::Span;

/// Lexical category of a token.
///
/// Single-character tokens carry the character itself, so `+` is
/// `Punct('+')` and the end of the stream is `Punct('\0')`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TokenKind {
    Int,
    Name,
    Punct(char),
}

impl TokenKind {
    /// The end-of-stream token kind. Its code is 0.
    pub const EOF: TokenKind = TokenKind::Punct(EOF_CHAR);

    /// Codes of the multi-character kinds are the first values above any
    /// Unicode scalar, so they never collide with a punctuation code.
    pub const INT_CODE: u32 = char::MAX as u32 + 1;
    pub const NAME_CODE: u32 = char::MAX as u32 + 2;

    /// Numeric code of the kind. For punctuation this is the character code.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            TokenKind::Int => Self::INT_CODE,
            TokenKind::Name => Self::NAME_CODE,
            TokenKind::Punct(c) => u32::from(c),
        }
    }

    #[must_use]
    pub fn is_eof(self) -> bool {
        self == Self::EOF
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "INT"),
            TokenKind::Name => write!(f, "NAME"),
            TokenKind::Punct(EOF_CHAR) => write!(f, "EOF"),
            TokenKind::Punct(c) => write!(f, "{c:?}"),
        }
    }
}

/// Extra data associated with a token. Which variant is present is
/// determined by the token kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Payload<'src> {
    #[default]
    None,
    Integer(u64),
    /// Identifier text, borrowed from the source
    Name(&'src str),
}

/// One lexical unit. Borrows the source it was lexed from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<'src> {
    kind: TokenKind,
    span: Span,
    payload: Payload<'src>,
}

impl<'src> Token<'src> {
    pub(crate) fn int(span: Span, value: u64) -> Self {
        Token {
            kind: TokenKind::Int,
            span,
            payload: Payload::Integer(value),
        }
    }

    pub(crate) fn name(span: Span, text: &'src str) -> Self {
        Token {
            kind: TokenKind::Name,
            span,
            payload: Payload::Name(text),
        }
    }

    pub(crate) fn punct(span: Span, c: char) -> Self {
        Token {
            kind: TokenKind::Punct(c),
            span,
            payload: Payload::None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    #[must_use]
    pub fn payload(&self) -> Payload<'src> {
        self.payload
    }

    /// Value of an integer literal, `None` for other kinds.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        match self.payload {
            Payload::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Text of an identifier, `None` for other kinds.
    #[must_use]
    pub fn name_text(&self) -> Option<&'src str> {
        match self.payload {
            Payload::Name(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}
