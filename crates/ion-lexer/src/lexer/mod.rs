mod cursor;
mod ion_lang;
mod options;
pub mod print;
#[cfg(test)]
mod tests;
mod token;

pub use options::{LexerOptions, OverflowPolicy};
pub use token::{Payload, Token, TokenKind};

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::buffer::StretchyBuf;
use crate::error::{ErrorInfo, ErrorKind};
use crate::text::{ByteOffset, Span};
use cursor::{Cursor, EOF_CHAR};
use ion_lang::{is_valid_name_continue, is_valid_name_start};

/// A lexing session over one source.
///
/// Holds the cursor and the most recently produced token, so any number of
/// sessions may coexist. Each call to [`next_token`](Lexer::next_token)
/// classifies the character at the cursor and consumes the longest run
/// belonging to that class:
///
/// - a decimal digit starts an integer literal;
/// - a letter or `_` starts a name, which continues over letters, digits and `_`;
/// - anything else is a single-character token.
///
/// The stream ends at the end of the source or at the first NUL, whichever
/// comes first. That position produces `TokenKind::EOF` with an empty span
/// and every later call returns the same token. The cursor never moves past
/// a NUL, so it always equals the end of the last produced token.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    source_len: u32,
    cursor: Cursor<'src>,
    options: LexerOptions,
    /// Most recently produced token
    token: Option<Token<'src>>,
    token_count: u32,
    errors: StretchyBuf<ErrorInfo>,
}

impl<'src> Lexer<'src> {
    /// Creates a session with default options.
    ///
    /// # Errors
    /// Returns [`ErrorKind::SourceTooLarge`] if the source is larger than 4GB.
    pub fn new(source: &'src str) -> Result<Self, ErrorKind> {
        Self::with_options(source, LexerOptions::default())
    }

    /// # Errors
    /// Returns [`ErrorKind::SourceTooLarge`] if the source is larger than 4GB.
    pub fn with_options(source: &'src str, options: LexerOptions) -> Result<Self, ErrorKind> {
        let Ok(source_len) = u32::try_from(source.len()) else {
            return Err(ErrorKind::SourceTooLarge);
        };

        Ok(Lexer {
            source,
            source_len,
            cursor: Cursor::new(source),
            options,
            token: None,
            token_count: 0,
            errors: StretchyBuf::new(),
        })
    }

    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[must_use]
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> ByteOffset {
        ByteOffset::new(self.source_len - self.cursor.remaining_len())
    }

    /// The unconsumed rest of the source.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.cursor.as_str()
    }

    /// The most recently produced token, `None` before the first call
    /// to [`next_token`](Lexer::next_token).
    #[must_use]
    pub fn token(&self) -> Option<Token<'src>> {
        self.token
    }

    /// Number of tokens produced so far, the end-of-stream token counted once.
    #[must_use]
    pub fn token_count(&self) -> u32 {
        self.token_count
    }

    /// True once the end-of-stream token has been produced.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.token.is_some_and(|t| t.is_eof())
    }

    #[must_use]
    pub fn errors(&self) -> &[ErrorInfo] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> StretchyBuf<ErrorInfo> {
        self.errors
    }

    /// Produces the next token and advances the cursor past it.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Some(eof) = self.token.filter(Token::is_eof) {
            return eof;
        }

        let start = self.cursor();

        let token = match self.cursor.peek() {
            c if c.is_ascii_digit() => self.lex_int(start),
            c if is_valid_name_start(c) => self.lex_name(start),
            EOF_CHAR => Token::punct(Span::new(start, start), EOF_CHAR),
            c => {
                self.cursor.advance();
                Token::punct(Span::new(start, self.cursor()), c)
            }
        };

        debug_assert!(
            token.is_eof() || self.cursor() > start,
            "Lexer made no progress"
        );

        trace!(
            idx = self.token_count,
            kind = %token.kind(),
            span = %token.span(),
            "lexed token"
        );

        self.token = Some(token);
        self.token_count = self.token_count.saturating_add(1);

        token
    }

    fn lex_int(&mut self, start: ByteOffset) -> Token<'src> {
        let mut value: u64 = 0;
        let mut overflowed = false;

        while let Some(digit) = self.cursor.peek().to_digit(10) {
            let (next, overflow) = self.options.overflow.accumulate(value, digit);
            value = next;
            overflowed |= overflow;

            self.cursor.advance();
        }

        let span = Span::new(start, self.cursor());

        if overflowed {
            warn!(
                span = %span,
                policy = %self.options.overflow,
                "integer literal overflow"
            );
            self.emit_error(ErrorKind::IntegerLiteralOverflow, start);
        }

        Token::int(span, value)
    }

    fn lex_name(&mut self, start: ByteOffset) -> Token<'src> {
        self.cursor.advance();
        self.cursor.eat_while(is_valid_name_continue);

        let span = Span::new(start, self.cursor());

        // The span is built from cursor positions, so it always lands on char boundaries
        let text = span.text(self.source).unwrap_or_default();

        Token::name(span, text)
    }

    #[inline]
    fn emit_error(&mut self, error: ErrorKind, at: ByteOffset) {
        self.errors.push(ErrorInfo::new(error, at, self.token_count));
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to and including the end-of-stream token.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// All tokens of a source, end-of-stream token included, and the
/// diagnostics recorded while lexing it.
#[derive(Debug)]
pub struct LexResult<'src> {
    pub tokens: StretchyBuf<Token<'src>>,
    pub errors: StretchyBuf<ErrorInfo>,
}

/// Lex the whole source with default options.
///
/// # Errors
/// If the source is larger than 4GB, [`ErrorKind::SourceTooLarge`] is returned.
///
/// # Examples
/// ```
/// use ion_lexer::{lex, TokenKind};
///
/// let result = lex("x+1").unwrap();
/// let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Name, TokenKind::Punct('+'), TokenKind::Int, TokenKind::EOF]
/// );
/// ```
pub fn lex(source: &str) -> Result<LexResult<'_>, ErrorKind> {
    lex_with_options(source, LexerOptions::default())
}

/// Lex the whole source.
///
/// # Errors
/// If the source is larger than 4GB, [`ErrorKind::SourceTooLarge`] is returned.
pub fn lex_with_options(source: &str, options: LexerOptions) -> Result<LexResult<'_>, ErrorKind> {
    let mut lexer = Lexer::with_options(source, options)?;

    let mut tokens = StretchyBuf::new();
    tokens.extend(lexer.by_ref());

    debug!(
        tokens = tokens.len(),
        errors = lexer.errors().len(),
        "lexing finished"
    );

    Ok(LexResult {
        tokens,
        errors: lexer.into_errors(),
    })
}
