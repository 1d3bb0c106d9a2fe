use std::str::Chars;

/// Peekable iterator over a char sequence.
/// Based on [`rustc`'s `Cursor`](https://github.com/rust-lang/rust/blob/d1b7355d3d7b4ead564dbecb1d240fcc74fff21b/compiler/rustc_lexer/src/cursor.rs)
#[derive(Debug, Clone)]
pub(super) struct Cursor<'src> {
    /// Iterator over chars. Slightly faster than a &str.
    chars: Chars<'src>,
}

/// Terminator of the character stream. Returned by `peek` at the end of input.
pub(crate) const EOF_CHAR: char = '\0';

impl<'src> Cursor<'src> {
    pub(super) fn new(input: &'src str) -> Cursor<'src> {
        Cursor {
            chars: input.chars(),
        }
    }

    pub(super) fn as_str(&self) -> &'src str {
        self.chars.as_str()
    }

    /// Peeks the next symbol from the input stream without consuming it.
    /// If requested position doesn't exist, `EOF_CHAR` is returned.
    /// An explicit NUL in the input is indistinguishable from the end,
    /// both terminate the stream.
    pub(super) fn peek(&self) -> char {
        // `.next()` optimizes better than `.nth(0)`
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    /// Moves to the next character.
    pub(super) fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    #[inline]
    pub(super) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        // `EOF_CHAR` never satisfies the lexer predicates, so no explicit eof check
        while predicate(self.peek()) {
            self.advance();
        }
    }

    /// Returns the length of the remaining text in bytes.
    /// This is used to calculate the offset of the current token.
    pub(super) fn remaining_len(&self) -> u32 {
        // Sources longer than u32::MAX bytes are rejected by the lexer
        #[allow(clippy::cast_possible_truncation)]
        let len = self.chars.as_str().len() as u32;
        len
    }
}
