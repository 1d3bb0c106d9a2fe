use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A byte offset in the source text. Sources are limited to 4GB => 32 bits
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ByteOffset(u32);

impl ByteOffset {
    #[must_use]
    pub fn new(val: u32) -> Self {
        ByteOffset(val)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<ByteOffset> for u32 {
    fn from(offset: ByteOffset) -> Self {
        offset.0
    }
}

impl From<ByteOffset> for usize {
    fn from(offset: ByteOffset) -> Self {
        offset.0 as usize
    }
}

impl fmt::Display for ByteOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open `[start, end)` byte range of a token in the source.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    start: ByteOffset,
    end: ByteOffset,
}

impl Span {
    #[must_use]
    pub fn new(start: ByteOffset, end: ByteOffset) -> Self {
        debug_assert!(start <= end, "Span end before start");

        Span { start, end }
    }

    #[must_use]
    pub fn start(self) -> ByteOffset {
        self.start
    }

    #[must_use]
    pub fn end(self) -> ByteOffset {
        self.end
    }

    #[must_use]
    pub fn len(self) -> u32 {
        self.end.get() - self.start.get()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the text covered by the span, or `None` if the span
    /// doesn't describe a valid range of `source`.
    #[must_use]
    pub fn text(self, source: &str) -> Option<&str> {
        source.get(usize::from(self.start)..usize::from(self.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
