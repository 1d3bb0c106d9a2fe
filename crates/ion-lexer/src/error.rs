use std::fmt::Display;
#[cfg(test)]
use strum::IntoStaticStr;
use strum::{EnumIter, EnumMessage};

#[cfg(feature = "serde")]
use serde::Serialize;
#[cfg(feature = "serde")]
use serde_repr::Serialize_repr;

use crate::text::ByteOffset;

#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter, EnumMessage)]
#[cfg_attr(test, derive(IntoStaticStr))]
#[cfg_attr(feature = "serde", derive(Serialize_repr))]
#[repr(u16)]
pub enum ErrorKind {
    // Source code diagnostics. Codes 1001-1999. Make sure to preserve
    // the existing codes & the range. The latter is used in classification impl
    #[strum(message = "Integer literal does not fit into 64 bits")]
    IntegerLiteralOverflow = 1001,
    // Buffer errors. Codes 2001-2999. Make sure to preserve
    // the existing codes & the range. The latter is used in classification impl
    #[strum(message = "Failed to allocate memory for buffer growth")]
    BufferAllocationFailed = 2001,
    #[strum(message = "Requested buffer capacity overflows the address space")]
    BufferCapacityOverflow = 2002,
    #[strum(message = "Buffer self-test read back an unexpected value")]
    BufferSelfTestMismatch = 2003,
    // Lexer API call user initiated errors.
    // Codes 3001-3999. Make sure to preserve
    // the existing codes & the range. The latter is used in classification impl
    #[strum(message = "Lexing of sources larger than 4GB is not supported")]
    SourceTooLarge = 3001,
}

impl ErrorKind {
    #[must_use]
    pub fn is_code_error(&self) -> bool {
        (*self as u16) > 1000u16 && (*self as u16) < 2000u16
    }

    #[must_use]
    pub fn is_buffer_error(&self) -> bool {
        (*self as u16) > 2000u16 && (*self as u16) < 3000u16
    }

    #[must_use]
    pub fn is_api_error(&self) -> bool {
        (*self as u16) > 3000u16 && (*self as u16) < 4000u16
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_message().unwrap_or("Unknown error"))
    }
}

/// A diagnostic recorded by the lexer. Lexing never stops on these.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ErrorInfo {
    error_kind: ErrorKind,
    at_byte_offset: ByteOffset,
    /// Zero-based index of the token the diagnostic belongs to
    on_token: u32,
}

impl ErrorInfo {
    #[must_use]
    pub fn new(error_kind: ErrorKind, at_byte_offset: ByteOffset, on_token: u32) -> Self {
        Self {
            error_kind,
            at_byte_offset,
            on_token,
        }
    }

    #[must_use]
    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    #[must_use]
    pub fn at_byte_offset(&self) -> ByteOffset {
        self.at_byte_offset
    }

    #[must_use]
    pub fn on_token(&self) -> u32 {
        self.on_token
    }
}

/// Failure to grow a [`StretchyBuf`](crate::StretchyBuf).
///
/// Returned by the `try_*` family of buffer operations. The infallible
/// operations treat the same conditions as fatal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BufferError {
    error_kind: ErrorKind,
    /// Element count the failing operation worked with: the capacity
    /// a growth attempted to reach, or the offending index on a self-test mismatch
    count: usize,
}

impl BufferError {
    #[must_use]
    pub(crate) fn new(error_kind: ErrorKind, count: usize) -> Self {
        debug_assert!(error_kind.is_buffer_error());

        Self {
            error_kind,
            count,
        }
    }

    #[must_use]
    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} elements)", self.error_kind, self.count)
    }
}

impl std::error::Error for BufferError {}
