use strum::{Display, EnumIter, EnumString, VariantNames};

#[cfg(feature = "serde")]
use serde::Serialize;

/// What an integer literal evaluates to when its digits don't fit into `u64`.
///
/// The whole digit run is consumed either way, and an
/// [`ErrorKind::IntegerLiteralOverflow`](crate::error::ErrorKind::IntegerLiteralOverflow)
/// diagnostic is recorded for the literal.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Default, Display, EnumString, EnumIter, VariantNames,
)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[strum(serialize_all = "lowercase")]
pub enum OverflowPolicy {
    /// Clamp the value to `u64::MAX`
    #[default]
    Saturate,
    /// Keep accumulating modulo 2^64
    Wrap,
}

impl OverflowPolicy {
    /// Folds the next decimal digit into `value`. Returns the new value
    /// and whether it overflowed.
    #[inline]
    pub(super) fn accumulate(self, value: u64, digit: u32) -> (u64, bool) {
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => (v, false),
            None => match self {
                OverflowPolicy::Saturate => (u64::MAX, true),
                OverflowPolicy::Wrap => (
                    value
                        .wrapping_mul(10)
                        .wrapping_add(u64::from(digit)),
                    true,
                ),
            },
        }
    }
}

/// Lexer configuration.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LexerOptions {
    pub overflow: OverflowPolicy,
}

impl LexerOptions {
    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
