// ============================================================================
// Amount Errors
// Error kinds for numeral conversion and amount formatting
// ============================================================================

use thiserror::Error;

/// Errors that can occur while converting or formatting an amount.
///
/// Only [`AmountError::Overflow`] ever reaches callers of the public
/// conversion functions as an `Err`; every other kind is logged and reported
/// as an absent result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum AmountError {
    /// Amount exceeds `MAX_AMOUNT`
    #[error("amount too large: maximum supported amount is 99999999999999999.99")]
    Overflow,
    /// Amount is below zero (numerals have no sign)
    #[error("negative amount cannot be written as numerals")]
    Negative,
    /// Input text is blank or holds no numeral glyphs
    #[error("empty input: no numeral glyphs found")]
    EmptyInput,
    /// A glyph was found where a digit glyph is required
    #[error("unexpected glyph '{glyph}' at position {position}: expected a digit")]
    UnexpectedGlyph { glyph: char, position: usize },
    /// Requested fractional digit count is not representable
    #[error("invalid scale {0}: at most 28 fractional digits are supported")]
    InvalidScale(u32),
    /// Decimal arithmetic overflowed while accumulating a value
    #[error("arithmetic overflow while accumulating amount")]
    Arithmetic,
}

impl AmountError {
    /// Whether this is the overflow kind, the only one raised to callers.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, AmountError::Overflow)
    }
}

/// Result type alias for amount operations
pub type AmountResult<T> = Result<T, AmountError>;
