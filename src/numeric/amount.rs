// ============================================================================
// Amount Digits
// Truncated digit-level view of a monetary amount
// ============================================================================

use super::errors::{AmountError, AmountResult};
use arrayvec::ArrayVec;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Largest amount the numeral encoder accepts: 99999999999999999.99
///
/// 17 integer digits and 2 fractional digits.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, 2);

/// Number of integer digits in `MAX_AMOUNT`.
pub const MAX_INTEGER_DIGITS: usize = 17;

/// Fractional digits kept by the encoder (jiao and fen).
pub const AMOUNT_SCALE: u32 = 2;

/// An amount split into its decimal digits after truncation to two places.
///
/// Integer digits are stored most significant first. A zero integer part is
/// stored as the single digit `0`.
///
/// # Example
/// ```ignore
/// let digits = AmountDigits::from_decimal("10001.239".parse()?)?;
/// assert_eq!(digits.integer_digits(), &[1, 0, 0, 0, 1]);
/// assert_eq!((digits.jiao(), digits.fen()), (2, 3));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AmountDigits {
    integer: ArrayVec<u8, MAX_INTEGER_DIGITS>,
    jiao: u8,
    fen: u8,
}

impl AmountDigits {
    /// Split an amount into digits, truncating toward zero at two places.
    ///
    /// # Errors
    /// - `Overflow` if the amount exceeds `MAX_AMOUNT`
    /// - `Negative` if the truncated amount is below zero
    pub fn from_decimal(amount: Decimal) -> AmountResult<Self> {
        if amount > MAX_AMOUNT {
            return Err(AmountError::Overflow);
        }

        let truncated = amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::ToZero);
        if truncated.is_sign_negative() && !truncated.is_zero() {
            return Err(AmountError::Negative);
        }

        // Value in fen (hundredths); scale is at most 2 after truncation
        let shift = 10i128.pow(AMOUNT_SCALE - truncated.scale());
        let fen_total = truncated
            .mantissa()
            .unsigned_abs()
            .checked_mul(shift as u128)
            .ok_or(AmountError::Arithmetic)?;

        let integer_value = fen_total / 100;
        let jiao = ((fen_total / 10) % 10) as u8;
        let fen = (fen_total % 10) as u8;

        let mut integer = ArrayVec::new();
        for byte in integer_value.to_string().bytes() {
            integer
                .try_push(byte - b'0')
                .map_err(|_| AmountError::Overflow)?;
        }

        Ok(Self { integer, jiao, fen })
    }

    /// Integer digits, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    /// Whether the integer part is zero.
    #[inline]
    pub fn integer_is_zero(&self) -> bool {
        self.integer.as_slice() == [0]
    }

    /// Tenths digit.
    #[inline]
    pub const fn jiao(&self) -> u8 {
        self.jiao
    }

    /// Hundredths digit.
    #[inline]
    pub const fn fen(&self) -> u8 {
        self.fen
    }

    /// Whether the truncated amount has a non-zero fractional part.
    #[inline]
    pub const fn has_fraction(&self) -> bool {
        self.jiao != 0 || self.fen != 0
    }

    /// Whether the whole truncated amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer_is_zero() && !self.has_fraction()
    }
}

impl fmt::Debug for AmountDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AmountDigits({})", self)
    }
}

impl fmt::Display for AmountDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.integer {
            write!(f, "{}", digit)?;
        }
        write!(f, ".{}{}", self.jiao, self.fen)
    }
}
