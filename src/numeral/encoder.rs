// ============================================================================
// Numeral Encoder
// Decimal amount -> financial numeral string
// ============================================================================

use super::glyphs::{
    BOUNDARY_UNIT_INDICES, DIGIT_GLYPHS, EVEN, FEN, JIAO, UNIT_GLYPHS, YI, YI_WAN, YUAN, ZERO,
};
use crate::domain::UpperCaseOptions;
use crate::numeric::{AmountDigits, AmountError, AmountResult};
use rust_decimal::Decimal;

/// Write an amount as financial numerals.
///
/// The amount is truncated (never rounded) to two fractional digits.
///
/// # Errors
/// - `Overflow` if the amount exceeds `MAX_AMOUNT`
/// - `Negative` if the amount is below zero
///
/// # Example
/// ```
/// use rmb_numerals::numeral::encode;
/// use rmb_numerals::domain::UpperCaseOptions;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(1000123, 2); // 10001.23
/// let text = encode(amount, UpperCaseOptions::invoice()).unwrap();
/// assert_eq!(text, "壹万零壹元贰角叁分");
/// ```
pub fn encode(amount: Decimal, options: UpperCaseOptions) -> AmountResult<String> {
    let digits = AmountDigits::from_decimal(amount)?;

    // Each glyph is 3 bytes in UTF-8; integer part uses at most two per digit
    let mut out = String::with_capacity((digits.integer_digits().len() * 2 + 5) * 3);

    write_integer_part(&digits, &mut out);
    if out.contains(YI_WAN) {
        out = out.replace(YI_WAN, YI);
    }

    if digits.has_fraction() {
        write_fraction(&digits, options.with_zero_jiao, &mut out);
    } else if options.need_even {
        out.push(EVEN);
    }

    Ok(out)
}

/// Integer digits with their units, one 零 per run of zeros.
fn write_integer_part(digits: &AmountDigits, out: &mut String) {
    if digits.is_zero() {
        out.push(ZERO);
        out.push(YUAN);
        return;
    }
    if digits.integer_is_zero() {
        return;
    }

    let integer = digits.integer_digits();
    let len = integer.len();

    for (i, &digit) in integer.iter().enumerate() {
        let unit_index = len - 1 - i;
        let unit = UNIT_GLYPHS[unit_index];

        if digit != 0 {
            if i != 0 && integer[i - 1] == 0 {
                out.push(ZERO);
            }
            out.push(DIGIT_GLYPHS[usize::from(digit)]);
            out.push(unit);
        } else if BOUNDARY_UNIT_INDICES.contains(&unit_index) {
            out.push(unit);
        }
    }
}

/// Jiao and fen tokens. Zero fen is never written.
fn write_fraction(digits: &AmountDigits, with_zero_jiao: bool, out: &mut String) {
    let jiao = digits.jiao();
    if jiao != 0 {
        out.push(DIGIT_GLYPHS[usize::from(jiao)]);
        out.push(JIAO);
    } else if with_zero_jiao && !digits.integer_is_zero() {
        out.push(ZERO);
    }

    let fen = digits.fen();
    if fen != 0 {
        out.push(DIGIT_GLYPHS[usize::from(fen)]);
        out.push(FEN);
    }
}

// ============================================================================
// Public Conversions
// ============================================================================

/// Write an amount as numerals with 整 and without zero jiao.
///
/// Returns `Ok(None)` for a missing amount and for amounts that cannot be
/// written (negative amounts). Only an amount above `MAX_AMOUNT` is an error.
pub fn to_upper(amount: impl Into<Option<Decimal>>) -> AmountResult<Option<String>> {
    to_upper_with(amount, UpperCaseOptions::invoice())
}

/// Write an amount as numerals without the 整 suffix.
pub fn to_upper_no_even(
    amount: impl Into<Option<Decimal>>,
    with_zero_jiao: bool,
) -> AmountResult<Option<String>> {
    to_upper_with(amount, UpperCaseOptions::new(false, with_zero_jiao))
}

/// Write an amount as numerals with the 整 suffix.
pub fn to_upper_with_even(
    amount: impl Into<Option<Decimal>>,
    with_zero_jiao: bool,
) -> AmountResult<Option<String>> {
    to_upper_with(amount, UpperCaseOptions::new(true, with_zero_jiao))
}

/// Write an amount as numerals with explicit options.
pub fn to_upper_with(
    amount: impl Into<Option<Decimal>>,
    options: UpperCaseOptions,
) -> AmountResult<Option<String>> {
    let Some(amount) = amount.into() else {
        return Ok(None);
    };
    tracing::debug!(
        "amount to_upper: {}, need_even: {}, with_zero_jiao: {}",
        amount,
        options.need_even,
        options.with_zero_jiao
    );
    surface(amount, encode(amount, options))
}

/// Apply the public error policy: overflow is raised, anything else is
/// logged and reported as no result.
pub(crate) fn surface(
    amount: Decimal,
    result: AmountResult<String>,
) -> AmountResult<Option<String>> {
    match result {
        Ok(text) => Ok(Some(text)),
        Err(AmountError::Overflow) => Err(AmountError::Overflow),
        Err(e) => {
            tracing::warn!("amount to_upper: {} failed: {}", amount, e);
            Ok(None)
        },
    }
}
