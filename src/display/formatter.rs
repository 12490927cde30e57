// ============================================================================
// Amount Formatter
// Thousands-grouped plain-digit rendering of amounts
// ============================================================================

use crate::domain::FormatOptions;
use crate::numeric::AmountResult;
use rust_decimal::{Decimal, RoundingStrategy};

/// Separator between groups of three integer digits.
pub const GROUPING_SEPARATOR: char = ',';

/// Digits per integer group.
pub const GROUP_SIZE: usize = 3;

/// Render an amount with grouped integer digits and exactly
/// `options.decimal_places` fractional digits.
///
/// Extra fractional digits are truncated toward zero, never rounded.
/// Negative amounts keep their sign; a value truncated to zero has none.
///
/// # Errors
/// Returns `InvalidScale` if more than 28 fractional digits are requested.
///
/// # Example
/// ```
/// use rmb_numerals::display::format_amount;
/// use rmb_numerals::domain::FormatOptions;
/// use rust_decimal::Decimal;
///
/// let text = format_amount(Decimal::new(1234567, 3), FormatOptions::new(2)).unwrap();
/// assert_eq!(text, "1,234.56");
/// ```
pub fn format_amount(amount: Decimal, options: FormatOptions) -> AmountResult<String> {
    options.validate()?;
    let places = options.decimal_places;

    let truncated = amount.round_dp_with_strategy(places, RoundingStrategy::ToZero);
    let negative = truncated.is_sign_negative() && !truncated.is_zero();

    let plain = truncated.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() * 2 + places as usize);
    if negative {
        out.push('-');
    }
    push_grouped(integer, &mut out);
    if places > 0 {
        out.push('.');
        out.push_str(&format!("{:0<width$}", fraction, width = places as usize));
    }

    Ok(out)
}

/// Copy integer digits into `out`, separating groups of three.
fn push_grouped(digits: &str, out: &mut String) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            out.push(GROUPING_SEPARATOR);
        }
        out.push(ch);
    }
}

/// Render an amount with two grouped decimal places.
///
/// Returns `None` for a missing amount.
pub fn format(amount: impl Into<Option<Decimal>>) -> Option<String> {
    format_with_places(amount, FormatOptions::default().decimal_places)
}

/// Render an amount with `decimal_places` grouped decimal places.
///
/// Returns `None` for a missing amount or when the amount cannot be rendered.
pub fn format_with_places(
    amount: impl Into<Option<Decimal>>,
    decimal_places: u32,
) -> Option<String> {
    let amount = amount.into()?;
    match format_amount(amount, FormatOptions::new(decimal_places)) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(
                "amount format: {}, decimal_places: {} failed: {}",
                amount,
                decimal_places,
                e
            );
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::AmountError;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fmt(s: &str, places: u32) -> String {
        format_amount(d(s), FormatOptions::new(places)).unwrap()
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt("1234.56", 2), "1,234.56");
        assert_eq!(fmt("1000000.00", 2), "1,000,000.00");
        assert_eq!(fmt("123", 2), "123.00");
        assert_eq!(fmt("123456", 0), "123,456");
        assert_eq!(fmt("0.123", 3), "0.123");
    }

    #[test]
    fn test_truncation() {
        assert_eq!(fmt("1234.567", 2), "1,234.56");
        assert_eq!(fmt("1234567.89", 1), "1,234,567.8");
        assert_eq!(fmt("1.23", 0), "1");
        assert_eq!(fmt("9.999", 2), "9.99");
    }

    #[test]
    fn test_padding() {
        assert_eq!(fmt("1234.5", 2), "1,234.50");
        assert_eq!(fmt("1234", 2), "1,234.00");
        assert_eq!(fmt("0", 4), "0.0000");
    }

    #[test]
    fn test_negative() {
        assert_eq!(fmt("-1234.56", 2), "-1,234.56");
        assert_eq!(fmt("-1234567.891", 2), "-1,234,567.89");
        assert_eq!(fmt("-0.001", 2), "0.00");
    }

    #[test]
    fn test_invalid_scale() {
        assert_eq!(
            format_amount(d("1"), FormatOptions::new(29)),
            Err(AmountError::InvalidScale(29))
        );
        assert_eq!(format_with_places(d("1"), 29), None);
    }

    #[test]
    fn test_public_functions() {
        assert_eq!(format(None::<Decimal>), None);
        assert_eq!(format_with_places(None::<Decimal>, 2), None);
        assert_eq!(format(d("1234.56")), Some("1,234.56".to_string()));
        assert_eq!(format(d("1234.5")), Some("1,234.50".to_string()));
        assert_eq!(format(d("1234")), Some("1,234.00".to_string()));
    }
}
