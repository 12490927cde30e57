// ============================================================================
// Numeral Decoder
// Financial numeral string -> decimal amount
// ============================================================================
//
// Decoding is driven by marker scanning, not by a grammar:
// 1. Group pass: every group marker (万万亿, 亿亿, 万亿, 亿, 万; longest first)
//    closes a segment, which is reduced by the place pass and scaled.
// 2. Place pass: 拾/佰/仟/元 over what the group pass left.
// 3. Decimal pass: 角/分 over what the place pass left.
//
// Digits before a unit are read as 0 glyphs = 0, 1 glyph = digit,
// 2 glyphs = tens and ones (零伍 = 5), 3 or more = 0.
// Anomalous sequences can therefore decode to an unintended value instead of
// failing; no structural validation is performed.

use super::glyphs::Glyph;
use super::lexer::{match_group_marker, tokenize, Token};
use crate::numeric::{AmountError, AmountResult};
use rust_decimal::Decimal;

/// Decode a numeral string into an amount.
///
/// The result is normalized: trailing fractional zeros are removed.
///
/// # Errors
/// - `EmptyInput` if the text is blank or holds no numeral glyphs
/// - `UnexpectedGlyph` if a non-digit stands where a digit is read
/// - `Arithmetic` if accumulation overflows the decimal type
pub fn decode(text: &str) -> AmountResult<Decimal> {
    if text.trim().is_empty() {
        return Err(AmountError::EmptyInput);
    }

    let mut tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(AmountError::EmptyInput);
    }
    tokens.retain(|token| token.glyph != Glyph::Even);

    let (group_end, groups) = reduce_groups(&tokens)?;
    let rest = &tokens[group_end..];

    let (place_end, places) = reduce_places(rest)?;
    let decimals = reduce_decimals(&rest[place_end..])?;

    let total = add(add(groups, places)?, decimals)?;
    Ok(total.normalize())
}

/// Decode a numeral string, reporting any failure as `None`.
///
/// Blank text, text without numeral glyphs and malformed numerals all give
/// `None`; callers must treat it as "unconvertible", never as zero.
pub fn to_lower<'a>(text: impl Into<Option<&'a str>>) -> Option<Decimal> {
    let text = text.into()?;
    tracing::debug!("amount to_lower: {}", text);

    match decode(text) {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::debug!("amount to_lower: {} failed: {}", text, e);
            None
        },
    }
}

// ============================================================================
// Passes
// ============================================================================

/// Group pass. Returns the index after the last group marker and the sum.
fn reduce_groups(tokens: &[Token]) -> AmountResult<(usize, Decimal)> {
    let mut total = Decimal::ZERO;
    let mut cursor = 0;
    let mut i = 0;

    while i < tokens.len() {
        match match_group_marker(&tokens[i..]) {
            Some((marker, len)) => {
                let group = reduce_group_segment(&tokens[cursor..i])?;
                let magnitude = Decimal::from(10u64.pow(marker.exponent()));
                total = add(total, mul(group, magnitude)?)?;
                i += len;
                cursor = i;
            },
            None => i += 1,
        }
    }

    Ok((cursor, total))
}

/// Value of the segment in front of a group marker.
///
/// Digits after the segment's last place unit are its ones digit, so
/// 壹万 is one 万 and 壹拾贰亿 is twelve 亿.
fn reduce_group_segment(segment: &[Token]) -> AmountResult<Decimal> {
    let (end, value) = reduce_places(segment)?;
    let ones = read_digits(&segment[end..])?;
    add(value, Decimal::from(ones))
}

/// Place pass. Returns the index after the last place unit and the sum.
fn reduce_places(tokens: &[Token]) -> AmountResult<(usize, Decimal)> {
    let mut total = Decimal::ZERO;
    let mut cursor = 0;

    for (i, token) in tokens.iter().enumerate() {
        if let Glyph::Place(unit) = token.glyph {
            let digits = read_digits(&tokens[cursor..i])?;
            total = add(total, Decimal::from(digits * unit.multiplier()))?;
            cursor = i + 1;
        }
    }

    Ok((cursor, total))
}

/// Decimal pass over the tokens after the integer part.
fn reduce_decimals(tokens: &[Token]) -> AmountResult<Decimal> {
    let mut total = Decimal::ZERO;
    let mut cursor = 0;

    for (i, token) in tokens.iter().enumerate() {
        if let Glyph::Decimal(unit) = token.glyph {
            let digits = read_digits(&tokens[cursor..i])?;
            total = add(total, Decimal::new(i64::from(digits), unit.scale()))?;
            cursor = i + 1;
        }
    }

    Ok(total)
}

// ============================================================================
// Helpers
// ============================================================================

/// Read the digit glyphs in front of a unit.
fn read_digits(tokens: &[Token]) -> AmountResult<u32> {
    match tokens {
        [] => Ok(0),
        [only] => digit(only),
        [tens, ones] => Ok(digit(tens)? * 10 + digit(ones)?),
        _ => Ok(0),
    }
}

fn digit(token: &Token) -> AmountResult<u32> {
    match token.glyph {
        Glyph::Digit(d) => Ok(u32::from(d)),
        _ => Err(AmountError::UnexpectedGlyph {
            glyph: token.ch,
            position: token.offset,
        }),
    }
}

#[inline]
fn add(a: Decimal, b: Decimal) -> AmountResult<Decimal> {
    a.checked_add(b).ok_or(AmountError::Arithmetic)
}

#[inline]
fn mul(a: Decimal, b: Decimal) -> AmountResult<Decimal> {
    a.checked_mul(b).ok_or(AmountError::Arithmetic)
}
