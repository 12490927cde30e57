// ============================================================================
// Numeric Module
// Amount bounds, digit splitting and error kinds shared by all converters
// ============================================================================
//
// This module provides:
// - AmountDigits: two-place truncated digit view of a Decimal amount
// - MAX_AMOUNT: upper bound accepted by the numeral encoder
// - AmountError: Error kinds for conversion and formatting
//
// Design principles:
// - Amounts are rust_decimal::Decimal, never floating point
// - Truncation toward zero, never rounding up
// - All fallible steps return Result (no panics)

mod amount;
mod errors;

pub use amount::{AmountDigits, AMOUNT_SCALE, MAX_AMOUNT, MAX_INTEGER_DIGITS};
pub use errors::{AmountError, AmountResult};
