// ============================================================================
// RMB Numerals Library
// Chinese financial numerals (大写金额) and grouped amount display
// ============================================================================

//! # RMB Numerals
//!
//! Conversion between decimal amounts and the Chinese financial numerals
//! written on invoices, checks and contracts, plus thousands-grouped display.
//!
//! ## Features
//!
//! - **Encoder**: `10001.23` -> `壹万零壹元贰角叁分`, with optional 整 suffix
//!   and zero jiao
//! - **Decoder**: numerals back to a `rust_decimal::Decimal`
//! - **Display**: `1234.567` -> `1,234.56` (truncating, never rounding)
//! - **Converter**: configured facade with an event handler for auditing
//!
//! ## Error policy
//!
//! Only an amount above [`MAX_AMOUNT`](numeric::MAX_AMOUNT) is returned as an
//! error. Missing input and every other failure give `None`, which callers
//! must read as "unconvertible", never as zero.
//!
//! ## Example
//!
//! ```rust
//! use rmb_numerals::{format_with_places, to_lower, to_upper_with_even};
//! use rust_decimal::Decimal;
//!
//! let amount = Decimal::new(1000123, 2); // 10001.23
//!
//! let numerals = to_upper_with_even(amount, true).unwrap().unwrap();
//! assert_eq!(numerals, "壹万零壹元贰角叁分");
//! assert_eq!(to_lower(numerals.as_str()), Some(amount));
//!
//! assert_eq!(format_with_places(amount, 1).as_deref(), Some("10,001.2"));
//! ```

pub mod display;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeral;
pub mod numeric;

pub use display::{format, format_with_places};
pub use numeral::{to_lower, to_upper, to_upper_no_even, to_upper_with_even};
pub use numeric::{AmountError, AmountResult, MAX_AMOUNT};

// Re-exports for convenience
pub mod prelude {
    pub use crate::display::{format, format_amount, format_with_places};
    pub use crate::domain::{ConverterConfig, FormatOptions, UpperCaseOptions};
    pub use crate::engine::{create_from_config, AmountConverter, ConverterBuilder};
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation,
    };
    pub use crate::numeral::{
        decode, encode, to_lower, to_upper, to_upper_no_even, to_upper_with, to_upper_with_even,
    };
    pub use crate::numeric::{AmountError, AmountResult, MAX_AMOUNT};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use std::thread;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn upper(s: &str) -> Option<String> {
        to_upper_with_even(d(s), true).unwrap()
    }

    #[test]
    fn test_documented_encodings() {
        assert_eq!(upper("10005.00").as_deref(), Some("壹万零伍元整"));
        assert_eq!(upper("1.03").as_deref(), Some("壹元零叁分"));
        assert_eq!(upper("1.30").as_deref(), Some("壹元叁角"));
        assert_eq!(upper("1200005000").as_deref(), Some("壹拾贰亿零伍仟元整"));
        assert_eq!(upper("10001.23").as_deref(), Some("壹万零壹元贰角叁分"));
        assert_eq!(
            to_upper_with(d("1.03"), UpperCaseOptions::new(true, false)).unwrap(),
            Some("壹元叁分".to_string())
        );
    }

    #[test]
    fn test_round_trip() {
        for s in ["0", "1", "10", "100", "1000", "10000", "100000000"] {
            let numerals = upper(s).unwrap();
            assert_eq!(to_lower(numerals.as_str()), Some(d(s)), "{}", numerals);
        }
        assert_eq!(to_lower("壹万零壹元贰角叁分"), Some(d("10001.23")));
    }

    #[test]
    fn test_bounds() {
        assert!(to_upper_with_even(MAX_AMOUNT, true).unwrap().is_some());
        assert_eq!(
            to_upper_with_even(MAX_AMOUNT + d("0.01"), true),
            Err(AmountError::Overflow)
        );
        assert_eq!(
            to_upper_no_even(d("100000000000000000"), false),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_null_propagation() {
        assert_eq!(to_upper_with_even(None::<Decimal>, true), Ok(None));
        assert_eq!(to_upper(None::<Decimal>), Ok(None));
        assert_eq!(to_lower(None::<&str>), None);
        assert_eq!(to_lower(""), None);
        assert_eq!(format(None::<Decimal>), None);
    }

    #[test]
    fn test_digits_only_text_does_not_panic() {
        assert_eq!(to_lower("12345"), None);
        assert_eq!(to_lower("壹贰叁"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_formatter() {
        assert_eq!(format_with_places(d("1234.567"), 2).as_deref(), Some("1,234.56"));
        assert_eq!(format_with_places(d("1234567.89"), 1).as_deref(), Some("1,234,567.8"));
        assert_eq!(format_with_places(d("-1234.56"), 2).as_deref(), Some("-1,234.56"));
        assert_eq!(format(d("1234")).as_deref(), Some("1,234.00"));
    }

    #[test]
    fn test_shared_converter_across_threads() {
        let converter = Arc::new(
            ConverterBuilder::check_style()
                .build(Arc::new(NoOpEventHandler))
                .unwrap(),
        );

        let handles: Vec<_> = (0..4i64)
            .map(|i| {
                let converter = Arc::clone(&converter);
                thread::spawn(move || {
                    let amount = Decimal::new(1_000_000 * (i + 1) + 3, 2);
                    let numerals = converter.to_upper(amount).unwrap().unwrap();
                    converter.to_lower(numerals.as_str())
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = Decimal::new(1_000_000 * (i as i64 + 1) + 3, 2);
            assert_eq!(handle.join().unwrap(), Some(expected));
        }
    }
}
