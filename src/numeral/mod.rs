// ============================================================================
// Numeral Module
// Conversion between amounts and Chinese financial numerals (大写金额)
// ============================================================================
//
// This module provides:
// - glyphs: const digit/unit vocabularies and their inverse lookups
// - encoder: amount -> numeral string (壹万零壹元贰角叁分)
// - decoder: numeral string -> amount, by longest-first marker scanning
//
// Encoder and decoder share the unit vocabulary but not code; the decoder
// reads exactly what the encoder writes for amounts below 10^12.

pub mod glyphs;
mod lexer;

mod decoder;
mod encoder;

pub(crate) use encoder::surface;

pub use decoder::{decode, to_lower};
pub use encoder::{encode, to_upper, to_upper_no_even, to_upper_with, to_upper_with_even};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UpperCaseOptions;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_round_trip_powers_of_ten() {
        for s in ["0", "1", "10", "100", "1000", "10000", "100000000"] {
            let amount: Decimal = s.parse().unwrap();
            let text = encode(amount, UpperCaseOptions::check()).unwrap();
            assert_eq!(decode(&text).unwrap(), amount, "round trip of {}", text);
        }
    }

    #[test]
    fn test_round_trip_documented_cases() {
        for s in ["10005.00", "1.03", "1.30", "1200005000", "10001.23"] {
            let amount: Decimal = s.parse().unwrap();
            for options in [UpperCaseOptions::check(), UpperCaseOptions::plain()] {
                let text = encode(amount, options).unwrap();
                assert_eq!(decode(&text).unwrap(), amount, "round trip of {}", text);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip_below_wan_yi(
            fen in 0i64..100_000_000_000_000i64,
            need_even in any::<bool>(),
            with_zero_jiao in any::<bool>(),
        ) {
            let amount = Decimal::new(fen, 2);
            let options = UpperCaseOptions::new(need_even, with_zero_jiao);
            let text = encode(amount, options).unwrap();
            prop_assert_eq!(decode(&text).unwrap(), amount, "round trip of {}", text);
        }

        #[test]
        fn prop_decode_never_panics(text in "[零壹贰叁肆伍陆柒捌玖元拾佰仟万亿角分整a1 ]{0,24}") {
            let _ = to_lower(text.as_str());
        }

        #[test]
        fn prop_encode_never_emits_yi_wan(fen in 0i64..=i64::MAX) {
            let amount = Decimal::new(fen, 2);
            if let Ok(text) = encode(amount, UpperCaseOptions::check()) {
                prop_assert!(!text.contains(glyphs::YI_WAN));
            }
        }
    }
}
