// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging: cargo run --example basic_usage --features logging

use rmb_numerals::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== RMB Numerals Example ===\n");

    let converter = ConverterBuilder::check_style()
        .build(Arc::new(LoggingEventHandler))
        .expect("check preset is valid");

    // Amounts as they appear on an invoice
    println!("Writing amounts as numerals...");
    for text in ["0", "1.03", "1.30", "10005", "10001.23", "1200005000"] {
        let amount: Decimal = text.parse().expect("literal amount");
        match converter.to_upper(amount) {
            Ok(Some(numerals)) => {
                let display = converter.format(amount).unwrap_or_default();
                println!("  {:>14} -> {}", display, numerals)
            },
            Ok(None) => println!("  {:>14} -> (unconvertible)", text),
            Err(e) => println!("  {:>14} -> error: {}", text, e),
        }
    }

    // Reading numerals back
    println!("\nReading numerals...");
    for numerals in ["壹万零壹元贰角叁分", "人民币 壹拾贰亿零伍仟元整", "", "12345"] {
        match converter.to_lower(numerals) {
            Some(amount) => println!("  {:?} -> {}", numerals, amount),
            None => println!("  {:?} -> (unconvertible)", numerals),
        }
    }

    // The only error that reaches callers
    println!("\n=== Upper Bound ===");
    println!("  MAX_AMOUNT = {}", MAX_AMOUNT);
    let too_large = MAX_AMOUNT + Decimal::new(1, 2);
    match converter.to_upper(too_large) {
        Err(AmountError::Overflow) => println!("  {} -> overflow", too_large),
        other => println!("  {} -> {:?}", too_large, other),
    }

    // Plain numerals without 整, and display precision
    println!("\n=== Options ===");
    let plain = to_upper_no_even(Decimal::from(500), false);
    println!("  no even: {:?}", plain);
    println!("  1 place: {:?}", format_with_places(Decimal::new(123456789, 2), 1));
}
