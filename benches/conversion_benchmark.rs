// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Encoder - amount -> numerals, by number of integer digits
// 2. Decoder - numerals -> amount, by numeral length
// 3. Display - grouped rendering, by decimal places
// 4. Converter - configured facade with event dispatch
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rmb_numerals::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::Arc;

const AMOUNTS: [&str; 4] = ["1.03", "10001.23", "1200005000", "99999999999999999.99"];

fn amounts() -> Vec<Decimal> {
    AMOUNTS.iter().map(|s| s.parse().unwrap()).collect()
}

// ============================================================================
// Encoder Benchmarks
// ============================================================================

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for amount in amounts() {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| black_box(encode(black_box(amount), UpperCaseOptions::check())));
        });
    }

    group.finish();
}

// ============================================================================
// Decoder Benchmarks
// ============================================================================

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for amount in amounts() {
        let numerals = encode(amount, UpperCaseOptions::check()).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(numerals.chars().count()),
            &numerals,
            |b, numerals| {
                b.iter(|| black_box(decode(black_box(numerals))));
            },
        );
    }

    // Noise stripping on top of decoding
    let noisy = "人民币（大写）：壹拾贰亿零伍仟元整 RMB 1,200,005,000.00";
    group.bench_function("noisy_input", |b| {
        b.iter(|| black_box(to_lower(black_box(noisy))));
    });

    group.finish();
}

// ============================================================================
// Display Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let amount: Decimal = "-1234567890.123456".parse().unwrap();

    for places in [0u32, 2, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(places), places, |b, &places| {
            b.iter(|| black_box(format_amount(black_box(amount), FormatOptions::new(places))));
        });
    }

    group.finish();
}

// ============================================================================
// Converter Benchmarks
// ============================================================================

fn benchmark_converter(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter");
    let amount: Decimal = "10001.23".parse().unwrap();

    let converter = ConverterBuilder::check_style()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    group.bench_function("round_trip", |b| {
        b.iter(|| {
            let numerals = converter.to_upper(black_box(amount)).unwrap().unwrap();
            black_box(converter.to_lower(numerals.as_str()))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_format,
    benchmark_converter
);
criterion_main!(benches);
