// ============================================================================
// USD Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Currency string scanning at several shapes
// 2. Arithmetic - Canonical-unit add and policy-driven multiply
// 3. Formatting - Plain, grouped, and spoken-word rendering
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use usd_money::prelude::*;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for input in ["0", "123.45", "$-1,234,567.89", "1.2345"] {
        group.bench_with_input(BenchmarkId::new("money", input), input, |b, input| {
            b.iter(|| black_box(input.parse::<Money>()));
        });
    }
    group.bench_function("precise", |b| {
        b.iter(|| black_box("$-1,234.5678".parse::<PreciseMoney>()));
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Money::from_num_cents(123_456_789).unwrap();
    let b_val = Money::from_num_cents(987_654_321).unwrap();

    group.bench_function("add", |b| {
        b.iter(|| black_box(a.add(b_val)));
    });
    group.bench_function("multiply_round_nearest", |b| {
        b.iter(|| black_box(a.multiply(0.333, PartialCentsPolicy::RoundNearest)));
    });
    group.bench_function("percent", |b| {
        b.iter(|| black_box(Money::percent(a, b_val, 2)));
    });

    let rate = PreciseMoney::from_num_partial_cents(30_851).unwrap();
    group.bench_function("round_to_cents", |b| {
        b.iter(|| black_box(rate.round_to_cents(PartialCentsPolicy::RoundNearest)));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let value = Money::from_num_cents(103_223_443).unwrap();

    group.bench_function("formatted_string", |b| {
        b.iter(|| black_box(value.formatted_string(true)));
    });
    group.bench_function("formatted_string_grouped", |b| {
        b.iter(|| black_box(value.formatted_string_grouped(true)));
    });
    group.bench_function("to_words", |b| {
        b.iter(|| black_box(value.to_words()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_arithmetic,
    benchmark_formatting
);
criterion_main!(benches);
