//! Core decimath benchmarks
//!
//! Benchmarks for end-to-end evaluation at different precisions and for the
//! main expression families.

use criterion::{Criterion, criterion_group, criterion_main};
use decimath::{AngleMode, Evaluator, RoundingMode};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// Test Expressions
// =============================================================================

const POLYNOMIAL: &str = "3*x^3 + 2*x^2 + x + 1";
const IMPLICIT: &str = "2x^2 + 3x - 1";
const TRIG_DEG: &str = "2*sin(30) + cos(60)";
const NESTED_FUNCTIONS: &str = "ln(exp(sqrt(2)))";
const RADICALS: &str = "3.5 + sqrt(2) + cbrt(7)";
const COMBINATORICS: &str = "combination(52; 5) / permutation(10; 3)";
const BARS: &str = "|2 - sqrt(9)| * 4!";

// =============================================================================
// Evaluation Benchmarks
// =============================================================================

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let evaluator = Evaluator::new().precision(50);

    group.bench_function("precedence_mix", |b| {
        b.iter(|| evaluator.evaluate(black_box("(2+3)*4 - 2^3")))
    });

    group.bench_function("division_50_digits", |b| {
        b.iter(|| evaluator.evaluate(black_box("1/7 + 1/13")))
    });

    group.bench_function("bars_and_factorial", |b| {
        b.iter(|| evaluator.evaluate(black_box(BARS)))
    });

    group.finish();
}

fn bench_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("functions");
    let degrees = Evaluator::new()
        .precision(50)
        .rounding(RoundingMode::HalfUp)
        .angle_mode(AngleMode::Deg);

    group.bench_function("trig_degrees", |b| {
        b.iter(|| degrees.evaluate(black_box(TRIG_DEG)))
    });

    group.bench_function("nested_functions", |b| {
        b.iter(|| degrees.evaluate(black_box(NESTED_FUNCTIONS)))
    });

    group.bench_function("radicals", |b| {
        b.iter(|| degrees.evaluate(black_box(RADICALS)))
    });

    group.bench_function("combinatorics", |b| {
        b.iter(|| degrees.evaluate(black_box(COMBINATORICS)))
    });

    group.finish();
}

fn bench_variables(c: &mut Criterion) {
    let mut group = c.benchmark_group("variables");
    let evaluator = Evaluator::new().precision(50);
    let mut vars = HashMap::new();
    vars.insert("x".to_string(), "4.25".to_string());

    group.bench_function("polynomial", |b| {
        b.iter(|| evaluator.evaluate_with(black_box(POLYNOMIAL), &vars))
    });

    group.bench_function("implicit_multiplication", |b| {
        b.iter(|| evaluator.evaluate_with(black_box(IMPLICIT), &vars))
    });

    group.finish();
}

fn bench_precision_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision_scaling");

    for digits in [20u32, 50, 100, 200] {
        let evaluator = Evaluator::new().precision(digits);
        group.bench_function(format!("sqrt_2_at_{digits}"), |b| {
            b.iter(|| evaluator.evaluate(black_box("sqrt(2)")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_arithmetic,
    bench_functions,
    bench_variables,
    bench_precision_scaling
);
criterion_main!(benches);
