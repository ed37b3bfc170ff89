//! Parser and printer benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench parse
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitch_rs::formula::Formula;
use fitch_rs::parser::{parse_formula, parse_str};
use fitch_rs::token::tokenize;
use fitch_rs::truth_table::TruthTable;

// ============================================================================
// Helper: balanced formulas over a fixed set of variables
// ============================================================================

/// A full binary tree of the given depth, cycling through all connectives.
fn build(depth: usize, counter: &mut usize) -> Formula {
    if depth == 0 {
        *counter += 1;
        return Formula::var(format!("x{}", *counter % 8));
    }
    let lhs = build(depth - 1, counter);
    let rhs = build(depth - 1, counter);
    match depth % 5 {
        0 => Formula::and(lhs, rhs),
        1 => Formula::or(lhs, Formula::not(rhs)),
        2 => Formula::implies(lhs, rhs),
        3 => Formula::iff(lhs, rhs),
        _ => Formula::and(Formula::not(lhs), rhs),
    }
}

fn sample(depth: usize) -> String {
    build(depth, &mut 0).to_string()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for depth in [4, 8, 12] {
        let input = sample(depth);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &input, |b, input| {
            b.iter(|| tokenize(input).unwrap());
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for depth in [4, 8, 12] {
        let input = sample(depth);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &input, |b, input| {
            b.iter(|| parse_str(input).unwrap());
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for depth in [4, 8, 12] {
        let formula = build(depth, &mut 0);
        group.bench_with_input(BenchmarkId::new("ascii", depth), &formula, |b, f| {
            b.iter(|| f.to_string());
        });
        group.bench_with_input(BenchmarkId::new("latex", depth), &formula, |b, f| {
            b.iter(|| f.to_display());
        });
    }
    group.finish();
}

fn bench_parse_formula(c: &mut Criterion) {
    let input = sample(8);
    c.bench_function("parse_formula/depth8", |b| b.iter(|| parse_formula(&input)));
}

fn bench_truth_table(c: &mut Criterion) {
    // 8 variables, 256 rows.
    let formula = build(6, &mut 0);
    c.bench_function("truth_table/8vars", |b| b.iter(|| TruthTable::new(&formula).unwrap().classify()));
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_render,
    bench_parse_formula,
    bench_truth_table
);
criterion_main!(benches);
