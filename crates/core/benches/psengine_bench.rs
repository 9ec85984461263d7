//! Benchmarks for the PostScript calculator engine.
//!
//! Benchmark groups:
//! - `psengine_parse`: Parsing throughput for flat and nested programs
//! - `psengine_execute`: Evaluation of realistic Type 4 function bodies

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pscalc_core::function::PSFunction;
use pscalc_core::interp::PSEngine;

// =============================================================================
// Data Generation
// =============================================================================

/// Generate a flat program with N operations.
fn generate_flat_program(n: usize) -> Vec<u8> {
    let templates: &[&[u8]] = &[
        b"0.5 ", b"mul ", b"dup ", b"1 ", b"exch ", b"sub ", b"2 ", b"index ", b"add ", b"pop ",
    ];

    let mut data = Vec::with_capacity(n * 5 + 4);
    data.extend_from_slice(b"{ ");
    for i in 0..n {
        data.extend_from_slice(templates[i % templates.len()]);
    }
    data.extend_from_slice(b"}");
    data
}

/// Generate a program of `depth` nested conditionals.
fn generate_nested_program(depth: usize) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"{ ");
    for _ in 0..depth {
        data.extend_from_slice(b"dup 0.5 lt { ");
    }
    data.extend_from_slice(b"2 mul ");
    for _ in 0..depth {
        data.extend_from_slice(b"} if ");
    }
    data.extend_from_slice(b"}");
    data
}

/// Separation-to-CMYK tint transform as produced by common PDF writers.
const TINT_TRANSFORM: &[u8] = b"{ dup 0.84 mul exch 0 exch dup 0.44 mul exch 0.21 mul }";

/// Piecewise function with a conditional.
const PIECEWISE: &[u8] = b"{ dup 0.5 le { 2 mul } { 1 exch sub 2 mul 1 exch sub } ifelse }";

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("psengine_parse");

    for n in [100, 1_000, 10_000] {
        let data = generate_flat_program(n);
        group.bench_with_input(BenchmarkId::new("flat", n), &data, |b, data| {
            b.iter(|| {
                let mut engine = PSEngine::new();
                engine.parse(black_box(data)).unwrap();
                engine
            })
        });
    }

    for depth in [8, 64, 127] {
        let data = generate_nested_program(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &data, |b, data| {
            b.iter(|| {
                let mut engine = PSEngine::new();
                engine.parse(black_box(data)).unwrap();
                engine
            })
        });
    }

    group.finish();
}

fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("psengine_execute");

    let cmyk_range = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
    let mut tint = PSFunction::new(&[0.0, 1.0], &cmyk_range, TINT_TRANSFORM).unwrap();
    group.bench_function("tint_transform", |b| {
        b.iter(|| tint.call(black_box(&[0.6])).unwrap())
    });

    let mut piecewise = PSFunction::new(&[0.0, 1.0], &[0.0, 1.0], PIECEWISE).unwrap();
    group.bench_function("piecewise", |b| {
        b.iter(|| piecewise.call(black_box(&[0.7])).unwrap())
    });

    let mut nested = PSEngine::new();
    nested.parse(&generate_nested_program(127)).unwrap();
    group.bench_function("nested_127", |b| {
        b.iter(|| {
            nested.reset();
            nested.push(black_box(0.1));
            nested.execute().unwrap();
            nested.pop()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_execute);
criterion_main!(benches);
