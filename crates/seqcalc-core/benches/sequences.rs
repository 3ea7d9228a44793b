//! Criterion benchmarks for sequence generation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use seqcalc_core::{compute, SequenceRequest};

fn bench_kinds(c: &mut Criterion) {
    let counts: Vec<i64> = vec![10, 100, 1_000];

    let mut group = c.benchmark_group("Arithmetic");
    for &n in &counts {
        let request = SequenceRequest::arithmetic(1.0, 0.5, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &request, |b, r| {
            b.iter(|| compute(r).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Geometric");
    for &n in &counts {
        let request = SequenceRequest::geometric(1.0, 1.01, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &request, |b, r| {
            b.iter(|| compute(r).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kinds);
criterion_main!(benches);
