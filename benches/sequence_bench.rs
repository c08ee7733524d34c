//! Benchmark for the sequence operations.
//!
//! Compares each operation against the hand-written iterator chain it
//! replaces to evaluate the overhead (if any) of the abstraction.

use collection_ops::sequence::{all, any, filter, filter_cloned, map, reduce};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn numbers(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

// =============================================================================
// Any / All Benchmarks
// =============================================================================

fn benchmark_quantifiers(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("quantifiers");

    for size in SIZES {
        let values = numbers(size);
        group.throughput(Throughput::Elements(size as u64));

        // Worst case: no element matches, so the whole sequence is visited
        group.bench_with_input(BenchmarkId::new("any", size), &values, |bencher, values| {
            bencher.iter(|| any(black_box(values), |value| *value == u64::MAX));
        });

        group.bench_with_input(
            BenchmarkId::new("iterator_any", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(values).iter().any(|value| *value == u64::MAX));
            },
        );

        group.bench_with_input(BenchmarkId::new("all", size), &values, |bencher, values| {
            bencher.iter(|| all(black_box(values), |value| *value < u64::MAX));
        });

        group.bench_with_input(
            BenchmarkId::new("iterator_all", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(values).iter().all(|value| *value < u64::MAX));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Map Benchmarks
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in SIZES {
        let values = numbers(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("map", size), &values, |bencher, values| {
            bencher.iter(|| map(black_box(values), |value| value * 2));
        });

        group.bench_with_input(
            BenchmarkId::new("iterator_map_collect", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    black_box(values)
                        .iter()
                        .map(|value| value * 2)
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Filter Benchmarks
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in SIZES {
        let values = numbers(size);
        group.throughput(Throughput::Elements(size as u64));

        // filter consumes its input, so each iteration starts from a fresh clone
        group.bench_with_input(
            BenchmarkId::new("filter", size),
            &values,
            |bencher, values| {
                bencher.iter_batched(
                    || values.clone(),
                    |input| filter(input, |value| value % 3 == 0),
                    criterion::BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("filter_cloned", size),
            &values,
            |bencher, values| {
                bencher.iter(|| filter_cloned(black_box(values), |value| value % 3 == 0));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("iterator_filter_collect", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    black_box(values)
                        .iter()
                        .filter(|value| *value % 3 == 0)
                        .copied()
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Reduce Benchmarks
// =============================================================================

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in SIZES {
        let values = numbers(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reduce", size), &values, |bencher, values| {
            bencher.iter(|| reduce(black_box(values), |sum, value, _, _| sum + value, 0u64));
        });

        group.bench_with_input(
            BenchmarkId::new("iterator_fold", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(values).iter().fold(0u64, |sum, value| sum + value));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_quantifiers,
    benchmark_map,
    benchmark_filter,
    benchmark_reduce
);
criterion_main!(benches);
