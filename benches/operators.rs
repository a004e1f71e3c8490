//! Benchmarks for operator pipelines, grouping, and memoization.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all operator benchmarks
//! cargo bench --bench operators
//!
//! # Run a specific group
//! cargo bench --bench operators -- pipeline
//! cargo bench --bench operators -- lookup
//! cargo bench --bench operators -- memo
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sequin::adaptors::{filter, flat_map, map};
use sequin::{MemoMap, SequenceExt};

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn sample_data(size: usize) -> Vec<i64> {
    (0..size as i64).map(|n| n.wrapping_mul(2654435761)).collect()
}

// ==============================================================================
// Pipeline Benchmarks
// ==============================================================================

fn bench_filter_map_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/filter_map");
    for &size in SIZES {
        let data = sample_data(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let result: Vec<i64> = map(
                    filter(data.iter().copied(), |n| n % 3 == 0),
                    |n| n + 1,
                )
                .collect();
                black_box(result)
            });
        });
    }
    group.finish();
}

fn bench_flat_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/flat_map");
    for &size in SIZES {
        let data: Vec<i64> = sample_data(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let result: i64 = flat_map(data.iter().copied(), |n| [n, n ^ 1])
                    .fold_with(0i64, |acc, n| acc.wrapping_add(n));
                black_box(result)
            });
        });
    }
    group.finish();
}

fn bench_order_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/order_by");
    for &size in SIZES {
        let data = sample_data(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let result: Vec<i64> = data
                    .iter()
                    .copied()
                    .order_by_key(|n| n.rem_euclid(97))
                    .collect();
                black_box(result)
            });
        });
    }
    group.finish();
}

fn bench_short_circuit_terminals(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/terminals");
    let data = sample_data(10_000);

    group.bench_function("matches_any_early_hit", |b| {
        b.iter(|| black_box(data.iter().matches_any(|n| **n == data[5])));
    });

    group.bench_function("try_first_through_filter", |b| {
        b.iter(|| {
            black_box(
                filter(data.iter().copied(), |n| n % 7 == 0)
                    .try_first()
                    .ok(),
            )
        });
    });

    group.finish();
}

// ==============================================================================
// Grouping Benchmarks
// ==============================================================================

fn bench_lookup_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/build");
    for &size in SIZES {
        let data = sample_data(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let lookup = data.iter().copied().into_lookup(|n| n.rem_euclid(64));
                black_box(lookup)
            });
        });
    }
    group.finish();
}

fn bench_unique_map_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/unique_map");
    for &size in SIZES {
        // Enumerated keys are guaranteed unique.
        let data: Vec<(usize, i64)> = sample_data(size).into_iter().enumerate().collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let map = data
                    .iter()
                    .copied()
                    .into_unique_map_with(|(k, _)| *k, |(_, v)| v)
                    .unwrap();
                black_box(map)
            });
        });
    }
    group.finish();
}

// ==============================================================================
// Memoization Benchmarks
// ==============================================================================

fn bench_memo_hit_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo");

    group.bench_function("hit", |b| {
        let map: MemoMap<u64, u64> = MemoMap::new();
        map.get_or_compute(1, |k| k * k);
        b.iter(|| black_box(map.get_or_compute(1, |k| k * k)));
    });

    group.bench_function("miss_and_insert", |b| {
        b.iter(|| {
            let map: MemoMap<u64, u64> = MemoMap::with_capacity(64);
            for key in 0..64u64 {
                map.get_or_compute(key, |k| k.wrapping_mul(*k));
            }
            black_box(map.stats())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_map_pipeline,
    bench_flat_map,
    bench_order_by,
    bench_short_circuit_terminals,
    bench_lookup_build,
    bench_unique_map_build,
    bench_memo_hit_path,
);
criterion_main!(benches);
