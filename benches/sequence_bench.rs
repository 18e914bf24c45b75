//! Benchmark for lazy cursor pipelines.
//!
//! Compares lambseq's cursor adapters against the equivalent std iterator
//! chains, and measures the buffering cost of forked branches.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambseq::sequence::{iterate, normalize, Sequence};
use std::hint::black_box;

// =============================================================================
// Map / Filter / Fold
// =============================================================================

fn benchmark_map_filter_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_fold");

    for size in [100, 1000, 10000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Sequence", size), &values, |bencher, values| {
            bencher.iter(|| {
                let total = normalize(values.clone())
                    .map(|value| value * 3)
                    .filter(|value| value % 2 == 0)
                    .fold(0_i64, |total, value| total + value);
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &values, |bencher, values| {
            bencher.iter(|| {
                let total: i64 = values
                    .clone()
                    .into_iter()
                    .map(|value| value * 3)
                    .filter(|value| value % 2 == 0)
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Infinite Sources
// =============================================================================

fn benchmark_infinite_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("infinite_take");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("iterate", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let values = iterate(0_u64, |value| value + 1).take(size).collect_values();
                black_box(values)
            });
        });

        group.bench_with_input(BenchmarkId::new("successors", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let values: Vec<u64> = std::iter::successors(Some(0_u64), |value| Some(value + 1))
                    .take(size)
                    .collect();
                black_box(values)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Text and Grouping
// =============================================================================

fn benchmark_group_text(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_text");

    for size in [100, 1000, 10000] {
        let text: String = "aabbbc".chars().cycle().take(size).collect();

        group.bench_with_input(BenchmarkId::new("group", size), &text, |bencher, text| {
            bencher.iter(|| black_box(normalize(text.as_str()).group().count()));
        });
    }

    group.finish();
}

// =============================================================================
// Forked Branches
// =============================================================================

fn benchmark_partition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partition");

    for size in [100, 1000, 10000] {
        let values: Vec<u32> = (0..size).collect();

        // Draining one branch first buffers every entry for the other
        group.bench_with_input(BenchmarkId::new("sequential", size), &values, |bencher, values| {
            bencher.iter(|| {
                let (even, odd) = normalize(values.clone()).partition(|value| value % 2 == 0);
                black_box((even.count(), odd.count()))
            });
        });

        group.bench_with_input(BenchmarkId::new("interleaved", size), &values, |bencher, values| {
            bencher.iter(|| {
                let (even, odd) = normalize(values.clone()).partition(|value| value % 2 == 0);
                let pairs = even.zip(odd).count();
                black_box(pairs)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter_fold,
    benchmark_infinite_take,
    benchmark_group_text,
    benchmark_partition
);
criterion_main!(benches);
