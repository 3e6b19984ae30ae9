//! Benchmark for collection operations and the memoize cache.
//!
//! Measures the cost of the `each`-based primitives against the composite
//! set operations built on top of them.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::collection::{Nested, difference, filter, flatten, intersection, map, reduce, shuffle};
use fnkit::decorator::memoize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

// =============================================================================
// Primitive Benchmarks
// =============================================================================

fn benchmark_primitives(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("primitives");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("map", size), &values, |bencher, values| {
            bencher.iter(|| black_box(map(values, |value: &i64| value * 2)));
        });

        group.bench_with_input(BenchmarkId::new("filter", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter(values, |value: &i64| value % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), &values, |bencher, values| {
            bencher.iter(|| black_box(reduce(values, |total, value| total + value, Some(0))));
        });
    }

    group.finish();
}

// =============================================================================
// Composite Benchmarks
// =============================================================================

fn benchmark_composites(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composites");

    for size in [10, 100, 500] {
        let left: Vec<i64> = (0..size).collect();
        let right: Vec<i64> = (0..size).step_by(2).collect();

        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(intersection(&[left.clone(), right.clone()])));
        });

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(difference(&left, &[right.clone()])));
        });

        group.bench_with_input(BenchmarkId::new("shuffle", size), &size, |bencher, _| {
            let mut rng = StdRng::seed_from_u64(17);
            bencher.iter(|| black_box(shuffle(&left, &mut rng)));
        });
    }

    let nested: Vec<Nested<i64>> = (0..100)
        .map(|index| Nested::sequence([Nested::leaf(index), Nested::sequence([Nested::leaf(-index)])]))
        .collect();
    group.bench_function("flatten_nested", |bencher| {
        bencher.iter(|| black_box(flatten(&nested)));
    });

    group.finish();
}

// =============================================================================
// Memoize Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    let square = memoize(|value: u64| value * value);
    let _ = square.call(12);
    group.bench_function("cache_hit", |bencher| {
        bencher.iter(|| black_box(square.call(black_box(12))));
    });

    group.bench_function("cache_miss", |bencher| {
        bencher.iter(|| {
            let fresh = memoize(|value: u64| value * value);
            black_box(fresh.call(black_box(12)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_composites,
    benchmark_memoize
);
criterion_main!(benches);
