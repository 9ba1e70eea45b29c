//! Benchmark for control structures: Optional, Either and Lazy.
//!
//! Measures the overhead of fpkit's value wrappers over plain `Option` and
//! the cost of shared asynchronous memoization.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpkit::control::{Either, Lazy, Optional};
use std::hint::black_box;

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    group.bench_function("optional_map_filter_or_else", |bencher| {
        bencher.iter(|| {
            let result = Optional::of(black_box(21))
                .map(|x| x * 2)
                .filter(|x| *x > 10)
                .flat_map(|x| x.checked_add(1))
                .or_else(0);
            black_box(result)
        });
    });

    group.bench_function("option_map_filter_unwrap_or", |bencher| {
        bencher.iter(|| {
            let result = Some(black_box(21))
                .map(|x| x * 2)
                .filter(|x| *x > 10)
                .and_then(|x: i32| x.checked_add(1))
                .unwrap_or(0);
            black_box(result)
        });
    });

    group.bench_function("optional_squash_nested", |bencher| {
        bencher.iter(|| {
            let nested = Optional::of(Optional::of(black_box(7)));
            black_box(nested.flatten().or_else(0))
        });
    });

    group.finish();
}

// =============================================================================
// Either Benchmarks
// =============================================================================

fn benchmark_either_proceed(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_proceed");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("proceed_right", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut either: Either<String, i64> = Either::right(black_box(0));
                for _ in 0..depth {
                    either = either.proceed_right(|value| {
                        if value < 0 {
                            Either::left("negative".to_string())
                        } else {
                            Either::right(value + 1)
                        }
                    });
                }
                black_box(either)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Lazy Benchmarks
// =============================================================================

fn benchmark_lazy_get_value(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("lazy_get_value");

    group.bench_function("initial_evaluation", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let lazy = Lazy::create(|| (0..100_u64).sum::<u64>());
            black_box(lazy.get_value().await)
        });
    });

    group.bench_function("cached_access", |bencher| {
        let lazy = Lazy::create(|| (0..100_u64).sum::<u64>());
        runtime.block_on(lazy.get_value());
        bencher.to_async(&runtime).iter(|| {
            let lazy = lazy.clone();
            async move { black_box(lazy.get_value().await) }
        });
    });

    for length in [1, 10, 50] {
        group.bench_with_input(BenchmarkId::new("chain_length", length), &length, |bencher, &length| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut lazy = Lazy::of(0_u64);
                for _ in 0..length {
                    lazy = lazy.chain(|value| value + 1);
                }
                black_box(lazy.get_value().await)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_either_proceed,
    benchmark_lazy_get_value
);

criterion_main!(benches);
