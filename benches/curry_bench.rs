//! Benchmark for currying: direct calls against typed and erased curried calls.
//!
//! Measures the overhead of fnkit's curried wrappers over calling the target.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::curry::{Apply, curry, curry_n};
use std::hint::black_box;

fn add_three(first: i64, second: i64, third: i64) -> i64 {
    first + second + third
}

fn add_three_array([first, second, third]: [i64; 3]) -> i64 {
    first + second + third
}

// =============================================================================
// Full application
// =============================================================================

fn benchmark_full_application(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("full_application");

    group.bench_function("direct", |bencher| {
        bencher.iter(|| add_three(black_box(1), black_box(2), black_box(3)));
    });

    let typed = curry(add_three);
    group.bench_function("typed", |bencher| {
        bencher.iter(|| typed.apply((black_box(1), black_box(2), black_box(3))));
    });

    let erased = curry_n(add_three_array);
    group.bench_function("erased", |bencher| {
        bencher.iter(|| erased.apply([black_box(1), black_box(2), black_box(3)]).complete());
    });

    group.finish();
}

// =============================================================================
// Partial application
// =============================================================================

fn benchmark_partial_application(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_application");

    group.bench_function("typed_one_at_a_time", |bencher| {
        let curried = curry(add_three);
        bencher.iter(|| {
            curried
                .apply((black_box(1),))
                .apply((black_box(2),))
                .apply((black_box(3),))
        });
    });

    group.bench_function("erased_one_at_a_time", |bencher| {
        let curried = curry_n(add_three_array);
        bencher.iter(|| {
            curried
                .apply([black_box(1)])
                .partial()
                .and_then(|next| next.apply([black_box(2)]).partial())
                .and_then(|next| next.apply([black_box(3)]).complete())
        });
    });

    group.finish();
}

// =============================================================================
// Reusing a partial application
// =============================================================================

fn benchmark_reuse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_reuse");

    for size in [10_i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("typed", size), &size, |bencher, &size| {
            let add_to_base = curry(add_three).apply((100, 10));
            bencher.iter(|| (0..size).map(|value| add_to_base.apply((value,))).sum::<i64>());
        });

        group.bench_with_input(BenchmarkId::new("erased", size), &size, |bencher, &size| {
            let add_to_base = curry_n(add_three_array)
                .apply([100, 10])
                .partial()
                .expect("one argument pending");
            bencher.iter(|| {
                (0..size)
                    .filter_map(|value| add_to_base.apply([value]).complete())
                    .sum::<i64>()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_full_application,
    benchmark_partial_application,
    benchmark_reuse
);
criterion_main!(benches);
