//! Criterion benchmarks for the load optimizer.
//!
//! Measures optimize time for each search across the candidate counts it
//! serves, to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package smartload-solver
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use smartload_core::Strategy;
use smartload_core::test_support::standard_truck;
use smartload_solver::test_support::forced_optimizer;


use bench_support::{BENCHMARK_SEED, generate_orders};

/// Candidate counts for branch-and-bound.
const EXACT_SIZES: &[usize] = &[10, 15, 18];

/// Candidate counts for dense enumeration.
const BITMASK_SIZES: &[usize] = &[16, 18, 20, 22];

fn bench_strategy(c: &mut Criterion, strategy: Strategy, sizes: &[usize]) {
    let mut group = c.benchmark_group(format!("optimize/{strategy}"));
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    let optimizer = forced_optimizer(strategy);
    let capacity = standard_truck().capacity;

    for &size in sizes {
        let orders = generate_orders(size, BENCHMARK_SEED);
        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("candidates", size), &orders, |b, orders| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking select performance, result is intentionally discarded"
                )]
                let _ = optimizer.select(capacity, orders);
            });
        });
    }

    group.finish();
}

fn bench_backtracking(c: &mut Criterion) {
    bench_strategy(c, Strategy::ExactBacktracking, EXACT_SIZES);
}

fn bench_bitmask(c: &mut Criterion) {
    bench_strategy(c, Strategy::BitmaskEnumeration, BITMASK_SIZES);
}

criterion_group!(benches, bench_backtracking, bench_bitmask);
criterion_main!(benches);
