//! Performance measurement for maze growth across the three policies

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use torusmaze::algorithm::executor::{EngineConfig, grow_maze};
use torusmaze::algorithm::policy::AlgorithmKind;

/// Measures carve throughput of each policy on a 50x50 torus
fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow_maze");

    for algorithm in [
        AlgorithmKind::DepthFirst,
        AlgorithmKind::RandomFrontier,
        AlgorithmKind::Hybrid,
    ] {
        let config = EngineConfig {
            width: 50,
            height: 50,
            algorithm,
            ..EngineConfig::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &config,
            |b, config| {
                b.iter(|| {
                    let (grid, events) = grow_maze(black_box(config));
                    black_box((grid, events));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
