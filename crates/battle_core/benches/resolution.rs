//! Resolution benchmarks for battle_core.
//!
//! Run with: `cargo bench -p battle_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use battle_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn armies(whole: u64, config: &TroopConfig) -> (Troops, Troops) {
    let factor = config.normalization_factor;
    let attacker = Troops::from_whole(whole, whole / 2, whole / 3, factor).unwrap();
    let defender = Troops::from_whole(whole / 3, whole, whole / 2, factor).unwrap();
    (attacker, defender)
}

/// Strength comparison alone.
pub fn strength_benchmark(c: &mut Criterion) {
    let config = TroopConfig::default();
    let (attacker, defender) = armies(10_000, &config);

    c.bench_function("strength_against", |b| {
        b.iter(|| strength_against(black_box(&attacker), black_box(&defender), &config))
    });
}

/// Full resolution across army sizes.
pub fn resolution_benchmark(c: &mut Criterion) {
    let config = TroopConfig::default();
    let mut group = c.benchmark_group("resolve");

    for whole in [10u64, 1_000, 100_000] {
        let (attacker, defender) = armies(whole, &config);
        let battle = Battle::at_full_health(attacker, defender, config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(whole), &battle, |b, battle| {
            b.iter(|| black_box(battle).resolve())
        });
    }

    group.finish();
}

criterion_group!(benches, strength_benchmark, resolution_benchmark);
criterion_main!(benches);
