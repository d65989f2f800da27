use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use affinity_core::config::ScoringConfig;
use affinity_scoring::ScoringEngine;

fn bench_score_population(c: &mut Criterion) {
    let engine = ScoringEngine::new(ScoringConfig::default()).unwrap();
    let mut group = c.benchmark_group("score_population");

    for &n in &[10usize, 50, 200] {
        let profiles = test_fixtures::dense_population(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &profiles, |b, profiles| {
            b.iter(|| engine.score_population(black_box(profiles)));
        });
    }
    group.finish();
}

fn bench_score_pair(c: &mut Criterion) {
    let engine = ScoringEngine::new(ScoringConfig::default()).unwrap();
    let profiles = test_fixtures::dense_population(2);

    c.bench_function("score_pair", |b| {
        b.iter(|| engine.score_pair(black_box(&profiles[0]), black_box(&profiles[1])));
    });
}

criterion_group!(benches, bench_score_population, bench_score_pair);
criterion_main!(benches);
