use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdout_helpers::{L2Dist, Record};
use k_nn::{neighbors, KnnClassifier, NeighborPolicy};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

fn random_records(n: usize, seed: u64) -> Vec<Record<i64, f64>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Record::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(1..=3),
            )
        })
        .collect()
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    let query = Record::new(0.5, -0.5, 0);
    for &n in &[100usize, 1_000, 10_000] {
        let train = random_records(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &train, |b, train| {
            b.iter(|| neighbors(black_box(&query), train, 5, &L2Dist, NeighborPolicy::Strict))
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let train = random_records(1_000, 7);
    let test = random_records(200, 8);
    let classifier = KnnClassifier::new(4, train, L2Dist).unwrap();
    c.bench_function("predict_200_queries", |b| {
        b.iter(|| {
            test.iter()
                .map(|r| classifier.predict(black_box(r)).unwrap())
                .sum::<i64>()
        })
    });
}

criterion_group!(benches, bench_neighbors, bench_predict);
criterion_main!(benches);
