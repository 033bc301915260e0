//! Criterion benchmarks for the sampling algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use randshow_engines::Xoshiro256PlusPlus;
use randshow_sampling::distributions::{Benford, Zipf};
use randshow_sampling::seq::{sample_iter, shuffle};

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    let mut rng = Xoshiro256PlusPlus::from_seed(42);

    for len in [16usize, 1_024, 65_536] {
        let mut items: Vec<u32> = (0..len as u32).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| shuffle(&mut rng, black_box(&mut items)));
        });
    }
    group.finish();
}

fn bench_reservoir(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_iter");
    let mut rng = Xoshiro256PlusPlus::from_seed(42);

    for n in [1_000u64, 1_000_000, 1_000_000_000] {
        group.bench_with_input(BenchmarkId::new("k10", n), &n, |b, &n| {
            b.iter(|| black_box(sample_iter(&mut rng, 0..n, 10)));
        });
    }
    group.finish();
}

fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let mut rng = Xoshiro256PlusPlus::from_seed(42);

    let zipf = Zipf::new(1_000, 1.1).unwrap();
    group.bench_function("zipf_1000", |b| b.iter(|| black_box(zipf.draw(&mut rng))));

    let benford = Benford::default();
    group.bench_function("benford_10", |b| {
        b.iter(|| black_box(benford.draw(&mut rng)))
    });
    group.finish();
}

criterion_group!(benches, bench_shuffle, bench_reservoir, bench_distributions);
criterion_main!(benches);
