//! Criterion benchmarks for the concrete engines.
//!
//! Measures raw `advance` throughput and the cost of the derived bounded and
//! real-valued draws for each engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use randshow_core::traits::{SeedableEngine, UniformRng};
use randshow_engines::{Lcg, Pcg32, Pcg64, SplitMix64, Xoshiro256PlusPlus};

const BATCH: u64 = 10_000;

fn bench_engine<R: SeedableEngine>(c: &mut Criterion) {
    let mut group = c.benchmark_group(R::NAME);
    group.throughput(Throughput::Elements(BATCH));

    let mut rng = R::from_seed_u64(42);
    group.bench_function("advance", |b| {
        b.iter(|| {
            for _ in 0..BATCH {
                black_box(rng.advance());
            }
        });
    });

    group.bench_function("next_u64_below_2000", |b| {
        b.iter(|| {
            for _ in 0..BATCH {
                black_box(rng.next_u64_below(black_box(2_000)));
            }
        });
    });

    group.bench_function("next_real", |b| {
        b.iter(|| {
            for _ in 0..BATCH {
                black_box(rng.next_real());
            }
        });
    });

    group.finish();
}

fn bench_all_engines(c: &mut Criterion) {
    bench_engine::<Lcg>(c);
    bench_engine::<Pcg32>(c);
    bench_engine::<Pcg64>(c);
    bench_engine::<SplitMix64>(c);
    bench_engine::<Xoshiro256PlusPlus>(c);
}

criterion_group!(benches, bench_all_engines);
criterion_main!(benches);
