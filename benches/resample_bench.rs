use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use resamp::{bootstrap, permutation_test, Confidence, Mean, Sample, SpearmanR};
use std::hint::black_box;

const RESAMPLES: usize = 1_000;

fn xrng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(0x5eed)
}

/// 1. SINGLE-SAMPLE BOOTSTRAP OF THE MEAN (scaling over sample size)
fn bench_bootstrap_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap/mean");
    group.throughput(Throughput::Elements(RESAMPLES as u64));

    for &size in &[100, 1_000, 10_000] {
        let sample: Sample<f64> = (0..size).map(|i| f64::from(i % 100)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &sample, |b, sample| {
            b.iter(|| {
                black_box(
                    bootstrap(
                        black_box(sample),
                        &Mean,
                        RESAMPLES,
                        Confidence::P95,
                        xrng(),
                    )
                    .unwrap(),
                )
            })
        });
    }
    group.finish();
}

/// 2. PERMUTATION TEST WITH SPEARMAN (rank computation dominates)
fn bench_permutation_spearman(c: &mut Criterion) {
    let x: Sample<f64> = (0..200).map(|i| f64::from(i % 83)).collect();
    let y: Sample<f64> = (0..200).map(|i| f64::from((i * 7) % 83)).collect();

    c.bench_function("permutation/spearman", |b| {
        b.iter(|| {
            black_box(
                permutation_test(
                    black_box(&x),
                    black_box(&y),
                    &SpearmanR,
                    RESAMPLES,
                    Confidence::P95,
                    xrng(),
                )
                .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_bootstrap_mean, bench_permutation_spearman);
criterion_main!(benches);
