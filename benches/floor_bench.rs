//! Benchmarks for the strided floor kernel.
//!
//! Compares a plain indexed loop with `sfloor` for contiguous, strided and
//! reversed layouts. With the default `parallel` feature the larger sizes
//! exercise the rayon split.
//!
//! Run with: cargo bench --bench floor_bench
//!           cargo bench --no-default-features --features simd --bench floor_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::time::Duration;
use strided_floor::{sfloor, sfloor_in_place};

fn make_random(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let v: f32 = rng.sample(StandardNormal);
            v * 100.0
        })
        .collect()
}

fn naive_floor(n: usize, x: &[f32], sx: usize, y: &mut [f32], sy: usize) {
    for i in 0..n {
        y[i * sy] = x[i * sx].floor();
    }
}

fn bench_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("sfloor_contiguous");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for n in [1usize << 8, 1 << 12, 1 << 16, 1 << 20] {
        group.throughput(Throughput::Elements(n as u64));
        let x = make_random(n, 42);
        let mut y = vec![0.0f32; n];

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, &n| {
            bench.iter(|| naive_floor(n, black_box(&x), 1, &mut y, 1))
        });
        group.bench_with_input(BenchmarkId::new("sfloor", n), &n, |bench, &n| {
            bench.iter(|| {
                sfloor(n as isize, black_box(&x), 1, &mut y, 1);
            })
        });
        group.bench_with_input(BenchmarkId::new("in_place", n), &n, |bench, &n| {
            let mut z = x.clone();
            bench.iter(|| {
                sfloor_in_place(n as isize, black_box(&mut z), 1);
            })
        });
    }
    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("sfloor_strided");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for n in [1usize << 12, 1 << 18] {
        group.throughput(Throughput::Elements(n as u64));
        let x = make_random(3 * n, 7);
        let mut y = vec![0.0f32; 2 * n];

        group.bench_with_input(BenchmarkId::new("naive_3_2", n), &n, |bench, &n| {
            bench.iter(|| naive_floor(n, black_box(&x), 3, &mut y, 2))
        });
        group.bench_with_input(BenchmarkId::new("sfloor_3_2", n), &n, |bench, &n| {
            bench.iter(|| {
                sfloor(n as isize, black_box(&x), 3, &mut y, 2);
            })
        });
        group.bench_with_input(BenchmarkId::new("sfloor_reversed", n), &n, |bench, &n| {
            bench.iter(|| {
                sfloor(n as isize, black_box(&x), -1, &mut y, 1);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contiguous, bench_strided);
criterion_main!(benches);
