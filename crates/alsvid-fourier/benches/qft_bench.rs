//! Benchmarks for the transform generators
//!
//! Run with: cargo bench -p alsvid-fourier

use alsvid_fourier::{iqft_width, qft_width};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark forward transform generation
fn bench_qft(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft");

    for width in &[4u32, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("width", width), width, |b, &width| {
            b.iter(|| black_box(qft_width(black_box(width)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark inverse transform generation
fn bench_iqft(c: &mut Criterion) {
    let mut group = c.benchmark_group("iqft");

    for width in &[4u32, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("width", width), width, |b, &width| {
            b.iter(|| black_box(iqft_width(black_box(width)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_qft, bench_iqft);

criterion_main!(benches);
