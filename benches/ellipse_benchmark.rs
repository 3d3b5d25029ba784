#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for ellipse outline generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_outline::prelude::*;

fn circle_outline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_outline");

    for size in [16, 64, 256, 1_024, 4_096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| ellipse_outline(black_box(Point::ORIGIN), black_box(Point::new(size, size))));
        });
    }

    group.finish();
}

fn tall_ellipse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tall_ellipse_outline");

    // Tall narrow boxes exercise the pole gap-closing pass.
    for height in [64, 512, 4_096] {
        group.bench_with_input(BenchmarkId::from_parameter(height), &height, |b, &height| {
            b.iter(|| ellipse_outline(black_box(Point::ORIGIN), black_box(Point::new(5, height))));
        });
    }

    group.finish();
}

fn unique_outline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_outline");

    for size in [64, 1_024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                ellipse_outline_unique(black_box(Point::ORIGIN), black_box(Point::new(size, size)))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    circle_outline_benchmark,
    tall_ellipse_benchmark,
    unique_outline_benchmark
);
criterion_main!(benches);
