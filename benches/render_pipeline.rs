//! Serial vs. rayon rendering of the default view.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fractal_navigator::{ExplorerConfig, Viewport, render, render_serial};
use std::hint::black_box;

const SIZES: &[(u32, u32, &str)] = &[(320, 168, "320x168"), (960, 504, "960x504")];

fn bench_render(c: &mut Criterion) {
    let viewport = match Viewport::new(&ExplorerConfig::default()) {
        Ok(viewport) => viewport,
        Err(err) => panic!("default config is invalid: {err}"),
    };

    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    for &(width, height, name) in SIZES {
        group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));

        group.bench_with_input(BenchmarkId::new("serial", name), &viewport, |b, viewport| {
            b.iter(|| render_serial(black_box(viewport), width, height))
        });

        group.bench_with_input(BenchmarkId::new("rayon", name), &viewport, |b, viewport| {
            b.iter(|| render(black_box(viewport), width, height))
        });
    }

    group.finish();
}

fn bench_deep_zoom(c: &mut Criterion) {
    let mut viewport = match Viewport::new(&ExplorerConfig::default()) {
        Ok(viewport) => viewport,
        Err(err) => panic!("default config is invalid: {err}"),
    };
    viewport.adjust_iterations(900);

    c.bench_function("render/rayon_budget_1000_320x168", |b| {
        b.iter(|| render(black_box(&viewport), 320, 168))
    });
}

criterion_group!(benches, bench_render, bench_deep_zoom);
criterion_main!(benches);
