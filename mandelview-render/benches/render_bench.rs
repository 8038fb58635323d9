use criterion::{criterion_group, criterion_main, Criterion};

use mandelview_core::{Complex, ComplexPlane, EvaluatorConfig, Raster};
use mandelview_render::{render, render_parallel, ColorMapper};

fn bench_default_frame(c: &mut Criterion) {
    let plane = ComplexPlane::default();
    let evaluator = EvaluatorConfig::default();
    let raster = Raster::default();
    let mapper = ColorMapper::default();

    c.bench_function("frame_800x500_sequential", |b| {
        b.iter(|| render(&plane, &evaluator, raster, &mapper));
    });
    c.bench_function("frame_800x500_parallel", |b| {
        b.iter(|| render_parallel(&plane, &evaluator, raster, &mapper));
    });
}

fn bench_deep_budget(c: &mut Criterion) {
    let mut plane = ComplexPlane::default();
    plane.recenter_and_zoom(Complex::new(-0.745, 0.11)).unwrap();
    let evaluator = EvaluatorConfig::new(500).unwrap();
    let raster = Raster::new(256, 160).unwrap();
    let mapper = ColorMapper::default();

    c.bench_function("frame_256x160_500iter", |b| {
        b.iter(|| render(&plane, &evaluator, raster, &mapper));
    });
}

criterion_group!(benches, bench_default_frame, bench_deep_budget);
criterion_main!(benches);
