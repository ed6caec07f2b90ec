use criterion::{Criterion, criterion_group, criterion_main};
use linechart_core::core::{
    Coordinator, DataDrawable, DataSeries, Dimension, LineView, LogScale, Point, Rect, Scale,
    ScaleConfig,
};
use linechart_core::render::NullRenderer;
use std::hint::black_box;

fn bench_log_scale_round_trip(c: &mut Criterion) {
    let scale = LogScale::new((1e-3, 1e9), (0.0, 1920.0));

    c.bench_function("log_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.scale(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_drawable_transform_10k(c: &mut Criterion) {
    let mut coordinator = Coordinator::new();
    coordinator.set_dom_container_dimension(Dimension::new(1920.0, 1080.0));
    coordinator.set_view_box_rect(Rect::new(0.0, -50.0, 10_000.0, 100.0));

    let points: Vec<Point> = (0..10_000_i32)
        .map(|i| {
            let x = f64::from(i);
            Point::new(x, (x * 0.01).sin() * 40.0)
        })
        .collect();

    let mut drawable = DataDrawable::new(LineView::default());
    drawable.set_layout_rect(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    drawable.set_data(vec![DataSeries::new("sine", points)]);
    let mut renderer = NullRenderer::default();

    c.bench_function("drawable_transform_10k", |b| {
        b.iter(|| {
            drawable.clear_coordinate_identifier();
            drawable
                .redraw(black_box(&coordinator), &mut renderer)
                .expect("redraw should succeed");
        })
    });
}

fn bench_log_extent_with_outliers(c: &mut Criterion) {
    let scale = LogScale::with_config(ScaleConfig::default().with_ignore_outlier(true))
        .expect("valid config");
    let values: Vec<f64> = (1..=10_000_i32)
        .map(|i| 10_f64.powf(f64::from(i % 97) / 8.0))
        .collect();

    c.bench_function("log_extent_of_values_10k_outliers", |b| {
        b.iter(|| {
            let _ = scale.extent_of_values(black_box(&values));
        })
    });
}

fn bench_log_ticks(c: &mut Criterion) {
    let scale = LogScale::new((1e-6, 1e6), (0.0, 1.0));

    c.bench_function("log_ticks_twelve_decades", |b| {
        b.iter(|| {
            let _ = black_box(&scale).ticks().count();
        })
    });
}

criterion_group!(
    benches,
    bench_log_scale_round_trip,
    bench_drawable_transform_10k,
    bench_log_extent_with_outliers,
    bench_log_ticks
);
criterion_main!(benches);
