use criterion::{Criterion, criterion_group, criterion_main};
use plot_grid::api::{
    AxisConfig, GridConfig, GridOverlay, GridUpdate, LinesGroupConfig, TickRequest,
    computed_ticks,
};
use plot_grid::core::{ContainerSize, Orientation, ValueRange, nice_step};
use plot_grid::render::MemoryRenderer;
use std::hint::black_box;

fn bench_nice_step(c: &mut Criterion) {
    c.bench_function("nice_step", |b| {
        b.iter(|| {
            let _ = nice_step(black_box(0.037)).expect("step");
        })
    });
}

fn bench_linear_ticks_4k(c: &mut Criterion) {
    let request = TickRequest {
        range: ValueRange::from_bounds(-12_345.6, 98_765.4).expect("valid range"),
        logarithmic: false,
        orientation: Orientation::Horizontal,
        extent_px: 3840.0,
    };

    c.bench_function("linear_ticks_4k", |b| {
        b.iter(|| {
            let _ = computed_ticks(black_box(request)).expect("ticks");
        })
    });
}

fn bench_log_ticks_dense(c: &mut Criterion) {
    let request = TickRequest {
        range: ValueRange::from_bounds(1e-3, 1e6).expect("valid range"),
        logarithmic: true,
        orientation: Orientation::Vertical,
        extent_px: 2160.0,
    };

    c.bench_function("log_ticks_dense", |b| {
        b.iter(|| {
            let _ = computed_ticks(black_box(request)).expect("ticks");
        })
    });
}

fn bench_reconcile_pass(c: &mut Criterion) {
    let config = GridConfig::new()
        .with_lines_group(LinesGroupConfig::new(Orientation::Horizontal, 0.0, 1_000.0))
        .with_lines_group(
            LinesGroupConfig::new(Orientation::Vertical, 1.0, 1e4).with_logarithmic(true),
        )
        .with_axis(AxisConfig::new("x"))
        .with_axis(AxisConfig::new("y"));
    let mut overlay = GridOverlay::new(
        MemoryRenderer::new(ContainerSize::new(1920.0, 1080.0)),
        config,
    )
    .expect("overlay init");

    c.bench_function("reconcile_pass_two_groups", |b| {
        b.iter(|| {
            overlay.update(black_box(GridUpdate::new())).expect("update");
        })
    });
}

criterion_group!(
    benches,
    bench_nice_step,
    bench_linear_ticks_4k,
    bench_log_ticks_dense,
    bench_reconcile_pass
);
criterion_main!(benches);
