use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{Criterion, criterion_group, criterion_main};
use termbrot::core::data::complex::Complex;
use termbrot::core::data::grid_size::GridSize;
use termbrot::{FrameRenderer, Viewport, render_frame_serial};

fn bench_render(c: &mut Criterion) {
    let grid = GridSize::new(200, 60).expect("valid grid");
    let viewports = [
        ("start", Viewport::default()),
        (
            "seahorse_valley",
            Viewport::new(Complex::new(-0.743_643, 0.131_825), 0.001, 2048)
                .expect("valid viewport"),
        ),
    ];
    let pooled = FrameRenderer::new(None).expect("render pool");
    let single = FrameRenderer::new(NonZeroUsize::new(1)).expect("render pool");

    let mut group = c.benchmark_group("render_frame");

    for (name, viewport) in &viewports {
        group.bench_function(format!("{name}/serial"), |b| {
            b.iter(|| render_frame_serial(black_box(viewport), black_box(grid)));
        });
        group.bench_function(format!("{name}/pool_1"), |b| {
            b.iter(|| single.render(black_box(viewport), black_box(grid)));
        });
        group.bench_function(format!("{name}/pool_{}", pooled.workers()), |b| {
            b.iter(|| pooled.render(black_box(viewport), black_box(grid)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
