use criterion::{criterion_group, criterion_main, Criterion, black_box};
use spot_core::{CanvasSize, Color, Function, Plot};

fn build_plot(n: usize) -> Plot {
    let mut plot = Plot::new();
    let end = n as f64 * 0.01;
    plot.add_series(Function::Sin.sample(0.0, end, n), Color::CADET_BLUE, 1.0, "sin");
    plot.add_series(Function::Cos.sample(0.0, end, n), Color::ORANGE, 1.0, "cos");
    plot
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_render");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("two_series_{n}"), |b| {
            let plot = build_plot(n);
            let canvas = CanvasSize::new(800.0, 500.0);
            b.iter(|| black_box(plot.render(canvas)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
