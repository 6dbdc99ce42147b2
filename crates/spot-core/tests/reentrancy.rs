// File: crates/spot-core/tests/reentrancy.rs
// Purpose: Shared read-only inputs can be laid out from several threads at once with identical results.

use std::thread;

use spot_core::{build_sector, compute_grid, compute_viewport, to_canvas, CanvasSize, Color, Plot, SectorSpec, Series};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn plot_types_are_thread_safe() {
    assert_send_sync::<Plot>();
    assert_send_sync::<Series>();
    assert_send_sync::<spot_core::Frame>();
}

#[test]
fn concurrent_layout_is_deterministic() {
    let series: Vec<Series> = (0..4)
        .map(|k| Series::with_data(format!("s{k}"), (0..200).map(|i| (i as f64, (i as f64 * 0.1 + k as f64).sin()))))
        .collect();
    let mut plot = Plot::new();
    for s in &series {
        plot.push_series(s.clone().with_color(Color::OLIVE));
    }
    let canvas = CanvasSize::new(640.0, 480.0);
    let expected_view = compute_viewport(&series, None);
    let expected_frame = plot.render(canvas).expect("frame");

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..20 {
                    let v = compute_viewport(&series, None);
                    assert_eq!(v, expected_view);
                    let p = to_canvas(series[1].points[7], &v, canvas).expect("map");
                    assert!(p.x.is_finite() && p.y.is_finite());
                    assert!(compute_grid(canvas, 60.0, 60.0).is_some());
                    let _ = build_sector(&SectorSpec::default());
                    assert_eq!(plot.render(canvas).expect("frame"), expected_frame);
                }
            });
        }
    });
}
