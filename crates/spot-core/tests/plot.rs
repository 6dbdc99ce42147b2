// File: crates/spot-core/tests/plot.rs
// Purpose: Validate the plot facade: mutation, lookup errors, fixed bounds and frame building.

use std::f64::consts::FRAC_PI_2;

use spot_core::{
    compute_viewport, CanvasSize, Color, Plot, PlotError, PlotOptions, Point, Primitive, SectorSpec, Series,
    SeriesRef, Viewport,
};

fn line_plot() -> Plot {
    let mut plot = Plot::new();
    plot.add_series(vec![(0.0, 0.0), (4.0, 2.0)], Color::ORANGE, 2.0, "line");
    plot
}

#[test]
fn adding_series_recomputes_bounds_and_requests_redraw() {
    let mut plot = Plot::new();
    assert!(plot.take_redraw_request());
    assert!(!plot.take_redraw_request());
    let before = plot.revision();

    plot.add_series(vec![(1.0, 1.0), (3.0, 5.0)], Color::BLACK, 1.0, "a");
    assert_eq!(plot.viewport(), Viewport::new(1.0, 3.0, 1.0, 5.0));
    assert!(plot.revision() > before);
    assert!(plot.take_redraw_request());
}

#[test]
fn remove_by_index_and_name() {
    let mut plot = line_plot();
    plot.add_series(vec![(10.0, 10.0)], Color::MAROON, 1.0, "dot");

    let removed = plot.remove_series("dot").expect("named series");
    assert_eq!(removed.name, "dot");
    assert_eq!(plot.viewport(), Viewport::new(0.0, 4.0, 0.0, 2.0));

    plot.remove_series(0usize).expect("indexed series");
    assert!(plot.series().is_empty());
    assert_eq!(plot.viewport(), Viewport::default());
}

#[test]
fn missing_targets_report_not_found() {
    let mut plot = line_plot();
    assert_eq!(plot.remove_series(3usize).unwrap_err(), PlotError::NotFound(SeriesRef::Index(3)));
    assert_eq!(
        plot.add_points(vec![(1.0, 1.0)], "nope").unwrap_err(),
        PlotError::NotFound(SeriesRef::Name("nope".into()))
    );
    assert!(matches!(plot.remove_points(&[Point::new(0.0, 0.0)], 9usize), Err(PlotError::NotFound(_))));
    assert_eq!(plot.series().len(), 1);
}

#[test]
fn name_lookup_picks_first_match() {
    let mut plot = Plot::new();
    plot.add_series(vec![(0.0, 0.0)], Color::BLACK, 1.0, "dup");
    plot.add_series(vec![(1.0, 1.0)], Color::OLIVE, 1.0, "dup");
    plot.add_points(vec![(5.0, 5.0)], "dup").unwrap();
    assert_eq!(plot.series()[0].len(), 2);
    assert_eq!(plot.series()[1].len(), 1);
}

#[test]
fn add_and_remove_points_update_bounds() {
    let mut plot = line_plot();
    plot.add_points(vec![(8.0, -2.0)], "line").unwrap();
    assert_eq!(plot.viewport(), Viewport::new(0.0, 8.0, -2.0, 2.0));

    let removed = plot.remove_points(&[Point::new(8.0, -2.0), Point::new(99.0, 99.0)], 0usize).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(plot.viewport(), Viewport::new(0.0, 4.0, 0.0, 2.0));
}

#[test]
fn remove_points_drops_every_duplicate() {
    let mut plot = Plot::new();
    plot.add_series(vec![(1.0, 1.0), (2.0, 2.0), (1.0, 1.0), (3.0, 0.0)], Color::BLACK, 1.0, "d");
    assert_eq!(plot.remove_points(&[Point::new(1.0, 1.0)], "d").unwrap(), 2);
    assert_eq!(plot.series()[0].points, vec![Point::new(2.0, 2.0), Point::new(3.0, 0.0)]);
}

#[test]
fn clear_resets_to_empty_viewport() {
    let mut plot = line_plot();
    plot.clear_series();
    assert!(plot.series().is_empty());
    assert_eq!(plot.viewport(), Viewport::default());
}

#[test]
fn fixed_bounds_are_normalized_and_override_data() {
    let mut plot = line_plot();
    plot.fix_bounds(10.0, 5.0, -10.0, -5.0);
    assert!(plot.is_fixed());
    assert_eq!(plot.viewport(), Viewport::new(-10.0, 10.0, -5.0, 5.0));

    plot.add_series(vec![(100.0, 100.0)], Color::BLACK, 1.0, "far");
    assert_eq!(plot.viewport(), Viewport::new(-10.0, 10.0, -5.0, 5.0));
}

#[test]
fn unfix_fix_unfix_restores_auto_bounds() {
    let mut plot = line_plot();
    let auto = compute_viewport(plot.series(), None);

    plot.unfix_bounds();
    plot.fix_bounds(-1.0, 2.0, 3.0, -4.0);
    plot.unfix_bounds();

    assert!(!plot.is_fixed());
    assert_eq!(plot.viewport(), auto);
}

#[test]
fn render_emits_polylines_dots_and_skips_empty_series() {
    let mut plot = line_plot();
    plot.push_series(Series::new("empty"));
    plot.add_series(vec![(2.0, 1.0)], Color::DARK_GREEN, 6.0, "dot");

    let frame = plot.render(CanvasSize::new(100.0, 50.0)).expect("frame");
    assert_eq!(frame.primitives.len(), 2);
    match &frame.primitives[0] {
        Primitive::Polyline { points, color, thickness } => {
            assert_eq!(points, &vec![Point::new(0.0, 50.0), Point::new(100.0, 0.0)]);
            assert_eq!(*color, Color::ORANGE);
            assert_eq!(*thickness, 2.0);
        }
        other => panic!("expected polyline, got {other:?}"),
    }
    match &frame.primitives[1] {
        Primitive::Dot { center, diameter, color } => {
            assert_eq!(*center, Point::new(50.0, 25.0));
            assert_eq!(*diameter, 6.0);
            assert_eq!(*color, Color::DARK_GREEN);
        }
        other => panic!("expected dot, got {other:?}"),
    }
}

#[test]
fn render_lays_out_grid_and_labels() {
    let plot = line_plot();
    let frame = plot.render(CanvasSize::new(256.0, 128.0)).expect("frame");
    let grid = frame.grid.expect("grid");
    assert_eq!((grid.divisions_x, grid.divisions_y), (4, 2));
    assert_eq!(frame.grid_lines.len(), 4);
    assert_eq!(frame.grid_color, Some(Color::GRAY));

    let xs: Vec<&str> = frame.x_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(xs, vec!["0", "1", "2", "3", "4"]);
    let offsets: Vec<f64> = frame.x_labels.iter().map(|l| l.offset).collect();
    assert_eq!(offsets, vec![0.0, 64.0, 128.0, 192.0, 256.0]);

    let ys: Vec<&str> = frame.y_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(ys, vec!["2", "1", "0"]);
    assert_eq!(frame.y_labels[2].offset, 128.0);
}

#[test]
fn hidden_grid_still_gets_labels() {
    let mut plot = line_plot();
    plot.set_options(PlotOptions { show_grid: false, ..PlotOptions::default() });
    let frame = plot.render(CanvasSize::new(256.0, 128.0)).unwrap();
    assert!(frame.grid_lines.is_empty());
    assert!(frame.grid_color.is_none());
    assert_eq!(frame.x_labels.len(), 5);
}

#[test]
fn zero_sized_canvas_renders_blank_frame() {
    let plot = line_plot();
    let frame = plot.render(CanvasSize::new(0.0, 50.0)).unwrap();
    assert!(frame.is_blank());
    assert!(frame.grid.is_none());
}

#[test]
fn empty_plot_renders_zero_labels_without_mapping() {
    let frame = Plot::new().render(CanvasSize::new(120.0, 120.0)).unwrap();
    assert!(frame.primitives.is_empty());
    assert!(frame.x_labels.iter().all(|l| l.text == "0"));
}

#[test]
fn degenerate_fixed_bounds_fail_on_render() {
    let mut plot = line_plot();
    plot.fix_bounds(1.0, 0.0, 1.0, 5.0);
    let err = plot.render(CanvasSize::new(100.0, 100.0)).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateViewport { .. }));
}

#[test]
fn legend_follows_show_info() {
    let mut plot = line_plot();
    assert!(plot.render(CanvasSize::new(10.0, 10.0)).unwrap().legend.is_empty());

    plot.set_options(PlotOptions { show_info: true, ..PlotOptions::default() });
    let legend = plot.render(CanvasSize::new(10.0, 10.0)).unwrap().legend;
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].name, "line");
    assert_eq!(legend[0].point_count, 2);
    assert_eq!(legend[0].thickness, 2.0);
}

#[test]
fn sectors_become_arc_primitives() {
    let mut plot = Plot::new();
    let spec = SectorSpec { center: Point::new(50.0, 50.0), radius: 20.0, start_angle: 0.0, end_angle: FRAC_PI_2, prefer_small_angle: false };
    plot.add_sector(spec, Color::CADET_BLUE, 1.5);

    let frame = plot.render(CanvasSize::new(100.0, 100.0)).unwrap();
    match frame.primitives.as_slice() {
        [Primitive::Arc { arc, color, thickness }] => {
            assert!(arc.is_large_arc);
            assert_eq!(arc.radius, 20.0);
            assert_eq!(*color, Color::CADET_BLUE);
            assert_eq!(*thickness, 1.5);
        }
        other => panic!("expected a single arc, got {other:?}"),
    }

    plot.clear_sectors();
    assert!(plot.sectors().is_empty());
}

#[test]
fn non_positive_thickness_falls_back_to_default() {
    let mut plot = Plot::new();
    plot.add_series(vec![(0.0, 0.0)], Color::BLACK, 0.0, "zero");
    assert_eq!(plot.series()[0].thickness(), 1.0);
}
