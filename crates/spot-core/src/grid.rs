// File: crates/spot-core/src/grid.rs
// Summary: Adaptive power-of-two grid layout, tick values and rounded tick labels.

use tracing::debug;

use crate::types::{CanvasSize, Point};
use crate::view::Viewport;

/// Minimum cell size used in place of a non-positive or NaN request, in pixels.
pub const MIN_CELL_FLOOR: f64 = 1.0;
/// Largest power of two a `u32` division count can hold.
pub const MAX_DIVISIONS: u32 = 1 << 31;
/// Rounding precision is limited to what an f64 can represent meaningfully.
pub const MAX_DIGITS: u32 = 15;

/// Grid subdivision of the canvas. Division counts are powers of two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub divisions_x: u32,
    pub divisions_y: u32,
    pub cell_width: f64,
    pub cell_height: f64,
}

/// Rounded tick labels, `divisions + 1` per axis.
/// X labels run left to right, Y labels top to bottom.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TickLabels {
    pub x: Vec<String>,
    pub y: Vec<String>,
}

/// Straight grid line segment in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
}

/// Halve each axis' cell size while it stays at or above the minimum.
///
/// Returns `None` when the canvas has no area (nothing to draw).
pub fn compute_grid(canvas: CanvasSize, min_cell_width: f64, min_cell_height: f64) -> Option<GridSpec> {
    if canvas.is_empty() || !canvas.width.is_finite() || !canvas.height.is_finite() {
        return None;
    }
    let min_w = usable_min(min_cell_width);
    let min_h = usable_min(min_cell_height);

    let mut spec = GridSpec { divisions_x: 1, divisions_y: 1, cell_width: canvas.width, cell_height: canvas.height };
    loop {
        let mut settled_x = true;
        let mut settled_y = true;
        if spec.cell_width / 2.0 >= min_w && spec.divisions_x < MAX_DIVISIONS {
            spec.cell_width /= 2.0;
            spec.divisions_x *= 2;
            settled_x = false;
        }
        if spec.cell_height / 2.0 >= min_h && spec.divisions_y < MAX_DIVISIONS {
            spec.cell_height /= 2.0;
            spec.divisions_y *= 2;
            settled_y = false;
        }
        if settled_x && settled_y {
            break;
        }
    }
    debug!(?canvas, ?spec, "grid laid out");
    Some(spec)
}

fn usable_min(min: f64) -> f64 {
    if min > 0.0 {
        min
    } else {
        MIN_CELL_FLOOR
    }
}

/// Unrounded tick values along X, left to right.
pub fn x_tick_values(viewport: &Viewport, spec: &GridSpec) -> Vec<f64> {
    let step = viewport.width() / f64::from(spec.divisions_x);
    (0..=spec.divisions_x).map(|i| viewport.x_min + step * f64::from(i)).collect()
}

/// Unrounded tick values along Y, top to bottom.
pub fn y_tick_values(viewport: &Viewport, spec: &GridSpec) -> Vec<f64> {
    let span = viewport.height();
    let n = f64::from(spec.divisions_y);
    (0..=spec.divisions_y).map(|j| viewport.y_max - f64::from(j) * span / n).collect()
}

pub fn tick_labels(viewport: &Viewport, spec: &GridSpec, digits_after_point: u32) -> TickLabels {
    let fmt = |v: f64| format_tick(v, digits_after_point);
    TickLabels {
        x: x_tick_values(viewport, spec).into_iter().map(fmt).collect(),
        y: y_tick_values(viewport, spec).into_iter().map(fmt).collect(),
    }
}

/// Interior grid lines: verticals span the full height, horizontals the full width.
/// Boundary 0 is the plot border and is not emitted.
pub fn grid_lines(canvas: CanvasSize, spec: &GridSpec) -> Vec<GridLine> {
    let verticals = (1..spec.divisions_x).map(|i| {
        let x = f64::from(i) * spec.cell_width;
        GridLine { from: Point::new(x, 0.0), to: Point::new(x, canvas.height) }
    });
    let horizontals = (1..spec.divisions_y).map(|j| {
        let y = f64::from(j) * spec.cell_height;
        GridLine { from: Point::new(0.0, y), to: Point::new(canvas.width, y) }
    });
    verticals.chain(horizontals).collect()
}

/// Round half to even at `digits` decimal places.
pub fn round_to_digits(v: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits.min(MAX_DIGITS) as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round_ties_even() / scale
}

/// Shortest decimal text for the rounded value; negative zero prints as "0".
/// Magnitudes from 1e15 up, or below 1e-5, use exponent form.
pub fn format_tick(v: f64, digits: u32) -> String {
    let r = round_to_digits(v, digits);
    if r == 0.0 {
        return "0".to_string();
    }
    let magnitude = r.abs();
    if magnitude >= 1e15 || magnitude < 1e-5 {
        format!("{r:e}")
    } else {
        format!("{r}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(round_to_digits(2.5, 0), 2.0);
        assert_eq!(round_to_digits(3.5, 0), 4.0);
        assert_eq!(round_to_digits(1.23456, 3), 1.235);
    }

    #[test]
    fn format_drops_trailing_zeros_and_negative_zero() {
        assert_eq!(format_tick(2.0, 3), "2");
        assert_eq!(format_tick(-0.0001, 3), "0");
        assert_eq!(format_tick(0.125, 2), "0.12");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_tick(1e300, 0), "1e300");
        assert_eq!(format_tick(-1e20, 0), "-1e20");
        assert_eq!(format_tick(1.5e-7, 9), "1.5e-7");
        assert_eq!(format_tick(123456.0, 3), "123456");
    }

    #[test]
    fn non_positive_minimum_still_terminates() {
        let spec = compute_grid(CanvasSize::new(8.0, 8.0), 0.0, -5.0).expect("grid");
        assert_eq!(spec.divisions_x, 8);
        assert_eq!(spec.divisions_y, 8);

        let nan = compute_grid(CanvasSize::new(8.0, 8.0), f64::NAN, 2.0).expect("grid");
        assert_eq!((nan.divisions_x, nan.divisions_y), (8, 4));
    }
}
