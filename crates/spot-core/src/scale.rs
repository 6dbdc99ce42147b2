// File: crates/spot-core/src/scale.rs
// Summary: Data-space to canvas-space transform with vertical inversion.

use crate::error::{PlotError, PlotResult};
use crate::types::{CanvasSize, Point};
use crate::view::Viewport;

/// Map a data-space point onto the canvas. Data "up" renders toward the top
/// of the surface, so the canvas Y is measured down from `canvas.height`.
///
/// Fails when the viewport has zero width or height.
pub fn to_canvas(p: Point, viewport: &Viewport, canvas: CanvasSize) -> PlotResult<Point> {
    let (span_x, span_y) = (viewport.width(), viewport.height());
    if viewport.is_degenerate() {
        return Err(PlotError::DegenerateViewport { width: span_x, height: span_y });
    }
    Ok(map_unchecked(p, viewport, span_x, span_y, canvas))
}

/// Map every point of a slice, failing on the first degenerate-viewport error.
pub fn to_canvas_all(points: &[Point], viewport: &Viewport, canvas: CanvasSize) -> PlotResult<Vec<Point>> {
    let (span_x, span_y) = (viewport.width(), viewport.height());
    if viewport.is_degenerate() {
        return Err(PlotError::DegenerateViewport { width: span_x, height: span_y });
    }
    Ok(points.iter().map(|&p| map_unchecked(p, viewport, span_x, span_y, canvas)).collect())
}

#[inline]
fn map_unchecked(p: Point, v: &Viewport, span_x: f64, span_y: f64, canvas: CanvasSize) -> Point {
    let cx = (p.x - v.x_min) / span_x * canvas.width;
    let cy = (p.y - v.y_min) / span_y * canvas.height;
    Point::new(cx, canvas.height - cy)
}
