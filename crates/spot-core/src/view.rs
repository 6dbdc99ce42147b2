// File: crates/spot-core/src/view.rs
// Summary: Data-space viewport and its derivation from a series collection.

use tracing::debug;

use crate::series::Series;
use crate::types::Point;

/// Data-space rectangle mapped onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Build from two arbitrary corner pairs, ordering each axis.
    pub fn from_corners(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x_min: left.min(right),
            x_max: left.max(right),
            y_min: top.min(bottom),
            y_max: top.max(bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

/// Derive the viewport for `series`, or return `fixed` verbatim when present.
///
/// Empty input yields the all-zero viewport. When every point shares one x
/// (or one y) that axis is widened by 1 on each side so mapping never divides
/// by zero; a single point gets both corrections.
pub fn compute_viewport(series: &[Series], fixed: Option<&Viewport>) -> Viewport {
    if let Some(v) = fixed {
        return *v;
    }

    let mut points = series.iter().flat_map(|s| s.points.iter());
    let Some(first) = points.next() else {
        return Viewport::default();
    };

    let mut v = Viewport::new(first.x, first.x, first.y, first.y);
    for p in points {
        if p.x < v.x_min { v.x_min = p.x; }
        if p.x > v.x_max { v.x_max = p.x; }
        if p.y < v.y_min { v.y_min = p.y; }
        if p.y > v.y_max { v.y_max = p.y; }
    }

    let mut vertical = true;
    let mut horizontal = true;
    for p in series.iter().flat_map(|s| s.points.iter()) {
        if p.x != v.x_min || p.x != v.x_max { vertical = false; }
        if p.y != v.y_min || p.y != v.y_max { horizontal = false; }
        if !vertical && !horizontal { break; }
    }
    if vertical {
        v.x_min -= 1.0;
        v.x_max += 1.0;
    }
    if horizontal {
        v.y_min -= 1.0;
        v.y_max += 1.0;
    }

    debug!(?v, vertical, horizontal, series = series.len(), "viewport recomputed");
    v
}
