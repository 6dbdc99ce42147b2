// File: crates/spot-core/src/frame.rs
// Summary: Renderer-agnostic primitives produced for one redraw.

use crate::geometry::ArcGeometry;
use crate::grid::{GridLine, GridSpec};
use crate::series::SeriesInfo;
use crate::types::{CanvasSize, Color, Point};

/// Stroke width of grid lines, in pixels.
pub const GRID_STROKE: f64 = 0.25;

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Two or more mapped points joined in order.
    Polyline { points: Vec<Point>, color: Color, thickness: f64 },
    /// A lone point, drawn as a filled circle of `diameter` centered on `center`.
    Dot { center: Point, diameter: f64, color: Color },
    /// An open sector arc in canvas space.
    Arc { arc: ArcGeometry, color: Color, thickness: f64 },
}

/// Tick label text plus where it belongs along its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Unrounded tick value.
    pub value: f64,
    /// Canvas offset along the axis (x for horizontal ticks, y for vertical ones).
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Frame {
    pub canvas: CanvasSize,
    /// Present when the canvas has area.
    pub grid: Option<GridSpec>,
    pub primitives: Vec<Primitive>,
    pub grid_lines: Vec<GridLine>,
    pub grid_color: Option<Color>,
    pub x_labels: Vec<TickLabel>,
    pub y_labels: Vec<TickLabel>,
    pub title: String,
    pub x_axis_name: String,
    pub y_axis_name: String,
    /// Info list, filled when the plot shows series info.
    pub legend: Vec<SeriesInfo>,
}

impl Frame {
    /// Frame for a canvas with nothing on it.
    pub fn empty(canvas: CanvasSize) -> Self {
        Self { canvas, ..Self::default() }
    }

    pub fn is_blank(&self) -> bool {
        self.primitives.is_empty() && self.grid_lines.is_empty() && self.x_labels.is_empty() && self.y_labels.is_empty()
    }
}
