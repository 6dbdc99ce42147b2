// File: crates/spot-core/src/plot.rs
// Summary: Plot facade owning the series collection; every mutation recomputes bounds and requests a redraw.

use tracing::trace;

use crate::error::{PlotError, PlotResult};
use crate::frame::{Frame, Primitive, TickLabel};
use crate::geometry::{build_sector, SectorSpec};
use crate::grid::{compute_grid, grid_lines, tick_labels, x_tick_values, y_tick_values};
use crate::scale::{to_canvas, to_canvas_all};
use crate::series::{Series, SeriesInfo, SeriesRef};
use crate::types::{CanvasSize, Color, Point};
use crate::view::{compute_viewport, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    pub x_axis_name: String,
    pub y_axis_name: String,
    /// Minimum grid cell size in pixels.
    pub grid_min_width: f64,
    pub grid_min_height: f64,
    /// Decimal digits kept in tick labels.
    pub digits_after_point: u32,
    pub show_grid: bool,
    pub grid_color: Color,
    pub show_info: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis_name: "x".to_string(),
            y_axis_name: "y".to_string(),
            grid_min_width: 60.0,
            grid_min_height: 60.0,
            digits_after_point: 3,
            show_grid: true,
            grid_color: Color::GRAY,
            show_info: false,
        }
    }
}

/// Canvas-space sector outline drawn on top of the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub spec: SectorSpec,
    pub color: Color,
    pub thickness: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Plot {
    options: PlotOptions,
    series: Vec<Series>,
    sectors: Vec<Sector>,
    fixed: Option<Viewport>,
    viewport: Viewport,
    revision: u64,
    redraw_requested: bool,
}

impl Plot {
    pub fn new() -> Self {
        Self::with_options(PlotOptions::default())
    }

    pub fn with_options(options: PlotOptions) -> Self {
        let mut plot = Self { options, ..Self::default() };
        plot.changed();
        plot
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PlotOptions) {
        self.options = options;
        self.changed();
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Current data-space bounds.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn fixed_bounds(&self) -> Option<Viewport> {
        self.fixed
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }

    /// Incremented by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true once per batch of mutations since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn add_series<P: Into<Point>>(
        &mut self,
        points: impl IntoIterator<Item = P>,
        color: Color,
        thickness: f64,
        name: impl Into<String>,
    ) {
        self.push_series(Series::with_data(name, points).with_color(color).with_thickness(thickness));
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
        self.changed();
    }

    /// Remove and return the referenced series.
    pub fn remove_series(&mut self, target: impl Into<SeriesRef>) -> PlotResult<Series> {
        let idx = self.resolve(target.into())?;
        let removed = self.series.remove(idx);
        self.changed();
        Ok(removed)
    }

    pub fn add_points<P: Into<Point>>(
        &mut self,
        points: impl IntoIterator<Item = P>,
        target: impl Into<SeriesRef>,
    ) -> PlotResult<()> {
        let idx = self.resolve(target.into())?;
        self.series[idx].extend_points(points);
        self.changed();
        Ok(())
    }

    /// Remove every point of the target series equal to one of `points`.
    /// Returns the number of points removed.
    pub fn remove_points(&mut self, points: &[Point], target: impl Into<SeriesRef>) -> PlotResult<usize> {
        let idx = self.resolve(target.into())?;
        let removed = self.series[idx].remove_points(points);
        self.changed();
        Ok(removed)
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
        self.changed();
    }

    /// Pin the bounds; each coordinate pair is ordered, so any two opposite corners work.
    pub fn fix_bounds(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.fixed = Some(Viewport::from_corners(left, top, right, bottom));
        self.changed();
    }

    pub fn unfix_bounds(&mut self) {
        self.fixed = None;
        self.changed();
    }

    pub fn add_sector(&mut self, spec: SectorSpec, color: Color, thickness: f64) {
        self.sectors.push(Sector { spec, color, thickness });
        self.changed();
    }

    pub fn clear_sectors(&mut self) {
        self.sectors.clear();
        self.changed();
    }

    pub fn series_info(&self) -> Vec<SeriesInfo> {
        self.series.iter().map(Series::info).collect()
    }

    /// Build the primitives for one redraw of a `canvas`-sized surface.
    ///
    /// Nothing is laid out on a canvas without area. Fails only when points
    /// must be mapped through a zero-extent viewport, which requires fixed
    /// bounds with an empty side.
    pub fn render(&self, canvas: CanvasSize) -> PlotResult<Frame> {
        let mut frame = Frame::empty(canvas);
        frame.title = self.options.title.clone();
        frame.x_axis_name = self.options.x_axis_name.clone();
        frame.y_axis_name = self.options.y_axis_name.clone();
        if self.options.show_info {
            frame.legend = self.series_info();
        }

        let Some(grid) = compute_grid(canvas, self.options.grid_min_width, self.options.grid_min_height) else {
            trace!(?canvas, "canvas has no area; frame left blank");
            return Ok(frame);
        };

        let v = &self.viewport;
        for s in &self.series {
            match s.points.as_slice() {
                [] => {}
                [p] => frame.primitives.push(Primitive::Dot {
                    center: to_canvas(*p, v, canvas)?,
                    diameter: s.thickness(),
                    color: s.color,
                }),
                points => frame.primitives.push(Primitive::Polyline {
                    points: to_canvas_all(points, v, canvas)?,
                    color: s.color,
                    thickness: s.thickness(),
                }),
            }
        }
        for sector in &self.sectors {
            frame.primitives.push(Primitive::Arc {
                arc: build_sector(&sector.spec),
                color: sector.color,
                thickness: sector.thickness,
            });
        }

        if self.options.show_grid {
            frame.grid_lines = grid_lines(canvas, &grid);
            frame.grid_color = Some(self.options.grid_color);
        }

        let labels = tick_labels(v, &grid, self.options.digits_after_point);
        frame.x_labels = labels
            .x
            .into_iter()
            .zip(x_tick_values(v, &grid))
            .enumerate()
            .map(|(i, (text, value))| TickLabel { text, value, offset: i as f64 * grid.cell_width })
            .collect();
        frame.y_labels = labels
            .y
            .into_iter()
            .zip(y_tick_values(v, &grid))
            .enumerate()
            .map(|(j, (text, value))| TickLabel { text, value, offset: j as f64 * grid.cell_height })
            .collect();

        frame.grid = Some(grid);
        Ok(frame)
    }

    fn resolve(&self, target: SeriesRef) -> PlotResult<usize> {
        target.resolve(&self.series).ok_or(PlotError::NotFound(target))
    }

    fn changed(&mut self) {
        self.viewport = compute_viewport(&self.series, self.fixed.as_ref());
        self.revision += 1;
        self.redraw_requested = true;
        trace!(revision = self.revision, "redraw requested");
    }
}
