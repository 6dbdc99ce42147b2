// File: crates/spot-core/src/lib.rs
// Summary: Core library entry point; exports the plot model, layout math and render primitives.

pub mod error;
pub mod types;
pub mod series;
pub mod view;
pub mod scale;
pub mod grid;
pub mod geometry;
pub mod frame;
pub mod plot;
pub mod theme;
pub mod function;

pub use error::{ParseNameError, PlotError, PlotResult};
pub use types::{CanvasSize, Color, ImageFormat, Point};
pub use series::{Series, SeriesInfo, SeriesRef};
pub use view::{compute_viewport, Viewport};
pub use scale::to_canvas;
pub use grid::{compute_grid, grid_lines, tick_labels, GridLine, GridSpec, TickLabels};
pub use geometry::{build_sector, ArcGeometry, SectorSpec, SweepDirection};
pub use frame::{Frame, Primitive, TickLabel};
pub use plot::{Plot, PlotOptions, Sector};
pub use theme::Theme;
pub use function::Function;
