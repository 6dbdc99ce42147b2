// File: crates/spot-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes spot-core frames and encodes them as images.

pub mod types;
pub mod render;
pub mod export;

pub use types::{Insets, Raster, RenderOptions};
pub use render::{render_frame, render_plot};
pub use export::{encode, export_image, save_image};
