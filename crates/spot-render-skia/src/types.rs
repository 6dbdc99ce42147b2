// File: crates/spot-render-skia/src/types.rs
// Summary: Render options (surface size, margins, theme) and the RGBA raster result.

use spot_core::{CanvasSize, Theme};

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Margins between the surface edge and the plot canvas, in pixels.
/// Labels and the title are drawn inside them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 24, 36, 40)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            font_size: 12.0,
        }
    }
}

impl RenderOptions {
    /// Size of the plot canvas left after removing the insets.
    pub fn canvas_size(&self) -> CanvasSize {
        let w = i64::from(self.width) - i64::from(self.insets.hsum());
        let h = i64::from(self.height) - i64::from(self.insets.vsum());
        CanvasSize::new(w as f64, h as f64)
    }
}

/// Unpremultiplied RGBA8 pixels, row-major with no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// RGBA of the pixel at (x, y), if inside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}
