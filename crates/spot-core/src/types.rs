// File: crates/spot-core/src/types.rs
// Summary: Shared value types (points, canvas size, colors, export formats).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// A 2D point, either in data space or canvas space depending on context.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Pixel size of the drawing surface.
/// Contract: both fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0) }
    }

    /// True when there is nothing to draw on.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const CADET_BLUE: Color = Color::rgb(0x5f, 0x9e, 0xa0);
    pub const OLIVE: Color = Color::rgb(0x80, 0x80, 0x00);
    pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
    pub const MAROON: Color = Color::rgb(0x80, 0x00, 0x00);
    pub const LIGHT_YELLOW: Color = Color::rgb(0xff, 0xff, 0xe0);
    pub const DARK_GREEN: Color = Color::rgb(0x00, 0x64, 0x00);

    /// Palette offered for series and grid colors.
    pub const PALETTE: [Color; 8] = [
        Color::GRAY,
        Color::BLACK,
        Color::CADET_BLUE,
        Color::OLIVE,
        Color::ORANGE,
        Color::MAROON,
        Color::LIGHT_YELLOW,
        Color::DARK_GREEN,
    ];
}

/// Bitmap formats a rendered plot can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Bmp,
    Jpeg,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Jpeg];

    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "bmp" => Ok(ImageFormat::Bmp),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(ParseNameError { kind: "image format", input: s.to_string() }),
        }
    }
}
