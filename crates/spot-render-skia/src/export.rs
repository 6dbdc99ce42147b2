// File: crates/spot-render-skia/src/export.rs
// Summary: Encode rasterized plots to PNG, BMP or JPEG bytes and files.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, RgbaImage};
use spot_core::{ImageFormat, Plot};

use crate::render::render_plot;
use crate::types::{Raster, RenderOptions};

/// Encode a raster. JPEG has no alpha channel, so it is dropped first.
pub fn encode(raster: &Raster, format: ImageFormat) -> Result<Vec<u8>> {
    let img = RgbaImage::from_raw(raster.width, raster.height, raster.pixels.clone())
        .ok_or_else(|| anyhow!("raster buffer does not match {}x{}", raster.width, raster.height))?;

    let mut out = Cursor::new(Vec::new());
    let written = match format {
        ImageFormat::Png => img.write_to(&mut out, image::ImageFormat::Png),
        ImageFormat::Bmp => img.write_to(&mut out, image::ImageFormat::Bmp),
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(img).to_rgb8().write_to(&mut out, image::ImageFormat::Jpeg),
    };
    written.with_context(|| format!("encode {format} failed"))?;
    Ok(out.into_inner())
}

/// Render `plot` and return the encoded image bytes.
pub fn export_image(plot: &Plot, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>> {
    let raster = render_plot(plot, opts)?;
    encode(&raster, format)
}

/// Render `plot` and write it to `path`, creating parent directories as needed.
pub fn save_image(plot: &Plot, opts: &RenderOptions, path: impl AsRef<Path>, format: ImageFormat) -> Result<()> {
    let path = path.as_ref();
    let bytes = export_image(plot, opts, format)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
