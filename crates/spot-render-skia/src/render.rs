// File: crates/spot-render-skia/src/render.rs
// Summary: Headless rasterization of plot frames using Skia CPU raster surfaces.

use anyhow::{anyhow, Result};
use skia_safe as skia;
use spot_core::frame::GRID_STROKE;
use spot_core::{ArcGeometry, Color, Frame, Plot, Point, Primitive, SweepDirection};
use tracing::{debug, warn};

use crate::types::{Raster, RenderOptions};

/// Lay out `plot` for the canvas left inside the insets, then rasterize it.
pub fn render_plot(plot: &Plot, opts: &RenderOptions) -> Result<Raster> {
    let frame = plot.render(opts.canvas_size())?;
    render_frame(&frame, opts)
}

pub fn render_frame(frame: &Frame, opts: &RenderOptions) -> Result<Raster> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    let canvas = surface.canvas();
    canvas.clear(sk_color(opts.theme.background));

    let l = opts.insets.left as f32;
    let t = opts.insets.top as f32;
    let w = frame.canvas.width as f32;
    let h = frame.canvas.height as f32;

    if frame.canvas.is_empty() {
        warn!(width = opts.width, height = opts.height, "insets leave no plot area; drawing background only");
    } else {
        canvas.save();
        canvas.translate((l, t));
        canvas.draw_rect(skia::Rect::from_wh(w, h), &fill(opts.theme.canvas));

        if let Some(color) = frame.grid_color {
            let paint = stroke(color, GRID_STROKE as f32);
            for line in &frame.grid_lines {
                canvas.draw_line(sk_point(line.from), sk_point(line.to), &paint);
            }
        }

        for p in &frame.primitives {
            draw_primitive(canvas, p);
        }

        let border = frame.grid_color.unwrap_or(opts.theme.border);
        canvas.draw_rect(skia::Rect::from_wh(w, h), &stroke(border, 1.0));
        canvas.restore();
    }

    if opts.draw_labels {
        draw_labels(canvas, frame, opts);
    }

    let raster = read_rgba(&mut surface, opts)?;
    debug!(width = raster.width, height = raster.height, primitives = frame.primitives.len(), "frame rasterized");
    Ok(raster)
}

// ---- helpers ----------------------------------------------------------------

fn draw_primitive(canvas: &skia::Canvas, p: &Primitive) {
    match p {
        Primitive::Polyline { points, color, thickness } => {
            let Some((first, rest)) = points.split_first() else { return };
            let mut path = skia::Path::new();
            path.move_to(sk_point(*first));
            for &q in rest {
                path.line_to(sk_point(q));
            }
            canvas.draw_path(&path, &stroke(*color, *thickness as f32));
        }
        Primitive::Dot { center, diameter, color } => {
            canvas.draw_circle(sk_point(*center), (*diameter / 2.0) as f32, &fill(*color));
        }
        Primitive::Arc { arc, color, thickness } => {
            canvas.draw_path(&arc_path(arc), &stroke(*color, *thickness as f32));
        }
    }
}

fn arc_path(arc: &ArcGeometry) -> skia::Path {
    let size = if arc.is_large_arc { skia::path::ArcSize::Large } else { skia::path::ArcSize::Small };
    let dir = match arc.sweep {
        SweepDirection::Clockwise => skia::PathDirection::CW,
        SweepDirection::Counterclockwise => skia::PathDirection::CCW,
    };
    let r = arc.radius as f32;
    let mut path = skia::Path::new();
    path.move_to(sk_point(arc.start));
    path.arc_to_rotated((r, r), 0.0, size, dir, sk_point(arc.end));
    path
}

fn draw_labels(canvas: &skia::Canvas, frame: &Frame, opts: &RenderOptions) {
    let paint = fill(opts.theme.label);
    let mut font = skia::Font::default();
    font.set_size(opts.font_size);

    let l = opts.insets.left as f32;
    let t = opts.insets.top as f32;
    let w = frame.canvas.width as f32;
    let h = frame.canvas.height as f32;
    let size = opts.font_size;

    // X ticks under the canvas, left-aligned on their gridline
    for tick in &frame.x_labels {
        canvas.draw_str(&tick.text, (l + tick.offset as f32 + 3.0, t + h + size + 2.0), &font, &paint);
    }
    // Y ticks right-aligned against the canvas' left edge
    for tick in &frame.y_labels {
        let (tw, _) = font.measure_str(&tick.text, Some(&paint));
        canvas.draw_str(&tick.text, (l - tw - 4.0, t + tick.offset as f32 + size * 0.4), &font, &paint);
    }

    if !frame.x_axis_name.is_empty() {
        let (tw, _) = font.measure_str(&frame.x_axis_name, Some(&paint));
        canvas.draw_str(&frame.x_axis_name, (l + w - tw, t + h + 2.0 * size + 6.0), &font, &paint);
    }
    if !frame.y_axis_name.is_empty() {
        canvas.draw_str(&frame.y_axis_name, (4.0, t - 6.0), &font, &paint);
    }

    if !frame.title.is_empty() {
        let mut title_font = font.clone();
        title_font.set_size(size * 1.4);
        let title_paint = fill(opts.theme.title);
        let (tw, _) = title_font.measure_str(&frame.title, Some(&title_paint));
        canvas.draw_str(&frame.title, (l + (w - tw) * 0.5, t - size), &title_font, &title_paint);
    }

    // Info list in the canvas' top-right corner
    let mut y = t + size + 4.0;
    for info in &frame.legend {
        let swatch = skia::Rect::from_xywh(l + w - 110.0, y - size * 0.8, size, size * 0.8);
        canvas.draw_rect(swatch, &fill(info.color));
        let label = if info.name.is_empty() { format!("({} pts)", info.point_count) } else { info.name.clone() };
        canvas.draw_str(&label, (l + w - 110.0 + size + 4.0, y), &font, &paint);
        y += size + 4.0;
    }
}

fn read_rgba(surface: &mut skia::Surface, opts: &RenderOptions) -> Result<Raster> {
    let width = u32::try_from(opts.width)?;
    let height = u32::try_from(opts.height)?;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(anyhow!("failed to read back surface pixels"));
    }
    Ok(Raster { width, height, pixels })
}

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn fill(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint
}

fn stroke(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk_color(color));
    paint
}
