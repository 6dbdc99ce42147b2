// File: crates/spot-demo/src/main.rs
// Summary: Demo plots sample functions (or CSV points) and exports the plot as PNG, BMP and JPEG.
//
// Usage: spot-demo [OUT_DIR] [SOURCE] [LEFT] [RIGHT] [STEPS]
//   SOURCE is a function name (sin, cos, ln, sqr, sqrt, x), "all", or a CSV path.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use spot_core::{Color, Function, ImageFormat, Plot, PlotOptions, Point, SectorSpec};
use spot_render_skia::{save_image, RenderOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let source = args.next().unwrap_or_else(|| "all".to_string());
    let left = parse_arg(args.next(), -PI, "LEFT")?;
    let right = parse_arg(args.next(), PI, "RIGHT")?;
    let steps = parse_arg(args.next(), 200usize, "STEPS")?;

    let mut plot = Plot::with_options(PlotOptions {
        title: format!("Spot: {source}"),
        x_axis_name: "x".into(),
        y_axis_name: "f(x)".into(),
        show_info: true,
        ..PlotOptions::default()
    });

    if source.eq_ignore_ascii_case("all") {
        for (i, f) in Function::ALL.into_iter().enumerate() {
            add_function(&mut plot, f, left, right, steps, series_color(i));
        }
    } else if let Ok(f) = source.parse::<Function>() {
        add_function(&mut plot, f, left, right, steps, series_color(0));
    } else {
        let path = Path::new(&source);
        let loaded = load_points_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        if loaded.is_empty() {
            bail!("no points loaded from {}; check headers/delimiter.", path.display());
        }
        for (i, (name, points)) in loaded.into_iter().enumerate() {
            plot.add_series(points, series_color(i), 2.0, name);
        }
    }

    // A small pie-slice outline in the canvas' top-left corner
    plot.add_sector(
        SectorSpec { center: Point::new(48.0, 48.0), radius: 32.0, start_angle: -PI / 2.0, end_angle: PI / 3.0, prefer_small_angle: false },
        Color::MAROON,
        1.5,
    );

    let v = plot.viewport();
    tracing::info!(series = plot.series().len(), x = ?(v.x_min, v.x_max), y = ?(v.y_min, v.y_max), "plot ready");

    let opts = RenderOptions::default();
    for format in ImageFormat::ALL {
        let out = out_dir.join(format!("result.{}", format.extension()));
        save_image(&plot, &opts, &out, format)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(raw: Option<String>, default: T, what: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(s) => s.trim().parse::<T>().with_context(|| format!("invalid {what} '{s}'")),
        None => Ok(default),
    }
}

fn add_function(plot: &mut Plot, f: Function, left: f64, right: f64, steps: usize, color: Color) {
    let points = f.sample(left, right, steps);
    if points.is_empty() {
        tracing::warn!(function = %f, left, right, "no finite samples; skipping");
        return;
    }
    plot.add_series(points, color, 2.0, f.name());
}

/// Palette colors, skipping gray (grid) and light yellow (unreadable on white).
fn series_color(i: usize) -> Color {
    const USABLE: [Color; 6] = [Color::CADET_BLUE, Color::ORANGE, Color::DARK_GREEN, Color::MAROON, Color::OLIVE, Color::BLACK];
    USABLE[i % USABLE.len()]
}

/// Load `x,y` rows, grouped by an optional `series`/`name` column, in first-seen order.
fn load_points_csv(path: &Path) -> Result<Vec<(String, Vec<Point>)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let (Some(i_x), Some(i_y)) = (idx(&["x", "time", "t"]), idx(&["y", "value", "v"])) else {
        bail!("expected x and y columns, found {:?}", headers);
    };
    let i_name = idx(&["series", "name"]);

    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, Vec<Point>> = BTreeMap::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            tracing::warn!(row = row + 2, "skipping row without numeric x/y");
            continue;
        };
        let name = i_name.and_then(|i| rec.get(i)).unwrap_or("").to_string();
        if !groups.contains_key(&name) {
            order.push(name.clone());
        }
        groups.entry(name).or_default().push(Point::new(x, y));
    }

    Ok(order.into_iter().filter_map(|name| groups.remove(&name).map(|pts| (name, pts))).collect())
}
