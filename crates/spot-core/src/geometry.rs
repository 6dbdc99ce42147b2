// File: crates/spot-core/src/geometry.rs
// Summary: Circular-sector arc geometry (angle normalization, sweep and large-arc selection).

use std::f64::consts::{PI, TAU};

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    Clockwise,
    Counterclockwise,
}

impl SweepDirection {
    /// SVG `sweep-flag` value for this direction.
    pub const fn svg_flag(self) -> u8 {
        match self {
            SweepDirection::Clockwise => 1,
            SweepDirection::Counterclockwise => 0,
        }
    }
}

/// Circular sector request. Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorSpec {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub prefer_small_angle: bool,
}

impl Default for SectorSpec {
    fn default() -> Self {
        Self { center: Point::new(0.0, 0.0), radius: 10.0, start_angle: 0.0, end_angle: PI / 2.0, prefer_small_angle: false }
    }
}

/// Open arc from `start` to `end`; the path is not closed to the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub is_large_arc: bool,
    pub sweep: SweepDirection,
    /// Normalized start angle in [0, 2π).
    pub start_angle: f64,
    /// Normalized end angle, never below `start_angle`.
    pub end_angle: f64,
}

impl ArcGeometry {
    pub fn swept_angle(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path data: `M x0 y0 A r r 0 large sweep x1 y1`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.is_large_arc),
            self.sweep.svg_flag(),
            self.end.x,
            self.end.y,
        )
    }
}

/// Shift a negative angle up by one turn. Angles at or above 2π are left alone.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    if a < 0.0 { a + TAU } else { a }
}

pub fn build_sector(spec: &SectorSpec) -> ArcGeometry {
    let a0 = normalize_angle(spec.start_angle);
    let mut a1 = normalize_angle(spec.end_angle);
    if a1 < a0 {
        a1 += TAU;
    }

    // Without the small-angle preference the large-arc flag is set for spans under π.
    let (is_large_arc, sweep) = if spec.prefer_small_angle {
        let sweep = if a1 - a0 > PI { SweepDirection::Counterclockwise } else { SweepDirection::Clockwise };
        (false, sweep)
    } else {
        ((a1 - a0).abs() < PI, SweepDirection::Counterclockwise)
    };

    let on_circle = |a: f64| Point::new(spec.center.x + a.cos() * spec.radius, spec.center.y + a.sin() * spec.radius);

    ArcGeometry {
        start: on_circle(a0),
        end: on_circle(a1),
        radius: spec.radius,
        is_large_arc,
        sweep,
        start_angle: a0,
        end_angle: a1,
    }
}
