// File: crates/spot-core/src/series.rs
// Summary: Series model (named point sequence with stroke style) and lookup keys.

use std::fmt;

use crate::types::{Color, Point};

/// Stroke thickness used when a caller passes a non-positive or non-finite one.
pub const DEFAULT_THICKNESS: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
    pub color: Color,
    thickness: f64,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new(), color: Color::BLACK, thickness: DEFAULT_THICKNESS }
    }

    pub fn with_data<P: Into<Point>>(name: impl Into<String>, data: impl IntoIterator<Item = P>) -> Self {
        Self { points: data.into_iter().map(Into::into).collect(), ..Self::new(name) }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set stroke thickness; values that are not strictly positive fall back to the default.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.set_thickness(thickness);
        self
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: f64) {
        self.thickness = if thickness.is_finite() && thickness > 0.0 { thickness } else { DEFAULT_THICKNESS };
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn extend_points<P: Into<Point>>(&mut self, points: impl IntoIterator<Item = P>) {
        self.points.extend(points.into_iter().map(Into::into));
    }

    /// Remove every point equal to one of `points`. Returns how many were removed.
    pub fn remove_points(&mut self, points: &[Point]) -> usize {
        let before = self.points.len();
        self.points.retain(|p| !points.contains(p));
        before - self.points.len()
    }

    pub fn info(&self) -> SeriesInfo {
        SeriesInfo {
            name: self.name.clone(),
            color: self.color,
            thickness: self.thickness,
            point_count: self.points.len(),
        }
    }
}

/// Summary row shown in the plot's info list.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesInfo {
    pub name: String,
    pub color: Color,
    pub thickness: f64,
    pub point_count: usize,
}

/// Identifies a series either by position or by (first matching) name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeriesRef {
    Index(usize),
    Name(String),
}

impl SeriesRef {
    /// Position of the referenced series within `series`, if any.
    pub fn resolve(&self, series: &[Series]) -> Option<usize> {
        match self {
            SeriesRef::Index(i) => (*i < series.len()).then_some(*i),
            SeriesRef::Name(name) => series.iter().position(|s| s.name == *name),
        }
    }
}

impl fmt::Display for SeriesRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesRef::Index(i) => write!(f, "index {i}"),
            SeriesRef::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

impl From<usize> for SeriesRef {
    fn from(i: usize) -> Self {
        SeriesRef::Index(i)
    }
}

impl From<&str> for SeriesRef {
    fn from(name: &str) -> Self {
        SeriesRef::Name(name.to_string())
    }
}

impl From<String> for SeriesRef {
    fn from(name: String) -> Self {
        SeriesRef::Name(name)
    }
}
