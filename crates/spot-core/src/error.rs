// File: crates/spot-core/src/error.rs
// Summary: Error kinds surfaced by plot mutation and coordinate mapping.

use thiserror::Error;

use crate::series::SeriesRef;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// No series matches the given index or name.
    #[error("no series matches {0}")]
    NotFound(SeriesRef),

    /// Mapping requested against a viewport with zero width or height.
    #[error("viewport has zero extent (width {width}, height {height})")]
    DegenerateViewport { width: f64, height: f64 },
}

pub type PlotResult<T> = Result<T, PlotError>;

/// A textual name did not match any variant of a closed enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{input}'")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub input: String,
}
