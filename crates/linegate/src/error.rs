//! Errors surfaced at the classifier boundary.

use std::fmt;

use crate::geom2::Point;

/// Errors surfaced by [`crate::gate::classify`] and the input constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassifyError {
    /// Both segment endpoints coincide, so the direction vector has zero length.
    DegenerateSegment { p: Point },
    /// A coordinate or config value cannot be used (NaN, infinite, out of `i32` range).
    InvalidInput { reason: String },
}

impl ClassifyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSegment { p } => write!(
                f,
                "degenerate segment: both endpoints are ({}, {})",
                p.x, p.y
            ),
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for ClassifyError {}
