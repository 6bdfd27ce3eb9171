//! Integer points and directed segments in image space.
//!
//! - `Point`: pixel coordinates, y axis pointing down.
//! - `LineSegment`: ordered pair of points; the order fixes which side is left.

use nalgebra::Vector2;
use serde::Serialize;

use crate::error::ClassifyError;

/// A point with integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from real-valued coordinates, truncating toward zero.
    ///
    /// Fractional parts are discarded, so `(12.9, -3.7)` becomes `(12, -3)`.
    /// Fails on NaN, infinities, and values outside the `i32` range.
    pub fn from_f64(x: f64, y: f64) -> Result<Self, ClassifyError> {
        Ok(Self {
            x: truncate_coord(x, "x")?,
            y: truncate_coord(y, "y")?,
        })
    }

    /// Widened position vector used by the arithmetic helpers.
    #[inline]
    pub fn to_vector(self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

fn truncate_coord(v: f64, axis: &str) -> Result<i32, ClassifyError> {
    if !v.is_finite() {
        return Err(ClassifyError::invalid(format!(
            "{axis} coordinate {v} is not finite"
        )));
    }
    let t = v.trunc();
    if t < f64::from(i32::MIN) || t > f64::from(i32::MAX) {
        return Err(ClassifyError::invalid(format!(
            "{axis} coordinate {v} is outside the i32 range"
        )));
    }
    Ok(t as i32)
}

/// Directed segment `p1 -> p2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Same segment walked the other way; swaps left and right.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

impl From<((i32, i32), (i32, i32))> for LineSegment {
    #[inline]
    fn from((a, b): ((i32, i32), (i32, i32))) -> Self {
        Self {
            p1: a.into(),
            p2: b.into(),
        }
    }
}
