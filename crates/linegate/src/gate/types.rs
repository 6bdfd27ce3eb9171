use serde::{Serialize, Serializer};

use crate::error::ClassifyError;

/// Radius of the compensation band around each endpoint, in input units.
pub const EXTRA_CROSS_THRESHOLD: f64 = 40.0;

/// Distance reported when the point is outside both bands.
pub const SENTINEL_DISTANCE: f64 = 99999.99;

/// Side of the directed segment a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    /// Outside both bands; no side is reported.
    None,
}

impl Direction {
    /// Integer wire code: `1` left, `0` right, `-1` none.
    #[inline]
    pub const fn code(self) -> i8 {
        match self {
            Self::Left => 1,
            Self::Right => 0,
            Self::None => -1,
        }
    }

    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(Self::Left),
            0 => Some(Self::Right),
            -1 => Some(Self::None),
            _ => None,
        }
    }

    /// Sign rule for `cross(point - p1, p2 - p1)`; zero counts as right.
    #[inline]
    pub(crate) fn from_cross(vc: i128) -> Self {
        if vc > 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Left and right swap, `None` stays.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::None => Self::None,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Outcome of classifying one point against one segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub in_band: bool,
    pub in_compensation_band: bool,
    pub distance: f64,
    pub direction: Direction,
}

impl ClassificationResult {
    /// `(in_band, in_compensation_band, distance, direction_code)`.
    #[inline]
    pub fn as_tuple(&self) -> (bool, bool, f64, i8) {
        (
            self.in_band,
            self.in_compensation_band,
            self.distance,
            self.direction.code(),
        )
    }

    /// True when neither band applies.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        !self.in_band && !self.in_compensation_band
    }
}

/// Gate thresholds.
///
/// `sentinel_distance` must be strictly greater than `extra_cross_threshold`
/// so it never collides with a compensation-band distance. In-band distances
/// are bounded only by the frame, so pick a sentinel above the frame diagonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateCfg {
    pub extra_cross_threshold: f64,
    pub sentinel_distance: f64,
}

impl Default for GateCfg {
    fn default() -> Self {
        Self {
            extra_cross_threshold: EXTRA_CROSS_THRESHOLD,
            sentinel_distance: SENTINEL_DISTANCE,
        }
    }
}

impl GateCfg {
    pub fn with_threshold(extra_cross_threshold: f64) -> Self {
        Self {
            extra_cross_threshold,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ClassifyError> {
        if !self.extra_cross_threshold.is_finite() || self.extra_cross_threshold < 0.0 {
            return Err(ClassifyError::invalid(format!(
                "compensation threshold must be finite and >= 0, got {}",
                self.extra_cross_threshold
            )));
        }
        if !self.sentinel_distance.is_finite() {
            return Err(ClassifyError::invalid(format!(
                "sentinel distance must be finite, got {}",
                self.sentinel_distance
            )));
        }
        if self.sentinel_distance <= self.extra_cross_threshold {
            return Err(ClassifyError::invalid(format!(
                "sentinel distance {} must exceed the compensation threshold {}",
                self.sentinel_distance, self.extra_cross_threshold
            )));
        }
        Ok(())
    }
}
