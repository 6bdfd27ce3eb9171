//! Point-vs-gate classification for line-crossing detection.
//!
//! Purpose
//! - One pure, O(1) routine: given a point and a directed segment, report
//!   in-band membership, compensation-band membership, distance, and side.
//! - Callers track the side across frames; a change of side is a crossing.
//!   The distance and band flags let them ignore jitter near the gate.
//!
//! Bands
//! - In-band: the perpendicular strip spanned by the segment, edges included.
//! - Compensation band: discs of radius `EXTRA_CROSS_THRESHOLD` around both
//!   endpoints, consulted only outside the strip. A point that was in-band on
//!   a previous frame and drifted past an endpoint keeps a consistent side.
//!   Points that were never in-band also get the flag; gating on a prior
//!   in-band observation is up to the caller.
//!
//! Code cross-refs: `geom2::{cross, dot}`, `GateCfg`, `ClassifyError`

mod classify;
mod types;

pub use classify::{classify, classify_with};
pub use types::{
    ClassificationResult, Direction, GateCfg, EXTRA_CROSS_THRESHOLD, SENTINEL_DISTANCE,
};

#[cfg(test)]
mod tests;
