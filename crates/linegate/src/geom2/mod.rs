//! Integer 2D geometry for image-space gates.
//!
//! Purpose
//! - Plain `Copy` value types (`Point`, `LineSegment`) supplied fresh per call.
//! - Free vector helpers (`sub`, `dot`, `cross`, `norm`) over widened integer
//!   vectors, exact up to the final square root.
//!
//! Code cross-refs: `gate::classify`, `error::ClassifyError`

mod types;
mod util;

pub use types::{LineSegment, Point};
pub use util::{cross, dot, norm, sub};
