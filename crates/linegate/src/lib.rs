//! Gate geometry for line-crossing detection.
//!
//! A tracker calls [`classify`] once per tracked point per frame and watches
//! the returned side flip between frames. Band flags and distance help it
//! suppress crossings caused by box-center jitter near the gate.
//!
//! API Policy
//! - Everything here is pure and `Copy`; there is no shared state, so calls
//!   may run from any number of threads.
//! - Temporal logic (debouncing, identity, counting) stays with the caller.

pub mod error;
pub mod gate;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ClassifyError;
pub use gate::{
    classify, classify_with, ClassificationResult, Direction, GateCfg, EXTRA_CROSS_THRESHOLD,
    SENTINEL_DISTANCE,
};
pub use geom2::{LineSegment, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ClassifyError;
    pub use crate::gate::{classify, classify_with, ClassificationResult, Direction, GateCfg};
    pub use crate::geom2::{LineSegment, Point};
}
