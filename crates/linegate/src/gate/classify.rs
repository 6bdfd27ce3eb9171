use crate::error::ClassifyError;
use crate::geom2::{cross, dot, norm, sub, LineSegment, Point};

use super::types::{ClassificationResult, Direction, GateCfg};

/// Classify `point` against `line` with the default thresholds.
#[inline]
pub fn classify(point: Point, line: LineSegment) -> Result<ClassificationResult, ClassifyError> {
    classify_with(point, line, &GateCfg::default())
}

/// Classify `point` against the directed segment `line`.
///
/// - In-band when the projection of `point` onto the supporting line falls
///   between the endpoints (inclusive). Distance is perpendicular; side comes
///   from the sign of `cross(point - p1, p2 - p1)`.
/// - Otherwise, within `cfg.extra_cross_threshold` of the nearer endpoint:
///   compensation band, distance to that endpoint, side from the same cross
///   sign even though the projection lies outside the span.
/// - Otherwise `cfg.sentinel_distance` and `Direction::None`.
///
/// Errors: `DegenerateSegment` when `p1 == p2` (for every point), and
/// `InvalidInput` for a config that fails [`GateCfg::validate`].
pub fn classify_with(
    point: Point,
    line: LineSegment,
    cfg: &GateCfg,
) -> Result<ClassificationResult, ClassifyError> {
    if let Err(err) = cfg.validate() {
        tracing::debug!(%err, "rejecting gate config");
        return Err(err);
    }
    if line.is_degenerate() {
        tracing::debug!(?line, "rejecting degenerate segment");
        return Err(ClassifyError::DegenerateSegment { p: line.p1 });
    }

    let v1 = sub(point, line.p1);
    let v2 = sub(point, line.p2);
    let v3 = sub(line.p2, line.p1);

    let in_band = dot(v1, v3) >= 0 && dot(v2, -v3) >= 0;
    let result = if in_band {
        let vc = cross(v1, v3);
        ClassificationResult {
            in_band: true,
            in_compensation_band: false,
            // |v1| sin(theta) = |v1 x v3| / |v3|
            distance: vc.unsigned_abs() as f64 / norm(v3),
            direction: Direction::from_cross(vc),
        }
    } else {
        let extra_distance = norm(v1).min(norm(v2));
        if extra_distance < cfg.extra_cross_threshold {
            ClassificationResult {
                in_band: false,
                in_compensation_band: true,
                distance: extra_distance,
                direction: Direction::from_cross(cross(v1, v3)),
            }
        } else {
            ClassificationResult {
                in_band: false,
                in_compensation_band: false,
                distance: cfg.sentinel_distance,
                direction: Direction::None,
            }
        }
    };

    tracing::trace!(
        ?point,
        in_band = result.in_band,
        in_compensation_band = result.in_compensation_band,
        distance = result.distance,
        direction = result.direction.code(),
        "classified"
    );
    Ok(result)
}
