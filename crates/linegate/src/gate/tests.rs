use super::*;
use crate::error::ClassifyError;
use crate::geom2::{cross, sub, LineSegment, Point};
use proptest::prelude::*;

fn diag() -> LineSegment {
    LineSegment::from(((50, 50), (200, 200)))
}

fn at(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn canonical_point_is_in_band_left() {
    // cross((50,30), (150,150)) = 3000 > 0
    let r = classify(at(100, 80), diag()).unwrap();
    assert!(r.in_band);
    assert!(!r.in_compensation_band);
    assert!((r.distance - 3000.0 / (150.0f64 * 2f64.sqrt())).abs() < 1e-9);
    assert!((r.distance - 14.1421).abs() < 1e-4);
    assert_eq!(r.direction, Direction::Left);
    assert_eq!(r.as_tuple().3, 1);
}

#[test]
fn mirrored_point_is_in_band_right() {
    let r = classify(at(80, 100), diag()).unwrap();
    assert!(r.in_band);
    assert_eq!(r.direction, Direction::Right);
    assert!((r.distance - 14.1421).abs() < 1e-4);
}

#[test]
fn endpoints_are_in_band_at_zero_distance() {
    for p in [at(50, 50), at(200, 200)] {
        let r = classify(p, diag()).unwrap();
        assert!(r.in_band, "{p:?}");
        assert_eq!(r.distance, 0.0);
        assert!(!r.in_compensation_band);
    }
}

#[test]
fn point_on_supporting_line_reports_right() {
    let r = classify(at(120, 120), diag()).unwrap();
    assert!(r.in_band);
    assert_eq!(r.distance, 0.0);
    assert_eq!(r.direction, Direction::Right);
}

#[test]
fn far_beyond_endpoint_is_sentinel() {
    // nearest endpoint at |(-40,-40)| ~ 56.57
    let r = classify(at(10, 10), diag()).unwrap();
    assert!(!r.in_band);
    assert!(!r.in_compensation_band);
    assert_eq!(r.distance, SENTINEL_DISTANCE);
    assert_eq!(r.direction, Direction::None);
    assert_eq!(r.as_tuple(), (false, false, 99999.99, -1));
    assert!(r.is_out_of_range());
}

#[test]
fn zero_projection_counts_as_in_band() {
    // dot((-5,5), (150,150)) == 0 sits on the strip edge.
    let r = classify(at(45, 55), diag()).unwrap();
    assert!(r.in_band);
    assert!(!r.in_compensation_band);
    assert!((r.distance - 1500.0 / (150.0f64 * 2f64.sqrt())).abs() < 1e-9);
    assert_eq!(r.direction, Direction::Right);
}

#[test]
fn just_past_endpoint_is_in_compensation_band() {
    // v1 = (-10,5): dot = -750, |v1| = sqrt(125), cross = -2250
    let r = classify(at(40, 55), diag()).unwrap();
    assert!(!r.in_band);
    assert!(r.in_compensation_band);
    assert!((r.distance - 125f64.sqrt()).abs() < 1e-12);
    assert_eq!(r.direction, Direction::Right);

    let r = classify(at(55, 40), diag()).unwrap();
    assert!(r.in_compensation_band);
    assert_eq!(r.direction, Direction::Left);
}

#[test]
fn compensation_band_near_second_endpoint_uses_cross_from_p1() {
    // Beyond p2: v1 = (160,150), v2 = (10,0); cross(v1, v3) = 1500 > 0.
    let r = classify(at(210, 200), diag()).unwrap();
    assert!(!r.in_band);
    assert!(r.in_compensation_band);
    assert!((r.distance - 10.0).abs() < 1e-12);
    assert_eq!(r.direction, Direction::Left);
}

// The compensation branch reuses the in-band sign rule even though the
// projection lies outside the span. Pinned as-is.
#[test]
fn compensation_side_follows_infinite_line_not_nearest_endpoint() {
    let seg = LineSegment::from(((0, 0), (100, 0)));
    // Directly "behind" p1 on the supporting line: cross == 0 -> Right.
    let r = classify(at(-10, 0), seg).unwrap();
    assert!(r.in_compensation_band);
    assert_eq!(r.direction, Direction::Right);
    assert!((r.distance - 10.0).abs() < 1e-12);
    // Below the line (y down) behind p1.
    let r = classify(at(-10, 5), seg).unwrap();
    assert!(r.in_compensation_band);
    assert_eq!(r.direction, Direction::Right);
    let r = classify(at(-10, -5), seg).unwrap();
    assert_eq!(r.direction, Direction::Left);
}

#[test]
fn threshold_is_strict() {
    let seg = LineSegment::from(((0, 0), (100, 0)));
    let r = classify(at(-40, 0), seg).unwrap();
    assert!(!r.in_compensation_band);
    assert_eq!(r.direction, Direction::None);
    let r = classify(at(-39, 0), seg).unwrap();
    assert!(r.in_compensation_band);
}

#[test]
fn degenerate_segment_is_error_for_any_point() {
    let seg = LineSegment::from(((50, 50), (50, 50)));
    for p in [at(50, 50), at(0, 0), at(1000, -3)] {
        let err = classify(p, seg).unwrap_err();
        assert_eq!(err, ClassifyError::DegenerateSegment { p: at(50, 50) });
    }
}

#[test]
fn custom_threshold_widens_compensation_band() {
    let cfg = GateCfg::with_threshold(60.0);
    let r = classify_with(at(10, 10), diag(), &cfg).unwrap();
    assert!(r.in_compensation_band);
    assert!((r.distance - 3200f64.sqrt()).abs() < 1e-9);

    let cfg = GateCfg {
        extra_cross_threshold: 0.0,
        sentinel_distance: 1.0,
    };
    let r = classify_with(at(40, 55), diag(), &cfg).unwrap();
    assert!(r.is_out_of_range());
    assert_eq!(r.distance, 1.0);
}

#[test]
fn sentinel_must_exceed_compensation_threshold() {
    // A sentinel at or below the threshold could equal a real distance,
    // e.g. 0.0 for a point sitting on an endpoint.
    for sentinel in [-5.0, -1.0, 0.0, 40.0] {
        let cfg = GateCfg {
            sentinel_distance: sentinel,
            ..GateCfg::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("must exceed"), "{err}");
        for p in [at(50, 50), at(10, 10)] {
            assert!(matches!(
                classify_with(p, diag(), &cfg),
                Err(ClassifyError::InvalidInput { .. })
            ));
        }
    }
    let cfg = GateCfg {
        sentinel_distance: 40.5,
        ..GateCfg::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn invalid_config_is_rejected() {
    for cfg in [
        GateCfg::with_threshold(f64::NAN),
        GateCfg::with_threshold(-1.0),
        GateCfg {
            sentinel_distance: f64::INFINITY,
            ..GateCfg::default()
        },
    ] {
        assert!(matches!(
            classify_with(at(0, 0), diag(), &cfg),
            Err(ClassifyError::InvalidInput { .. })
        ));
    }
}

#[test]
fn direction_codes_round_trip() {
    for d in [Direction::Left, Direction::Right, Direction::None] {
        assert_eq!(Direction::from_code(d.code()), Some(d));
    }
    assert_eq!(Direction::from_code(2), None);
    assert_eq!(Direction::Left.flipped(), Direction::Right);
    assert_eq!(Direction::None.flipped(), Direction::None);
}

#[test]
fn result_serializes_direction_as_code() {
    let r = classify(at(100, 80), diag()).unwrap();
    let v = serde_json::to_value(r).unwrap();
    assert_eq!(v["direction"], 1);
    assert_eq!(v["in_band"], true);
    assert_eq!(v["in_compensation_band"], false);
}

fn coord() -> impl Strategy<Value = i32> {
    -2_000i32..2_000
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn segment() -> impl Strategy<Value = LineSegment> {
    (point(), point())
        .prop_filter("non-degenerate", |(a, b)| a != b)
        .prop_map(|(a, b)| LineSegment::new(a, b))
}

proptest! {
    #[test]
    fn repeated_calls_agree(p in point(), seg in segment()) {
        let a = classify(p, seg).unwrap();
        let b = classify(p, seg).unwrap();
        prop_assert_eq!(a.as_tuple(), b.as_tuple());
    }

    #[test]
    fn bands_are_exclusive_and_sentinel_is_consistent(p in point(), seg in segment()) {
        let r = classify(p, seg).unwrap();
        prop_assert!(!(r.in_band && r.in_compensation_band));
        let none = r.direction == Direction::None;
        prop_assert_eq!(none, r.distance == SENTINEL_DISTANCE);
        prop_assert_eq!(none, r.is_out_of_range());
        prop_assert!(r.distance >= 0.0);
    }

    #[test]
    fn reversing_segment_flips_side(p in point(), seg in segment()) {
        let fwd = classify(p, seg).unwrap();
        let rev = classify(p, seg.reversed()).unwrap();
        prop_assert_eq!(fwd.in_band, rev.in_band);
        if fwd.in_band {
            prop_assert_eq!(fwd.distance, rev.distance);
            if cross(sub(p, seg.p1), sub(seg.p2, seg.p1)) != 0 {
                prop_assert_eq!(fwd.direction.flipped(), rev.direction);
            }
        }
    }

    #[test]
    fn endpoints_have_zero_distance(seg in segment()) {
        for p in [seg.p1, seg.p2] {
            let r = classify(p, seg).unwrap();
            prop_assert!(r.in_band);
            prop_assert_eq!(r.distance, 0.0);
        }
    }

    #[test]
    fn degenerate_always_errors(p in point(), q in point()) {
        let seg = LineSegment::new(q, q);
        let is_degenerate = matches!(
            classify(p, seg),
            Err(ClassifyError::DegenerateSegment { .. })
        );
        prop_assert!(is_degenerate);
    }
}
