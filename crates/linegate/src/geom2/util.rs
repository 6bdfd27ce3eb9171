use nalgebra::Vector2;

use super::types::Point;

/// `a - b` as a widened vector.
#[inline]
pub fn sub(a: Point, b: Point) -> Vector2<i64> {
    a.to_vector() - b.to_vector()
}

/// Exact dot product; `i128` so that no `i32`-derived input overflows.
#[inline]
pub fn dot(a: Vector2<i64>, b: Vector2<i64>) -> i128 {
    i128::from(a.x) * i128::from(b.x) + i128::from(a.y) * i128::from(b.y)
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
///
/// With the image y axis pointing down, a positive value puts `a` on the
/// left of `b`.
#[inline]
pub fn cross(a: Vector2<i64>, b: Vector2<i64>) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

/// Euclidean length.
#[inline]
pub fn norm(a: Vector2<i64>) -> f64 {
    (a.x as f64).hypot(a.y as f64)
}
