//! Small helpers on `Vector2<f64>` that nalgebra does not provide directly.

use nalgebra::Vector2;

/// Quarter turn counterclockwise (in a y-up frame): `(x, y) ↦ (−y, x)`.
///
/// Every frame in this crate uses this one rotation sense.
#[inline]
pub fn perpendicular(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn is_finite(p: Vector2<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Orthogonal projection of `p` onto the infinite line through `a` and `b`.
///
/// Returns `None` if `a` and `b` coincide (no line).
pub fn project_on_line(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> Option<Vector2<f64>> {
    let d = b - a;
    let len2 = d.norm_squared();
    if !len2.is_finite() || len2 <= 0.0 {
        return None;
    }
    let t = (p - a).dot(&d) / len2;
    Some(a + d * t)
}
