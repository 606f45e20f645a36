//! Circles built from control points (center+rim, diameter, three rim points).

use nalgebra::Vector2;

/// Relative tolerance for the collinearity test in `through_three_points`.
const EPS_DET: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2 {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle2 {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle around `center` passing through `rim`.
    #[inline]
    pub fn from_center_and_point(center: Vector2<f64>, rim: Vector2<f64>) -> Self {
        Self::new(center, (rim - center).norm())
    }

    /// Circle whose diameter runs from `p` to `q`.
    #[inline]
    pub fn from_diameter(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self::new((p + q) * 0.5, (q - p).norm() * 0.5)
    }

    /// Circumcircle of the triangle `a, b, c`; `None` when the points are collinear.
    pub fn through_three_points(
        a: Vector2<f64>,
        b: Vector2<f64>,
        c: Vector2<f64>,
    ) -> Option<Self> {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
        if !d.is_finite() || d.abs() <= EPS_DET * ab.norm() * ac.norm() {
            return None;
        }
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let offset = Vector2::new(ac.y * ab2 - ab.y * ac2, ab.x * ac2 - ac.x * ab2) / d;
        Some(Self::from_center_and_point(a + offset, a))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm() <= self.radius
    }
}
