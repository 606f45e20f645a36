//! Segment and bounding-box types.

use nalgebra::Vector2;

/// Closed line segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.a + self.b) * 0.5
    }

    /// Point on the segment closest to `p` (clamped projection).
    ///
    /// A zero-length segment answers with its start point.
    pub fn nearest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let d = self.b - self.a;
        let len2 = d.norm_squared();
        if len2 <= 0.0 {
            return self.a;
        }
        let t = ((p - self.a).dot(&d) / len2).clamp(0.0, 1.0);
        self.a + d * t
    }

    #[inline]
    pub fn distance_to(&self, p: Vector2<f64>) -> f64 {
        (self.nearest_point(p) - p).norm()
    }
}

/// Axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest box holding all `points`; `None` for an empty slice.
    pub fn enclosing(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut b = Self::new(first, first);
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
