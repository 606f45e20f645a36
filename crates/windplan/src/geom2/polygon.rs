//! Simple polygons given by their ordered boundary points.

use nalgebra::Vector2;

use super::types::{Bounds2, Segment2};

/// Closed polygon; the last point connects back to the first.
///
/// Invariants (assumed, not checked):
/// - The boundary does not self-intersect.
/// - Fewer than three points is "no geometry": no segments, nothing inside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon2 {
    pub points: Vec<Vector2<f64>>,
}

impl Polygon2 {
    #[inline]
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least three points, i.e. the polygon can enclose something.
    #[inline]
    pub fn has_geometry(&self) -> bool {
        self.points.len() >= 3
    }

    /// Boundary edges including the closing edge. Empty without geometry.
    pub fn segments(&self) -> impl Iterator<Item = Segment2> + '_ {
        let n = if self.has_geometry() {
            self.points.len()
        } else {
            0
        };
        (0..n).map(move |i| Segment2::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Edges drawn so far: the single open edge of a two-point area, else
    /// the same as `segments`.
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        let open = (self.points.len() == 2).then(|| Segment2::new(self.points[0], self.points[1]));
        open.into_iter().chain(self.segments())
    }

    /// Even-odd ray casting. Points on the boundary may land on either side.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        if !self.has_geometry() {
            return false;
        }
        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let pi = self.points[i];
            let pj = self.points[j];
            // The first clause guarantees pi.y != pj.y.
            if (pi.y > p.y) != (pj.y > p.y) {
                let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Closest boundary point to `p` and its distance.
    ///
    /// Ties keep the earliest edge. `None` without geometry.
    pub fn nearest_boundary_point(&self, p: Vector2<f64>) -> Option<(f64, Vector2<f64>)> {
        let mut best: Option<(f64, Vector2<f64>)> = None;
        for seg in self.segments() {
            let q = seg.nearest_point(p);
            let d = (q - p).norm();
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, q));
            }
        }
        best
    }

    /// Unsigned shoelace area; 0 without geometry.
    pub fn area(&self) -> f64 {
        self.signed_area_twice().abs() * 0.5
    }

    fn signed_area_twice(&self) -> f64 {
        if !self.has_geometry() {
            return 0.0;
        }
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum()
    }

    /// Area centroid; `None` without geometry or for zero area.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        let a2 = self.signed_area_twice();
        if !self.has_geometry() || a2.abs() < 1e-18 {
            return None;
        }
        let n = self.points.len();
        let mut c = Vector2::zeros();
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let cross = p.x * q.y - q.x * p.y;
            c += (p + q) * cross;
        }
        Some(c / (3.0 * a2))
    }

    /// Center of the bounding box (label anchor). `None` for no points.
    pub fn box_center(&self) -> Option<Vector2<f64>> {
        Bounds2::enclosing(&self.points).map(|b| b.center())
    }
}

impl From<Vec<Vector2<f64>>> for Polygon2 {
    fn from(points: Vec<Vector2<f64>>) -> Self {
        Self::new(points)
    }
}
