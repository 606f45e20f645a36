//! Circle–polygon overlap heuristic.
//!
//! Not an exact intersection area. The covered fraction of the circle is
//! interpolated linearly from the distance between circle center and the
//! polygon boundary:
//! - center inside: `min(d / r / 2 + 0.5, 1)`
//! - center outside: `max(-d / r / 2 + 0.5, 0)`
//!
//! So a center on the boundary counts half the circle and a center at least
//! one radius away counts all or nothing. Concave polygons and radii large
//! relative to the polygon are over- or under-estimated. Sums over several
//! circles do not remove double-counted overlap between the circles.

use nalgebra::Vector2;

use crate::geom2::Polygon2;
use crate::units;

/// Estimated area of the circle `(center, radius)` lying inside `polygon`.
///
/// Always in `[0, π r²]`. Returns 0 for `radius <= 0` (or non-finite) and for
/// polygons with fewer than three points.
pub fn estimate_circle_overlap(center: Vector2<f64>, radius: f64, polygon: &Polygon2) -> f64 {
    if !(radius.is_finite() && radius > 0.0) {
        return 0.0;
    }
    let Some((shortest, _)) = polygon.nearest_boundary_point(center) else {
        return 0.0;
    };
    let circle_area = std::f64::consts::PI * radius * radius;
    let factor = if polygon.contains(center) {
        (shortest / radius / 2.0 + 0.5).min(1.0)
    } else {
        (-shortest / radius / 2.0 + 0.5).max(0.0)
    };
    circle_area * factor
}

/// Sum of `estimate_circle_overlap` over equal circles around `centers`.
pub fn estimate_polygon_overlap(centers: &[Vector2<f64>], radius: f64, polygon: &Polygon2) -> f64 {
    centers
        .iter()
        .map(|&c| estimate_circle_overlap(c, radius, polygon))
        .sum()
}

/// Deforestation estimate for one wood area.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaEstimate {
    /// Index into the wood areas passed in.
    pub area: usize,
    pub estimate: f64,
    /// Bounding-box center of the area, where the label goes.
    pub anchor: Vector2<f64>,
}

impl AreaEstimate {
    /// `-<area>` label; `None` when nothing is cleared.
    pub fn label(&self) -> Option<String> {
        (self.estimate > 0.0).then(|| format!("-{}", units::format_area(self.estimate)))
    }
}

/// One estimate per wood area with at least three points, in input order.
pub fn deforestation_estimates(
    turbines: &[Vector2<f64>],
    wood: &[Polygon2],
    radius: f64,
) -> Vec<AreaEstimate> {
    wood.iter()
        .enumerate()
        .filter(|(_, poly)| poly.has_geometry())
        .filter_map(|(area, poly)| {
            Some(AreaEstimate {
                area,
                estimate: estimate_polygon_overlap(turbines, radius, poly),
                anchor: poly.box_center()?,
            })
        })
        .collect()
}
