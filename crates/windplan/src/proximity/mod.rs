//! Distance alerts and deforestation estimates for a turbine layout.
//!
//! - `find_nearest_alert`: turbine vs. the other turbines.
//! - `find_nearest_polygon_alert`: turbine vs. restricted areas (and open
//!   two-point areas).
//! - `overlap`: circle–polygon area heuristic and per-area sums.
//!
//! All queries take thresholds as arguments and keep no state between calls.
//! Alerts use strict `<`; the first candidate reaching a new minimum wins ties.

mod overlap;

pub use overlap::{
    deforestation_estimates, estimate_circle_overlap, estimate_polygon_overlap, AreaEstimate,
};

use nalgebra::Vector2;

use crate::cfg::PlannerCfg;
use crate::geom2::{vec, Polygon2};

/// Closest qualifying obstruction for one probe point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityQuery {
    pub is_alerting: bool,
    /// Infinite when nothing is within the threshold.
    pub nearest_distance: f64,
    /// End of the indicator line; `None` when clear or inside an area.
    pub nearest_point: Option<Vector2<f64>>,
}

impl ProximityQuery {
    pub const CLEAR: Self = Self {
        is_alerting: false,
        nearest_distance: f64::INFINITY,
        nearest_point: None,
    };

    fn offer(&mut self, distance: f64, point: Option<Vector2<f64>>, threshold: f64) {
        if distance < threshold && distance < self.nearest_distance {
            self.nearest_distance = distance;
            self.is_alerting = true;
            self.nearest_point = point;
        }
    }
}

impl Default for ProximityQuery {
    fn default() -> Self {
        Self::CLEAR
    }
}

/// Nearest other point of `points` closer than `threshold` to `points[probe]`.
///
/// The probe is excluded by index, so duplicates of its position still count.
/// An out-of-range `probe` yields `CLEAR`.
pub fn find_nearest_alert(probe: usize, points: &[Vector2<f64>], threshold: f64) -> ProximityQuery {
    let mut q = ProximityQuery::CLEAR;
    let Some(&p) = points.get(probe) else {
        return q;
    };
    for (i, &other) in points.iter().enumerate() {
        if i != probe {
            q.offer(vec::distance(p, other), Some(other), threshold);
        }
    }
    q
}

/// Nearest restricted-area boundary closer than `threshold` to `probe`.
///
/// Being inside an area counts as distance 0 without an indicator point.
/// An area still being drawn with two points alerts on its one edge; a single
/// point is ignored.
pub fn find_nearest_polygon_alert(
    probe: Vector2<f64>,
    polygons: &[Polygon2],
    threshold: f64,
) -> ProximityQuery {
    let mut q = ProximityQuery::CLEAR;
    for poly in polygons {
        if poly.contains(probe) {
            q.is_alerting = true;
            q.nearest_distance = 0.0;
            q.nearest_point = None;
        } else {
            for seg in poly.edges() {
                let nearest = seg.nearest_point(probe);
                q.offer(vec::distance(probe, nearest), Some(nearest), threshold);
            }
        }
    }
    q
}

/// Both alert kinds for one turbine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbineAlert {
    pub position: Vector2<f64>,
    pub turbine: ProximityQuery,
    pub area: ProximityQuery,
}

impl TurbineAlert {
    #[inline]
    pub fn is_alerting(&self) -> bool {
        self.turbine.is_alerting || self.area.is_alerting
    }

    /// Inside a restricted area (alerting without an indicator point).
    #[inline]
    pub fn is_inside_area(&self) -> bool {
        self.area.is_alerting && self.area.nearest_point.is_none()
    }

    /// Target of the single indicator line drawn from the turbine.
    ///
    /// The closer of the two alerts wins (turbines on ties); standing inside
    /// an area suppresses the line.
    pub fn indicator(&self) -> Option<Vector2<f64>> {
        if self.is_inside_area() {
            None
        } else if self.area.is_alerting && self.area.nearest_distance < self.turbine.nearest_distance {
            self.area.nearest_point
        } else if self.turbine.is_alerting {
            self.turbine.nearest_point
        } else {
            None
        }
    }
}

/// Alerts for every turbine against the others and the restricted areas.
pub fn turbine_alerts(
    turbines: &[Vector2<f64>],
    restricted: &[Polygon2],
    cfg: &PlannerCfg,
) -> Vec<TurbineAlert> {
    turbines
        .iter()
        .enumerate()
        .map(|(i, &position)| TurbineAlert {
            position,
            turbine: find_nearest_alert(i, turbines, cfg.turbine_min_distance),
            area: find_nearest_polygon_alert(position, restricted, cfg.area_min_distance),
        })
        .collect()
}

/// Everything the planner overlays on a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutReport {
    pub alerts: Vec<TurbineAlert>,
    pub estimates: Vec<AreaEstimate>,
}

impl LayoutReport {
    pub fn alert_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.is_alerting()).count()
    }

    pub fn total_estimate(&self) -> f64 {
        self.estimates.iter().map(|e| e.estimate).sum()
    }
}

/// Refresh alerts and estimates after the layout changed.
pub fn evaluate_layout(
    turbines: &[Vector2<f64>],
    restricted: &[Polygon2],
    wood: &[Polygon2],
    cfg: &PlannerCfg,
) -> LayoutReport {
    let span = tracing::debug_span!(
        "evaluate_layout",
        turbines = turbines.len(),
        restricted = restricted.len(),
        wood = wood.len()
    );
    let _enter = span.enter();
    let report = LayoutReport {
        alerts: turbine_alerts(turbines, restricted, cfg),
        estimates: deforestation_estimates(turbines, wood, cfg.deforestation_radius),
    };
    tracing::debug!(
        alerting = report.alert_count(),
        estimate = report.total_estimate(),
        "layout evaluated"
    );
    report
}
