//! JSON rows written by the commands.

use serde::Serialize;
use windplan::gizmo::{ImagePlacement, ScaleGuide};
use windplan::proximity::{AreaEstimate, ProximityQuery, TurbineAlert};

use crate::layout::{to_xy, Xy};

#[derive(Debug, Serialize)]
pub struct QueryRow {
    pub alerting: bool,
    /// `None` when clear.
    pub distance: Option<f64>,
    pub nearest: Option<Xy>,
}

impl From<&ProximityQuery> for QueryRow {
    fn from(q: &ProximityQuery) -> Self {
        Self {
            alerting: q.is_alerting,
            distance: q.is_alerting.then_some(q.nearest_distance),
            nearest: q.nearest_point.map(to_xy),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlertRow {
    pub turbine: usize,
    pub position: Xy,
    pub alerting: bool,
    pub inside_area: bool,
    pub indicator: Option<Xy>,
    pub turbine_alert: QueryRow,
    pub area_alert: QueryRow,
}

impl AlertRow {
    pub fn new(turbine: usize, a: &TurbineAlert) -> Self {
        Self {
            turbine,
            position: to_xy(a.position),
            alerting: a.is_alerting(),
            inside_area: a.is_inside_area(),
            indicator: a.indicator().map(to_xy),
            turbine_alert: (&a.turbine).into(),
            area_alert: (&a.area).into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateRow {
    pub area: usize,
    pub estimate: f64,
    pub anchor: Xy,
    pub label: Option<String>,
}

impl From<&AreaEstimate> for EstimateRow {
    fn from(e: &AreaEstimate) -> Self {
        Self {
            area: e.area,
            estimate: e.estimate,
            anchor: to_xy(e.anchor),
            label: e.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlacementRow {
    pub translation: Xy,
    pub rotation: f64,
    pub scale: f64,
    pub corners: [Xy; 4],
}

impl From<&ImagePlacement> for PlacementRow {
    fn from(p: &ImagePlacement) -> Self {
        Self {
            translation: to_xy(p.translation),
            rotation: p.rotation,
            scale: p.scale,
            corners: p.corners().map(to_xy),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuideRow {
    pub distance: f64,
    pub midpoint: Xy,
    pub label: String,
}

impl From<&ScaleGuide> for GuideRow {
    fn from(g: &ScaleGuide) -> Self {
        Self {
            distance: g.distance,
            midpoint: to_xy(g.midpoint),
            label: g.label.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GizmoRow {
    pub points: Vec<Xy>,
    pub placement: PlacementRow,
    pub scale_guide: GuideRow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use windplan::geom2::Polygon2;
    use windplan::proximity::turbine_alerts;
    use windplan::{PlannerCfg, Vec2};

    #[test]
    fn clear_query_serializes_without_distance() {
        let row = QueryRow::from(&ProximityQuery::CLEAR);
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["alerting"], false);
        assert!(v["distance"].is_null());
        assert!(v["nearest"].is_null());
    }

    #[test]
    fn alert_row_inside_area() {
        let area = Polygon2::new(vec![
            Vec2::new(-10.0, -10.0),
            Vec2::new(10.0, -10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-10.0, 10.0),
        ]);
        let alerts = turbine_alerts(&[Vec2::new(0.0, 0.0)], &[area], &PlannerCfg::default());
        let v = serde_json::to_value(AlertRow::new(0, &alerts[0])).unwrap();
        assert_eq!(v["alerting"], true);
        assert_eq!(v["inside_area"], true);
        assert!(v["indicator"].is_null());
        assert_eq!(v["area_alert"]["distance"], 0.0);
    }
}
