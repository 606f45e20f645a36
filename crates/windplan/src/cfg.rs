//! Planner thresholds.
//!
//! Plain values passed into each call; the library keeps no global settings.

use crate::gizmo::DEFAULT_MIN_GAP;

/// Distances in world units (metres).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerCfg {
    /// Turbines closer than this to another turbine raise an alert.
    pub turbine_min_distance: f64,
    /// Turbines closer than this to a restricted area raise an alert.
    pub area_min_distance: f64,
    /// Radius of the cleared circle around each turbine.
    pub deforestation_radius: f64,
    /// Minimum gap between image center and extension point.
    pub extension_min_gap: f64,
}

impl Default for PlannerCfg {
    fn default() -> Self {
        Self {
            turbine_min_distance: 30.0,
            area_min_distance: 30.0,
            deforestation_radius: 50.0,
            extension_min_gap: DEFAULT_MIN_GAP,
        }
    }
}
