//! JSON input files: turbine layouts and planner threshold overrides.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use windplan::geom2::Polygon2;
use windplan::{PlannerCfg, Vec2};

/// A point as written in JSON: `[x, y]`.
pub type Xy = [f64; 2];

#[inline]
pub fn to_vec(p: Xy) -> Vec2<f64> {
    Vec2::new(p[0], p[1])
}

#[inline]
pub fn to_xy(v: Vec2<f64>) -> Xy {
    [v.x, v.y]
}

/// Parse `x,y` from the command line.
pub fn parse_xy(s: &str) -> Result<Xy, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("non-finite coordinate in `{s}`"));
    }
    Ok([x, y])
}

/// Turbine positions plus restricted and wood areas.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Layout {
    pub turbines: Vec<Xy>,
    pub restricted_areas: Vec<Vec<Xy>>,
    pub wood_areas: Vec<Vec<Xy>>,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing layout {}", path.display()))
    }

    pub fn turbine_points(&self) -> Vec<Vec2<f64>> {
        self.turbines.iter().copied().map(to_vec).collect()
    }

    pub fn restricted(&self) -> Vec<Polygon2> {
        polygons(&self.restricted_areas)
    }

    pub fn wood(&self) -> Vec<Polygon2> {
        polygons(&self.wood_areas)
    }
}

fn polygons(areas: &[Vec<Xy>]) -> Vec<Polygon2> {
    areas
        .iter()
        .map(|pts| Polygon2::new(pts.iter().copied().map(to_vec).collect()))
        .collect()
}

/// Optional threshold overrides; missing fields keep the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CfgFile {
    pub turbine_min_distance: Option<f64>,
    pub area_min_distance: Option<f64>,
    pub deforestation_radius: Option<f64>,
    pub extension_min_gap: Option<f64>,
}

impl CfgFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Overlay onto `base`; every resulting threshold must be positive and finite.
    pub fn apply(&self, base: PlannerCfg) -> Result<PlannerCfg> {
        let cfg = PlannerCfg {
            turbine_min_distance: self.turbine_min_distance.unwrap_or(base.turbine_min_distance),
            area_min_distance: self.area_min_distance.unwrap_or(base.area_min_distance),
            deforestation_radius: self.deforestation_radius.unwrap_or(base.deforestation_radius),
            extension_min_gap: self.extension_min_gap.unwrap_or(base.extension_min_gap),
        };
        for (name, value) in [
            ("turbine_min_distance", cfg.turbine_min_distance),
            ("area_min_distance", cfg.area_min_distance),
            ("extension_min_gap", cfg.extension_min_gap),
        ] {
            ensure!(value.is_finite() && value > 0.0, "{name} must be positive, got {value}");
        }
        check_radius(cfg.deforestation_radius)?;
        Ok(cfg)
    }
}

/// Deforestation radius usable for an area estimate.
pub fn check_radius(radius: f64) -> Result<f64> {
    ensure!(radius.is_finite() && radius > 0.0, "radius must be positive, got {radius}");
    ensure!(
        (std::f64::consts::PI * radius * radius).is_finite(),
        "radius {radius} is too large for an area estimate"
    );
    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_xy_accepts_signed_pairs() {
        assert_eq!(parse_xy("-5,5").unwrap(), [-5.0, 5.0]);
        assert_eq!(parse_xy(" 1.5 , -2e1").unwrap(), [1.5, -20.0]);
        assert!(parse_xy("3").is_err());
        assert!(parse_xy("a,1").is_err());
        assert!(parse_xy("inf,1").is_err());
    }

    #[test]
    fn layout_loads_with_missing_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{"turbines": [[0, 0], [10, 0]], "wood_areas": [[[0,0],[5,0],[5,5]]]}"#)
            .unwrap();
        let layout = Layout::load(&path).unwrap();
        assert_eq!(layout.turbine_points().len(), 2);
        assert!(layout.restricted().is_empty());
        assert_eq!(layout.wood()[0].len(), 3);
    }

    #[test]
    fn layout_load_reports_path_on_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();
        let err = Layout::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn cfg_file_overlays_defaults() {
        let cfg: CfgFile = serde_json::from_str(r#"{"area_min_distance": 120}"#).unwrap();
        let merged = cfg.apply(PlannerCfg::default()).unwrap();
        assert_eq!(merged.area_min_distance, 120.0);
        assert_eq!(merged.turbine_min_distance, 30.0);
        assert!(serde_json::from_str::<CfgFile>(r#"{"radius": 1}"#).is_err());
    }

    #[test]
    fn cfg_file_rejects_non_positive_thresholds() {
        for text in [
            r#"{"extension_min_gap": 0}"#,
            r#"{"extension_min_gap": -5}"#,
            r#"{"turbine_min_distance": -1}"#,
            r#"{"area_min_distance": 0}"#,
            r#"{"deforestation_radius": 0}"#,
            r#"{"deforestation_radius": 1e200}"#,
        ] {
            let cfg: CfgFile = serde_json::from_str(text).unwrap();
            assert!(cfg.apply(PlannerCfg::default()).is_err(), "{text}");
        }
    }

    #[test]
    fn radius_must_give_a_finite_circle_area() {
        assert_eq!(check_radius(50.0).unwrap(), 50.0);
        assert!(check_radius(0.0).is_err());
        assert!(check_radius(f64::NAN).is_err());
        let err = check_radius(1e200).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
