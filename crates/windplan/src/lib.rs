//! Geometry core of the wind-turbine planner.
//!
//! Two pure subsystems, no I/O and no rendering:
//! - `gizmo`: the four-point background-image control (center, extension,
//!   two scale handles) and its constraint/dependency rules.
//! - `proximity`: distance alerts between turbines and restricted areas, and
//!   the circle–polygon deforestation estimate.
//!
//! Supporting modules: `geom2` primitives, the observable `points`
//! container with `drag` sessions, `units` formatting and the planner `cfg`.
//!
//! Every call is self-contained: callers own the point data and pass it in.

pub mod cfg;
pub mod drag;
pub mod geom2;
pub mod gizmo;
pub mod points;
pub mod proximity;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::PlannerCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::PlannerCfg;
    pub use crate::drag::DragHandle;
    pub use crate::geom2::{Bounds2, Circle2, Polygon2, Segment2};
    pub use crate::gizmo::{
        modify_gizmo, transform_point_relative, BackgroundImageModifier, ControlModifier,
        ImagePlacement, PassThrough, ScaleGuide, TransformError,
    };
    pub use crate::points::ControlPoints;
    pub use crate::proximity::{
        estimate_circle_overlap, evaluate_layout, find_nearest_alert, find_nearest_polygon_alert,
        LayoutReport, ProximityQuery, TurbineAlert,
    };
    pub use nalgebra::Vector2 as Vec2;
}
