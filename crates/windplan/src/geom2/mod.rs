//! Planar primitives shared by the gizmo engine and the proximity estimator.
//!
//! - `vec`: helpers on `Vector2<f64>` (quarter turn, line projection, finiteness).
//! - `Segment2`, `Polygon2`: boundary queries (nearest point, ray-cast containment).
//! - `Circle2`: constructions used by the circle controls.
//! - `rand`: reproducible synthetic polygons and point scatters.
//!
//! Conventions
//! - Screen-style coordinates: "above" means smaller `y`.
//! - Polygons are closed implicitly (last point connects to the first) and are
//!   assumed simple. Fewer than three points means "no geometry".

mod circle;
mod polygon;
pub mod rand;
mod types;
pub mod vec;

pub use circle::Circle2;
pub use polygon::Polygon2;
pub use types::{Bounds2, Segment2};
