//! Derived quantities the image control draws from its gizmo points.

use nalgebra::{Rotation2, Vector2};

use crate::geom2::Segment2;
use crate::units;

/// Similarity transform placing the image's unit frame `[-1, 1]²` in the world.
///
/// Built from the center/extension axis: the extension sits at the middle of
/// the image's upper edge, so local `(0, -1)` maps onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    pub translation: Vector2<f64>,
    /// Radians; 0 when the extension is straight above the center.
    pub rotation: f64,
    /// Uniform scale, never below 1.
    pub scale: f64,
}

impl ImagePlacement {
    pub fn from_axis(center: Vector2<f64>, extension: Vector2<f64>) -> Self {
        let axis = extension - center;
        Self {
            translation: center,
            rotation: axis.y.atan2(axis.x) + std::f64::consts::FRAC_PI_2,
            scale: axis.norm().max(1.0),
        }
    }

    /// Image-local point to world coordinates.
    pub fn apply(&self, local: Vector2<f64>) -> Vector2<f64> {
        Rotation2::new(self.rotation) * (local * self.scale) + self.translation
    }

    /// World-space frame corners, starting at local `(1, 1)` and turning through `(−1, −1)`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(1.0, 1.0),
            Vector2::new(-1.0, 1.0),
            Vector2::new(-1.0, -1.0),
            Vector2::new(1.0, -1.0),
        ]
        .map(|c| self.apply(c))
    }
}

/// Measuring line between the two scale handles.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleGuide {
    pub distance: f64,
    pub midpoint: Vector2<f64>,
    pub label: String,
}

impl ScaleGuide {
    pub fn between(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        let seg = Segment2::new(a, b);
        let distance = seg.length();
        Self {
            distance,
            midpoint: seg.center(),
            label: units::format_length(distance),
        }
    }
}
