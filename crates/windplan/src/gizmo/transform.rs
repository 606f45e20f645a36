//! Relative coordinate transform between two two-point reference frames.
//!
//! A frame is an origin `a` plus the forward axis `v = b − a` and its
//! perpendicular `o = perpendicular(v)`. A point is decomposed in the old
//! frame and rebuilt in the new one, scaled by `|v1| / |v0|`. This carries
//! translation, rotation and uniform scale of the reference pair over to the
//! point; reflections cannot occur since both frames use the same turn sense.

use nalgebra::Vector2;

use super::{AxisEnd, TransformError};
use crate::geom2::vec;

#[derive(Clone, Copy, Debug)]
struct Frame {
    origin: Vector2<f64>,
    forward: Vector2<f64>,
    ortho: Vector2<f64>,
    length: f64,
}

impl Frame {
    fn new(a: Vector2<f64>, b: Vector2<f64>, which: AxisEnd) -> Result<Self, TransformError> {
        let v = b - a;
        let length = v.norm();
        if !length.is_finite() || length <= 0.0 {
            return Err(TransformError::DegenerateAxis { which });
        }
        let forward = v / length;
        Ok(Self {
            origin: a,
            forward,
            ortho: vec::perpendicular(forward),
            length,
        })
    }
}

/// Precomputed old → new frame pair; reuse it for several points.
#[derive(Clone, Copy, Debug)]
pub struct RelativeTransform {
    before: Frame,
    after: Frame,
    scale: f64,
}

impl RelativeTransform {
    /// Frames `(ref_a0 → ref_b0)` before and `(ref_a1 → ref_b1)` after the edit.
    ///
    /// Fails with `DegenerateAxis` if either pair coincides.
    pub fn new(
        ref_a0: Vector2<f64>,
        ref_b0: Vector2<f64>,
        ref_a1: Vector2<f64>,
        ref_b1: Vector2<f64>,
    ) -> Result<Self, TransformError> {
        let before = Frame::new(ref_a0, ref_b0, AxisEnd::Before)?;
        let after = Frame::new(ref_a1, ref_b1, AxisEnd::After)?;
        Ok(Self {
            before,
            after,
            scale: after.length / before.length,
        })
    }

    /// Same frames, opposite direction.
    pub fn inverse(&self) -> Self {
        Self {
            before: self.after,
            after: self.before,
            scale: self.before.length / self.after.length,
        }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Coefficients of `point` along the old forward/perpendicular axes.
    #[inline]
    pub fn coefficients(&self, point: Vector2<f64>) -> (f64, f64) {
        let support = point - self.before.origin;
        (
            support.dot(&self.before.forward),
            support.dot(&self.before.ortho),
        )
    }

    pub fn apply(&self, point: Vector2<f64>) -> Vector2<f64> {
        let (cv, co) = self.coefficients(point);
        self.after.origin
            + self.after.forward * (cv * self.scale)
            + self.after.ortho * (co * self.scale)
    }
}

/// One-shot form of `RelativeTransform::new(..)?.apply(point)`.
pub fn transform_point_relative(
    point: Vector2<f64>,
    ref_a0: Vector2<f64>,
    ref_b0: Vector2<f64>,
    ref_a1: Vector2<f64>,
    ref_b1: Vector2<f64>,
) -> Result<Vector2<f64>, TransformError> {
    Ok(RelativeTransform::new(ref_a0, ref_b0, ref_a1, ref_b1)?.apply(point))
}
