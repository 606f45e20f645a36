//! Background-image placement gizmo: four control points with fixed roles.
//!
//! Roles (by index)
//! - `CENTER` (0): free.
//! - `EXTENSION` (1): directly above the center, at least `min_gap` away.
//!   Together with the center it fixes the image orientation and base scale.
//! - `SCALE_A`, `SCALE_B` (2, 3): independent scale handles. When locked,
//!   they slide along the line through their current positions and drag the
//!   center/extension pair along instead of moving on the image.
//!
//! Rule order inside `modify_gizmo` is fixed; later rules read what earlier
//! rules wrote:
//! 1. clamp the extension (vertical-only, minimum gap),
//! 2. project a locked scale handle onto the current scale line,
//! 3. center moved ⇒ extension follows rigidly,
//! 4. center/extension moved ⇒ scale handles follow the axis frame,
//! 5. locked scale handle moved ⇒ center/extension follow the scale frame.

mod placement;
mod transform;

pub use placement::{ImagePlacement, ScaleGuide};
pub use transform::{transform_point_relative, RelativeTransform};

use std::fmt;

use nalgebra::Vector2;

use crate::geom2::vec;

pub const CENTER: usize = 0;
pub const EXTENSION: usize = 1;
pub const SCALE_A: usize = 2;
pub const SCALE_B: usize = 3;
/// Number of points in a gizmo.
pub const GIZMO_POINTS: usize = 4;
/// Minimum vertical distance between center and extension.
pub const DEFAULT_MIN_GAP: f64 = 10.0;

/// Which side of an edit a degenerate reference axis belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisEnd {
    Before,
    After,
}

/// Errors surfaced by the gizmo engine.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformError {
    /// Reference points coincide (or are not finite), so no frame exists.
    DegenerateAxis { which: AxisEnd },
    /// Edited index is not a point of the set.
    IndexOutOfRange { index: usize, len: usize },
    /// The modifier expects a fixed number of points.
    WrongPointCount { expected: usize, found: usize },
    /// A proposed point has a NaN or infinite coordinate.
    NonFinite { index: usize },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAxis { which } => {
                let side = match which {
                    AxisEnd::Before => "before",
                    AxisEnd::After => "after",
                };
                write!(f, "reference points coincide {side} the edit")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for {len} points")
            }
            Self::WrongPointCount { expected, found } => {
                write!(f, "expected {expected} control points, found {found}")
            }
            Self::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
        }
    }
}

impl std::error::Error for TransformError {}

/// Hook a point container calls after a single point was moved.
///
/// `current` holds the committed positions, `updated` the proposal in which
/// only `index` differs. The returned vector replaces all points.
pub trait ControlModifier {
    fn modify_points(
        &self,
        current: &[Vector2<f64>],
        updated: Vec<Vector2<f64>>,
        index: usize,
    ) -> Result<Vec<Vector2<f64>>, TransformError>;
}

/// Accepts every proposal unchanged (plain polylines, areas, turbines).
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThrough;

impl ControlModifier for PassThrough {
    fn modify_points(
        &self,
        current: &[Vector2<f64>],
        updated: Vec<Vector2<f64>>,
        index: usize,
    ) -> Result<Vec<Vector2<f64>>, TransformError> {
        if index >= current.len() {
            return Err(TransformError::IndexOutOfRange {
                index,
                len: current.len(),
            });
        }
        Ok(updated)
    }
}

/// Vertical-only, minimum-gap restriction of the extension point.
///
/// Idempotent: a constrained point is a fixed point of this map.
#[inline]
pub fn constrain_extension(
    center: Vector2<f64>,
    proposed: Vector2<f64>,
    min_gap: f64,
) -> Vector2<f64> {
    Vector2::new(center.x, proposed.y.min(center.y - min_gap))
}

/// Compute the consistent gizmo after `index` was moved to `updated[index]`.
///
/// Closed form, no iteration. The only failure besides bad input is a
/// degenerate reference axis: coincident scale handles when `locked`, or a
/// proposal that collapses the locked handles onto each other.
pub fn modify_gizmo(
    current: &[Vector2<f64>; GIZMO_POINTS],
    mut updated: [Vector2<f64>; GIZMO_POINTS],
    index: usize,
    locked: bool,
    min_gap: f64,
) -> Result<[Vector2<f64>; GIZMO_POINTS], TransformError> {
    if index >= GIZMO_POINTS {
        return Err(TransformError::IndexOutOfRange {
            index,
            len: GIZMO_POINTS,
        });
    }
    if let Some(bad) = updated.iter().position(|p| !vec::is_finite(*p)) {
        return Err(TransformError::NonFinite { index: bad });
    }
    tracing::trace!(index, locked, "gizmo edit");

    // Movement restrictions.
    if index == EXTENSION {
        updated[EXTENSION] = constrain_extension(updated[CENTER], updated[EXTENSION], min_gap);
    }
    let scale_handle_locked = index > EXTENSION && locked;
    if scale_handle_locked {
        updated[index] = vec::project_on_line(updated[index], current[SCALE_A], current[SCALE_B])
            .ok_or(TransformError::DegenerateAxis {
                which: AxisEnd::Before,
            })?;
    }

    // Movement dependencies.
    if index == CENTER {
        let diff = updated[CENTER] - current[CENTER];
        updated[EXTENSION] += diff;
    }
    if index < SCALE_A {
        let t = RelativeTransform::new(
            current[CENTER],
            current[EXTENSION],
            updated[CENTER],
            updated[EXTENSION],
        )?;
        updated[SCALE_A] = t.apply(current[SCALE_A]);
        updated[SCALE_B] = t.apply(current[SCALE_B]);
    }
    if scale_handle_locked {
        let t = RelativeTransform::new(
            current[SCALE_A],
            current[SCALE_B],
            updated[SCALE_A],
            updated[SCALE_B],
        )?;
        updated[CENTER] = t.apply(current[CENTER]);
        updated[EXTENSION] = t.apply(current[EXTENSION]);
    }
    Ok(updated)
}

/// Control modifier for the background-image scale/rotate tool.
#[derive(Clone, Copy, Debug)]
pub struct BackgroundImageModifier {
    /// Temporarily disables all rules (proposals pass through unchanged).
    pub enabled: bool,
    /// Scale handles keep their position on the image and move it instead.
    pub scale_points_locked: bool,
    pub min_gap: f64,
}

impl Default for BackgroundImageModifier {
    fn default() -> Self {
        Self {
            enabled: true,
            scale_points_locked: false,
            min_gap: DEFAULT_MIN_GAP,
        }
    }
}

impl BackgroundImageModifier {
    pub fn locked() -> Self {
        Self {
            scale_points_locked: true,
            ..Self::default()
        }
    }
}

impl ControlModifier for BackgroundImageModifier {
    fn modify_points(
        &self,
        current: &[Vector2<f64>],
        updated: Vec<Vector2<f64>>,
        index: usize,
    ) -> Result<Vec<Vector2<f64>>, TransformError> {
        if !self.enabled {
            return Ok(updated);
        }
        let current: &[Vector2<f64>; GIZMO_POINTS] =
            current
                .try_into()
                .map_err(|_| TransformError::WrongPointCount {
                    expected: GIZMO_POINTS,
                    found: current.len(),
                })?;
        let updated: [Vector2<f64>; GIZMO_POINTS] =
            updated
                .try_into()
                .map_err(|v: Vec<Vector2<f64>>| TransformError::WrongPointCount {
                    expected: GIZMO_POINTS,
                    found: v.len(),
                })?;
        let out = modify_gizmo(
            current,
            updated,
            index,
            self.scale_points_locked,
            self.min_gap,
        )?;
        Ok(out.to_vec())
    }
}
