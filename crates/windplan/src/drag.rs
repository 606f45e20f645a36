//! Drag session for a single control point.
//!
//! The handle reports a pick position at drag start and the current pointer
//! position on every move, both in world coordinates. Each move proposes
//! `original + (current − start)`, so moves are relative to the drag start
//! rather than cumulative.

use nalgebra::Vector2;

use crate::gizmo::{ControlModifier, TransformError};
use crate::points::ControlPoints;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragHandle {
    start: Vector2<f64>,
    original: Vector2<f64>,
    index: usize,
}

impl DragHandle {
    /// `None` if `index` is not a point of `points`.
    pub fn begin(start: Vector2<f64>, index: usize, points: &ControlPoints) -> Option<Self> {
        Some(Self {
            start,
            original: points.get(index)?,
            index,
        })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn proposed(&self, current: Vector2<f64>) -> Vector2<f64> {
        self.original + (current - self.start)
    }

    pub fn continue_to(
        &self,
        current: Vector2<f64>,
        points: &mut ControlPoints,
        modifier: &dyn ControlModifier,
    ) -> Result<(), TransformError> {
        points.apply_edit(self.index, self.proposed(current), modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizmo::{BackgroundImageModifier, PassThrough, EXTENSION};
    use nalgebra::vector;

    #[test]
    fn moves_are_relative_to_drag_start() {
        let mut cp = ControlPoints::new(vec![vector![10.0, 10.0], vector![20.0, 10.0]]);
        let drag = DragHandle::begin(vector![11.0, 12.0], 1, &cp).unwrap();
        drag.continue_to(vector![13.0, 12.0], &mut cp, &PassThrough)
            .unwrap();
        drag.continue_to(vector![14.0, 15.0], &mut cp, &PassThrough)
            .unwrap();
        assert_eq!(cp.get(1), Some(vector![23.0, 13.0]));
        assert_eq!(cp.get(0), Some(vector![10.0, 10.0]));
    }

    #[test]
    fn begin_rejects_unknown_index() {
        let cp = ControlPoints::new(vec![vector![0.0, 0.0]]);
        assert!(DragHandle::begin(vector![0.0, 0.0], 1, &cp).is_none());
    }

    #[test]
    fn dragging_extension_through_gizmo_modifier() {
        let mut cp = ControlPoints::new(vec![
            vector![0.0, 0.0],
            vector![0.0, -10.0],
            vector![-5.0, 5.0],
            vector![5.0, 5.0],
        ]);
        let m = BackgroundImageModifier::default();
        let drag = DragHandle::begin(vector![1.0, -10.0], EXTENSION, &cp).unwrap();
        drag.continue_to(vector![6.0, -20.0], &mut cp, &m).unwrap();
        assert!((cp.get(EXTENSION).unwrap() - vector![0.0, -20.0]).norm() < 1e-9);
        assert!((cp.get(2).unwrap() - vector![-10.0, 10.0]).norm() < 1e-9);
        // Dragging below the center is clamped to the minimum gap.
        drag.continue_to(vector![1.0, 40.0], &mut cp, &m).unwrap();
        assert!((cp.get(EXTENSION).unwrap() - vector![0.0, -10.0]).norm() < 1e-9);
        assert!((cp.get(2).unwrap() - vector![-5.0, 5.0]).norm() < 1e-9);
    }
}
