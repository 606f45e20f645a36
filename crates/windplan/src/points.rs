//! Ordered, observable control-point container.
//!
//! Index identifies role (e.g. 0 = gizmo center). Every committed mutation
//! runs all listeners synchronously, in subscription order, with the new
//! points. A rejected edit (out-of-range index, modifier error) commits and
//! notifies nothing.

use std::fmt;

use nalgebra::Vector2;

use crate::gizmo::{ControlModifier, TransformError};

/// Change listener; receives the points after the mutation committed.
pub type Listener = Box<dyn FnMut(&[Vector2<f64>])>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct ControlPoints {
    points: Vec<Vector2<f64>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for ControlPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPoints")
            .field("points", &self.points)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ControlPoints {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<f64>> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.points.iter().copied()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Vector2<f64>]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(k, _)| *k != id);
        self.listeners.len() != before
    }

    /// Replace the point at `index`; `false` (and no notification) if out of range.
    pub fn replace(&mut self, index: usize, point: Vector2<f64>) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = point;
        self.notify();
        true
    }

    /// Insert before `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, point: Vector2<f64>) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, point);
        self.notify();
        true
    }

    pub fn push(&mut self, point: Vector2<f64>) {
        self.points.push(point);
        self.notify();
    }

    pub fn remove(&mut self, index: usize) -> Option<Vector2<f64>> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.notify();
        Some(removed)
    }

    pub fn set_all(&mut self, points: Vec<Vector2<f64>>) {
        self.points = points;
        self.notify();
    }

    /// Propose `proposed` for `index`, let `modifier` settle all points, commit, notify once.
    pub fn apply_edit(
        &mut self,
        index: usize,
        proposed: Vector2<f64>,
        modifier: &dyn ControlModifier,
    ) -> Result<(), TransformError> {
        if index >= self.points.len() {
            return Err(TransformError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let mut updated = self.points.clone();
        updated[index] = proposed;
        let settled = modifier.modify_points(&self.points, updated, index)?;
        self.set_all(settled);
        Ok(())
    }

    fn notify(&mut self) {
        let points = &self.points;
        for (_, listener) in self.listeners.iter_mut() {
            listener(points);
        }
    }
}

impl From<Vec<Vector2<f64>>> for ControlPoints {
    fn from(points: Vec<Vector2<f64>>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizmo::{BackgroundImageModifier, PassThrough};
    use nalgebra::vector;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(cp: &mut ControlPoints) -> (Rc<RefCell<Vec<usize>>>, SubscriptionId) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = cp.subscribe(move |pts| sink.borrow_mut().push(pts.len()));
        (seen, id)
    }

    #[test]
    fn mutations_notify_after_commit() {
        let mut cp = ControlPoints::new(vec![vector![0.0, 0.0]]);
        let (seen, _) = recorder(&mut cp);
        cp.push(vector![1.0, 0.0]);
        assert!(cp.insert(0, vector![-1.0, 0.0]));
        assert!(cp.replace(2, vector![2.0, 0.0]));
        assert_eq!(cp.remove(0), Some(vector![-1.0, 0.0]));
        cp.set_all(vec![]);
        assert_eq!(*seen.borrow(), vec![2, 3, 3, 2, 0]);
    }

    #[test]
    fn rejected_mutations_do_not_notify() {
        let mut cp = ControlPoints::new(vec![vector![0.0, 0.0]]);
        let (seen, _) = recorder(&mut cp);
        assert!(!cp.replace(5, vector![1.0, 1.0]));
        assert!(!cp.insert(3, vector![1.0, 1.0]));
        assert_eq!(cp.remove(1), None);
        assert!(cp.apply_edit(2, vector![1.0, 1.0], &PassThrough).is_err());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut cp = ControlPoints::default();
        let (first, id) = recorder(&mut cp);
        let (second, _) = recorder(&mut cp);
        cp.push(vector![0.0, 0.0]);
        assert!(cp.unsubscribe(id));
        assert!(!cp.unsubscribe(id));
        cp.push(vector![1.0, 0.0]);
        assert_eq!(*first.borrow(), vec![1]);
        assert_eq!(*second.borrow(), vec![1, 2]);
    }

    #[test]
    fn apply_edit_runs_modifier_and_notifies_once() {
        let mut cp = ControlPoints::new(vec![
            vector![0.0, 0.0],
            vector![0.0, -10.0],
            vector![-5.0, 5.0],
            vector![5.0, 5.0],
        ]);
        let (seen, _) = recorder(&mut cp);
        cp.apply_edit(0, vector![10.0, 0.0], &BackgroundImageModifier::default())
            .unwrap();
        assert_eq!(seen.borrow().len(), 1);
        assert!((cp.get(1).unwrap() - vector![10.0, -10.0]).norm() < 1e-9);
        assert!((cp.get(3).unwrap() - vector![15.0, 5.0]).norm() < 1e-9);
    }
}
