//! Synthetic layouts: area outlines and turbine scatters.
//!
//! Used by the benches, the property tests and `windplan generate`. Every draw
//! takes a `(seed, index)` token that keys its own `StdRng`, so a layout can be
//! rebuilt piece by piece.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{types::Bounds2, Polygon2};

/// Outline of a synthetic restricted or wood area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaShape {
    /// Vertex count is drawn from `min_vertices..=max_vertices` (at least 5).
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Mean distance of the vertices from the center.
    pub radius: f64,
    /// Relative radius variation, clamped to `[0, 0.9]`.
    pub roughness: f64,
}

impl Default for AreaShape {
    fn default() -> Self {
        Self {
            min_vertices: 5,
            max_vertices: 10,
            radius: 100.0,
            roughness: 0.3,
        }
    }
}

/// Names one draw: the same token always yields the same geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Random area outline around `center`.
///
/// Each vertex keeps to its own angular sector, so the outline is
/// star-shaped around `center` and contains it.
pub fn draw_area(shape: AreaShape, center: Vector2<f64>, tok: ReplayToken) -> Polygon2 {
    let mut rng = tok.rng();
    let lo = shape.min_vertices.max(5);
    let n = rng.gen_range(lo..=shape.max_vertices.max(lo));
    let rough = shape.roughness.clamp(0.0, 0.9);
    let radius = shape.radius.max(1e-9);
    let step = TAU / n as f64;
    let phase = rng.gen_range(0.0..TAU);
    let points = (0..n)
        .map(|k| {
            let angle = phase + step * (k as f64 + rng.gen_range(-0.45..0.45));
            let r = radius * (1.0 + rng.gen_range(-rough..=rough));
            center + Vector2::new(angle.cos(), angle.sin()) * r
        })
        .collect();
    Polygon2::new(points)
}

/// `count` points uniformly inside `bounds`.
pub fn scatter_points(bounds: Bounds2, count: usize, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.rng();
    let size = bounds.size();
    (0..count)
        .map(|_| bounds.min + Vector2::new(rng.gen::<f64>() * size.x, rng.gen::<f64>() * size.y))
        .collect()
}
