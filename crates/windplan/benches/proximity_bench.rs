//! Criterion benchmarks for layout evaluation.
//! Focus sizes: turbines in {10, 50, 200} against 8 restricted and 8 wood areas.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use windplan::geom2::rand::{draw_area, scatter_points, AreaShape, ReplayToken};
use windplan::geom2::{Bounds2, Polygon2};
use windplan::proximity::evaluate_layout;
use windplan::PlannerCfg;

fn areas(seed: u64, count: u64) -> Vec<Polygon2> {
    let bounds = Bounds2::new(Vector2::new(0.0, 0.0), Vector2::new(2000.0, 2000.0));
    let centers = scatter_points(bounds, count as usize, ReplayToken { seed, index: 0 });
    centers
        .into_iter()
        .zip(1..)
        .map(|(c, index)| draw_area(AreaShape::default(), c, ReplayToken { seed, index }))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let restricted = areas(11, 8);
    let wood = areas(12, 8);
    let bounds = Bounds2::new(Vector2::new(0.0, 0.0), Vector2::new(2000.0, 2000.0));
    for &n in &[10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::new("evaluate", n), &n, |b, &n| {
            b.iter_batched(
                || scatter_points(bounds, n, ReplayToken { seed: 13, index: n as u64 }),
                |turbines| evaluate_layout(&turbines, &restricted, &wood, &PlannerCfg::default()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
