//! Criterion benchmarks for the gizmo edit loop (one call per drag move).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use windplan::gizmo::{modify_gizmo, CENTER, EXTENSION, SCALE_A};

fn drag_path(steps: usize) -> Vec<Vector2<f64>> {
    (0..steps)
        .map(|k| {
            let t = k as f64 / steps as f64 * std::f64::consts::TAU;
            Vector2::new(40.0 * t.cos(), -30.0 - 20.0 * t.sin())
        })
        .collect()
}

fn bench_gizmo(c: &mut Criterion) {
    let mut group = c.benchmark_group("gizmo");
    let start = [
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, -50.0),
        Vector2::new(-30.0, 20.0),
        Vector2::new(35.0, 25.0),
    ];
    for &(name, index, locked) in &[
        ("center", CENTER, false),
        ("extension", EXTENSION, false),
        ("scale_locked", SCALE_A, true),
    ] {
        group.bench_with_input(BenchmarkId::new("drag_100", name), &index, |b, &index| {
            let path = drag_path(100);
            b.iter(|| {
                let mut cur = start;
                for &p in &path {
                    let mut updated = cur;
                    updated[index] = p;
                    if let Ok(next) = modify_gizmo(&cur, updated, index, locked, 10.0) {
                        cur = next;
                    }
                }
                cur
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gizmo);
criterion_main!(benches);
