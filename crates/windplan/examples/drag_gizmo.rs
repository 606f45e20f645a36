//! Walk a background-image gizmo through a short drag and print each state.
//!
//! Usage:
//!   cargo run -p windplan --example drag_gizmo -- [free|locked]
//!
//! Drags the center, then scale handle A, logging the four points and the
//! derived image placement after every step.

use windplan::prelude::*;

fn main() {
    let locked = std::env::args().nth(1).as_deref() == Some("locked");
    let modifier = if locked {
        BackgroundImageModifier::locked()
    } else {
        BackgroundImageModifier::default()
    };
    let mut points = ControlPoints::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, -100.0),
        Vec2::new(-50.0, -50.0),
        Vec2::new(50.0, -50.0),
    ]);
    let _log = points.subscribe(|pts| {
        let placement = ImagePlacement::from_axis(pts[0], pts[1]);
        println!(
            "points={:?} rotation={:.3} scale={:.1}",
            pts.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            placement.rotation,
            placement.scale
        );
    });

    for (index, path) in [(0, [(5.0, 0.0), (10.0, 5.0)]), (2, [(-60.0, -40.0), (-70.0, -60.0)])] {
        let Some(pick) = points.get(index) else {
            continue;
        };
        let Some(drag) = DragHandle::begin(pick, index, &points) else {
            continue;
        };
        for (x, y) in path {
            if let Err(e) = drag.continue_to(Vec2::new(x, y), &mut points, &modifier) {
                eprintln!("edit of point {index} rejected: {e}");
            }
        }
    }
    let guide = ScaleGuide::between(points.as_slice()[2], points.as_slice()[3]);
    println!("scale guide: {}", guide.label);
}
