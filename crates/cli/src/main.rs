use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;
use windplan::geom2::rand::{draw_area, scatter_points, AreaShape, ReplayToken};
use windplan::geom2::Bounds2;
use windplan::gizmo::{BackgroundImageModifier, ImagePlacement, ScaleGuide, GIZMO_POINTS};
use windplan::points::ControlPoints;
use windplan::proximity::{deforestation_estimates, turbine_alerts};
use windplan::{PlannerCfg, Vec2};

mod layout;
mod provenance;
mod report;

use layout::{check_radius, parse_xy, to_vec, to_xy, CfgFile, Layout, Xy};
use provenance::Record;
use report::{AlertRow, EstimateRow, GizmoRow};

#[derive(Parser)]
#[command(name = "windplan")]
#[command(about = "Turbine layout checks and background-image gizmo edits")]
struct Cmd {
    /// Optional JSON file overriding planner thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distance alerts for every turbine (other turbines and restricted areas)
    Alerts {
        #[arg(long)]
        input: PathBuf,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Deforestation estimate per wood area
    Estimate {
        #[arg(long)]
        input: PathBuf,
        /// Cleared radius around each turbine (overrides the config)
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Apply one point edit to a background-image gizmo
    Gizmo {
        /// Center, extension and both scale handles as `x,y`
        #[arg(long, num_args = 4, allow_hyphen_values = true, value_parser = parse_xy)]
        points: Vec<Xy>,
        /// Index of the moved point (0..=3)
        #[arg(long)]
        edit: usize,
        /// Proposed position as `x,y`
        #[arg(long, allow_hyphen_values = true, value_parser = parse_xy)]
        to: Xy,
        /// Scale handles keep their position on the image
        #[arg(long)]
        locked: bool,
    },
    /// Write a reproducible random layout
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        turbines: usize,
        /// Number of restricted and of wood areas
        #[arg(long, default_value_t = 3)]
        areas: usize,
        /// Side length of the square the layout fills
        #[arg(long, default_value_t = 2000.0)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    let cfg = match &cmd.config {
        Some(path) => CfgFile::load(path)?.apply(PlannerCfg::default())?,
        None => PlannerCfg::default(),
    };
    match cmd.action {
        Action::Alerts { input, out } => alerts(&input, out.as_deref(), cfg),
        Action::Estimate { input, radius, out } => estimate(&input, radius, out.as_deref(), cfg),
        Action::Gizmo {
            points,
            edit,
            to,
            locked,
        } => gizmo(&points, edit, to, locked, cfg),
        Action::Generate {
            seed,
            turbines,
            areas,
            extent,
            out,
        } => generate(seed, turbines, areas, extent, &out),
        Action::Report => report(),
    }
}

fn alerts(input: &Path, out: Option<&Path>, cfg: PlannerCfg) -> Result<()> {
    let layout = Layout::load(input)?;
    let turbines = layout.turbine_points();
    let rows: Vec<AlertRow> = turbine_alerts(&turbines, &layout.restricted(), &cfg)
        .iter()
        .enumerate()
        .map(|(i, a)| AlertRow::new(i, a))
        .collect();
    tracing::info!(
        input = %input.display(),
        turbines = rows.len(),
        alerting = rows.iter().filter(|r| r.alerting).count(),
        "alerts"
    );
    emit(
        &rows,
        out,
        Record::new(
            "alerts",
            json!({
                "input": input,
                "turbine_min_distance": cfg.turbine_min_distance,
                "area_min_distance": cfg.area_min_distance
            }),
        ),
    )
}

fn estimate(input: &Path, radius: Option<f64>, out: Option<&Path>, cfg: PlannerCfg) -> Result<()> {
    let radius = check_radius(radius.unwrap_or(cfg.deforestation_radius))?;
    let layout = Layout::load(input)?;
    let rows: Vec<EstimateRow> =
        deforestation_estimates(&layout.turbine_points(), &layout.wood(), radius)
            .iter()
            .map(EstimateRow::from)
            .collect();
    let total: f64 = rows.iter().map(|r| r.estimate).sum();
    tracing::info!(input = %input.display(), areas = rows.len(), radius, total, "estimate");
    emit(
        &rows,
        out,
        Record::new("estimate", json!({ "input": input, "radius": radius })),
    )
}

fn gizmo(points: &[Xy], edit: usize, to: Xy, locked: bool, cfg: PlannerCfg) -> Result<()> {
    ensure!(
        points.len() == GIZMO_POINTS,
        "expected {GIZMO_POINTS} points, got {}",
        points.len()
    );
    let modifier = BackgroundImageModifier {
        scale_points_locked: locked,
        min_gap: cfg.extension_min_gap,
        ..BackgroundImageModifier::default()
    };
    let mut cp = ControlPoints::new(points.iter().copied().map(to_vec).collect());
    cp.apply_edit(edit, to_vec(to), &modifier)
        .with_context(|| format!("moving point {edit} to {to:?}"))?;
    let pts: Vec<Vec2<f64>> = cp.iter().collect();
    tracing::info!(edit, locked, "gizmo");
    let row = GizmoRow {
        points: pts.iter().copied().map(to_xy).collect(),
        placement: (&ImagePlacement::from_axis(pts[0], pts[1])).into(),
        scale_guide: (&ScaleGuide::between(pts[2], pts[3])).into(),
    };
    println!("{}", serde_json::to_string_pretty(&row)?);
    Ok(())
}

fn generate(seed: u64, turbines: usize, areas: usize, extent: f64, out: &Path) -> Result<()> {
    ensure!(extent.is_finite() && extent > 0.0, "extent must be positive, got {extent}");
    let bounds = Bounds2::new(Vec2::new(0.0, 0.0), Vec2::new(extent, extent));
    let shape = AreaShape {
        radius: extent / 10.0,
        ..AreaShape::default()
    };
    // Token indices: 0 turbines, 1/2 area centers, 3.. area shapes.
    let draw_areas = |centers_index: u64, first_shape: u64| -> Vec<Vec<Xy>> {
        scatter_points(bounds, areas, ReplayToken { seed, index: centers_index })
            .into_iter()
            .zip(first_shape..)
            .map(|(c, index)| {
                draw_area(shape, c, ReplayToken { seed, index })
                    .points
                    .into_iter()
                    .map(to_xy)
                    .collect()
            })
            .collect()
    };
    let layout = Layout {
        turbines: scatter_points(bounds, turbines, ReplayToken { seed, index: 0 })
            .into_iter()
            .map(to_xy)
            .collect(),
        restricted_areas: draw_areas(1, 3),
        wood_areas: draw_areas(2, 3 + areas as u64),
    };
    tracing::info!(seed, turbines, areas, extent, out = %out.display(), "generate");
    emit(
        &layout,
        Some(out),
        Record::new(
            "generate",
            json!({ "seed": seed, "turbines": turbines, "areas": areas, "extent": extent }),
        ),
    )
}

fn report() -> Result<()> {
    let record = Record::new("report", json!({}));
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Pretty JSON to `out` (with provenance sidecar) or to stdout.
fn emit<T: Serialize>(value: &T, out: Option<&Path>, record: Record) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = record.write_beside(out)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}
