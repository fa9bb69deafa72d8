use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use survey_cli::MissionDocument;
use survey_core::{generate_route, CameraModel, GeoPoint, RouteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Boundary polygon: JSON array of {lat, lng} points
    #[arg(long)]
    boundary: PathBuf,

    /// Mission name embedded in the output document
    #[arg(long, default_value = "survey")]
    name: String,

    /// Scan-line spacing in meters (ignored when --camera is set)
    #[arg(long, default_value_t = 30.0)]
    spacing: f64,

    /// Scan direction in degrees (0-180)
    #[arg(long, default_value_t = 0.0)]
    angle: f64,

    /// Inward margin in meters
    #[arg(long, default_value_t = 0.0)]
    margin: f64,

    /// Flight height in meters
    #[arg(long, default_value_t = 50.0)]
    height: f64,

    /// Flight speed in m/s
    #[arg(long, default_value_t = 5.0)]
    speed: f64,

    /// Image overlap ratio (0-1), used with --camera
    #[arg(long, default_value_t = 0.7)]
    overlap: f64,

    /// Derive spacing from a named camera preset
    #[arg(long)]
    camera: Option<String>,

    /// Keep collinear waypoints instead of dropping them
    #[arg(long)]
    no_optimize: bool,

    /// Write the mission document here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.boundary)
        .with_context(|| format!("failed to read {}", args.boundary.display()))?;
    let boundary: Vec<GeoPoint> =
        serde_json::from_str(&raw).context("boundary file must be a JSON array of {lat, lng}")?;

    let camera = match &args.camera {
        Some(name) => Some(
            CameraModel::preset(name)
                .with_context(|| format!("unknown camera preset: {name}"))?,
        ),
        None => None,
    };

    let config = RouteConfig {
        spacing: args.spacing,
        angle: args.angle,
        margin: args.margin,
        height: args.height,
        speed: args.speed,
        overlap_rate: args.overlap,
        use_camera: camera.is_some(),
        camera,
        optimize_path: !args.no_optimize,
    };
    config.ensure_valid()?;

    let waypoints = generate_route(&boundary, &config);
    if waypoints.is_empty() {
        bail!("no route could be generated (boundary too small, degenerate after margin, or spacing too coarse)");
    }

    let mission = MissionDocument::new(args.name, config, waypoints);
    eprintln!(
        "Waypoints: {}, Distance: {:.0}m, Flight time: {:.0}s, Photos: {}",
        mission.waypoints.len(),
        mission.stats.total_distance,
        mission.stats.flight_time,
        mission.stats.photo_count
    );

    let json = serde_json::to_string_pretty(&mission)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote mission to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
