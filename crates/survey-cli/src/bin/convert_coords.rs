use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use survey_core::{to_regional, to_standard, GeoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// Standard satellite system to the regional grid
    ToRegional,
    /// Regional grid to the standard satellite system
    ToStandard,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Conversion direction
    #[arg(long, value_enum)]
    direction: Direction,

    /// Latitude in decimal degrees (single-point mode)
    #[arg(long)]
    lat: Option<f64>,

    /// Longitude in decimal degrees (single-point mode)
    #[arg(long)]
    lng: Option<f64>,

    /// JSON file with an array of {lat, lng} points (batch mode)
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let convert: fn(GeoPoint) -> GeoPoint = match args.direction {
        Direction::ToRegional => to_regional,
        Direction::ToStandard => to_standard,
    };

    match (args.lat, args.lng, &args.input) {
        (Some(lat), Some(lng), None) => {
            let out = convert(GeoPoint::new(lat, lng));
            println!("{}", serde_json::to_string(&out)?);
        }
        (None, None, Some(path)) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let points: Vec<GeoPoint> =
                serde_json::from_str(&raw).context("input must be a JSON array of {lat, lng}")?;
            let out: Vec<GeoPoint> = points.into_iter().map(convert).collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        _ => bail!("provide either --lat and --lng, or --input"),
    }

    Ok(())
}
