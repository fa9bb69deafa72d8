pub mod camera;
pub mod config;
pub mod coverage;
pub mod geodesy;
pub mod models;
pub mod planar;
pub mod stats;

pub use camera::{spacing as camera_spacing, CameraModel, ScanDirection};
pub use config::{ConfigError, RouteConfig};
pub use coverage::{drop_collinear, generate_route};
pub use geodesy::{in_supported_region, to_regional, to_standard, EARTH_RADIUS_M};
pub use models::{GeoPoint, RouteStats, Waypoint};
pub use planar::PlanarPoint;
pub use stats::compute_stats;
