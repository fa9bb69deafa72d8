//! Route statistics.

use crate::geodesy::EARTH_RADIUS_M;
use crate::models::{RouteStats, Waypoint};
use std::f64::consts::PI;

/// Fallback speed when the first waypoint carries no usable speed.
const DEFAULT_SPEED_MPS: f64 = 5.0;

/// Compute statistics for an ordered waypoint sequence.
///
/// Total distance is the sum of straight-line distances in degree space
/// scaled by the Earth radius and pi/180, not a great-circle sum. The
/// approximation is consistent with the planar projection used by the
/// generator and is valid for the short ranges this planner targets.
///
/// Sequences shorter than 2 waypoints return zeroed stats.
pub fn compute_stats(waypoints: &[Waypoint]) -> RouteStats {
    if waypoints.len() < 2 {
        return RouteStats::default();
    }

    let mut total_distance = 0.0;
    for pair in waypoints.windows(2) {
        let dlat = pair[1].lat - pair[0].lat;
        let dlng = pair[1].lng - pair[0].lng;
        total_distance += (dlat * dlat + dlng * dlng).sqrt() * PI / 180.0 * EARTH_RADIUS_M;
    }

    let speed = waypoints[0].speed;
    let speed = if speed > 0.0 { speed } else { DEFAULT_SPEED_MPS };

    RouteStats {
        total_distance,
        flight_time: (total_distance / speed).ceil(),
        photo_count: waypoints.len() as u32,
    }
}
