//! Core data models for the survey planner.

use serde::{Deserialize, Serialize};

/// A location in decimal degrees.
///
/// The reference system (regional grid vs. standard satellite) is implicit
/// from context; see [`crate::geodesy`] for conversions between the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A flight waypoint in the generated coverage path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    /// Meters above the takeoff reference.
    pub height: f64,
    /// Meters per second.
    pub speed: f64,
    /// 0-based position in the final ordered path.
    pub index: u32,
}

/// Statistics derived from a finished waypoint sequence.
///
/// Recomputed from scratch on every change to the sequence, never mutated
/// in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    /// Total path length in meters.
    pub total_distance: f64,
    /// Estimated flight time in seconds, rounded up to a whole second.
    pub flight_time: f64,
    /// One photo assumed per waypoint.
    pub photo_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_serde_round_trip() {
        let point = GeoPoint::new(39.9042, 116.4074);
        let json = serde_json::to_string(&point).unwrap();
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }

    #[test]
    fn waypoint_deserializes_from_plain_object() {
        let wp: Waypoint = serde_json::from_str(
            r#"{"lat":1.0,"lng":2.0,"height":50.0,"speed":5.0,"index":3}"#,
        )
        .unwrap();
        assert_eq!(wp.index, 3);
        assert_eq!(wp.height, 50.0);
    }
}
