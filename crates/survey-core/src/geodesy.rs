//! Coordinate conversion between the regional obfuscated grid and the
//! standard satellite positioning system.
//!
//! Inside a fixed geographic region the regional grid adds a non-linear,
//! empirically-fit offset to true coordinates; outside that region both
//! conversions are the identity. [`to_standard`] uses a single-step inverse:
//! it subtracts the offset computed from the already-offset input instead of
//! iterating to a fixed point. That is a deliberate accuracy trade-off
//! (round trips agree to roughly 1e-5 degrees) which keeps both directions
//! deterministic and allocation-free for per-frame use.

use crate::models::GeoPoint;
use std::f64::consts::PI;

/// Earth semi-major axis in meters (WGS84).
pub const EARTH_RADIUS_M: f64 = 6378137.0;

/// First eccentricity squared of the WGS84 spheroid.
const EE: f64 = 0.00669342162296594323;

// Bounding region of the regional grid distortion.
const REGION_LNG_MIN: f64 = 72.004;
const REGION_LNG_MAX: f64 = 137.8347;
const REGION_LAT_MIN: f64 = 0.8293;
const REGION_LAT_MAX: f64 = 55.8271;

/// Whether the regional distortion applies at this location.
pub fn in_supported_region(point: GeoPoint) -> bool {
    point.lng >= REGION_LNG_MIN
        && point.lng <= REGION_LNG_MAX
        && point.lat >= REGION_LAT_MIN
        && point.lat <= REGION_LAT_MAX
}

/// Convert a standard-system point to the regional grid.
pub fn to_regional(point: GeoPoint) -> GeoPoint {
    if !in_supported_region(point) {
        return point;
    }
    let (dlat, dlng) = offset(point);
    GeoPoint {
        lat: point.lat + dlat,
        lng: point.lng + dlng,
    }
}

/// Convert a regional-grid point back to the standard system.
///
/// Single-step approximation: the offset is evaluated at the regional
/// coordinates rather than the (unknown) standard ones.
pub fn to_standard(point: GeoPoint) -> GeoPoint {
    if !in_supported_region(point) {
        return point;
    }
    let (dlat, dlng) = offset(point);
    GeoPoint {
        lat: point.lat - dlat,
        lng: point.lng - dlng,
    }
}

/// Latitude/longitude offset of the regional grid at `point`, in degrees.
///
/// The raw correction functions are fit against `(lng - 105, lat - 35)` and
/// scaled by the local radii of curvature of the oblate spheroid.
fn offset(point: GeoPoint) -> (f64, f64) {
    let x = point.lng - 105.0;
    let y = point.lat - 35.0;
    let raw_lat = transform_lat(x, y);
    let raw_lng = transform_lng(x, y);

    let rad_lat = point.lat / 180.0 * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let dlat = (raw_lat * 180.0) / ((EARTH_RADIUS_M * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let dlng = (raw_lng * 180.0) / (EARTH_RADIUS_M / sqrt_magic * rad_lat.cos() * PI);
    (dlat, dlng)
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0
        + 2.0 * x
        + 3.0 * y
        + 0.2 * y * y
        + 0.1 * x * y
        + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0
        + x
        + 2.0 * y
        + 0.1 * x * x
        + 0.1 * x * y
        + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
