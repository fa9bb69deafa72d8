//! Local tangent-plane geometry used by the route generator.
//!
//! Projection is equirectangular about a chosen origin: valid for
//! boundaries spanning at most a few kilometers, with no distortion
//! correction beyond the single cosine factor at the origin latitude.

use crate::geodesy::EARTH_RADIUS_M;
use crate::models::GeoPoint;

/// Planar coordinates in meters relative to the projection origin.
///
/// Exists only while a route is being generated; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned extent of a planar polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Project a geographic point onto the local tangent plane at `origin`.
pub fn project(point: GeoPoint, origin: GeoPoint) -> PlanarPoint {
    let cos_lat = origin.lat.to_radians().cos();
    PlanarPoint {
        x: (point.lng - origin.lng).to_radians() * EARTH_RADIUS_M * cos_lat,
        y: (point.lat - origin.lat).to_radians() * EARTH_RADIUS_M,
    }
}

/// Exact inverse of [`project`].
pub fn unproject(point: PlanarPoint, origin: GeoPoint) -> GeoPoint {
    let cos_lat = origin.lat.to_radians().cos();
    GeoPoint {
        lat: origin.lat + (point.y / EARTH_RADIUS_M).to_degrees(),
        lng: origin.lng + (point.x / (EARTH_RADIUS_M * cos_lat)).to_degrees(),
    }
}

/// Rotate `point` by `angle_rad` (counter-clockwise) about `center`.
pub fn rotate(point: PlanarPoint, angle_rad: f64, center: PlanarPoint) -> PlanarPoint {
    let (sin, cos) = angle_rad.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    PlanarPoint {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Axis-aligned bounding box of a polygon.
///
/// An empty polygon yields inverted infinite bounds, which any sweep over
/// the box visits zero times.
pub fn bounding_box(polygon: &[PlanarPoint]) -> Bounds {
    let mut bounds = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    for point in polygon {
        bounds.min_x = bounds.min_x.min(point.x);
        bounds.min_y = bounds.min_y.min(point.y);
        bounds.max_x = bounds.max_x.max(point.x);
        bounds.max_y = bounds.max_y.max(point.y);
    }
    bounds
}

/// Arithmetic mean of the vertices.
///
/// Not the area-weighted centroid; acceptable for near-convex survey areas.
pub fn centroid(polygon: &[PlanarPoint]) -> PlanarPoint {
    if polygon.is_empty() {
        return PlanarPoint { x: 0.0, y: 0.0 };
    }
    let n = polygon.len() as f64;
    let sum_x: f64 = polygon.iter().map(|p| p.x).sum();
    let sum_y: f64 = polygon.iter().map(|p| p.y).sum();
    PlanarPoint {
        x: sum_x / n,
        y: sum_y / n,
    }
}

/// Move every vertex toward the centroid by a uniform scale factor so the
/// polygon sits roughly `margin` meters inside its original outline.
///
/// The scale is `max(0.1, (avg_r - margin) / avg_r)` where `avg_r` is the
/// mean centroid-to-vertex distance. This is an approximation, not a true
/// polygon inset: highly non-convex or non-uniform polygons can shrink into
/// self-intersecting or degenerate shapes. That is a known limitation of
/// the algorithm, kept as-is.
pub fn shrink(polygon: &[PlanarPoint], margin: f64) -> Vec<PlanarPoint> {
    if polygon.is_empty() {
        return Vec::new();
    }
    let center = centroid(polygon);
    let avg_r = polygon
        .iter()
        .map(|p| ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt())
        .sum::<f64>()
        / polygon.len() as f64;
    if avg_r <= 0.0 {
        return polygon.to_vec();
    }
    let scale = ((avg_r - margin) / avg_r).max(0.1);
    polygon
        .iter()
        .map(|p| PlanarPoint {
            x: center.x + (p.x - center.x) * scale,
            y: center.y + (p.y - center.y) * scale,
        })
        .collect()
}

/// Collapse consecutive vertices closer than `eps` meters (the closing
/// vertex counts as adjacent to the first).
pub fn collapse_duplicates(polygon: &[PlanarPoint], eps: f64) -> Vec<PlanarPoint> {
    let mut out: Vec<PlanarPoint> = Vec::with_capacity(polygon.len());
    for point in polygon {
        if let Some(last) = out.last() {
            if (point.x - last.x).abs() < eps && (point.y - last.y).abs() < eps {
                continue;
            }
        }
        out.push(*point);
    }
    if out.len() > 1 {
        let first = out[0];
        let last = out[out.len() - 1];
        if (first.x - last.x).abs() < eps && (first.y - last.y).abs() < eps {
            out.pop();
        }
    }
    out
}
