//! Scan-line coverage route generation.
//!
//! Turns a polygon boundary plus a [`RouteConfig`] into an ordered
//! boustrophedon ("lawnmower") waypoint sequence: project the boundary to
//! the local tangent plane, shrink by the margin, rotate so scan lines are
//! horizontal, sweep lines across the bounding box, pair up edge
//! intersections, alternate sweep direction line to line, optionally drop
//! collinear waypoints, then rotate back and unproject.
//!
//! Generation is a pure function of its inputs. An empty output sequence is
//! the sole failure signal, covering both insufficient input (fewer than 3
//! usable vertices, before or after shrink) and degenerate geometry (no
//! scan line intersects the polygon). Callers wanting a finer-grained
//! reason must inspect boundary and config themselves before calling.

use crate::camera::{self, ScanDirection};
use crate::config::RouteConfig;
use crate::models::{GeoPoint, Waypoint};
use crate::planar::{self, PlanarPoint};
use tracing::debug;

/// Consecutive vertices closer than this are treated as duplicates.
const DUPLICATE_EPS_M: f64 = 1e-6;

/// Cross-product magnitude (m^2) at or below which an interior waypoint is
/// considered collinear with its neighbors.
const COLLINEAR_TOLERANCE_M2: f64 = 0.01;

/// Generate a coverage scan path over `boundary`.
///
/// The boundary is an ordered simple polygon in standard-system decimal
/// degrees, read-only to the engine. Waypoints come back in the standard
/// system with `height`, `speed`, and a 0-based `index` attached, lat/lng
/// rounded to 7 decimal places (~1 cm) for output stability.
pub fn generate_route(boundary: &[GeoPoint], config: &RouteConfig) -> Vec<Waypoint> {
    if boundary.len() < 3 {
        return Vec::new();
    }

    let origin = boundary[0];
    let mut polygon: Vec<PlanarPoint> = boundary
        .iter()
        .map(|point| planar::project(*point, origin))
        .collect();
    polygon = planar::collapse_duplicates(&polygon, DUPLICATE_EPS_M);
    if polygon.len() < 3 {
        return Vec::new();
    }

    if config.margin > 0.0 {
        polygon = planar::shrink(&polygon, config.margin);
        polygon = planar::collapse_duplicates(&polygon, DUPLICATE_EPS_M);
        if polygon.len() < 3 {
            debug!(margin = config.margin, "boundary degenerate after margin shrink");
            return Vec::new();
        }
    }

    let center = planar::centroid(&polygon);
    let spacing = effective_spacing(config);
    if spacing <= 0.0 || !spacing.is_finite() {
        // A non-positive spacing would sweep forever; treat as degenerate.
        return Vec::new();
    }

    // Rotate so scan lines are horizontal in the working frame.
    // Convention: 0 deg = north-south scan lines, 90 deg = east-west.
    let angle_rad = config.angle.to_radians();
    let rotated: Vec<PlanarPoint> = polygon
        .iter()
        .map(|point| planar::rotate(*point, -angle_rad, center))
        .collect();
    let bounds = planar::bounding_box(&rotated);

    debug!(
        spacing,
        angle = config.angle,
        vertices = rotated.len(),
        "sweeping scan lines"
    );

    let mut path: Vec<PlanarPoint> = Vec::new();
    let mut line_index = 0usize;
    let mut y = bounds.min_y + spacing / 2.0;
    while y <= bounds.max_y {
        let mut xs = scan_line_intersections(&rotated, y);
        xs.sort_by(|a, b| a.total_cmp(b));

        // Pair consecutive intersections; chunks_exact discards an unpaired
        // trailing crossing (self-intersection or numerical edge case).
        let mut line_points: Vec<PlanarPoint> = Vec::with_capacity(xs.len());
        for pair in xs.chunks_exact(2) {
            line_points.push(PlanarPoint { x: pair[0], y });
            line_points.push(PlanarPoint { x: pair[1], y });
        }

        // Boustrophedon: every other sweep line runs right to left. Parity
        // follows the sweep index, so a line that misses the polygon still
        // flips direction.
        if line_index % 2 == 1 {
            line_points.reverse();
        }
        path.extend(line_points);

        line_index += 1;
        y += spacing;
    }

    if path.is_empty() {
        debug!("no scan line intersects the polygon");
        return Vec::new();
    }

    if config.optimize_path && path.len() > 4 {
        let before = path.len();
        path = drop_collinear(&path);
        debug!(before, after = path.len(), "dropped collinear waypoints");
    }

    path.iter()
        .enumerate()
        .map(|(index, point)| {
            let unrotated = planar::rotate(*point, angle_rad, center);
            let geo = planar::unproject(unrotated, origin);
            Waypoint {
                lat: round7(geo.lat),
                lng: round7(geo.lng),
                height: config.height,
                speed: config.speed,
                index: index as u32,
            }
        })
        .collect()
}

/// Drop interior points collinear with their neighbors.
///
/// The first and last point are always preserved; points are only ever
/// removed, never inserted or reordered. Sequences of length <= 2 pass
/// through unchanged.
pub fn drop_collinear(points: &[PlanarPoint]) -> Vec<PlanarPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);
    for i in 1..points.len() - 1 {
        let a = points[i - 1];
        let b = points[i];
        let c = points[i + 1];
        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if cross.abs() > COLLINEAR_TOLERANCE_M2 {
            kept.push(b);
        }
    }
    kept.push(points[points.len() - 1]);
    kept
}

fn effective_spacing(config: &RouteConfig) -> f64 {
    if config.use_camera {
        if let Some(cam) = &config.camera {
            return camera::spacing(
                config.height,
                cam,
                config.overlap_rate,
                ScanDirection::Lateral,
            );
        }
    }
    config.spacing
}

/// X-coordinates where the horizontal line at `y` crosses polygon edges.
fn scan_line_intersections(polygon: &[PlanarPoint], y: f64) -> Vec<f64> {
    let mut xs = Vec::new();
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        // Inclusive on one side, exclusive on the other, so a vertex exactly
        // on the line is counted once rather than twice.
        if (a.y >= y) != (b.y >= y) {
            let t = (y - a.y) / (b.y - a.y);
            xs.push(a.x + t * (b.x - a.x));
        }
    }
    xs
}

fn round7(value: f64) -> f64 {
    (value * 1e7).round() / 1e7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraModel;

    fn square_boundary() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ]
    }

    fn raw_config() -> RouteConfig {
        RouteConfig {
            spacing: 30.0,
            angle: 0.0,
            margin: 0.0,
            height: 50.0,
            speed: 5.0,
            optimize_path: false,
            ..Default::default()
        }
    }

    fn unique_rounded(values: impl Iterator<Item = f64>) -> usize {
        let mut seen: Vec<i64> = values.map(|v| (v * 1e9).round() as i64).collect();
        seen.sort();
        seen.dedup();
        seen.len()
    }

    #[test]
    fn boundary_with_fewer_than_three_points_yields_empty() {
        let config = raw_config();
        assert!(generate_route(&[], &config).is_empty());
        assert!(generate_route(&[GeoPoint::new(0.0, 0.0)], &config).is_empty());
        assert!(
            generate_route(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001)], &config)
                .is_empty()
        );
    }

    #[test]
    fn square_boundary_produces_expected_scan_lines() {
        let waypoints = generate_route(&square_boundary(), &raw_config());
        assert!(!waypoints.is_empty());
        for wp in &waypoints {
            assert_eq!(wp.height, 50.0);
            assert_eq!(wp.speed, 5.0);
        }

        // 0.001 deg of latitude is ~111.3m; at 30m spacing the sweep fits
        // floor(111.3 / 30) = 3 lines, +/- 1 for the half-spacing start.
        let lines = unique_rounded(waypoints.iter().map(|wp| wp.lat));
        assert!((2..=4).contains(&lines), "got {lines} scan lines");
    }

    #[test]
    fn waypoint_indices_are_sequential_from_zero() {
        let waypoints = generate_route(&square_boundary(), &raw_config());
        for (i, wp) in waypoints.iter().enumerate() {
            assert_eq!(wp.index, i as u32);
        }
    }

    #[test]
    fn consecutive_scan_lines_alternate_direction() {
        let waypoints = generate_route(&square_boundary(), &raw_config());
        assert_eq!(waypoints.len() % 2, 0);
        // Adjacent line transitions should connect same-side endpoints:
        // the last point of one line shares its lng with the first point of
        // the next.
        for pair in waypoints.chunks_exact(2).collect::<Vec<_>>().windows(2) {
            let end_of_line = &pair[0][1];
            let start_of_next = &pair[1][0];
            assert!((end_of_line.lng - start_of_next.lng).abs() < 1e-6);
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let boundary = square_boundary();
        let config = raw_config();
        assert_eq!(
            generate_route(&boundary, &config),
            generate_route(&boundary, &config)
        );
    }

    #[test]
    fn spacing_wider_than_polygon_yields_empty() {
        let config = RouteConfig {
            spacing: 500.0,
            ..raw_config()
        };
        assert!(generate_route(&square_boundary(), &config).is_empty());
    }

    #[test]
    fn excessive_margin_degenerates_to_empty() {
        // Shrink clamps at 10% scale, leaving an ~11m square that a 30m
        // sweep never intersects.
        let config = RouteConfig {
            margin: 1000.0,
            ..raw_config()
        };
        assert!(generate_route(&square_boundary(), &config).is_empty());
    }

    #[test]
    fn zero_area_boundary_yields_empty() {
        let point = GeoPoint::new(0.0005, 0.0005);
        assert!(generate_route(&[point, point, point], &raw_config()).is_empty());
    }

    #[test]
    fn margin_reduces_scan_extent() {
        let without_margin = generate_route(&square_boundary(), &raw_config());
        let config = RouteConfig {
            margin: 20.0,
            ..raw_config()
        };
        let with_margin = generate_route(&square_boundary(), &config);
        assert!(!with_margin.is_empty());
        let span = |wps: &[Waypoint]| {
            let min = wps.iter().map(|w| w.lng).fold(f64::INFINITY, f64::min);
            let max = wps.iter().map(|w| w.lng).fold(f64::NEG_INFINITY, f64::max);
            max - min
        };
        assert!(span(&with_margin) < span(&without_margin));
    }

    #[test]
    fn angle_rotates_scan_lines() {
        let config = RouteConfig {
            angle: 90.0,
            ..raw_config()
        };
        let waypoints = generate_route(&square_boundary(), &config);
        assert!(!waypoints.is_empty());
        // East-west sweep: scan lines now share a longitude instead of a
        // latitude.
        let lngs = unique_rounded(waypoints.iter().map(|wp| wp.lng));
        assert!((2..=4).contains(&lngs), "got {lngs} scan lines");
    }

    #[test]
    fn camera_spacing_changes_line_count() {
        let manual = generate_route(&square_boundary(), &raw_config());
        let config = RouteConfig {
            use_camera: true,
            camera: CameraModel::preset("small-quad"),
            ..raw_config()
        };
        let automatic = generate_route(&square_boundary(), &config);
        // small-quad at 50m / 0.7 overlap gives ~19.4m spacing, tighter
        // than the manual 30m.
        assert!(automatic.len() > manual.len());
    }

    #[test]
    fn optimize_keeps_square_corners() {
        let raw = generate_route(&square_boundary(), &raw_config());
        let config = RouteConfig {
            optimize_path: true,
            ..raw_config()
        };
        let optimized = generate_route(&square_boundary(), &config);
        // Every raw waypoint on this square is a genuine corner.
        assert_eq!(raw, optimized);
    }

    #[test]
    fn drop_collinear_removes_redundant_midpoints() {
        let path = vec![
            PlanarPoint { x: 0.0, y: 0.0 },
            PlanarPoint { x: 50.0, y: 0.0 },
            PlanarPoint { x: 100.0, y: 0.0 },
            PlanarPoint { x: 100.0, y: 30.0 },
            PlanarPoint { x: 0.0, y: 30.0 },
        ];
        let kept = drop_collinear(&path);
        assert_eq!(kept.len(), 4);
        assert_eq!(kept[0], path[0]);
        assert_eq!(kept[1], path[2]);
        assert_eq!(*kept.last().unwrap(), *path.last().unwrap());
    }

    #[test]
    fn drop_collinear_never_grows_and_passes_short_sequences() {
        let short = vec![
            PlanarPoint { x: 0.0, y: 0.0 },
            PlanarPoint { x: 1.0, y: 1.0 },
        ];
        assert_eq!(drop_collinear(&short), short);

        let path = vec![
            PlanarPoint { x: 0.0, y: 0.0 },
            PlanarPoint { x: 10.0, y: 5.0 },
            PlanarPoint { x: 20.0, y: 0.0 },
        ];
        let kept = drop_collinear(&path);
        assert!(kept.len() <= path.len());
        assert_eq!(kept[0], path[0]);
        assert_eq!(*kept.last().unwrap(), *path.last().unwrap());
    }
}
