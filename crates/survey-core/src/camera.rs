//! Camera intrinsics and ground-coverage spacing.

use serde::{Deserialize, Serialize};

/// Camera intrinsics used to derive scan-line spacing automatically.
///
/// Sensor dimensions and focal length are in millimeters, image dimensions
/// in pixels. All fields must be positive; callers are expected to reject
/// invalid models before asking for a spacing (see
/// [`crate::config::RouteConfig::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraModel {
    pub sensor_width: f64,
    pub sensor_height: f64,
    pub focal_length: f64,
    pub image_width: u32,
    pub image_height: u32,
}

/// Which axis of the image the spacing is measured across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanDirection {
    /// Across the flight line (sensor/image width).
    Lateral,
    /// Along the flight line (sensor/image height).
    Longitudinal,
}

impl CameraModel {
    /// Look up a named camera preset.
    pub fn preset(name: &str) -> Option<CameraModel> {
        match name {
            // Common 1/2.3" sensor found on small survey quadcopters.
            "small-quad" => Some(CameraModel {
                sensor_width: 6.3,
                sensor_height: 4.7,
                focal_length: 4.88,
                image_width: 1920,
                image_height: 1440,
            }),
            // 20 MP 1" sensor class.
            "survey-20mp" => Some(CameraModel {
                sensor_width: 13.2,
                sensor_height: 8.8,
                focal_length: 8.8,
                image_width: 5472,
                image_height: 3648,
            }),
            _ => None,
        }
    }

    /// All fields positive.
    pub fn is_valid(&self) -> bool {
        self.sensor_width > 0.0
            && self.sensor_height > 0.0
            && self.focal_length > 0.0
            && self.image_width > 0
            && self.image_height > 0
    }
}

/// Scan-line spacing in meters for a camera flown at `height` meters.
///
/// Ground sample distance is `height * sensor_dim / (focal * pixels)`, the
/// covered ground span is `gsd * pixels`, and the spacing leaves
/// `overlap_rate` of that span shared with the neighboring line.
///
/// Division by zero is excluded by the [`CameraModel`] invariant; this
/// function does not re-check it.
pub fn spacing(
    height: f64,
    camera: &CameraModel,
    overlap_rate: f64,
    direction: ScanDirection,
) -> f64 {
    let (sensor_dim, pixels) = match direction {
        ScanDirection::Lateral => (camera.sensor_width, camera.image_width as f64),
        ScanDirection::Longitudinal => (camera.sensor_height, camera.image_height as f64),
    };
    let gsd = height * sensor_dim / (camera.focal_length * pixels);
    let coverage = gsd * pixels;
    coverage * (1.0 - overlap_rate)
}
