//! Route generation configuration.

use crate::camera::CameraModel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for coverage route generation.
///
/// Missing fields deserialize to the documented defaults. The engine does
/// not validate configuration at generation time (see [`crate::coverage`]);
/// callers should run [`RouteConfig::validate`] first and treat a
/// non-empty error list as a contract violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Scan-line spacing in meters when spacing is chosen manually.
    pub spacing: f64,
    /// Scan direction in degrees, 0-180. 0 = north-south scan lines,
    /// 90 = east-west.
    pub angle: f64,
    /// Inward shrink applied to the boundary, in meters.
    pub margin: f64,
    /// Flight height in meters above the takeoff reference.
    pub height: f64,
    /// Flight speed in meters per second.
    pub speed: f64,
    /// Desired image overlap ratio, 0-1. Used with `use_camera`.
    pub overlap_rate: f64,
    /// Camera used to derive spacing automatically. Required when
    /// `use_camera` is set.
    pub camera: Option<CameraModel>,
    /// Derive spacing from the camera instead of the manual `spacing`.
    pub use_camera: bool,
    /// Drop collinear waypoints after scanning.
    pub optimize_path: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            spacing: 30.0,
            angle: 0.0,
            margin: 0.0,
            height: 50.0,
            speed: 5.0,
            overlap_rate: 0.7,
            camera: None,
            use_camera: false,
            optimize_path: true,
        }
    }
}

impl RouteConfig {
    /// Validate the configuration.
    /// Returns list of validation errors (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.spacing < 0.0 {
            errors.push("spacing cannot be negative".to_string());
        }
        if self.margin < 0.0 {
            errors.push("margin cannot be negative".to_string());
        }
        if !(0.0..=180.0).contains(&self.angle) {
            errors.push(format!("angle ({}) must be within 0-180 degrees", self.angle));
        }
        if !(0.0..=1.0).contains(&self.overlap_rate) {
            errors.push(format!(
                "overlap_rate ({}) must be within 0-1",
                self.overlap_rate
            ));
        }
        if self.use_camera {
            match &self.camera {
                None => errors.push("camera model is required when use_camera is set".to_string()),
                Some(camera) if !camera.is_valid() => {
                    errors.push("camera model dimensions must all be positive".to_string())
                }
                Some(_) => {}
            }
        }

        errors
    }

    /// Validate, collapsing any errors into a [`ConfigError`].
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// Caller-contract violation in a [`RouteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid route configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
