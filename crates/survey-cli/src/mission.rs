//! Portable mission document written by the planner CLI.
//!
//! The engine itself never serializes missions; this is the thin
//! archive-codec glue around it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use survey_core::{compute_stats, RouteConfig, RouteStats, Waypoint};

/// A generated mission, ready to hand to a device or map layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionDocument {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub config: RouteConfig,
    pub waypoints: Vec<Waypoint>,
    pub stats: RouteStats,
}

impl MissionDocument {
    /// Bundle a waypoint sequence with freshly computed statistics.
    pub fn new(name: impl Into<String>, config: RouteConfig, waypoints: Vec<Waypoint>) -> Self {
        let stats = compute_stats(&waypoints);
        Self {
            name: name.into(),
            generated_at: Utc::now(),
            config,
            waypoints,
            stats,
        }
    }
}
