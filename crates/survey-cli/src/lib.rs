//! Shared plumbing for the survey planner CLI binaries.

pub mod mission;

pub use mission::MissionDocument;
