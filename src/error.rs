//! Error types
//!
//! Only round construction and host-side I/O can fail. Frame updates are
//! infallible; falling out of the world is a loss, not an error.

use thiserror::Error;

/// Rejected level data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    /// The goal is the last platform, so an empty list has no goal
    #[error("level has no platforms (a goal platform is required)")]
    NoPlatforms,

    #[error("world size must be positive, got {width}x{height}")]
    InvalidWorld { width: f32, height: f32 },

    #[error("platform {index} has non-positive size {width}x{height}")]
    DegeneratePlatform { index: usize, width: f32, height: f32 },

    #[error("moving platform {index} needs a positive move distance, got {distance}")]
    InvalidMoveDistance { index: usize, distance: f32 },

    #[error("avatar radius must be positive, got {0}")]
    InvalidAvatarRadius(f32),

    #[error("spawn point ({x}, {y}) lies outside the world")]
    SpawnOutsideWorld { x: f32, y: f32 },

    #[error("level parse error: {0}")]
    Parse(String),
}

/// Rejection sampling ran out of attempts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free spot for {kind} after {attempts} attempts ({placed} of {requested} placed)")]
    Exhausted {
        kind: &'static str,
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}

/// A tuning value that would stall or invert the simulation
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid tuning value `{field}`: {reason}")]
pub struct TuningError {
    pub field: &'static str,
    pub reason: String,
}

/// Failure to start a round
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),

    #[error(transparent)]
    Tuning(#[from] TuningError),

    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),
}

/// Failure loading or saving host-side configuration (tuning, high scores)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidTuning(#[from] TuningError),
}
