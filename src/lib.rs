//! Pixel Platformer - A single-screen 2D platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar kinematics, collisions, round state)
//! - `tuning`: Data-driven physics and placement constants
//! - `highscores`: Per-difficulty leaderboard fed by terminal round events
//! - `error`: Error types for level validation, placement and config loading

pub mod error;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, LevelError, PlacementError, RoundError, TuningError};
pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (origin top-left, y grows downward)
    pub const WORLD_WIDTH: f32 = 1920.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;
    /// Height reserved above the playfield by the window chrome
    pub const TITLE_BAR_HEIGHT: f32 = 50.0;

    /// Avatar defaults
    pub const AVATAR_RADIUS: f32 = 15.0;
    pub const SPAWN_X: f32 = 30.0;
    pub const SPAWN_Y: f32 = (WORLD_HEIGHT - TITLE_BAR_HEIGHT) / 2.0 - AVATAR_RADIUS;

    /// Amplitude used by moving platforms that don't specify one
    pub const DEFAULT_MOVE_DISTANCE: f32 = 10.0;

    /// Tolerance for float comparisons in kinematics (jump apex detection)
    pub const KINEMATIC_EPSILON: f32 = 1e-3;
    /// Max gap between avatar bottom and platform top still counted as resting
    pub const SUPPORT_EPSILON: f32 = 1e-3;
}
