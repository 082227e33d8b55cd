//! Data-driven game balance
//!
//! Physics and placement constants. All velocities are in world units per
//! frame. Loaded from JSON; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TuningError};

/// Tunable constants for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Avatar ===
    /// Horizontal step per frame while a direction is held
    pub move_speed: f32,
    /// Upward speed set at launch
    pub jump_velocity: f32,
    /// Per-frame decay of jump velocity and growth of fall speed
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Multiplier on platform velocity when riding a moving platform
    pub carry_factor: f32,

    // === Platforms ===
    /// Step per frame of an oscillating platform
    pub platform_speed: f32,

    // === Placement ===
    pub obstacle_count: usize,
    pub obstacle_radius: f32,
    pub coin_count: usize,
    pub coin_radius: f32,
    /// Draws allowed per object before placement gives up
    pub max_placement_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            jump_velocity: 5.0,
            gravity: 0.1,
            max_fall_speed: 10.0,
            carry_factor: 2.0,

            platform_speed: 1.0,

            obstacle_count: 5,
            obstacle_radius: 20.0,
            coin_count: 10,
            coin_radius: 10.0,
            max_placement_attempts: 10_000,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would stall or invert the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("move_speed", self.move_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("platform_speed", self.platform_speed),
            ("obstacle_radius", self.obstacle_radius),
            ("coin_radius", self.coin_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if !self.carry_factor.is_finite() {
            return Err(TuningError {
                field: "carry_factor",
                reason: "must be finite".to_string(),
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(TuningError {
                field: "max_placement_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
