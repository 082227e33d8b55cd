//! Level data
//!
//! Immutable description of one round: platforms, world bounds and spawn.
//! The last platform in the list is the goal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::Rect;
use crate::consts::*;
use crate::error::LevelError;

/// Horizontal travel direction of a moving platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Level difficulty (selects a built-in layout and a high score table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

fn default_move_distance() -> f32 {
    DEFAULT_MOVE_DISTANCE
}

/// One platform as authored in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub rect: Rect,
    /// Cosmetic RGB color
    pub color: [f32; 3],
    #[serde(default)]
    pub moving: bool,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_move_distance")]
    pub move_distance: f32,
}

impl PlatformSpec {
    pub fn fixed(x: f32, y: f32, width: f32, height: f32, color: [f32; 3]) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
            moving: false,
            direction: Direction::Right,
            move_distance: DEFAULT_MOVE_DISTANCE,
        }
    }

    /// Make this platform oscillate `distance` units either side of its start
    pub fn moving(mut self, direction: Direction, distance: f32) -> Self {
        self.moving = true;
        self.direction = direction;
        self.move_distance = distance;
        self
    }
}

/// A complete, validated level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub spawn: Vec2,
    pub avatar_radius: f32,
    pub platforms: Vec<PlatformSpec>,
}

impl Level {
    /// Build a level, rejecting data the simulation can't run
    pub fn new(
        name: impl Into<String>,
        width: f32,
        height: f32,
        spawn: Vec2,
        avatar_radius: f32,
        platforms: Vec<PlatformSpec>,
    ) -> Result<Self, LevelError> {
        let level = Self {
            name: name.into(),
            width,
            height,
            spawn,
            avatar_radius,
            platforms,
        };
        level.validate()?;
        Ok(level)
    }

    /// Parse a level from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level =
            serde_json::from_str(json).map_err(|e| LevelError::Parse(e.to_string()))?;
        level.validate()?;
        Ok(level)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LevelError::InvalidWorld {
                width: self.width,
                height: self.height,
            });
        }
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms);
        }
        if !(self.avatar_radius > 0.0) {
            return Err(LevelError::InvalidAvatarRadius(self.avatar_radius));
        }
        let world = Rect::new(0.0, 0.0, self.width, self.height);
        if !world.contains_point(self.spawn) {
            return Err(LevelError::SpawnOutsideWorld {
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }
        for (index, platform) in self.platforms.iter().enumerate() {
            let size = platform.rect.size;
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(LevelError::DegeneratePlatform {
                    index,
                    width: size.x,
                    height: size.y,
                });
            }
            if platform.moving && !(platform.move_distance > 0.0) {
                return Err(LevelError::InvalidMoveDistance {
                    index,
                    distance: platform.move_distance,
                });
            }
        }
        Ok(())
    }

    /// The goal platform (last in the list)
    pub fn goal(&self) -> Option<&PlatformSpec> {
        self.platforms.last()
    }

    pub fn builtin(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::easy(),
            Difficulty::Hard => Self::hard(),
        }
    }

    /// Gentle layout: short gaps, two slow movers
    pub fn easy() -> Self {
        const STONE: [f32; 3] = [0.55, 0.45, 0.35];
        const MOVER: [f32; 3] = [0.2, 0.5, 0.9];
        const GOAL: [f32; 3] = [0.1, 0.9, 0.3];

        let (w, h) = (WORLD_WIDTH, WORLD_HEIGHT);
        Self {
            name: "easy".to_string(),
            width: w,
            height: h,
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            avatar_radius: AVATAR_RADIUS,
            platforms: vec![
                // Border walls
                PlatformSpec::fixed(-20.0, 0.0, 20.0, h, STONE),
                PlatformSpec::fixed(w, 0.0, 20.0, h, STONE),
                // Start ledge, top flush with the spawn's bottom edge
                PlatformSpec::fixed(0.0, SPAWN_Y + AVATAR_RADIUS, 240.0, 20.0, STONE),
                PlatformSpec::fixed(320.0, 460.0, 200.0, 20.0, STONE),
                PlatformSpec::fixed(600.0, 400.0, 200.0, 20.0, MOVER)
                    .moving(Direction::Right, 60.0),
                PlatformSpec::fixed(900.0, 340.0, 200.0, 20.0, STONE),
                PlatformSpec::fixed(1200.0, 400.0, 220.0, 20.0, MOVER)
                    .moving(Direction::Left, 80.0),
                PlatformSpec::fixed(1500.0, 340.0, 180.0, 20.0, STONE),
                PlatformSpec::fixed(1740.0, 280.0, 160.0, 20.0, GOAL),
            ],
        }
    }

    /// Narrow ledges, more movers and a higher goal
    pub fn hard() -> Self {
        const STONE: [f32; 3] = [0.4, 0.4, 0.45];
        const MOVER: [f32; 3] = [0.8, 0.3, 0.6];
        const GOAL: [f32; 3] = [0.1, 0.9, 0.3];

        let (w, h) = (WORLD_WIDTH, WORLD_HEIGHT);
        Self {
            name: "hard".to_string(),
            width: w,
            height: h,
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            avatar_radius: AVATAR_RADIUS,
            platforms: vec![
                PlatformSpec::fixed(-20.0, 0.0, 20.0, h, STONE),
                PlatformSpec::fixed(w, 0.0, 20.0, h, STONE),
                PlatformSpec::fixed(0.0, SPAWN_Y + AVATAR_RADIUS, 120.0, 20.0, STONE),
                PlatformSpec::fixed(220.0, 450.0, 100.0, 20.0, MOVER)
                    .moving(Direction::Right, 40.0),
                PlatformSpec::fixed(430.0, 380.0, 90.0, 20.0, STONE),
                PlatformSpec::fixed(620.0, 320.0, 120.0, 20.0, MOVER)
                    .moving(Direction::Left, 70.0),
                PlatformSpec::fixed(860.0, 260.0, 80.0, 20.0, STONE),
                PlatformSpec::fixed(1040.0, 320.0, 120.0, 20.0, MOVER)
                    .moving(Direction::Right, 90.0),
                PlatformSpec::fixed(1300.0, 250.0, 90.0, 20.0, STONE),
                PlatformSpec::fixed(1480.0, 190.0, 110.0, 20.0, MOVER)
                    .moving(Direction::Left, 50.0),
                PlatformSpec::fixed(1700.0, 140.0, 120.0, 20.0, GOAL),
            ],
        }
    }
}
