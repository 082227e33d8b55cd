//! Round state and core simulation types
//!
//! Everything a host needs to draw a frame lives here and is serializable.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::level::{Direction, Level, PlatformSpec};
use super::shapes::Rect;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Simulation running
    Active,
    /// Frozen by the player, resumes on the next pause toggle
    Paused,
    /// Goal platform reached
    Won,
    /// Obstacle hit or fell out of the world
    Lost,
}

impl RoundPhase {
    /// Won and Lost stay set until the round is reset
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Things that happened during a frame, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed { platform: usize },
    /// Hit a platform's underside or side
    Bumped { platform: usize },
    CoinCollected { coin_id: u32, score: u32 },
    ObstacleHit { obstacle_id: u32 },
    GoalReached,
    FellOutOfWorld,
    Paused,
    Resumed,
    /// Fired exactly once per round; the host records the score
    RoundEnded { outcome: Outcome, score: u32 },
}

/// A platform in play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub color: [f32; 3],
    pub moving: bool,
    pub direction: Direction,
    /// Signed distance travelled from the start position
    pub move_offset: f32,
    /// Bound on |move_offset|
    pub move_distance: f32,
    /// Horizontal displacement applied by the last motion update
    pub velocity: f32,
}

impl From<&PlatformSpec> for Platform {
    fn from(spec: &PlatformSpec) -> Self {
        Self {
            rect: spec.rect,
            color: spec.color,
            moving: spec.moving,
            direction: spec.direction,
            move_offset: 0.0,
            move_distance: spec.move_distance,
            velocity: 0.0,
        }
    }
}

/// A lethal circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
}

/// A collectible circle worth one point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
}

pub const OBSTACLE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const COIN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete state of one round (deterministic given seed and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub avatar: Avatar,
    /// Ordered by priority; the last one is the goal
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    /// Coins still in play, sorted by id
    pub coins: Vec<Coin>,
    pub score: u32,
    pub phase: RoundPhase,
    /// Simulated frames since the round (re)started
    pub time_ticks: u64,
    pub world: Vec2,
    /// Next entity ID
    next_id: u32,
}

impl RoundState {
    /// Fresh state for a level; obstacles and coins are placed separately
    pub fn new(level: &Level) -> Self {
        Self {
            avatar: Avatar::new(level.spawn, level.avatar_radius),
            platforms: level.platforms.iter().map(Platform::from).collect(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0,
            phase: RoundPhase::Active,
            time_ticks: 0,
            world: Vec2::new(level.width, level.height),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Index of the goal platform
    #[inline]
    pub fn goal_index(&self) -> Option<usize> {
        self.platforms.len().checked_sub(1)
    }

    #[inline]
    pub fn won(&self) -> bool {
        self.phase == RoundPhase::Won
    }

    #[inline]
    pub fn lost(&self) -> bool {
        self.phase == RoundPhase::Lost
    }
}
