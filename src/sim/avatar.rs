//! Avatar kinematics
//!
//! Purely kinematic: input and gravity produce a tentative position each
//! frame. Landing and every other contact is decided by the collision
//! resolver afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::Rect;
use super::state::Platform;
use crate::consts::KINEMATIC_EPSILON;
use crate::tuning::Tuning;

/// Vertical mode of the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarMode {
    /// Resting on top of `platform` (index into the round's platform list)
    Grounded { platform: usize },
    /// Rising; `jump_velocity` is still positive
    Jumping,
    /// Descending under gravity
    Falling,
}

/// Requested horizontal movement for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalInput {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalInput {
    /// Held keys to a direction; both held cancel out
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => HorizontalInput::Left,
            (false, true) => HorizontalInput::Right,
            _ => HorizontalInput::None,
        }
    }

    fn sign(self) -> f32 {
        match self {
            HorizontalInput::Left => -1.0,
            HorizontalInput::Right => 1.0,
            HorizontalInput::None => 0.0,
        }
    }
}

/// The player-controlled circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    /// Upward speed while jumping (units/frame)
    pub jump_velocity: f32,
    /// Downward speed while falling (units/frame)
    pub fall_speed: f32,
    /// Velocity of the platform jumped off. Recorded for the host; airborne
    /// motion is driven by input alone.
    pub carry: f32,
    pub mode: AvatarMode,
}

impl Avatar {
    /// Spawned airborne; the first resolution seats it on whatever is below
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            jump_velocity: 0.0,
            fall_speed: 0.0,
            carry: 0.0,
            mode: AvatarMode::Falling,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    /// Supporting platform index, if grounded
    #[inline]
    pub fn support(&self) -> Option<usize> {
        match self.mode {
            AvatarMode::Grounded { platform } => Some(platform),
            _ => None,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        matches!(self.mode, AvatarMode::Grounded { .. })
    }

    /// Apply one frame of player input. Returns true if a jump started.
    pub fn apply_input(
        &mut self,
        direction: HorizontalInput,
        jump_requested: bool,
        platforms: &[Platform],
        tuning: &Tuning,
    ) -> bool {
        self.pos.x += direction.sign() * tuning.move_speed;

        if !jump_requested {
            return false;
        }
        let Some(platform) = self.support() else {
            return false;
        };

        self.carry = platforms.get(platform).map_or(0.0, |p| p.velocity);
        self.jump_velocity = tuning.jump_velocity;
        self.fall_speed = 0.0;
        self.mode = AvatarMode::Jumping;
        true
    }

    /// Advance one fixed frame of gravity
    pub fn integrate(&mut self, tuning: &Tuning) {
        match self.mode {
            AvatarMode::Grounded { .. } => {}
            AvatarMode::Jumping => {
                self.pos.y -= self.jump_velocity;
                self.jump_velocity -= tuning.gravity;
                if self.jump_velocity <= KINEMATIC_EPSILON {
                    self.jump_velocity = 0.0;
                    self.fall_speed = 0.0;
                    self.mode = AvatarMode::Falling;
                }
            }
            AvatarMode::Falling => {
                self.fall_speed = (self.fall_speed + tuning.gravity).min(tuning.max_fall_speed);
                self.pos.y += self.fall_speed;
            }
        }
    }

    /// Seat the avatar on top of `platform` and zero all vertical motion
    pub fn land_on(&mut self, platform: usize, top: f32) {
        self.pos.y = top - self.radius;
        self.jump_velocity = 0.0;
        self.fall_speed = 0.0;
        self.carry = 0.0;
        self.mode = AvatarMode::Grounded { platform };
    }

    /// Stop vertical motion after hitting a ceiling; gravity takes over
    pub fn bump_ceiling(&mut self, bottom: f32) {
        self.pos.y = bottom + self.radius;
        self.jump_velocity = 0.0;
        self.fall_speed = 0.0;
        self.mode = AvatarMode::Falling;
    }

    /// Lose support and start falling from rest
    pub fn drop_off(&mut self) {
        self.fall_speed = 0.0;
        self.mode = AvatarMode::Falling;
    }
}
