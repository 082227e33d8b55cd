//! Obstacle and coin placement
//!
//! Rejection sampling over integer world positions: draw until a candidate
//! clears every platform and every circle placed so far. Each object gets a
//! bounded number of draws.

use glam::Vec2;
use rand::Rng;

use super::shapes::{Rect, circles_overlap};
use super::state::{Coin, Obstacle, Platform, RoundState, COIN_COLOR, OBSTACLE_COLOR};
use crate::error::PlacementError;
use crate::tuning::Tuning;

/// A circle already placed, as seen by later candidates
#[derive(Debug, Clone, Copy)]
struct Placed {
    pos: Vec2,
    radius: f32,
}

/// Fixed parts of the world that every candidate must avoid
struct Field<'a> {
    world: Vec2,
    platforms: &'a [Platform],
    /// Avatar spawn circle; nothing is placed within reach of it
    spawn: Vec2,
    spawn_radius: f32,
}

impl Field<'_> {
    /// Candidate is too close to a placed circle, a platform or the spawn.
    ///
    /// Placed circles are treated as boxes from `pos - size` to
    /// `pos + other + size`, matching how the layout has always been generated.
    fn is_blocked(&self, candidate: Vec2, size: f32, placed: &[Placed]) -> bool {
        let near_circle = placed.iter().any(|p| {
            let zone = Rect {
                pos: p.pos - Vec2::splat(size),
                size: Vec2::splat(p.radius + size * 2.0),
            };
            zone.contains_point(candidate)
        });
        let on_platform = self
            .platforms
            .iter()
            .any(|platform| platform.rect.expand(size).contains_point(candidate));
        // Leave an avatar-sized gap around the spawn
        let at_spawn = circles_overlap(candidate, size, self.spawn, self.spawn_radius * 2.0);

        near_circle || on_platform || at_spawn
    }

    /// Place `count` circles of radius `size`, appending each to `placed`
    fn place_circles<R: Rng>(
        &self,
        rng: &mut R,
        kind: &'static str,
        count: usize,
        size: f32,
        placed: &mut Vec<Placed>,
        max_attempts: u32,
    ) -> Result<Vec<Vec2>, PlacementError> {
        let max_x = (self.world.x - size).max(0.0) as i32;
        let max_y = (self.world.y - size).max(0.0) as i32;
        let mut positions = Vec::with_capacity(count);

        for i in 0..count {
            let mut accepted = None;
            for attempt in 1..=max_attempts {
                let candidate = Vec2::new(
                    rng.random_range(0..=max_x) as f32,
                    rng.random_range(0..=max_y) as f32,
                );
                if !self.is_blocked(candidate, size, placed) {
                    if attempt > max_attempts / 2 {
                        log::warn!("Placing {} {} took {} attempts", kind, i, attempt);
                    }
                    accepted = Some(candidate);
                    break;
                }
            }

            let Some(pos) = accepted else {
                return Err(PlacementError::Exhausted {
                    kind,
                    placed: i,
                    requested: count,
                    attempts: max_attempts,
                });
            };
            placed.push(Placed { pos, radius: size });
            positions.push(pos);
        }

        Ok(positions)
    }
}

/// Replace the round's obstacles and coins with a fresh random layout.
///
/// The avatar must already be at its spawn point.
pub fn populate<R: Rng>(
    state: &mut RoundState,
    rng: &mut R,
    tuning: &Tuning,
) -> Result<(), PlacementError> {
    let field = Field {
        world: state.world,
        platforms: &state.platforms,
        spawn: state.avatar.pos,
        spawn_radius: state.avatar.radius,
    };
    let mut placed = Vec::with_capacity(tuning.obstacle_count + tuning.coin_count);

    let obstacle_positions = field.place_circles(
        rng,
        "obstacle",
        tuning.obstacle_count,
        tuning.obstacle_radius,
        &mut placed,
        tuning.max_placement_attempts,
    )?;
    let coin_positions = field.place_circles(
        rng,
        "coin",
        tuning.coin_count,
        tuning.coin_radius,
        &mut placed,
        tuning.max_placement_attempts,
    )?;

    state.obstacles.clear();
    for pos in obstacle_positions {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos,
            radius: tuning.obstacle_radius,
            color: OBSTACLE_COLOR,
        });
    }

    state.coins.clear();
    for pos in coin_positions {
        let id = state.next_entity_id();
        state.coins.push(Coin {
            id,
            pos,
            radius: tuning.coin_radius,
            color: COIN_COLOR,
        });
    }

    log::debug!(
        "Placed {} obstacles and {} coins",
        state.obstacles.len(),
        state.coins.len()
    );
    Ok(())
}
