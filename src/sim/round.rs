//! Round controller
//!
//! Owns one round and advances it one fixed frame at a time:
//! input -> kinematics -> ride -> collisions -> platform motion -> fall check.

use rand_pcg::Pcg32;

use super::avatar::{Avatar, HorizontalInput};
use super::collision::resolve;
use super::level::Level;
use super::motion::update_platforms;
use super::placement::populate;
use super::state::{GameEvent, Outcome, Platform, RngState, RoundPhase, RoundState};
use crate::error::{PlacementError, RoundError};
use crate::tuning::Tuning;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump (only honoured while grounded)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
}

impl FrameInput {
    pub fn direction(&self) -> HorizontalInput {
        HorizontalInput::from_keys(self.move_left, self.move_right)
    }
}

/// One round of play on a level
#[derive(Debug, Clone)]
pub struct Round {
    level: Level,
    tuning: Tuning,
    rng_state: RngState,
    rng: Pcg32,
    state: RoundState,
}

impl Round {
    /// Validate the level and tuning, then start a round with a seeded layout
    pub fn new(level: Level, tuning: Tuning, seed: u64) -> Result<Self, RoundError> {
        level.validate()?;
        tuning.validate()?;

        let rng_state = RngState::new(seed);
        let mut round = Self {
            state: RoundState::new(&level),
            rng: rng_state.to_rng(),
            rng_state,
            level,
            tuning,
        };
        populate(&mut round.state, &mut round.rng, &round.tuning)?;

        log::info!(
            "Round started on level '{}' (seed {}, {} platforms)",
            round.level.name,
            seed,
            round.state.platforms.len()
        );
        Ok(round)
    }

    /// Respawn, restore platforms, zero the score and lay out a new field.
    ///
    /// On error the round keeps its previous state.
    pub fn reset_round(&mut self) -> Result<(), PlacementError> {
        let mut fresh = RoundState::new(&self.level);
        populate(&mut fresh, &mut self.rng, &self.tuning)?;
        self.state = fresh;
        log::info!("Round reset on level '{}'", self.level.name);
        Ok(())
    }

    /// Advance one frame. Returns what happened, in order.
    pub fn on_frame(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let state = &mut self.state;

        if input.pause {
            match state.phase {
                RoundPhase::Active => {
                    state.phase = RoundPhase::Paused;
                    events.push(GameEvent::Paused);
                    return events;
                }
                RoundPhase::Paused => {
                    state.phase = RoundPhase::Active;
                    events.push(GameEvent::Resumed);
                }
                RoundPhase::Won | RoundPhase::Lost => {}
            }
        }

        // Won, lost and paused rounds are frozen until reset or resumed
        if state.phase != RoundPhase::Active {
            return events;
        }

        state.time_ticks += 1;

        let tuning = &self.tuning;
        if state
            .avatar
            .apply_input(input.direction(), input.jump, &state.platforms, tuning)
        {
            events.push(GameEvent::Jumped);
        }
        state.avatar.integrate(tuning);
        ride(&mut state.avatar, &state.platforms, tuning.carry_factor);

        events.extend(resolve(state));

        update_platforms(&mut state.platforms, tuning.platform_speed);

        if state.phase == RoundPhase::Active && state.avatar.top() > state.world.y {
            state.phase = RoundPhase::Lost;
            events.push(GameEvent::FellOutOfWorld);
        }

        // Only reachable once per round: terminal phases return early above
        let outcome = match state.phase {
            RoundPhase::Won => Some(Outcome::Won),
            RoundPhase::Lost => Some(Outcome::Lost),
            _ => None,
        };
        if let Some(outcome) = outcome {
            log::info!(
                "Round {:?} after {} frames with score {}",
                outcome,
                state.time_ticks,
                state.score
            );
            events.push(GameEvent::RoundEnded {
                outcome,
                score: state.score,
            });
        }

        events
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn won(&self) -> bool {
        self.state.won()
    }

    pub fn lost(&self) -> bool {
        self.state.lost()
    }

    /// Mutable access for scripted setups in tests
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut RoundState {
        &mut self.state
    }
}

/// Carry a grounded avatar along with a moving platform.
///
/// Uses the velocity recorded by the previous frame's motion update.
fn ride(avatar: &mut Avatar, platforms: &[Platform], carry_factor: f32) {
    let velocity = avatar
        .support()
        .and_then(|i| platforms.get(i))
        .map_or(0.0, |p| p.velocity);
    if velocity != 0.0 {
        avatar.pos.x += carry_factor * velocity;
    }
}
