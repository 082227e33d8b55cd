//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, velocities in units per frame
//! - Seeded RNG only
//! - Stable iteration order (platform list order is collision priority)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod level;
pub mod motion;
pub mod placement;
pub mod round;
pub mod shapes;
pub mod state;

pub use avatar::{Avatar, AvatarMode, HorizontalInput};
pub use collision::resolve;
pub use level::{Difficulty, Direction, Level, PlatformSpec};
pub use motion::update_platforms;
pub use placement::populate;
pub use round::{FrameInput, Round};
pub use shapes::{Rect, circle_rect_overlap, circles_overlap};
pub use state::{Coin, GameEvent, Obstacle, Outcome, Platform, RoundPhase, RoundState};
