//! Collision resolution
//!
//! Corrects the avatar's tentative position against platforms, then checks
//! obstacles and coins. Overlaps are resolved by priority, not
//! simultaneously: goal first, then platforms in list order (first
//! corrective hit wins), then obstacles, then coins. Corner overlaps the
//! ordered scan cannot see are pushed out afterwards.

use super::avatar::AvatarMode;
use super::shapes::circles_overlap;
use super::state::{GameEvent, RoundPhase, RoundState};
use crate::consts::SUPPORT_EPSILON;

/// Which edge of a platform the avatar was pushed out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    /// Rising into the underside
    Ceiling,
    /// Coming down onto the top
    Landing,
    /// Pushed out sideways
    Wall,
}

/// Resolve one frame of contacts. No-op unless the round is active.
pub fn resolve(state: &mut RoundState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != RoundPhase::Active {
        return events;
    }

    if touches_goal(state) {
        state.phase = RoundPhase::Won;
        events.push(GameEvent::GoalReached);
        return events;
    }

    if let Some(platform) = settle_support(state) {
        events.push(GameEvent::Landed { platform });
    }

    match resolve_platforms(state) {
        Some((platform, Contact::Landing)) => events.push(GameEvent::Landed { platform }),
        Some((platform, contact @ (Contact::Ceiling | Contact::Wall))) => {
            log::trace!("Avatar bumped platform {} ({:?})", platform, contact);
            events.push(GameEvent::Bumped { platform });
        }
        None => {}
    }
    push_out_of_corners(state);

    let avatar = &state.avatar;
    if let Some(obstacle) = state
        .obstacles
        .iter()
        .find(|o| circles_overlap(o.pos, o.radius, avatar.pos, avatar.radius))
    {
        state.phase = RoundPhase::Lost;
        events.push(GameEvent::ObstacleHit {
            obstacle_id: obstacle.id,
        });
        return events;
    }

    collect_coins(state, &mut events);
    events
}

/// Avatar's bounding box overlaps the goal platform on both axes
fn touches_goal(state: &RoundState) -> bool {
    state
        .goal_index()
        .and_then(|i| state.platforms.get(i))
        .is_some_and(|goal| goal.rect.overlaps(&state.avatar.bounds()))
}

/// Keep a resting avatar seated, or let it fall once nothing is underneath.
///
/// Resting contact (bottom exactly on a top edge) never satisfies the strict
/// landing test, so support is re-checked here before the platform scan.
/// Returns the platform index if an airborne avatar came to rest.
fn settle_support(state: &mut RoundState) -> Option<usize> {
    let avatar = &mut state.avatar;
    if avatar.mode == AvatarMode::Jumping {
        return None;
    }

    let support = state.platforms.iter().position(|p| {
        p.rect.spans_x(avatar.pos.x) && (avatar.bottom() - p.rect.top()).abs() <= SUPPORT_EPSILON
    });

    match support {
        Some(index) => {
            let was_airborne = !avatar.is_grounded();
            avatar.land_on(index, state.platforms[index].rect.top());
            if was_airborne {
                log::debug!("Avatar settled on platform {}", index);
                return Some(index);
            }
            None
        }
        None => {
            if avatar.is_grounded() {
                avatar.drop_off();
            }
            None
        }
    }
}

/// Scan platforms in order and apply the first corrective contact
fn resolve_platforms(state: &mut RoundState) -> Option<(usize, Contact)> {
    let avatar = &mut state.avatar;

    for (index, platform) in state.platforms.iter().enumerate() {
        let rect = &platform.rect;

        if rect.spans_x(avatar.pos.x) {
            if rect.spans_y(avatar.top()) {
                avatar.bump_ceiling(rect.bottom());
                return Some((index, Contact::Ceiling));
            }
            if rect.spans_y(avatar.bottom()) {
                avatar.land_on(index, rect.top());
                log::debug!("Avatar landed on platform {}", index);
                return Some((index, Contact::Landing));
            }
        }

        if rect.spans_y(avatar.pos.y) {
            if rect.spans_x(avatar.left()) {
                avatar.pos.x = rect.right() + avatar.radius;
                return Some((index, Contact::Wall));
            }
            if rect.spans_x(avatar.right()) {
                avatar.pos.x = rect.left() - avatar.radius;
                return Some((index, Contact::Wall));
            }
        }
    }

    None
}

/// Push the avatar out of any platform it still overlaps, along the line
/// from the nearest point of the platform to the avatar's center.
///
/// The ordered scan only corrects when the center is level with a platform
/// edge, so a circle sliding past a corner needs this pass. Leaves the avatar
/// untouched when its center is inside the platform.
fn push_out_of_corners(state: &mut RoundState) {
    let avatar = &mut state.avatar;
    for platform in &state.platforms {
        let closest = platform.rect.closest_point(avatar.pos);
        let offset = avatar.pos - closest;
        let distance = offset.length();
        if distance == 0.0 || distance >= avatar.radius - SUPPORT_EPSILON {
            continue;
        }

        let pushed = closest + offset * (avatar.radius / distance);
        if avatar.is_grounded() && pushed.y != avatar.pos.y {
            avatar.drop_off();
        }
        avatar.pos = pushed;
    }
}

/// Remove every coin the avatar overlaps, one point each
fn collect_coins(state: &mut RoundState, events: &mut Vec<GameEvent>) {
    let avatar = &state.avatar;
    let mut collected = Vec::new();
    state.coins.retain(|coin| {
        let hit = circles_overlap(coin.pos, coin.radius, avatar.pos, avatar.radius);
        if hit {
            collected.push(coin.id);
        }
        !hit
    });

    for coin_id in collected {
        state.score += 1;
        log::debug!("Coin {} collected, score {}", coin_id, state.score);
        events.push(GameEvent::CoinCollected {
            coin_id,
            score: state.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Level, PlatformSpec};
    use crate::sim::shapes::circle_rect_overlap;
    use crate::sim::state::{Coin, Obstacle, COIN_COLOR, OBSTACLE_COLOR};
    use glam::Vec2;

    const COLOR: [f32; 3] = [0.5; 3];

    /// Floor at y=500 spanning x 0..400, goal far away in the top-right
    fn test_state() -> RoundState {
        let level = Level::new(
            "test",
            1000.0,
            1000.0,
            Vec2::new(100.0, 485.0),
            15.0,
            vec![
                PlatformSpec::fixed(0.0, 500.0, 400.0, 20.0, COLOR),
                PlatformSpec::fixed(900.0, 50.0, 80.0, 20.0, COLOR),
            ],
        )
        .unwrap();
        RoundState::new(&level)
    }

    fn add_coin(state: &mut RoundState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.coins.push(Coin {
            id,
            pos,
            radius: 10.0,
            color: COIN_COLOR,
        });
        id
    }

    fn add_obstacle(state: &mut RoundState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos,
            radius: 20.0,
            color: OBSTACLE_COLOR,
        });
        id
    }

    #[test]
    fn test_landing_snaps_to_top() {
        let mut state = test_state();
        state.avatar.pos = Vec2::new(100.0, 489.0);
        state.avatar.fall_speed = 4.0;

        let events = resolve(&mut state);
        assert_eq!(events, vec![GameEvent::Landed { platform: 0 }]);
        assert_eq!(state.avatar.bottom(), 500.0);
        assert_eq!(state.avatar.mode, AvatarMode::Grounded { platform: 0 });
        assert_eq!(state.avatar.fall_speed, 0.0);
    }

    #[test]
    fn test_resting_contact_stays_grounded() {
        let mut state = test_state();
        state.avatar.pos = Vec2::new(100.0, 485.0);
        for _ in 0..3 {
            resolve(&mut state);
        }
        assert_eq!(state.avatar.mode, AvatarMode::Grounded { platform: 0 });
        assert_eq!(state.avatar.pos, Vec2::new(100.0, 485.0));
    }

    #[test]
    fn test_walking_off_edge_starts_fall() {
        let mut state = test_state();
        state.avatar.land_on(0, 500.0);
        state.avatar.pos.x = 401.0;
        resolve(&mut state);
        assert_eq!(state.avatar.mode, AvatarMode::Falling);
        assert_eq!(state.avatar.fall_speed, 0.0);
    }

    #[test]
    fn test_ceiling_bump() {
        let mut state = test_state();
        state.avatar.mode = AvatarMode::Jumping;
        state.avatar.jump_velocity = 3.0;
        // Top edge at 515, inside the floor slab from below
        state.avatar.pos = Vec2::new(100.0, 530.0);

        assert_eq!(resolve(&mut state), vec![GameEvent::Bumped { platform: 0 }]);
        assert_eq!(state.avatar.top(), 520.0);
        assert_eq!(state.avatar.jump_velocity, 0.0);
        assert_eq!(state.avatar.mode, AvatarMode::Falling);
    }

    #[test]
    fn test_wall_bumps() {
        let mut state = test_state();
        // Center level with the slab, right edge poking into its left side
        state.avatar.pos = Vec2::new(-10.0, 510.0);
        assert_eq!(resolve(&mut state), vec![GameEvent::Bumped { platform: 0 }]);
        assert_eq!(state.avatar.right(), 0.0);

        state.avatar.pos = Vec2::new(410.0, 510.0);
        assert_eq!(resolve(&mut state), vec![GameEvent::Bumped { platform: 0 }]);
        assert_eq!(state.avatar.left(), 400.0);
    }

    #[test]
    fn test_corner_overlap_pushed_out() {
        let mut state = test_state();
        // Center just past the right end of the floor, circle sunk into its corner
        state.avatar.pos = Vec2::new(405.0, 495.0);
        state.avatar.fall_speed = 2.0;

        let events = resolve(&mut state);
        assert!(events.is_empty());
        let avatar = &state.avatar;
        assert!(!circle_rect_overlap(
            avatar.pos,
            avatar.radius - SUPPORT_EPSILON,
            &state.platforms[0].rect
        ));
        // Pushed diagonally away from the corner at (400, 500)
        assert!(avatar.pos.x > 405.0 && avatar.pos.y < 495.0);
        assert!((avatar.pos.distance(Vec2::new(400.0, 500.0)) - 15.0).abs() < 1e-3);
        assert_eq!(avatar.mode, AvatarMode::Falling);
    }

    #[test]
    fn test_first_platform_in_order_wins() {
        let level = Level::new(
            "stacked",
            1000.0,
            1000.0,
            Vec2::new(100.0, 100.0),
            15.0,
            vec![
                PlatformSpec::fixed(0.0, 500.0, 200.0, 20.0, COLOR),
                PlatformSpec::fixed(0.0, 505.0, 200.0, 20.0, COLOR),
                PlatformSpec::fixed(900.0, 50.0, 80.0, 20.0, COLOR),
            ],
        )
        .unwrap();
        let mut state = RoundState::new(&level);
        state.avatar.pos = Vec2::new(100.0, 492.0);

        resolve(&mut state);
        assert_eq!(state.avatar.support(), Some(0));
        assert_eq!(state.avatar.bottom(), 500.0);
    }

    #[test]
    fn test_goal_preempts_obstacle() {
        let mut state = test_state();
        state.avatar.pos = Vec2::new(940.0, 40.0);
        add_obstacle(&mut state, Vec2::new(940.0, 40.0));

        let events = resolve(&mut state);
        assert_eq!(events, vec![GameEvent::GoalReached]);
        assert!(state.won());
        assert!(!state.lost());
    }

    #[test]
    fn test_obstacle_hit_skips_coins() {
        let mut state = test_state();
        state.avatar.land_on(0, 500.0);
        let obstacle_id = add_obstacle(&mut state, Vec2::new(130.0, 485.0));
        add_coin(&mut state, Vec2::new(100.0, 470.0));

        let events = resolve(&mut state);
        assert_eq!(events, vec![GameEvent::ObstacleHit { obstacle_id }]);
        assert!(state.lost());
        assert_eq!(state.score, 0);
        assert_eq!(state.coins.len(), 1);

        // Sticky: later frames change nothing
        assert!(resolve(&mut state).is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.won());
    }

    #[test]
    fn test_coin_at_radius_sum_collected_once() {
        let mut state = test_state();
        // Avatar radius 15 + coin radius 10 = 25, exactly touching
        let coin_id = add_coin(&mut state, Vec2::new(125.0, 485.0));

        let events = resolve(&mut state);
        assert!(events.contains(&GameEvent::CoinCollected { coin_id, score: 1 }));
        for _ in 0..3 {
            resolve(&mut state);
        }
        assert_eq!(state.score, 1);
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_multiple_coins_same_frame() {
        let mut state = test_state();
        add_coin(&mut state, Vec2::new(110.0, 485.0));
        add_coin(&mut state, Vec2::new(90.0, 485.0));
        add_coin(&mut state, Vec2::new(300.0, 485.0));

        resolve(&mut state);
        assert_eq!(state.score, 2);
        assert_eq!(state.coins.len(), 1);
    }
}
