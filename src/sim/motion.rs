//! Platform motion
//!
//! Moving platforms slide back and forth horizontally, one step per frame,
//! between `-move_distance` and `+move_distance` of their start position.

use super::state::Platform;

impl Platform {
    /// Advance one frame and record the displacement as `velocity`
    pub fn advance(&mut self, speed: f32) {
        if !self.moving {
            self.velocity = 0.0;
            return;
        }

        let sign = self.direction.sign();
        // Never step past the bound, even for fractional amplitudes
        let room = self.move_distance - sign * self.move_offset;
        let step = sign * speed.min(room.max(0.0));

        self.rect.pos.x += step;
        self.move_offset += step;
        self.velocity = step;

        if sign * self.move_offset >= self.move_distance {
            self.direction = self.direction.flipped();
        }
    }
}

/// Advance every platform by one frame
pub fn update_platforms(platforms: &mut [Platform], speed: f32) {
    for platform in platforms.iter_mut() {
        platform.advance(speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Direction, PlatformSpec};
    use proptest::prelude::*;

    fn mover(direction: Direction, distance: f32) -> Platform {
        let spec = PlatformSpec::fixed(100.0, 300.0, 80.0, 20.0, [1.0; 3]);
        Platform::from(&spec.moving(direction, distance))
    }

    #[test]
    fn test_static_platform_has_zero_velocity() {
        let mut platform = Platform::from(&PlatformSpec::fixed(0.0, 0.0, 10.0, 10.0, [1.0; 3]));
        platform.velocity = 3.0;
        platform.advance(1.0);
        assert_eq!(platform.velocity, 0.0);
        assert_eq!(platform.rect.pos.x, 0.0);
    }

    #[test]
    fn test_flips_exactly_at_bounds() {
        let mut platform = mover(Direction::Right, 3.0);
        let mut trace = Vec::new();
        for _ in 0..12 {
            platform.advance(1.0);
            trace.push((platform.move_offset, platform.velocity, platform.direction));
        }
        use Direction::*;
        assert_eq!(
            trace,
            vec![
                (1.0, 1.0, Right),
                (2.0, 1.0, Right),
                (3.0, 1.0, Left),
                (2.0, -1.0, Left),
                (1.0, -1.0, Left),
                (0.0, -1.0, Left),
                (-1.0, -1.0, Left),
                (-2.0, -1.0, Left),
                (-3.0, -1.0, Right),
                (-2.0, 1.0, Right),
                (-1.0, 1.0, Right),
                (0.0, 1.0, Right),
            ]
        );
        assert_eq!(platform.rect.pos.x, 100.0);
    }

    #[test]
    fn test_fractional_distance_is_clamped() {
        let mut platform = mover(Direction::Left, 1.5);
        platform.advance(1.0);
        platform.advance(1.0);
        assert_eq!(platform.move_offset, -1.5);
        assert_eq!(platform.velocity, -0.5);
        assert_eq!(platform.direction, Direction::Right);
    }

    #[test]
    fn test_update_platforms_moves_only_movers() {
        let mut platforms = vec![
            Platform::from(&PlatformSpec::fixed(0.0, 0.0, 10.0, 10.0, [1.0; 3])),
            mover(Direction::Left, 10.0),
        ];
        update_platforms(&mut platforms, 1.0);
        assert_eq!(platforms[0].velocity, 0.0);
        assert_eq!(platforms[1].velocity, -1.0);
        assert_eq!(platforms[1].rect.pos.x, 99.0);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_within_bounds(
            distance in 1u32..200,
            start_right in any::<bool>(),
            frames in 0usize..2000,
        ) {
            let direction = if start_right { Direction::Right } else { Direction::Left };
            let distance = distance as f32;
            let mut platform = mover(direction, distance);
            for _ in 0..frames {
                let before = platform.direction;
                platform.advance(1.0);
                prop_assert!(platform.move_offset.abs() <= distance);
                prop_assert_eq!(platform.velocity.abs(), 1.0);
                if platform.direction != before {
                    prop_assert_eq!(platform.move_offset.abs(), distance);
                }
                prop_assert_eq!(platform.rect.pos.x, 100.0 + platform.move_offset);
            }
        }
    }
}
