//! Shape primitives
//!
//! Axis-aligned rectangles (top-left origin, y down) and circle overlap
//! predicates shared by collision and placement.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            pos: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    /// Point containment, edges included
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Interval overlap on both axes, touching edges count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Closest point on or inside the rectangle to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.pos, self.pos + self.size)
    }

    /// True if `x` lies strictly between the left and right edges
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        self.left() < x && x < self.right()
    }

    /// True if `y` lies strictly between the top and bottom edges
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        self.top() < y && y < self.bottom()
    }
}

/// Circle-vs-circle overlap; circles touching at the radius sum count
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

/// Circle-vs-rectangle overlap using the closest point on the rectangle
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_touching_at_radius_sum() {
        let avatar = Vec2::new(100.0, 100.0);
        assert!(circles_overlap(avatar, 15.0, Vec2::new(125.0, 100.0), 10.0));
        assert!(!circles_overlap(avatar, 15.0, Vec2::new(125.1, 100.0), 10.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 30.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 50.0);
        // Strict spans exclude the edges themselves
        assert!(rect.spans_x(50.0));
        assert!(!rect.spans_x(10.0));
        assert!(!rect.spans_y(50.0));
    }

    #[test]
    fn test_rect_overlap_touching() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(10.5, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&Rect::new(-5.0, -5.0, 30.0, 30.0)));
    }

    #[test]
    fn test_expand_and_contains() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0).expand(10.0);
        assert!(rect.contains_point(Vec2::new(90.0, 90.0)));
        assert!(rect.contains_point(Vec2::new(160.0, 130.0)));
        assert!(!rect.contains_point(Vec2::new(89.0, 100.0)));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        // Resting exactly on the top edge is contact, not overlap
        assert!(!circle_rect_overlap(Vec2::new(50.0, -15.0), 15.0, &rect));
        assert!(circle_rect_overlap(Vec2::new(50.0, -14.0), 15.0, &rect));
        // Near a corner, outside
        assert!(!circle_rect_overlap(Vec2::new(112.0, -12.0), 15.0, &rect));
    }

    #[test]
    fn test_closest_point() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(rect.closest_point(Vec2::new(110.0, -5.0)), Vec2::new(100.0, 0.0));
        assert_eq!(rect.closest_point(Vec2::new(50.0, -5.0)), Vec2::new(50.0, 0.0));
        assert_eq!(rect.closest_point(Vec2::new(50.0, 10.0)), Vec2::new(50.0, 10.0));
    }
}
