//! Axis-aligned bounding shapes and overlap tests
//!
//! Shapes are derived views over an entity's center position and fixed size.
//! They are recomputed on demand after movement and never mutated directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle described by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Top edge (smallest y; coordinates are y-down).
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Bottom edge (largest y).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Rectangle-vs-rectangle overlap, edge contact counts as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }

    /// Circle-vs-rectangle overlap via the closest point on the rectangle.
    pub fn overlaps_circle(&self, circle: &Circle) -> bool {
        let closest = circle.center.clamp(
            self.center - self.half,
            self.center + self.half,
        );
        closest.distance_squared(circle.center) <= circle.radius * circle.radius
    }
}

/// Circle described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(20.0, 360.0), Vec2::new(20.0, 120.0));
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 30.0);
        assert_eq!(rect.top(), 300.0);
        assert_eq!(rect.bottom(), 420.0);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(8.0, 8.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(30.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let paddle = Rect::new(Vec2::new(20.0, 360.0), Vec2::new(20.0, 120.0));

        // Ball center inside the rectangle
        assert!(paddle.overlaps_circle(&Circle::new(Vec2::new(20.0, 360.0), 10.0)));
        // Ball touching the right edge from outside
        assert!(paddle.overlaps_circle(&Circle::new(Vec2::new(39.0, 360.0), 10.0)));
        // Ball clearly away
        assert!(!paddle.overlaps_circle(&Circle::new(Vec2::new(100.0, 360.0), 10.0)));
        // Near a corner: closest-point test, not a bounding-box test
        assert!(!paddle.overlaps_circle(&Circle::new(Vec2::new(38.0, 428.0), 10.0)));
    }
}
