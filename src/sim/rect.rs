//! Axis-aligned rectangles in screen space
//!
//! Screen space is +x right, +y down. A rect is `left/top` plus size;
//! `right`/`bottom` are exclusive edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect of the given size centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Move the rect so its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.left = center.x - self.width / 2.0;
        self.top = center.y - self.height / 2.0;
    }

    /// Zero-area rects never collide with anything
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap test (touching edges do not intersect)
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// True if `other` lies entirely inside this rect
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right() <= self.right()
            && other.top >= self.top
            && other.bottom() <= self.bottom()
    }

    /// Half-open point test: left/top inclusive, right/bottom exclusive
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    /// Portion of this rect inside `bounds` (empty if they do not overlap)
    pub fn clip(&self, bounds: &Rect) -> Rect {
        let left = self.left.max(bounds.left);
        let top = self.top.max(bounds.top);
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());
        if right <= left || bottom <= top {
            return Rect::new(self.left, self.top, 0.0, 0.0);
        }
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Closest point of the rect to `point` (the point itself when inside)
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left, self.right()),
            point.y.clamp(self.top, self.bottom()),
        )
    }

    /// Grow (or shrink, with negative values) around the same center
    pub fn inflate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left - dx / 2.0,
            self.top - dy / 2.0,
            (self.width + dx).max(0.0),
            (self.height + dy).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Shared edge only
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Empty rect inside never intersects
        assert!(!a.intersects(&Rect::new(5.0, 5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_contains_and_clip() {
        let field = Rect::new(0.0, 0.0, 800.0, 600.0);
        let inside = Rect::from_center(Vec2::new(400.0, 300.0), Vec2::new(20.0, 20.0));
        assert!(field.contains(&inside));

        let straddling = Rect::from_center(Vec2::new(795.0, 300.0), Vec2::new(20.0, 20.0));
        assert!(!field.contains(&straddling));
        let clipped = straddling.clip(&field);
        assert_eq!(clipped.left, 785.0);
        assert_eq!(clipped.width, 15.0);
        assert_eq!(clipped.height, 20.0);

        let outside = Rect::new(900.0, 0.0, 10.0, 10.0);
        assert!(outside.clip(&field).is_empty());
    }

    #[test]
    fn test_contains_point_half_open() {
        let field = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(field.contains_point(Vec2::new(0.0, 0.0)));
        assert!(!field.contains_point(Vec2::new(800.0, 10.0)));
        assert!(!field.contains_point(Vec2::new(10.0, 600.0)));
    }

    #[test]
    fn test_set_center_round_trips() {
        let mut r = Rect::new(0.0, 0.0, 6.0, 4.0);
        r.set_center(Vec2::new(10.0, 20.0));
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
        assert_eq!(r.left, 7.0);
        assert_eq!(r.top, 18.0);
    }
}
