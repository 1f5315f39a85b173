//! Kinematic body shared by the ship, bullets and asteroids
//!
//! Velocity uses the +up convention (`vel.y > 0` moves toward the top of the
//! screen) while positions are in screen space (+y down), so integration
//! negates the vertical component.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Position, velocity and heading with a bounding rect kept centered on the position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Screen-space center (pixels)
    pub pos: Vec2,
    /// `x` = horizontal, `y` = vertical (+up), pixels/second
    pub vel: Vec2,
    /// Degrees in (-180, 180], 0 = up, clockwise positive
    pub direction: f32,
    rect: Rect,
}

impl KinematicBody {
    pub fn new(pos: Vec2, vel: Vec2, direction: f32, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            direction,
            rect: Rect::from_center(pos, size),
        }
    }

    /// Advance by `dt_ms` milliseconds
    pub fn integrate(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        self.pos.x += self.vel.x * dt;
        self.pos.y += -self.vel.y * dt;
        self.rect.set_center(self.pos);
    }

    /// Teleport to a new center
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.rect.set_center(pos);
    }

    /// Change the rect size, keeping it centered
    pub fn resize(&mut self, size: Vec2) {
        self.rect = Rect::from_center(self.pos, size);
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
