//! Ship bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::rect::Rect;
use crate::consts::*;
use crate::heading_vector;

/// A short-lived projectile owned by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub body: KinematicBody,
    /// The bullet dies once its rect stops touching this region
    validity: Rect,
}

impl Bullet {
    /// Spawn at `pos`, inheriting `ship_vel` plus muzzle speed along `direction`
    pub fn new(id: u32, pos: Vec2, ship_vel: Vec2, direction: f32, validity: Rect) -> Self {
        let vel = ship_vel + heading_vector(direction) * BULLET_SPEED;
        Self {
            id,
            body: KinematicBody::new(pos, vel, direction, Vec2::splat(BULLET_DIAMETER)),
            validity,
        }
    }

    pub fn integrate(&mut self, dt_ms: f32) {
        self.body.integrate(dt_ms);
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        self.body.rect()
    }

    /// Still overlapping its validity region
    pub fn is_live(&self) -> bool {
        self.validity.intersects(self.body.rect())
    }
}
