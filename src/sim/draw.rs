//! Sprite registration for the host renderer
//!
//! The core never draws. Each frame the harness hands a [`DrawGroup`] to
//! [`GameState::draw`](super::GameState::draw) and renders whatever was added.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Ship,
    /// Wrap duplicate of the ship on the opposite edge
    ShipGhost,
    Bullet,
    Asteroid,
}

/// One sprite to draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Screen-space center
    pub center: Vec2,
    /// Degrees clockwise from up
    pub rotation: f32,
    /// Unrotated size
    pub size: Vec2,
}

/// Receives sprites in draw order
pub trait DrawGroup {
    fn add(&mut self, sprite: Sprite);
}

impl DrawGroup for Vec<Sprite> {
    fn add(&mut self, sprite: Sprite) {
        self.push(sprite);
    }
}
