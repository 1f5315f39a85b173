//! HUD snapshot
//!
//! The host renders the HUD strip; the core only supplies the numbers and the
//! status message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Read-only HUD values for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub level: u32,
    /// Primary asteroids spawned this level
    pub asteroids_generated_in_level: u32,
    pub asteroids_destroyed_in_level: u32,
    pub asteroids_destroyed_total: u32,
    /// Milliseconds until the next timed spawn (negative while overdue)
    pub time_to_next_generation: f32,
    pub message: String,
}

/// One-line rendering: `Level: 3  Asteroids: 2 / 1 / 4  <message>`
impl fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level: {}  Asteroids: {} / {} / {}  {}",
            self.level,
            self.asteroids_generated_in_level,
            self.asteroids_destroyed_in_level,
            self.asteroids_destroyed_total,
            self.message
        )
    }
}
