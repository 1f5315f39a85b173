//! Session state
//!
//! One run is a ship, an asteroid director and a collision engine built from
//! the same settings and run seed. Restarting rebuilds all three.

use serde::{Deserialize, Serialize};

use super::collision::CollisionEngine;
use super::director::AsteroidDirector;
use super::draw::DrawGroup;
use super::ship::Ship;
use crate::hud::HudSnapshot;
use crate::settings::Settings;

pub const READY_MESSAGE: &str = "Arrow keys to move, X to fire.  Press SPACE to start";
pub const PLAYING_MESSAGE: &str = "Arrow keys to move, X to fire";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER!  Press SPACE to reset";

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start key
    Ready,
    /// Simulation advancing
    Playing,
    /// Run ended; waiting for the start key to reset
    GameOver,
}

impl GamePhase {
    pub fn message(&self) -> &'static str {
        match self {
            GamePhase::Ready => READY_MESSAGE,
            GamePhase::Playing => PLAYING_MESSAGE,
            GamePhase::GameOver => GAME_OVER_MESSAGE,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Seed of the current run
    pub seed: u64,
    pub phase: GamePhase,
    pub ship: Ship,
    pub director: AsteroidDirector,
    pub collisions: CollisionEngine,
    /// Completed runs
    runs: u32,
}

impl GameState {
    /// New session seeded from the settings (or entropy)
    pub fn new(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        let field = settings.play_field();
        Self {
            ship: Ship::new(field, settings.automatic_fire),
            director: AsteroidDirector::with_seed(field, seed),
            collisions: CollisionEngine::new(field),
            settings,
            seed,
            phase: GamePhase::Ready,
            runs: 0,
        }
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn message(&self) -> &'static str {
        self.phase.message()
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Rebuild every component for the next run and go back to `Ready`
    pub fn restart(&mut self) {
        let runs = self.runs + 1;
        let seed = self.seed.wrapping_add(1);
        let settings = self.settings.clone();
        log::info!(
            "Restarting after level {} ({} destroyed), seed {}",
            self.director.level(),
            self.director.asteroids_destroyed_total_count(),
            seed
        );
        *self = Self::with_seed(settings, seed);
        self.runs = runs;
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            level: self.director.level(),
            asteroids_generated_in_level: self.director.asteroid_level_count(),
            asteroids_destroyed_in_level: self.director.asteroids_destroyed_level_count(),
            asteroids_destroyed_total: self.director.asteroids_destroyed_total_count(),
            time_to_next_generation: self.director.time_to_next_generation(),
            message: self.message().to_string(),
        }
    }

    /// Enqueue this frame's sprites: asteroids, bullets, ship
    pub fn draw<G: DrawGroup>(&self, group: &mut G) {
        self.director.draw(group);
        self.ship.draw(group);
    }
}
