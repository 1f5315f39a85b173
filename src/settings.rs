//! Runtime settings
//!
//! Stored as JSON. Missing fields take their defaults, so an empty object is a
//! valid settings file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SettingsError, SettingsResult};
use crate::sim::Rect;

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Layout ===
    /// Play field size (pixels)
    pub play_field_width: f32,
    pub play_field_height: f32,
    /// HUD strip below the play field (pixels)
    pub hud_height: f32,

    // === Gameplay ===
    /// Fixed run seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Keep firing every 500 ms while fire is held past one second
    pub automatic_fire: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_field_width: PLAY_FIELD_WIDTH,
            play_field_height: PLAY_FIELD_HEIGHT,
            hud_height: HUD_HEIGHT,
            seed: None,
            automatic_fire: false,
        }
    }
}

impl Settings {
    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject layouts the simulation cannot run in
    ///
    /// Spawning aims at a rect inset by two maximum diameters, so each axis
    /// must be at least that wide.
    pub fn validate(&self) -> SettingsResult<()> {
        let min_extent = 2.0 * MAX_DIAMETER;
        for (field, value, min) in [
            ("play_field_width", self.play_field_width, min_extent),
            ("play_field_height", self.play_field_height, min_extent),
            ("hud_height", self.hud_height, 0.0),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} is not a finite number", value),
                });
            }
            if value <= 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} must be positive", value),
                });
            }
            if value < min {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} is below the minimum of {}", value, min),
                });
            }
        }
        Ok(())
    }

    /// Play field rect, anchored at the origin
    pub fn play_field(&self) -> Rect {
        Rect::new(0.0, 0.0, self.play_field_width, self.play_field_height)
    }

    /// HUD strip directly below the play field
    pub fn hud_rect(&self) -> Rect {
        Rect::new(0.0, self.play_field_height, self.play_field_width, self.hud_height)
    }

    /// The configured seed, or a fresh one from entropy
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
