//! Space Frenzy - an arcade asteroid shooter simulation core
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ship, asteroids, fragmentation, collisions)
//! - `hud`: Read-only HUD snapshot for the host harness
//! - `settings`: Runtime configuration (play field, seed, fire mode)
//! - `error`: Configuration errors
//!
//! Windowing, sprite rendering and keyboard polling belong to the host
//! harness, which calls [`sim::tick`] once per frame with the elapsed
//! milliseconds and the raw input state.

pub mod error;
pub mod hud;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use hud::HudSnapshot;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Time is in milliseconds, distances in pixels, speeds in pixels/second.
pub mod consts {
    /// Play field defaults
    pub const PLAY_FIELD_WIDTH: f32 = 800.0;
    pub const PLAY_FIELD_HEIGHT: f32 = 600.0;
    pub const HUD_HEIGHT: f32 = 35.0;

    /// Ship sprite size (unrotated)
    pub const SHIP_WIDTH: f32 = 20.0;
    pub const SHIP_HEIGHT: f32 = 24.0;
    /// Collision rect sits 3 px below the sprite center (gun + 1 at the top, 1 at the bottom)
    pub const COLLISION_VERTICAL_OFFSET: f32 = 3.0;
    pub const COLLISION_HEIGHT_TRIM: f32 = 4.0;
    /// Thrust (pixels/s gained per ms = 250 pixels/s²)
    pub const ACCELERATION: f32 = 0.250;
    /// Rotation rate (degrees/ms = 180 degrees/s)
    pub const ROTATION_RATE: f32 = 0.180;
    /// Holding fire longer than this switches to automatic fire
    pub const AUTOMATIC_FIRE_THRESHOLD: f32 = 1000.0;
    /// Automatic fire period (2 bullets/s)
    pub const AUTOMATIC_FIRE_PERIOD: f32 = 500.0;

    /// Bullet defaults
    pub const BULLET_DIAMETER: f32 = 2.0;
    pub const BULLET_SPEED: f32 = 250.0;

    /// Asteroid spawn ranges
    pub const MIN_DIAMETER: f32 = 5.0;
    pub const MAX_DIAMETER: f32 = 75.0;
    pub const MIN_SPEED: f32 = 50.0;
    pub const MAX_SPEED: f32 = 250.0;
    /// Smallest fragment: a 10 px diameter circle
    pub const MIN_AREA: f32 = 25.0 * std::f32::consts::PI;
    /// Fragmentation stops once the remaining area is at or below this multiple of MIN_AREA
    pub const FRAGMENT_AREA_FLOOR: f32 = 1.25;
    /// Each fragment draw consumes at most this share of what remains
    pub const FRAGMENT_SHARE: f32 = 0.8;

    /// Level progression
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 99;
    pub const MIN_GENERATION_PERIOD: f32 = 5000.0;
    pub const MAX_GENERATION_PERIOD: f32 = 60000.0;
}

/// Wrap an angle in degrees to (-180, 180]
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Unit vector for a heading in degrees (0 = up, clockwise positive)
///
/// The result uses the +up convention: `x` is horizontal, `y` is vertical.
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

/// Heading in degrees of a +up vector (0 = up, clockwise positive)
///
/// A zero vector has heading 0.
#[inline]
pub fn vector_heading(v: Vec2) -> f32 {
    if v.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    v.x.atan2(v.y).to_degrees()
}
