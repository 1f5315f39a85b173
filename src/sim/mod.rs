//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Variable frame time in milliseconds, supplied by the host
//! - Seeded RNG only (one generator, owned by the asteroid director)
//! - Entities iterate in spawn order
//! - Components own their collections; the collision engine goes through
//!   their removal/fragmentation operations

pub mod asteroid;
pub mod body;
pub mod bullet;
pub mod collision;
pub mod director;
pub mod draw;
pub mod input;
pub mod rect;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use body::KinematicBody;
pub use bullet::Bullet;
pub use collision::{CollisionEngine, circle_rect_collision};
pub use director::{AsteroidDirector, generation_period};
pub use draw::{DrawGroup, Sprite, SpriteKind};
pub use input::{AxisControl, FrameInput, HeldKeys, Key, KeyAction, KeyEvent};
pub use rect::Rect;
pub use ship::Ship;
pub use state::{GAME_OVER_MESSAGE, GamePhase, GameState, PLAYING_MESSAGE, READY_MESSAGE};
pub use tick::tick;
