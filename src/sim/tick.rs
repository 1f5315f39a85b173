//! Per-frame driver
//!
//! The host calls [`tick`] once per frame with the milliseconds elapsed since
//! the previous frame. Frame times vary; nothing here assumes a fixed step.

use super::input::{FrameInput, Key};
use super::state::{GamePhase, GameState};

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, dt_ms: f32) {
    let dt_ms = dt_ms.max(0.0);

    match state.phase {
        GamePhase::Ready => {
            if input.released(Key::Start) {
                state.set_phase(GamePhase::Playing);
            }
        }
        GamePhase::Playing => {
            state.ship.update(dt_ms, input);
            state.director.update(dt_ms);
            state.director.integrate(dt_ms);
            state.collisions.update(&mut state.ship, &mut state.director);

            if state.collisions.game_over() {
                state.set_phase(GamePhase::GameOver);
            }
        }
        GamePhase::GameOver => {
            if input.released(Key::Start) {
                state.restart();
            }
        }
    }
}
