//! Space Frenzy headless demo
//!
//! Runs the simulation without a window: an autopilot turns toward the
//! nearest asteroid and taps fire, and the HUD line is logged once a second.
//!
//! Usage: `space-frenzy [settings.json] [max_frames]` (`RUST_LOG=info` or
//! `debug` to see the log).

#[cfg(not(target_arch = "wasm32"))]
use space_frenzy::{
    Settings,
    sim::{FrameInput, GamePhase, GameState, HeldKeys, Key, KeyEvent, tick},
    vector_heading, wrap_degrees,
};

/// 60 Hz-ish frame time (ms)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: f32 = 16.0;

/// Turn toward the nearest active asteroid and fire in short taps
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &GameState, frame: u64) -> FrameInput {
    let mut input = FrameInput::default();

    if state.phase != GamePhase::Playing {
        input.events.push(KeyEvent::release(Key::Start));
        return input;
    }

    let ship = state.ship.position();
    let nearest = state
        .director
        .asteroids()
        .iter()
        .filter(|a| a.is_active())
        .min_by(|a, b| {
            let da = a.center().distance_squared(ship);
            let db = b.center().distance_squared(ship);
            da.total_cmp(&db)
        });

    if let Some(target) = nearest {
        let to_target = target.center() - ship;
        // Screen space is y-down, headings are +up
        let heading = vector_heading(glam::Vec2::new(to_target.x, -to_target.y));
        let error = wrap_degrees(heading - state.ship.rotation());
        input.held = HeldKeys {
            left: error < -5.0,
            right: error > 5.0,
            ..HeldKeys::default()
        };
        match frame % 20 {
            0 => input.events.push(KeyEvent::press(Key::Fire)),
            10 => input.events.push(KeyEvent::release(Key::Fire)),
            _ => {}
        }
    }
    input
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * 5);

    let mut state = GameState::new(settings);
    log::info!("Space Frenzy (headless) starting, seed {}", state.seed);

    for frame in 0..max_frames {
        let input = autopilot(&state, frame);
        tick(&mut state, &input, FRAME_MS);

        if frame % 60 == 0 {
            log::info!("{}", state.hud());
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let hud = state.hud();
    println!(
        "Reached level {} with {} asteroids destroyed ({:?})",
        hud.level, hud.asteroids_destroyed_total, state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation core is driven by a host harness on the web
}
