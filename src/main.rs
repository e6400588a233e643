//! Breakout entry point
//!
//! In the browser this wires the game to the `gameCanvas` element. Natively
//! there is no window: a few autopilot sessions are played headless and
//! their reports logged (`RUST_LOG=info` to see them).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    log::info!("Breakout starting...");
    if let Err(e) = breakout::platform::web::start("gameCanvas") {
        log::error!("Could not start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
const SESSIONS: u64 = 3;
/// Roughly half an hour of play at the default tick
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 200_000;
/// Autopilot aim error, in pixels either side of the ball
#[cfg(not(target_arch = "wasm32"))]
const AIM_SPREAD: f32 = 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout::platform::headless::{Autopilot, run_session};
    use breakout::renderer::RecordingSurface;
    use breakout::{Config, Game};

    env_logger::init();
    log::info!("Breakout (native, headless) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Seed: {}", seed);

    let mut game = Game::new(Config::load());
    let mut surface = RecordingSurface::new();

    for session in 0..SESSIONS {
        let mut autopilot = Autopilot::new(seed.wrapping_add(session), AIM_SPREAD);
        let report = run_session(&mut game, &mut autopilot, &mut surface, MAX_TICKS);
        log::info!(
            "Session {}: {:?} after {} ticks (level {}, {} lives, {} bricks, {} levels cleared)",
            session + 1,
            report.outcome,
            report.ticks,
            report.level,
            report.lives,
            report.score,
            report.levels_cleared
        );
    }
}
