//! Duel Pong entry point
//!
//! Headless native driver: loads settings, runs the field at the fixed tick
//! rate for one session and logs what happens. A windowing/render layer would
//! replace the session loop and feed real pointer events.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use duel_pong::consts::SIM_DT;
use duel_pong::sim::GameField;
use duel_pong::{FrameDriver, Settings};

fn main() {
    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);

    let mut field = match GameField::new(&settings, seed) {
        Ok(field) => field,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Field {}x{} with seed {}, running {} ticks",
        field.width,
        field.height,
        field.seed(),
        settings.session_ticks()
    );

    let mut driver = FrameDriver::new();
    let tick = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();

    while driver.total_ticks < settings.session_ticks() {
        std::thread::sleep(tick);
        let now = Instant::now();
        driver.advance(&mut field, (now - last).as_secs_f32());
        last = now;
    }

    let (p1, p2) = field.scores();
    match field.leader() {
        Some(side) => log::info!("Session over: {}-{}, {:?} side leads", p1, p2, side),
        None => log::info!("Session over: {}-{}, level", p1, p2),
    }
}

/// Seed from the wall clock when settings don't pin one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
