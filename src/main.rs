//! Bubble Pop entry point
//!
//! Runs a headless session against the autopilot perception source on a
//! simulated clock and prints the final snapshot as JSON.
//!
//! Usage: `bubble-pop [settings.json] [batch|drip]`

use bubble_pop::demo::Autopilot;
use bubble_pop::sim::{PhaseChange, Session, SessionPhase, TickInput, tick};
use bubble_pop::{PerceptionSource, Settings, Snapshot, SpawnMode};

/// Give up if a round somehow never ends (10 minutes at 30 Hz)
const MAX_TICKS: u64 = 30 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Bubble Pop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Some(mode) = args.next() {
        match SpawnMode::from_str(&mode) {
            Some(mode) => settings.spawn_mode = mode,
            None => log::warn!("Unknown spawn mode {:?}, keeping {}", mode, settings.spawn_mode.as_str()),
        }
    }

    let mut session = Session::new(&settings);
    let mut pilot = Autopilot::new(settings.seed ^ 0xA5A5);
    let dt = settings.tick_secs();
    let mut now = 0.0;

    while session.phase != SessionPhase::GameOver && session.time_ticks < MAX_TICKS {
        let snapshot = Snapshot::capture(&session, now);
        let detections = pilot.poll(&snapshot);
        let input = TickInput {
            now,
            faces: detections.faces,
            hands: detections.hands,
            ..Default::default()
        };

        if let Some(PhaseChange { to: SessionPhase::Playing, .. }) = tick(&mut session, &input) {
            log::info!("Round started at t={:.2}s", now);
        }
        now += dt;
    }

    if session.phase != SessionPhase::GameOver {
        log::warn!("Stopped after {} ticks without finishing the round", session.time_ticks);
    }

    match Snapshot::capture(&session, now).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
