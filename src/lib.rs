//! Bubble Pop - two-player hand-tracking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (readiness, assignment, bubbles, state machine)
//! - `perception`: Detection input contract and landmark conversion helpers
//! - `view`: Per-tick snapshot handed to the renderer
//! - `settings`: Process-level configuration
//! - `demo`: Scripted perception source for headless runs

pub mod demo;
pub mod perception;
pub mod settings;
pub mod sim;
pub mod view;

pub use perception::{HandDetection, PerceptionSource};
pub use settings::{Settings, SpawnMode};
pub use sim::{PlayerId, Session, SessionPhase, TickInput, Winner, tick};
pub use view::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Consecutive face frames before a player counts as ready
    pub const READY_HOLD_FRAMES: u32 = 40;
    /// Consecutive missed frames before readiness starts to decay
    pub const UNREADY_HOLD_FRAMES: u32 = 25;
    /// Headroom above the ready threshold so brief drops don't flip `ready`
    pub const READY_HOLD_CAP: u32 = READY_HOLD_FRAMES + 5;

    /// Countdown 3-2-1, then GO
    pub const COUNTDOWN_SECS: u32 = 3;
    /// How long "GO" stays up before play starts
    pub const GO_HOLD_SECS: f64 = 0.8;

    /// Bubbles per round
    pub const TOTAL_BUBBLES: u32 = 40;
    pub const POINTS_PER_POP: u32 = 10;

    /// Bubble defaults
    pub const BUBBLE_MIN_RADIUS: u32 = 22;
    pub const BUBBLE_MAX_RADIUS: u32 = 52;
    /// Upward speed range (pixels/tick)
    pub const BUBBLE_SPEED_MIN: f32 = 0.6;
    pub const BUBBLE_SPEED_MAX: f32 = 2.2;
    /// Max horizontal drift (pixels/tick, either direction)
    pub const BUBBLE_DRIFT_MAX: f32 = 0.6;
    pub const BUBBLE_ALPHA_MIN: u8 = 160;
    pub const BUBBLE_ALPHA_MAX: u8 = 220;
    pub const WOBBLE_SPEED_MIN: f32 = 0.02;
    pub const WOBBLE_SPEED_MAX: f32 = 0.06;
    /// Horizontal wobble amplitude (pixels/tick)
    pub const WOBBLE_AMPLITUDE: f32 = 0.4;
    /// Batch spawn band, as fractions of screen height
    pub const SPAWN_BAND_TOP: f32 = 0.05;
    pub const SPAWN_BAND_BOTTOM: f32 = 0.90;

    /// Drip mode: ticks between spawns and cap on bubbles in flight
    pub const DRIP_INTERVAL_TICKS: u32 = 8;
    pub const DRIP_MAX_LIVE: usize = 12;

    /// Pop particles
    pub const POP_PARTICLE_COUNT: usize = 10;
    pub const PARTICLE_SPEED_MIN: f32 = 2.0;
    pub const PARTICLE_SPEED_MAX: f32 = 7.0;
    pub const PARTICLE_MIN_RADIUS: u32 = 3;
    pub const PARTICLE_MAX_RADIUS: u32 = 7;
    /// Added to particle vy every tick
    pub const PARTICLE_GRAVITY: f32 = 0.18;
    pub const PARTICLE_LIFE_DECAY: f32 = 0.055;

    /// Default tick rate of the outer loop
    pub const TARGET_FPS: u32 = 30;
}
