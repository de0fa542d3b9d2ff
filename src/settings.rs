//! Process-level settings
//!
//! Gameplay tuning is compile-time (`crate::consts`). These are the knobs
//! that depend on the machine or the event: screen size, seed, round style.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BUBBLE_MAX_RADIUS, TARGET_FPS};

/// Smallest usable screen side: one full-size bubble must fit
pub const MIN_SCREEN_SIDE: u32 = 2 * BUBBLE_MAX_RADIUS;

/// How a round's bubbles enter play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnMode {
    /// Whole round placed across the screen at once
    #[default]
    Batch,
    /// Released one at a time from below the bottom edge
    Drip,
}

impl SpawnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnMode::Batch => "Batch",
            SpawnMode::Drip => "Drip",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "batch" => Some(SpawnMode::Batch),
            "drip" => Some(SpawnMode::Drip),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Camera/screen width in pixels
    pub screen_width: u32,
    /// Camera/screen height in pixels
    pub screen_height: u32,
    /// RNG seed for bubble layout and particles
    pub seed: u64,
    pub spawn_mode: SpawnMode,
    /// Optional cap on unpaused playing time (seconds)
    pub round_time_limit_secs: Option<f64>,
    /// Outer loop rate (ticks per second)
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            seed: 0x5EED,
            spawn_mode: SpawnMode::Batch,
            round_time_limit_secs: None,
            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Raise screen dimensions that are too small to hold a bubble
    pub fn sanitized(mut self) -> Self {
        if self.screen_width < MIN_SCREEN_SIDE || self.screen_height < MIN_SCREEN_SIDE {
            log::warn!(
                "Screen {}x{} too small, using at least {}px per side",
                self.screen_width,
                self.screen_height,
                MIN_SCREEN_SIDE
            );
            self.screen_width = self.screen_width.max(MIN_SCREEN_SIDE);
            self.screen_height = self.screen_height.max(MIN_SCREEN_SIDE);
        }
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Seconds per tick at the target rate
    pub fn tick_secs(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }
}
