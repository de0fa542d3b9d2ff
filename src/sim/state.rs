//! Session state
//!
//! Everything for one game session: the current phase, lobby readiness,
//! the current round's bubble field, and the session RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::assign::AssignedHand;
use super::bubbles::BubbleField;
use super::player::{PlayerId, Winner};
use super::readiness::ReadinessTracker;
use crate::consts::*;
use crate::settings::{Settings, SpawnMode};

/// Top-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for both faces to hold steady
    Lobby,
    /// 3-2-1-GO, wall-clock driven
    Countdown,
    /// Bubbles in play
    Playing,
    /// Round over, waiting for restart
    GameOver,
}

/// What the countdown overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownDisplay {
    Number(u32),
    Go,
}

impl CountdownDisplay {
    /// Display for `elapsed` seconds into the countdown
    pub fn at(elapsed: f64) -> Self {
        let shown = COUNTDOWN_SECS as i64 - elapsed.max(0.0).floor() as i64;
        if shown > 0 {
            CountdownDisplay::Number(shown as u32)
        } else {
            CountdownDisplay::Go
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    /// Current phase
    pub phase: SessionPhase,
    /// Lobby face hysteresis
    pub readiness: ReadinessTracker,
    /// Current (or last finished) round
    pub field: BubbleField,
    /// Hands assigned this tick (PLAYING only)
    pub cursors: Vec<AssignedHand>,
    /// Playing is frozen
    pub paused: bool,
    pub(crate) countdown_started_at: f64,
    /// Unpaused seconds spent in PLAYING this round
    pub(crate) play_elapsed: f64,
    /// `now` of the previous tick
    pub(crate) last_now: Option<f64>,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) spawn_mode: SpawnMode,
    pub(crate) round_time_limit: Option<f64>,
    pub(crate) rng: Pcg32,
    /// Ticks processed
    pub time_ticks: u64,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        let width = settings.screen_width as f32;
        let height = settings.screen_height as f32;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let field = BubbleField::new(width, height, settings.spawn_mode, rng.random());
        Self {
            phase: SessionPhase::Lobby,
            readiness: ReadinessTracker::new(),
            field,
            cursors: Vec::new(),
            paused: false,
            countdown_started_at: 0.0,
            play_elapsed: 0.0,
            last_now: None,
            width,
            height,
            spawn_mode: settings.spawn_mode,
            round_time_limit: settings.round_time_limit_secs,
            rng,
            time_ticks: 0,
        }
    }

    /// Fresh, unspawned field for the next round
    pub(crate) fn new_field(&mut self) -> BubbleField {
        BubbleField::new(self.width, self.height, self.spawn_mode, self.rng.random())
    }

    /// Back to the lobby with readiness and scores cleared
    pub fn reset_to_lobby(&mut self) {
        self.phase = SessionPhase::Lobby;
        self.readiness.reset();
        self.field = self.new_field();
        self.cursors.clear();
        self.paused = false;
        self.play_elapsed = 0.0;
    }

    /// Countdown overlay value, if counting down
    pub fn countdown_display(&self, now: f64) -> Option<CountdownDisplay> {
        (self.phase == SessionPhase::Countdown)
            .then(|| CountdownDisplay::at(now - self.countdown_started_at))
    }

    /// Round result, once the round is over
    pub fn winner(&self) -> Option<Winner> {
        (self.phase == SessionPhase::GameOver).then(|| self.field.winner())
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.field.score(player)
    }

    /// Seconds of unpaused play this round
    pub fn play_elapsed(&self) -> f64 {
        self.play_elapsed
    }
}
