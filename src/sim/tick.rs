//! Per-frame session tick
//!
//! One call per rendered frame. Perception for the frame is already in the
//! input; nothing here blocks.

use super::assign::{assign_hands, faces_present};
use super::player::PlayerId;
use super::state::{Session, SessionPhase};
use crate::consts::*;
use crate::perception::HandDetection;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Monotonic wall clock, seconds
    pub now: f64,
    /// Normalized face centers this frame
    pub faces: Vec<f32>,
    /// Hands this frame, before slot assignment
    pub hands: Vec<HandDetection>,
    /// Back to the lobby (honoured in GAME_OVER only)
    pub restart: bool,
    /// Pause toggle (honoured in PLAYING only)
    pub toggle_pause: bool,
}

/// Phase transition made by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: SessionPhase,
    pub to: SessionPhase,
}

/// Advance the session by one frame. Returns the transition, if any.
pub fn tick(session: &mut Session, input: &TickInput) -> Option<PhaseChange> {
    let from = session.phase;
    let dt = session
        .last_now
        .map(|last| (input.now - last).max(0.0))
        .unwrap_or(0.0);
    session.last_now = Some(input.now);
    session.time_ticks += 1;

    match session.phase {
        SessionPhase::Lobby => {
            session.readiness.update(faces_present(&input.faces));

            if session.readiness.both_ready() {
                session.phase = SessionPhase::Countdown;
                session.countdown_started_at = input.now;
                session.field = session.new_field();
            }
        }

        SessionPhase::Countdown => {
            let elapsed = input.now - session.countdown_started_at;
            if elapsed >= COUNTDOWN_SECS as f64 + GO_HOLD_SECS {
                session.phase = SessionPhase::Playing;
                session.play_elapsed = 0.0;
                session.paused = false;
                session.field.spawn_round(TOTAL_BUBBLES);
            }
        }

        SessionPhase::Playing => {
            if input.toggle_pause {
                session.paused = !session.paused;
                log::info!("{}", if session.paused { "Paused" } else { "Resumed" });
            }

            session.cursors = assign_hands(&input.hands);

            if !session.paused {
                session.play_elapsed += dt;
                session.field.tick(&session.cursors);

                let out_of_time = session
                    .round_time_limit
                    .is_some_and(|limit| session.play_elapsed >= limit);
                if session.field.is_finished() || out_of_time {
                    if out_of_time {
                        log::info!("Round time limit reached");
                    }
                    session.phase = SessionPhase::GameOver;
                    session.cursors.clear();
                }
            }
        }

        SessionPhase::GameOver => {
            if input.restart {
                session.reset_to_lobby();
            }
        }
    }

    let to = session.phase;
    if from == to {
        return None;
    }

    match to {
        SessionPhase::GameOver => log::info!(
            "{:?} -> {:?}: P1 {} / P2 {}, {:?}",
            from,
            to,
            session.field.score(PlayerId::One),
            session.field.score(PlayerId::Two),
            session.field.winner()
        ),
        _ => log::info!("{:?} -> {:?}", from, to),
    }
    Some(PhaseChange { from, to })
}
