//! Per-tick snapshot for the renderer
//!
//! The renderer never touches `Session` directly. It gets a flat,
//! serializable view of exactly what each phase needs to draw.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{CountdownDisplay, PerPlayer, PlayerId, Session, SessionPhase, Winner};

/// Per-player HUD values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub ready: bool,
    /// Lobby progress bar fill, 0-1
    pub progress: f32,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleView {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    pub life: f32,
    pub color: [u8; 3],
}

/// Fingertip cursor for one hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorView {
    pub player: PlayerId,
    pub pos: Vec2,
    pub color: [u8; 3],
}

/// Everything the renderer draws this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub screen: Vec2,
    pub players: PerPlayer<PlayerView>,
    /// COUNTDOWN only
    pub countdown: Option<CountdownDisplay>,
    pub bubbles: Vec<BubbleView>,
    pub particles: Vec<ParticleView>,
    pub remaining: u32,
    /// PLAYING only
    pub cursors: Vec<CursorView>,
    /// GAME_OVER only
    pub winner: Option<Winner>,
    pub paused: bool,
}

impl Snapshot {
    /// Capture the session as of `now`
    pub fn capture(session: &Session, now: f64) -> Self {
        let players = PerPlayer::new(PlayerId::One, PlayerId::Two).map(|_, player| PlayerView {
            player,
            ready: session.readiness.is_ready(player),
            progress: session.readiness.progress(player),
            score: session.score(player),
        });

        // Lobby and countdown draw over the camera feed only
        let in_round = matches!(
            session.phase,
            SessionPhase::Playing | SessionPhase::GameOver
        );
        let (bubbles, particles) = if in_round {
            (
                session
                    .field
                    .bubbles()
                    .iter()
                    .map(|b| BubbleView {
                        pos: b.pos,
                        radius: b.radius,
                        alpha: b.alpha,
                    })
                    .collect(),
                session
                    .field
                    .particles()
                    .iter()
                    .map(|p| ParticleView {
                        pos: p.pos,
                        radius: p.radius,
                        life: p.life,
                        color: p.color,
                    })
                    .collect(),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let cursors = if session.phase == SessionPhase::Playing {
            session
                .cursors
                .iter()
                .map(|c| CursorView {
                    player: c.player,
                    pos: c.hand.primary,
                    color: c.player.color(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            phase: session.phase,
            screen: session.field.size(),
            players,
            countdown: session.countdown_display(now),
            bubbles,
            particles,
            remaining: session.field.remaining(),
            cursors,
            winner: session.winner(),
            paused: session.paused,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::consts::*;
    use crate::perception::HandDetection;
    use crate::sim::{Bubble, TickInput, tick};

    #[test]
    fn test_lobby_snapshot() {
        let mut session = Session::new(&Settings::default());
        for i in 0..10 {
            let input = TickInput {
                now: i as f64 / 30.0,
                faces: vec![0.1],
                ..Default::default()
            };
            tick(&mut session, &input);
        }
        let snap = Snapshot::capture(&session, 10.0 / 30.0);
        assert_eq!(snap.phase, SessionPhase::Lobby);
        assert!((snap.players[PlayerId::One].progress - 10.0 / READY_HOLD_FRAMES as f32).abs() < 1e-6);
        assert_eq!(snap.players[PlayerId::Two].progress, 0.0);
        assert!(!snap.players[PlayerId::One].ready);
        assert!(snap.countdown.is_none());
        assert!(snap.bubbles.is_empty());
        assert!(snap.winner.is_none());
    }

    #[test]
    fn test_playing_snapshot_has_cursors_and_bubbles() {
        let mut session = Session::new(&Settings::default());
        let mut now = 0.0;
        while session.phase != SessionPhase::Playing {
            now += 1.0 / 30.0;
            let input = TickInput {
                now,
                faces: vec![0.2, 0.8],
                ..Default::default()
            };
            tick(&mut session, &input);
        }
        session.field.insert(Bubble::at(Vec2::new(50.0, 50.0), 22.0));

        now += 1.0 / 30.0;
        let input = TickInput {
            now,
            hands: vec![HandDetection::at(Vec2::new(1100.0, 700.0), 1280.0)],
            ..Default::default()
        };
        tick(&mut session, &input);

        let snap = Snapshot::capture(&session, now);
        assert_eq!(snap.phase, SessionPhase::Playing);
        assert_eq!(snap.cursors.len(), 1);
        assert_eq!(snap.cursors[0].player, PlayerId::Two);
        assert_eq!(snap.cursors[0].color, PlayerId::Two.color());
        assert_eq!(snap.bubbles.len(), session.field.bubbles().len());
        assert_eq!(snap.remaining, session.field.remaining());
        assert!(snap.countdown.is_none());

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"phase\": \"Playing\""));
    }
}
