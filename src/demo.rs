//! Autopilot perception for headless runs
//!
//! Stands in for the camera: two simulated players show their faces (with
//! the occasional detector dropout) and then chase the nearest bubble on
//! their own half of the screen.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::perception::{Detections, HandDetection, PerceptionSource};
use crate::sim::{PerPlayer, PlayerId, SessionPhase};
use crate::view::Snapshot;

/// Max fingertip travel per tick (pixels)
const HAND_SPEED: f32 = 24.0;
/// Chance a present face is missed in a given frame
const FACE_DROPOUT: f64 = 0.1;

/// Scripted two-player perception source
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    fingertips: PerPlayer<Option<Vec2>>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            fingertips: PerPlayer::default(),
        }
    }

    fn faces(&mut self) -> Vec<f32> {
        [0.25, 0.75]
            .into_iter()
            .filter(|_| !self.rng.random_bool(FACE_DROPOUT))
            .collect()
    }

    fn hands(&mut self, last: &Snapshot) -> Vec<HandDetection> {
        let half = last.screen.x / 2.0;
        let mut hands = Vec::with_capacity(2);

        for player in PlayerId::ALL {
            let (lo, hi) = match player {
                PlayerId::One => (0.0, half),
                PlayerId::Two => (half, last.screen.x),
            };
            let home = Vec2::new((lo + hi) / 2.0, last.screen.y * 0.5);
            let tip = self.fingertips[player].unwrap_or(home);

            // Nearest bubble on our side; idle at home when there is none
            let target = last
                .bubbles
                .iter()
                .filter(|b| b.pos.x >= lo && b.pos.x < hi && b.pos.y < last.screen.y)
                .map(|b| b.pos)
                .min_by(|a, b| a.distance(tip).total_cmp(&b.distance(tip)))
                .unwrap_or(home);

            let step = (target - tip).clamp_length_max(HAND_SPEED);
            // Stay on our own half so assignment never has to resolve a conflict
            let next = Vec2::new((tip.x + step.x).clamp(lo, (hi - 1.0).max(lo)), tip.y + step.y);
            self.fingertips[player] = Some(next);
            hands.push(HandDetection::at(next, last.screen.x));
        }
        hands
    }
}

impl PerceptionSource for Autopilot {
    fn poll(&mut self, last: &Snapshot) -> Detections {
        match last.phase {
            SessionPhase::Lobby | SessionPhase::Countdown => {
                self.fingertips = PerPlayer::default();
                Detections {
                    faces: self.faces(),
                    hands: Vec::new(),
                }
            }
            SessionPhase::Playing => Detections {
                faces: Vec::new(),
                hands: self.hands(last),
            },
            SessionPhase::GameOver => Detections::default(),
        }
    }
}
