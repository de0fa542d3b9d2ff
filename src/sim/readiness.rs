//! Lobby readiness hysteresis
//!
//! Face detection flickers. A player becomes ready only after a sustained
//! run of detections, and readiness decays only after a sustained run of
//! misses, at half the rate it builds.

use serde::Serialize;

use super::player::{PerPlayer, PlayerId};
use crate::consts::*;

/// Debounce counters for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadinessCounter {
    /// Consecutive-ish detected frames, clamped to [0, READY_HOLD_CAP]
    pub hold: u32,
    /// Consecutive missed frames
    pub miss: u32,
    pub ready: bool,
}

impl ReadinessCounter {
    /// Feed one frame's detection flag
    pub fn observe(&mut self, detected: bool) {
        if detected {
            self.hold = (self.hold + 1).min(READY_HOLD_CAP);
            self.miss = 0;
        } else {
            self.miss = self.miss.saturating_add(1);
            if self.miss >= UNREADY_HOLD_FRAMES {
                self.hold = self.hold.saturating_sub(2);
            }
        }
        self.ready = self.hold >= READY_HOLD_FRAMES;
    }

    /// Fill fraction for the lobby progress bar
    pub fn progress(&self) -> f32 {
        (self.hold as f32 / READY_HOLD_FRAMES as f32).clamp(0.0, 1.0)
    }
}

/// Readiness for both players
#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    counters: PerPlayer<ReadinessCounter>,
}

impl ReadinessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of face presence
    pub fn update(&mut self, present: PerPlayer<bool>) {
        for (player, &detected) in present.iter() {
            let counter = &mut self.counters[player];
            let was_ready = counter.ready;
            counter.observe(detected);
            if counter.ready != was_ready {
                log::debug!(
                    "P{} {}",
                    player.number(),
                    if counter.ready { "ready" } else { "not ready" }
                );
            }
        }
    }

    pub fn counter(&self, player: PlayerId) -> &ReadinessCounter {
        &self.counters[player]
    }

    pub fn is_ready(&self, player: PlayerId) -> bool {
        self.counters[player].ready
    }

    pub fn progress(&self, player: PlayerId) -> f32 {
        self.counters[player].progress()
    }

    pub fn both_ready(&self) -> bool {
        PlayerId::ALL.into_iter().all(|p| self.is_ready(p))
    }

    pub fn reset(&mut self) {
        self.counters = PerPlayer::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ready_after_exact_hold() {
        let mut c = ReadinessCounter::default();
        for _ in 0..READY_HOLD_FRAMES - 1 {
            c.observe(true);
            assert!(!c.ready);
        }
        c.observe(true);
        assert!(c.ready);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn test_hold_is_capped() {
        let mut c = ReadinessCounter::default();
        for _ in 0..500 {
            c.observe(true);
        }
        assert_eq!(c.hold, READY_HOLD_CAP);
    }

    #[test]
    fn test_short_miss_streak_tolerated() {
        let mut c = ReadinessCounter::default();
        for _ in 0..READY_HOLD_FRAMES {
            c.observe(true);
        }
        for _ in 0..UNREADY_HOLD_FRAMES - 1 {
            c.observe(false);
        }
        assert!(c.ready);
        assert_eq!(c.hold, READY_HOLD_FRAMES);

        // One hit resets the miss streak
        c.observe(true);
        assert_eq!(c.miss, 0);
    }

    #[test]
    fn test_decay_after_miss_streak() {
        let mut c = ReadinessCounter::default();
        for _ in 0..100 {
            c.observe(true);
        }
        assert_eq!(c.hold, READY_HOLD_CAP);

        for _ in 0..UNREADY_HOLD_FRAMES - 1 {
            c.observe(false);
        }
        assert_eq!(c.hold, READY_HOLD_CAP);

        // Decay starts on the threshold miss and runs at 2 per tick
        let mut expected = READY_HOLD_CAP;
        while expected >= READY_HOLD_FRAMES {
            assert!(c.ready);
            c.observe(false);
            expected = expected.saturating_sub(2);
            assert_eq!(c.hold, expected);
        }
        assert!(!c.ready);
    }

    #[test]
    fn test_tracker_both_ready_and_reset() {
        let mut tracker = ReadinessTracker::new();
        for _ in 0..READY_HOLD_FRAMES {
            tracker.update(PerPlayer::new(true, false));
        }
        assert!(tracker.is_ready(PlayerId::One));
        assert!(!tracker.both_ready());
        assert_eq!(tracker.progress(PlayerId::Two), 0.0);

        for _ in 0..READY_HOLD_FRAMES {
            tracker.update(PerPlayer::new(true, true));
        }
        assert!(tracker.both_ready());

        tracker.reset();
        assert!(!tracker.is_ready(PlayerId::One));
        assert_eq!(tracker.counter(PlayerId::One).hold, 0);
    }

    proptest! {
        #[test]
        fn prop_counters_stay_bounded(frames in proptest::collection::vec(any::<bool>(), 0..400)) {
            let mut c = ReadinessCounter::default();
            for detected in frames {
                c.observe(detected);
                prop_assert!(c.hold <= READY_HOLD_CAP);
                prop_assert_eq!(c.ready, c.hold >= READY_HOLD_FRAMES);
                prop_assert!((0.0..=1.0).contains(&c.progress()));
            }
        }
    }
}
