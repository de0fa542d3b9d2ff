//! Player identities and per-player storage
//!
//! The player set is closed at two, so per-player state lives in a fixed
//! array indexed by `PlayerId` rather than a map.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two player slots, assigned by screen half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Left half of the frame
    One,
    /// Right half of the frame
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// 1-based player number for display
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Cursor/particle color (RGB)
    pub fn color(self) -> [u8; 3] {
        match self {
            PlayerId::One => [100, 200, 255], // Blue
            PlayerId::Two => [255, 150, 100], // Orange
        }
    }
}

/// Exactly one value per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerPlayer<T>([T; 2]);

impl<T> PerPlayer<T> {
    pub fn new(one: T, two: T) -> Self {
        Self([one, two])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(self, mut f: impl FnMut(PlayerId, T) -> U) -> PerPlayer<U> {
        let [one, two] = self.0;
        PerPlayer([f(PlayerId::One, one), f(PlayerId::Two, two)])
    }
}

impl<T> Index<PlayerId> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.0[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PerPlayer<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.0[player.index()]
    }
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player(PlayerId),
    /// Equal scores
    Tie,
}

impl Winner {
    /// Strictly higher score wins
    pub fn from_scores(scores: &PerPlayer<u32>) -> Self {
        let (one, two) = (scores[PlayerId::One], scores[PlayerId::Two]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Winner::Player(PlayerId::One),
            std::cmp::Ordering::Less => Winner::Player(PlayerId::Two),
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_strictly_higher() {
        assert_eq!(
            Winner::from_scores(&PerPlayer::new(30, 20)),
            Winner::Player(PlayerId::One)
        );
        assert_eq!(
            Winner::from_scores(&PerPlayer::new(0, 10)),
            Winner::Player(PlayerId::Two)
        );
    }

    #[test]
    fn test_winner_tie() {
        assert_eq!(Winner::from_scores(&PerPlayer::new(20, 20)), Winner::Tie);
        assert_eq!(Winner::from_scores(&PerPlayer::new(0, 0)), Winner::Tie);
    }

    #[test]
    fn test_per_player_indexing() {
        let mut scores = PerPlayer::new(0u32, 0u32);
        scores[PlayerId::Two] += 10;
        assert_eq!(scores[PlayerId::One], 0);
        assert_eq!(scores[PlayerId::Two], 10);

        let doubled = scores.map(|_, s| s * 2);
        assert_eq!(doubled[PlayerId::Two], 20);
    }
}
