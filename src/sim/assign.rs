//! Detection to player-slot assignment
//!
//! Left half of the frame is player 1, right half is player 2. Hands are
//! assigned independently first, then a same-slot pair is split by
//! fingertip x so each player gets at most one hand.

use serde::Serialize;

use super::player::{PerPlayer, PlayerId};
use crate::perception::HandDetection;

/// A hand with its resolved player slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssignedHand {
    pub player: PlayerId,
    pub hand: HandDetection,
}

/// Slot for a normalized (0..1) horizontal coordinate
#[inline]
pub fn slot_for(normalized_x: f32) -> PlayerId {
    if normalized_x < 0.5 {
        PlayerId::One
    } else {
        PlayerId::Two
    }
}

/// Which players have at least one face this frame
pub fn faces_present(faces: &[f32]) -> PerPlayer<bool> {
    let mut present = PerPlayer::new(false, false);
    for &x in faces {
        present[slot_for(x)] = true;
    }
    present
}

/// Assign every hand by its own position, then resolve slot conflicts
pub fn assign_hands(hands: &[HandDetection]) -> Vec<AssignedHand> {
    let mut assigned: Vec<AssignedHand> = hands
        .iter()
        .map(|&hand| AssignedHand {
            player: slot_for(hand.normalized_x),
            hand,
        })
        .collect();
    resolve_conflicts(&mut assigned);
    assigned
}

/// Split a pair of hands that landed on the same slot.
///
/// Both on slot 1: the one further right moves to slot 2. Both on slot 2:
/// the one further left moves to slot 1. Order of the list is preserved.
/// Equal x falls back to list order (stable sort). Both slots are
/// partitioned before anything moves, so one split never feeds the other.
pub fn resolve_conflicts(hands: &mut [AssignedHand]) {
    if hands.len() < 2 {
        return;
    }

    let on = |slot: PlayerId| -> Vec<usize> {
        (0..hands.len()).filter(|&i| hands[i].player == slot).collect()
    };
    let partitions = [
        (PlayerId::One, PlayerId::Two, on(PlayerId::One)),
        (PlayerId::Two, PlayerId::One, on(PlayerId::Two)),
    ];

    for (slot, moved_to, mut on_slot) in partitions {
        if on_slot.len() != 2 {
            continue;
        }

        on_slot.sort_by(|&a, &b| hands[a].hand.primary.x.total_cmp(&hands[b].hand.primary.x));
        let moved = match slot {
            PlayerId::One => on_slot[1],
            PlayerId::Two => on_slot[0],
        };
        log::trace!(
            "hand conflict on P{}: moving hand at x={} to P{}",
            slot.number(),
            hands[moved].hand.primary.x,
            moved_to.number()
        );
        hands[moved].player = moved_to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn hand(px: f32, normalized_x: f32) -> HandDetection {
        HandDetection {
            primary: Vec2::new(px, 300.0),
            auxiliary: [Vec2::ZERO; 4],
            normalized_x,
        }
    }

    #[test]
    fn test_slot_for_halves() {
        assert_eq!(slot_for(0.0), PlayerId::One);
        assert_eq!(slot_for(0.4999), PlayerId::One);
        assert_eq!(slot_for(0.5), PlayerId::Two);
        assert_eq!(slot_for(1.0), PlayerId::Two);
    }

    #[test]
    fn test_faces_present() {
        assert_eq!(faces_present(&[]), PerPlayer::new(false, false));
        assert_eq!(faces_present(&[0.1, 0.3]), PerPlayer::new(true, false));
        assert_eq!(faces_present(&[0.7, 0.2]), PerPlayer::new(true, true));
    }

    #[test]
    fn test_three_hands_split_does_not_cascade() {
        // Two on slot 1, one on slot 2: only the slot 1 pair is split
        let hands = [hand(100.0, 0.1), hand(300.0, 0.2), hand(1000.0, 0.8)];
        let assigned = assign_hands(&hands);
        let slots: Vec<PlayerId> = assigned.iter().map(|h| h.player).collect();
        assert_eq!(slots, [PlayerId::One, PlayerId::Two, PlayerId::Two]);
    }

    #[test]
    fn test_three_hands_on_slot_two() {
        let hands = [hand(200.0, 0.1), hand(900.0, 0.7), hand(700.0, 0.6)];
        let assigned = assign_hands(&hands);
        let slots: Vec<PlayerId> = assigned.iter().map(|h| h.player).collect();
        assert_eq!(slots, [PlayerId::One, PlayerId::Two, PlayerId::One]);
    }

    #[test]
    fn test_both_on_slot_one() {
        // Both normalized at 0.2, pixels 500 and 300 (listed right-first)
        let hands = [hand(500.0, 0.2), hand(300.0, 0.2)];
        let assigned = assign_hands(&hands);
        assert_eq!(assigned[0].player, PlayerId::Two);
        assert_eq!(assigned[1].player, PlayerId::One);
        assert_eq!(assigned[1].hand.primary.x, 300.0);
    }

    #[test]
    fn test_both_on_slot_two() {
        let hands = [hand(900.0, 0.8), hand(700.0, 0.6)];
        let assigned = assign_hands(&hands);
        assert_eq!(assigned[0].player, PlayerId::Two);
        assert_eq!(assigned[1].player, PlayerId::One);
    }

    #[test]
    fn test_one_per_slot_unchanged() {
        let hands = [hand(1000.0, 0.8), hand(200.0, 0.15)];
        let assigned = assign_hands(&hands);
        assert_eq!(assigned[0].player, PlayerId::Two);
        assert_eq!(assigned[1].player, PlayerId::One);
    }

    #[test]
    fn test_single_hand_passes_through() {
        let assigned = assign_hands(&[hand(1000.0, 0.8)]);
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].player, PlayerId::Two);
        assert!(assign_hands(&[]).is_empty());
    }

    #[test]
    fn test_equal_x_uses_list_order() {
        let hands = [hand(400.0, 0.3), hand(400.0, 0.3)];
        let assigned = assign_hands(&hands);
        assert_eq!(assigned[0].player, PlayerId::One);
        assert_eq!(assigned[1].player, PlayerId::Two);
    }

    proptest! {
        #[test]
        fn prop_two_hands_one_per_slot(
            a in 0.0f32..1280.0,
            b in 0.0f32..1280.0,
            na in 0.0f32..1.0,
            nb in 0.0f32..1.0,
        ) {
            prop_assume!(a != b);
            let assigned = assign_hands(&[hand(a, na), hand(b, nb)]);
            prop_assert_ne!(assigned[0].player, assigned[1].player);

            // A resolved conflict always gives slot 1 to the smaller x
            if slot_for(na) == slot_for(nb) {
                let left = if a < b { &assigned[0] } else { &assigned[1] };
                prop_assert_eq!(left.player, PlayerId::One);
            }
        }
    }
}
