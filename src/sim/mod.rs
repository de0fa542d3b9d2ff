//! Deterministic session simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Perception arrives already decoded in `TickInput`
//! - Seeded RNG only
//! - Wall-clock time only via `TickInput::now`
//! - No rendering or platform dependencies

pub mod assign;
pub mod bubbles;
pub mod collision;
pub mod player;
pub mod readiness;
pub mod state;
pub mod tick;

pub use assign::{AssignedHand, assign_hands, resolve_conflicts, slot_for};
pub use bubbles::{Bubble, BubbleField, Pop, PopParticle};
pub use collision::fingertip_in_bubble;
pub use player::{PerPlayer, PlayerId, Winner};
pub use readiness::{ReadinessCounter, ReadinessTracker};
pub use state::{CountdownDisplay, Session, SessionPhase};
pub use tick::{PhaseChange, TickInput, tick};
