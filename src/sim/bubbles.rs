//! Bubbles, pop particles, and the per-round field that owns them
//!
//! Units are pixels and ticks; the outer loop runs at a fixed frame rate so
//! physics is not scaled by dt.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::assign::AssignedHand;
use super::collision::{exited_top, fingertip_in_bubble, side_wall_collision};
use super::player::{PerPlayer, PlayerId, Winner};
use crate::consts::*;
use crate::settings::SpawnMode;

/// A rising bubble
#[derive(Debug, Clone, Serialize)]
pub struct Bubble {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
    /// Render alpha (0-255), visual only
    pub alpha: u8,
    pub wobble_phase: f32,
    pub wobble_speed: f32,
    pub alive: bool,
}

impl Bubble {
    /// Stationary bubble with no wobble (scripted rounds and tests)
    pub fn at(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            alpha: BUBBLE_ALPHA_MAX,
            wobble_phase: 0.0,
            wobble_speed: 0.0,
            alive: true,
        }
    }

    /// Random bubble for a `width` x `height` screen with center y = `y`
    pub fn random(rng: &mut impl Rng, width: f32, y: f32) -> Self {
        let radius = rng.random_range(BUBBLE_MIN_RADIUS..=BUBBLE_MAX_RADIUS) as f32;
        // Keep the whole bubble on screen; degenerate screens pin it to the left edge
        let x = if width > 2.0 * radius {
            rng.random_range(radius..=width - radius)
        } else {
            radius
        };
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(
                rng.random_range(-BUBBLE_DRIFT_MAX..=BUBBLE_DRIFT_MAX),
                -rng.random_range(BUBBLE_SPEED_MIN..=BUBBLE_SPEED_MAX),
            ),
            radius,
            alpha: rng.random_range(BUBBLE_ALPHA_MIN..=BUBBLE_ALPHA_MAX),
            wobble_phase: rng.random_range(0.0..TAU),
            wobble_speed: rng.random_range(WOBBLE_SPEED_MIN..=WOBBLE_SPEED_MAX),
            alive: true,
        }
    }

    /// Advance one tick: drift, wobble, side walls, top exit
    pub fn update(&mut self, width: f32) {
        self.wobble_phase += self.wobble_speed;
        self.pos.x += self.vel.x + self.wobble_phase.sin() * WOBBLE_AMPLITUDE;
        self.pos.y += self.vel.y;

        if let Some(hit) = side_wall_collision(self.pos, self.vel, self.radius, width) {
            self.pos = hit.pos;
            self.vel = hit.vel;
        }

        if exited_top(self.pos, self.radius) {
            self.alive = false;
        }
    }

    /// Only the primary (index) fingertip pops
    pub fn check_pop(&self, tip: Vec2) -> bool {
        fingertip_in_bubble(tip, self.pos, self.radius)
    }
}

/// Burst fragment left behind by a pop
#[derive(Debug, Clone, Serialize)]
pub struct PopParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    /// Popping player's color (RGB)
    pub color: [u8; 3],
    pub radius: f32,
}

impl PopParticle {
    pub fn random(rng: &mut impl Rng, pos: Vec2, color: [u8; 3]) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(PARTICLE_SPEED_MIN..=PARTICLE_SPEED_MAX);
        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            life: 1.0,
            color,
            radius: rng.random_range(PARTICLE_MIN_RADIUS..=PARTICLE_MAX_RADIUS) as f32,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life -= PARTICLE_LIFE_DECAY;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// A single pop, reported back from `BubbleField::tick`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pop {
    pub player: PlayerId,
    pub pos: Vec2,
    pub points: u32,
}

/// Everything that lives for one round: bubbles, particles, scores
#[derive(Debug, Clone)]
pub struct BubbleField {
    width: f32,
    height: f32,
    mode: SpawnMode,
    rng: Pcg32,
    bubbles: Vec<Bubble>,
    particles: Vec<PopParticle>,
    scores: PerPlayer<u32>,
    /// Spawned-but-unresolved plus still-queued bubbles
    remaining: u32,
    /// Drip mode: bubbles not yet released
    queued: VecDeque<Bubble>,
    drip_cooldown: u32,
}

impl BubbleField {
    pub fn new(width: f32, height: f32, mode: SpawnMode, seed: u64) -> Self {
        Self {
            width,
            height,
            mode,
            rng: Pcg32::seed_from_u64(seed),
            bubbles: Vec::new(),
            particles: Vec::new(),
            scores: PerPlayer::default(),
            remaining: 0,
            queued: VecDeque::new(),
            drip_cooldown: 0,
        }
    }

    /// Start a round with `count` bubbles.
    ///
    /// Batch mode fills the screen at once. Drip mode queues them to rise
    /// from below the bottom edge.
    pub fn spawn_round(&mut self, count: u32) {
        self.bubbles.clear();
        self.particles.clear();
        self.queued.clear();
        self.scores = PerPlayer::default();
        self.drip_cooldown = 0;

        match self.mode {
            SpawnMode::Batch => {
                let top = self.height * SPAWN_BAND_TOP;
                let bottom = (self.height * SPAWN_BAND_BOTTOM).max(top);
                for _ in 0..count {
                    let y = self.rng.random_range(top..=bottom).floor();
                    let bubble = Bubble::random(&mut self.rng, self.width, y);
                    self.bubbles.push(bubble);
                }
            }
            SpawnMode::Drip => {
                for _ in 0..count {
                    let mut bubble = Bubble::random(&mut self.rng, self.width, 0.0);
                    bubble.pos.y = self.height + bubble.radius;
                    self.queued.push_back(bubble);
                }
            }
        }

        self.remaining = count;
        log::info!(
            "Round spawned: {} bubbles ({:?}) on {}x{}",
            count,
            self.mode,
            self.width,
            self.height
        );
    }

    /// Add one bubble to the live set; it counts toward `remaining`
    pub fn insert(&mut self, bubble: Bubble) {
        self.bubbles.push(bubble);
        self.remaining += 1;
    }

    /// Advance one tick against this frame's hands. Returns the pops.
    pub fn tick(&mut self, hands: &[AssignedHand]) -> Vec<Pop> {
        if self.mode == SpawnMode::Drip {
            self.drip();
        }

        for bubble in &mut self.bubbles {
            bubble.update(self.width);
        }

        // Hand list order decides which player gets a bubble both are touching
        let mut pops = Vec::new();
        for bubble in self.bubbles.iter_mut().filter(|b| b.alive) {
            let Some(hit) = hands.iter().find(|h| bubble.check_pop(h.hand.primary)) else {
                continue;
            };
            bubble.alive = false;
            self.scores[hit.player] += POINTS_PER_POP;
            let color = hit.player.color();
            for _ in 0..POP_PARTICLE_COUNT {
                self.particles
                    .push(PopParticle::random(&mut self.rng, bubble.pos, color));
            }
            log::debug!(
                "P{} popped bubble at ({:.0}, {:.0})",
                hit.player.number(),
                bubble.pos.x,
                bubble.pos.y
            );
            pops.push(Pop {
                player: hit.player,
                pos: bubble.pos,
                points: POINTS_PER_POP,
            });
        }

        let dead = self.bubbles.iter().filter(|b| !b.alive).count() as u32;
        self.remaining = self.remaining.saturating_sub(dead);
        self.bubbles.retain(|b| b.alive);

        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(PopParticle::is_alive);

        pops
    }

    fn drip(&mut self) {
        self.drip_cooldown = self.drip_cooldown.saturating_sub(1);
        if self.drip_cooldown > 0 || self.bubbles.len() >= DRIP_MAX_LIVE {
            return;
        }
        if let Some(bubble) = self.queued.pop_front() {
            self.bubbles.push(bubble);
            self.drip_cooldown = DRIP_INTERVAL_TICKS;
        }
    }

    /// Every bubble resolved (popped or flown off) and none left in play
    pub fn is_finished(&self) -> bool {
        self.remaining == 0 && self.bubbles.is_empty() && self.queued.is_empty()
    }

    pub fn winner(&self) -> Winner {
        Winner::from_scores(&self.scores)
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn particles(&self) -> &[PopParticle] {
        &self.particles
    }

    pub fn scores(&self) -> PerPlayer<u32> {
        self.scores
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
