//! Collision helpers for bubbles
//!
//! Bubbles are circles in screen space (y down). Fingertips are points.

use glam::Vec2;

/// True if the fingertip is strictly inside the bubble
#[inline]
pub fn fingertip_in_bubble(tip: Vec2, center: Vec2, radius: f32) -> bool {
    tip.distance(center) < radius
}

/// Result of a side-wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    /// Position clamped back onto the screen
    pub pos: Vec2,
    /// Velocity after reflection
    pub vel: Vec2,
}

/// Reflect velocity off a surface with the given unit normal
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check a circle against the left/right screen edges.
///
/// If any part of it sticks out, horizontal velocity flips and x is clamped
/// to `[radius, width - radius]`.
pub fn side_wall_collision(pos: Vec2, vel: Vec2, radius: f32, width: f32) -> Option<WallHit> {
    let normal = if pos.x - radius < 0.0 {
        Vec2::X
    } else if pos.x + radius > width {
        Vec2::NEG_X
    } else {
        return None;
    };

    // Flips vx even if the bubble is already heading back inward
    let vel = reflect_velocity(vel, normal);
    let max_x = (width - radius).max(radius);
    Some(WallHit {
        pos: Vec2::new(pos.x.clamp(radius, max_x), pos.y),
        vel,
    })
}

/// True once the circle is entirely above the top edge
#[inline]
pub fn exited_top(pos: Vec2, radius: f32) -> bool {
    pos.y + radius < 0.0
}
