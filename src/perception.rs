//! Perception input contract
//!
//! Camera capture and the face/hand models live outside this crate. What
//! crosses the boundary each tick is a list of normalized face centers and
//! up to two hand records in frame pixels. The helpers here convert raw
//! model output (face boxes, 21-point hand landmarks) into that shape.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Hand landmark indices (21-point hand model)
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_TIP: usize = 16;
    pub const PINKY_TIP: usize = 20;
    pub const COUNT: usize = 21;
}

/// A single detected hand for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    /// Index fingertip in frame pixels (the only point that pops bubbles)
    pub primary: Vec2,
    /// Thumb, middle, ring and pinky tips in frame pixels
    pub auxiliary: [Vec2; 4],
    /// Index fingertip x as a fraction of frame width
    pub normalized_x: f32,
}

impl HandDetection {
    /// Hand with only the primary fingertip known (aux tips collapse onto it)
    pub fn at(primary: Vec2, frame_width: f32) -> Self {
        Self {
            primary,
            auxiliary: [primary; 4],
            normalized_x: primary.x / frame_width,
        }
    }

    /// Build from normalized landmarks, or `None` if the set is incomplete
    pub fn from_landmarks(points: &[Vec2], frame_width: f32, frame_height: f32) -> Option<Self> {
        if points.len() < landmarks::COUNT {
            return None;
        }
        let frame = Vec2::new(frame_width, frame_height);
        // Truncate to whole pixels like the renderer's cursor coordinates
        let to_px = |p: Vec2| (p * frame).trunc();

        let index = points[landmarks::INDEX_TIP];
        Some(Self {
            primary: to_px(index),
            auxiliary: [
                to_px(points[landmarks::THUMB_TIP]),
                to_px(points[landmarks::MIDDLE_TIP]),
                to_px(points[landmarks::RING_TIP]),
                to_px(points[landmarks::PINKY_TIP]),
            ],
            normalized_x: index.x,
        })
    }
}

/// Normalized horizontal center of a face bounding box
pub fn face_center_x(origin_x: f32, width: f32, frame_width: f32) -> f32 {
    (origin_x + width / 2.0) / frame_width
}

/// Everything perception reports for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detections {
    /// Normalized face centers, unordered
    pub faces: Vec<f32>,
    /// Up to two hands
    pub hands: Vec<HandDetection>,
}

/// Source of per-frame detections, polled once per tick.
///
/// Implementations do any blocking capture or inference themselves; `poll`
/// hands back whatever is ready for the current frame. The snapshot from
/// the previous tick is passed in for sources that react to the game (the
/// demo autopilot does).
pub trait PerceptionSource {
    fn poll(&mut self, last: &crate::view::Snapshot) -> Detections;
}
