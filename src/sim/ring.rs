//! Ring geometry and the per-frame render snapshot

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::TargetArc;
use super::state::RoundPhase;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Radii of the track and the ball (canvas units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingGeometry {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub ball_radius: f32,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            outer_radius: RING_OUTER_RADIUS,
            inner_radius: RING_INNER_RADIUS,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl RingGeometry {
    /// Radius of the circle the ball's center travels on
    #[inline]
    pub fn track_radius(&self) -> f32 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    /// Geometry for a square canvas of side `size`.
    ///
    /// Canvases smaller than the reference size shrink every radius in
    /// proportion; larger canvases keep the base geometry.
    pub fn for_canvas(&self, size: f32) -> Self {
        if size < CANVAS_REFERENCE_SIZE {
            let scale = size / CANVAS_REFERENCE_SIZE;
            Self {
                outer_radius: self.outer_radius * scale,
                inner_radius: self.inner_radius * scale,
                ball_radius: self.ball_radius * scale,
            }
        } else {
            *self
        }
    }
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub ball_radius: f32,
    /// Ball angle (radians, unwrapped)
    pub ball_angle: f32,
    /// Ball center relative to the ring center (+y points down on a canvas)
    pub ball_pos: Vec2,
    pub target_start: f32,
    pub target_end: f32,
    pub level: u32,
    pub score: u64,
    pub best_score: u64,
    pub phase: RoundPhase,
}

impl RenderSnapshot {
    pub fn new(
        geometry: &RingGeometry,
        rotation: f32,
        target: &TargetArc,
        level: u32,
        score: u64,
        best_score: u64,
        phase: RoundPhase,
    ) -> Self {
        Self {
            outer_radius: geometry.outer_radius,
            inner_radius: geometry.inner_radius,
            ball_radius: geometry.ball_radius,
            ball_angle: rotation,
            ball_pos: polar_to_cartesian(geometry.track_radius(), rotation),
            target_start: target.start,
            target_end: target.end,
            level,
            score,
            best_score,
            phase,
        }
    }
}
