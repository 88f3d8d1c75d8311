//! Tap On - stop the orbiting ball inside the target arc
//!
//! Core modules:
//! - `sim`: Round state, target arc, difficulty curves, success pause timer
//! - `engine`: The round state machine driven by taps and frame ticks
//! - `persistence`: Best score storage port (memory, file, LocalStorage)
//! - `presentation`: Presentation port consumed by the engine
//! - `platform`: Browser/native differences (frame clock, input, viewport)
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Idle/demo player
//! - `renderer`: Canvas2D drawing (wasm only)

pub mod autopilot;
pub mod engine;
pub mod persistence;
pub mod platform;
pub mod presentation;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use engine::{RoundEngine, TapOutcome};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal host callback rate the rotation speed is tuned for
    pub const NOMINAL_FPS: f32 = 60.0;
    /// Frame delta assumed before the first real timestamp arrives
    pub const FRAME_DT: f32 = 1.0 / NOMINAL_FPS;
    /// Largest frame delta fed to the pause timer (tab switches etc.)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ring dimensions (canvas units at full size)
    pub const RING_OUTER_RADIUS: f32 = 150.0;
    pub const RING_INNER_RADIUS: f32 = 100.0;
    pub const BALL_RADIUS: f32 = 12.0;

    /// Canvas sizing
    pub const CANVAS_MAX_SIZE: f32 = 500.0;
    pub const CANVAS_PADDING: f32 = 40.0;
    /// Vertical room kept free for the HUD text
    pub const CANVAS_TEXT_SPACE: f32 = 100.0;
    /// Below this canvas size every radius is scaled down proportionally
    pub const CANVAS_REFERENCE_SIZE: f32 = 400.0;

    /// Ball angular velocity at level 1 (radians per tick)
    pub const BASE_ROTATION_SPEED: f32 = 0.08;
    /// Pause between a hit and the next level (seconds)
    pub const SUCCESS_PAUSE_SECS: f32 = 1.0;

    /// Storage key holding the best score as a decimal string
    pub const BEST_SCORE_KEY: &str = "tapon_best";
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
