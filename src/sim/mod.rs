//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Seeded RNG only
//! - Fixed per-tick rotation increment
//! - No rendering or storage dependencies

pub mod arc;
pub mod difficulty;
pub mod ring;
pub mod state;
pub mod timer;

pub use arc::TargetArc;
pub use difficulty::{
    MAX_TARGET_SPAN, MIN_TARGET_SPAN, RAMP_LEVELS, rotation_speed, success_score, target_span,
};
pub use ring::{RenderSnapshot, RingGeometry};
pub use state::{RngState, RoundPhase, RoundState};
pub use timer::{PauseTimer, PauseToken};
