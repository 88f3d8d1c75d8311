//! Round state and core types
//!
//! Owned by the engine and only mutated through its entry points.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arc::TargetArc;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Before the first start
    #[default]
    Idle,
    /// Ball advancing, waiting for a tap
    Rotating,
    /// Tap hit the target; waiting out the pause before the next level
    Resolved,
    /// Run ended on a miss
    Ended,
}

impl RoundPhase {
    /// Whether a run is active
    #[inline]
    pub fn is_playing(self) -> bool {
        matches!(self, RoundPhase::Rotating | RoundPhase::Resolved)
    }

    /// Whether the ball is advancing
    #[inline]
    pub fn is_rotating(self) -> bool {
        self == RoundPhase::Rotating
    }
}

/// Seed the target placement RNG is rebuilt from
#[derive(Debug, Clone)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// All mutable game state for one process lifetime
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed the target placement RNG was created from
    pub rng_state: RngState,
    /// Difficulty tier, starting at 1
    pub level: u32,
    /// Points earned this run
    pub score: u64,
    /// Highest score seen (loaded from storage)
    pub best_score: u64,
    /// Ball angle in radians, accumulated without wrapping
    pub rotation: f32,
    /// Radians added per tick
    pub rotation_speed: f32,
    pub phase: RoundPhase,
    /// Scoring zone for the current level
    pub target: TargetArc,
}

impl RoundState {
    pub fn new(seed: u64, best_score: u64, base_speed: f32) -> Self {
        Self {
            rng_state: RngState::new(seed),
            level: 1,
            score: 0,
            best_score,
            rotation: 0.0,
            rotation_speed: base_speed,
            phase: RoundPhase::Idle,
            target: TargetArc::default(),
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.phase.is_rotating()
    }
}
