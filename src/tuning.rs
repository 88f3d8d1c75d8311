//! Game balance parameters
//!
//! Loaded from JSON when the host provides one; every field falls back to the
//! defaults in [`crate::consts`].

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::{BASE_ROTATION_SPEED, SUCCESS_PAUSE_SECS};
use crate::sim::RingGeometry;

/// Balance knobs for the round engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball angular velocity at level 1 (radians per tick)
    pub base_rotation_speed: f32,
    /// Pause between a hit and the next level (seconds)
    pub success_pause_secs: f32,
    /// Ring geometry at full canvas size
    pub ring: RingGeometry,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_rotation_speed: BASE_ROTATION_SPEED,
            success_pause_secs: SUCCESS_PAUSE_SECS,
            ring: RingGeometry::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read tuning file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("load tuning from {}", path.display()))
    }

    /// Reject values that would stall or invert the game
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.base_rotation_speed.is_finite() && self.base_rotation_speed > 0.0,
            "base_rotation_speed must be positive, got {}",
            self.base_rotation_speed
        );
        ensure!(
            self.success_pause_secs.is_finite() && self.success_pause_secs > 0.0,
            "success_pause_secs must be positive, got {}",
            self.success_pause_secs
        );
        let ring = &self.ring;
        ensure!(
            ring.inner_radius > 0.0 && ring.inner_radius < ring.outer_radius,
            "ring radii must satisfy 0 < inner ({}) < outer ({})",
            ring.inner_radius,
            ring.outer_radius
        );
        ensure!(
            ring.ball_radius > 0.0,
            "ball_radius must be positive, got {}",
            ring.ball_radius
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.base_rotation_speed, 0.08);
        assert_eq!(tuning.success_pause_secs, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_rotation_speed": 0.05 }"#).unwrap();
        assert_eq!(tuning.base_rotation_speed, 0.05);
        assert_eq!(tuning.success_pause_secs, SUCCESS_PAUSE_SECS);
        assert_eq!(tuning.ring, RingGeometry::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Tuning::from_json(r#"{ "base_rotation_speed": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "success_pause_secs": -1.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "success_pause_secs": 0.0 }"#).is_err());
        assert!(
            Tuning::from_json(r#"{ "ring": { "outer_radius": 50.0, "inner_radius": 80.0 } }"#)
                .is_err()
        );
        assert!(Tuning::from_json("not json").is_err());
    }
}
