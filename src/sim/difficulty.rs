//! Level-to-difficulty curves
//!
//! The target arc narrows linearly from 90° at level 1 to 15° at level 10 and
//! stays there. Rotation speed ramps linearly with no ceiling: 1x base at
//! level 1, 2x at level 10, 3x at level 19 and so on.

use std::f32::consts::{FRAC_PI_2, PI};

/// Widest target arc (level 1)
pub const MAX_TARGET_SPAN: f32 = FRAC_PI_2;
/// Narrowest target arc (level 10 and beyond)
pub const MIN_TARGET_SPAN: f32 = PI / 12.0;
/// Levels over which the arc narrows and the speed doubles
pub const RAMP_LEVELS: u32 = 9;

/// Width of the target arc for a level (radians)
pub fn target_span(level: u32) -> f32 {
    let steps = level.saturating_sub(1).min(RAMP_LEVELS) as f32;
    MAX_TARGET_SPAN - ((MAX_TARGET_SPAN - MIN_TARGET_SPAN) / RAMP_LEVELS as f32) * steps
}

/// Ball angular velocity for a level (radians per tick)
pub fn rotation_speed(level: u32, base_speed: f32) -> f32 {
    base_speed * (1.0 + level.saturating_sub(1) as f32 / RAMP_LEVELS as f32)
}

/// Points awarded for stopping inside the target at a level: 2^level.
///
/// Saturates at `u64::MAX` past level 63.
pub fn success_score(level: u32) -> u64 {
    1u64.checked_shl(level).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_span_endpoints() {
        assert!((target_span(1) - FRAC_PI_2).abs() < 1e-6);
        assert!((target_span(10) - PI / 12.0).abs() < 1e-6);
        assert!((target_span(2) - (FRAC_PI_2 - (FRAC_PI_2 - PI / 12.0) / 9.0)).abs() < 1e-6);
    }

    #[test]
    fn test_target_span_clamped_past_level_ten() {
        assert_eq!(target_span(11), target_span(10));
        assert_eq!(target_span(500), target_span(10));
        assert!((target_span(500) - MIN_TARGET_SPAN).abs() < 1e-6);
    }

    #[test]
    fn test_target_span_narrows() {
        for level in 1..10 {
            assert!(target_span(level + 1) < target_span(level), "level {level}");
        }
    }

    #[test]
    fn test_rotation_speed_ramp() {
        let base = 0.08;
        assert!((rotation_speed(1, base) - base).abs() < 1e-7);
        assert!((rotation_speed(10, base) - 2.0 * base).abs() < 1e-6);
        assert!((rotation_speed(19, base) - 3.0 * base).abs() < 1e-6);
        assert!(rotation_speed(11, base) > rotation_speed(10, base));
    }

    #[test]
    fn test_success_score() {
        assert_eq!(success_score(1), 2);
        assert_eq!(success_score(3), 8);
        assert_eq!(success_score(10), 1024);
        assert_eq!(success_score(64), u64::MAX);
    }
}
