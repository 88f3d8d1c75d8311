//! Idle/demo player
//!
//! Watches the round state each frame and taps a fixed number of ticks after
//! the ball enters the target. As levels speed up and the arc narrows that
//! reaction delay eventually carries the ball past the end, so demo runs end
//! on their own.

use std::f32::consts::TAU;

use crate::sim::RoundState;

/// Full turns without seeing the ball inside the target before tapping anyway
const GIVE_UP_TURNS: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between noticing the ball inside the target and tapping
    pub reaction_ticks: u32,
    /// Ticks the ball has been seen inside the target
    seen_for: Option<u32>,
}

impl Autopilot {
    pub fn new(reaction_ticks: u32) -> Self {
        Self {
            reaction_ticks,
            seen_for: None,
        }
    }

    /// Decide whether to tap this frame (call before the engine ticks)
    pub fn wants_tap(&mut self, state: &RoundState) -> bool {
        if !state.is_rotating() {
            self.seen_for = None;
            return false;
        }

        if state.target.contains_angle(state.rotation) {
            let seen = self.seen_for.get_or_insert(0);
            if *seen >= self.reaction_ticks {
                self.seen_for = None;
                return true;
            }
            *seen += 1;
            false
        } else if self.seen_for.take().is_some() {
            // Reacted too late, the ball already left the arc
            true
        } else {
            // At high speed the ball can step clean over the arc
            state.rotation >= TAU * GIVE_UP_TURNS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RoundPhase, TargetArc};

    fn rotating_state(rotation: f32) -> RoundState {
        let mut state = RoundState::new(1, 0, 0.08);
        state.phase = RoundPhase::Rotating;
        state.target = TargetArc::new(1.0, 0.5);
        state.rotation = rotation;
        state
    }

    #[test]
    fn test_instant_reaction_taps_inside() {
        let mut pilot = Autopilot::new(0);
        assert!(!pilot.wants_tap(&rotating_state(0.5)));
        assert!(pilot.wants_tap(&rotating_state(1.1)));
    }

    #[test]
    fn test_reaction_delay() {
        let mut pilot = Autopilot::new(2);
        assert!(!pilot.wants_tap(&rotating_state(1.0)));
        assert!(!pilot.wants_tap(&rotating_state(1.1)));
        assert!(pilot.wants_tap(&rotating_state(1.2)));
    }

    #[test]
    fn test_late_tap_after_leaving_arc() {
        let mut pilot = Autopilot::new(5);
        assert!(!pilot.wants_tap(&rotating_state(1.45)));
        assert!(pilot.wants_tap(&rotating_state(1.6)));
    }

    #[test]
    fn test_never_taps_when_not_rotating() {
        let mut pilot = Autopilot::new(0);
        let mut state = rotating_state(1.2);
        state.phase = RoundPhase::Resolved;
        assert!(!pilot.wants_tap(&state));
    }

    #[test]
    fn test_gives_up_after_two_turns() {
        let mut pilot = Autopilot::new(0);
        assert!(pilot.wants_tap(&rotating_state(TAU * 2.0 + 0.1)));
    }
}
