//! Target arc geometry
//!
//! The target is an angular range on the ring. Bounds are stored exactly as
//! generated (`end = start + span`, possibly beyond 2π) and only normalized
//! when testing containment.

use crate::normalize_angle;

/// The scoring zone on the ring
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetArc {
    /// Start angle (radians, in [0, 2π) when generated)
    pub start: f32,
    /// End angle (radians, `start + span`, never wrapped)
    pub end: f32,
}

impl TargetArc {
    pub fn new(start: f32, span: f32) -> Self {
        Self {
            start,
            end: start + span,
        }
    }

    /// Angular span of the arc
    #[inline]
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Check if an angle lies within the arc, inclusive at both bounds.
    ///
    /// All three angles are reduced to [0, 2π) first. When the normalized end
    /// falls before the normalized start the arc crosses 2π→0 and the test
    /// becomes a union of the two pieces.
    pub fn contains_angle(&self, theta: f32) -> bool {
        let theta = normalize_angle(theta);
        let start = normalize_angle(self.start);
        let end = normalize_angle(self.end);

        if start <= end {
            theta >= start && theta <= end
        } else {
            // Wraparound case (e.g., start=350°, end=10°)
            theta >= start || theta <= end
        }
    }

    /// Angle halfway along the arc (unwrapped)
    #[inline]
    pub fn mid(&self) -> f32 {
        self.start + self.span() / 2.0
    }
}
