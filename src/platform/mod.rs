//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (animation frame timestamps → clamped deltas)
//! - Input events (which raw events count as a tap)
//! - Viewport → canvas sizing

use crate::consts::*;

/// Where a tap came from. The engine never sees this; hosts use it to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Mouse click on the canvas
    Pointer,
    /// Touch start on the canvas
    Touch,
    /// Keyboard key, by `KeyboardEvent.code`
    Key,
}

/// Key code that acts as a tap
pub const TAP_KEY: &str = "Space";

/// Whether a raw input event should be forwarded as a tap.
///
/// Pointer and touch always forward (the engine drops taps it cannot use).
/// The tap key only forwards during a run so it stays free for the page
/// otherwise.
pub fn forwards_tap(source: InputSource, key_code: Option<&str>, playing: bool) -> bool {
    match source {
        InputSource::Pointer | InputSource::Touch => true,
        InputSource::Key => playing && key_code == Some(TAP_KEY),
    }
}

/// Side of the square canvas for a viewport
pub fn canvas_size(viewport_width: f32, viewport_height: f32) -> f32 {
    let available_width = viewport_width - CANVAS_PADDING;
    let available_height = viewport_height - CANVAS_PADDING - CANVAS_TEXT_SPACE;
    available_width
        .min(available_height)
        .min(CANVAS_MAX_SIZE)
        .max(0.0)
}

/// Turns animation-frame timestamps (milliseconds) into frame deltas (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame, clamped to [0, MAX_FRAME_DT].
    /// The first frame reports the nominal frame length.
    pub fn advance(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => FRAME_DT,
        };
        self.last_time = Some(time_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the last timestamp (e.g. after the loop was suspended)
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_forwarding() {
        assert!(forwards_tap(InputSource::Pointer, None, false));
        assert!(forwards_tap(InputSource::Touch, None, true));
        assert!(forwards_tap(InputSource::Key, Some("Space"), true));
        assert!(!forwards_tap(InputSource::Key, Some("Space"), false));
        assert!(!forwards_tap(InputSource::Key, Some("Enter"), true));
    }

    #[test]
    fn test_canvas_size() {
        // Desktop: capped at the max size
        assert_eq!(canvas_size(1920.0, 1080.0), 500.0);
        // Phone portrait: width-limited
        assert_eq!(canvas_size(375.0, 812.0), 335.0);
        // Landscape phone: height-limited (minus HUD space)
        assert_eq!(canvas_size(812.0, 375.0), 235.0);
        assert_eq!(canvas_size(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), FRAME_DT);
        assert!((clock.advance(1016.0) - 0.016).abs() < 1e-6);
        // Long stall is clamped
        assert_eq!(clock.advance(5000.0), MAX_FRAME_DT);
        // Clock going backwards never yields a negative delta
        assert_eq!(clock.advance(4000.0), 0.0);

        clock.reset();
        assert_eq!(clock.advance(9000.0), FRAME_DT);
    }
}
