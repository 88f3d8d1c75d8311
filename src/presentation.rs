//! Presentation port
//!
//! The engine pushes frames and screen changes through [`Presenter`]; it never
//! reads anything back. Every method defaults to doing nothing so a host only
//! implements what it can show.

use crate::sim::RenderSnapshot;

pub trait Presenter {
    /// Draw one frame
    fn render_frame(&mut self, _snapshot: &RenderSnapshot) {}

    fn show_start_screen(&mut self) {}
    fn hide_start_screen(&mut self) {}

    /// Transient "hit" indicator, hidden again when the pause ends
    fn show_success_flash(&mut self) {}
    fn hide_success_flash(&mut self) {}

    fn show_game_over(&mut self, _final_level: u32) {}
    fn hide_game_over(&mut self) {}

    fn update_level_label(&mut self, _level: u32) {}
    fn update_score_label(&mut self, _score: u64) {}
    fn update_best_label(&mut self, _best: u64) {}
}

/// Presenter that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Presenter that reports screen changes through the `log` facade.
///
/// Frames go to `trace` so a headless run stays readable at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn render_frame(&mut self, snapshot: &RenderSnapshot) {
        log::trace!(
            "frame: ball {:.3} rad at ({:.1}, {:.1}), target [{:.3}, {:.3}]",
            snapshot.ball_angle,
            snapshot.ball_pos.x,
            snapshot.ball_pos.y,
            snapshot.target_start,
            snapshot.target_end
        );
    }

    fn show_start_screen(&mut self) {
        log::info!("Tap to start");
    }

    fn show_success_flash(&mut self) {
        log::info!("Hit!");
    }

    fn show_game_over(&mut self, final_level: u32) {
        log::info!("Game over at level {}", final_level);
    }

    fn update_level_label(&mut self, level: u32) {
        log::debug!("Level: {}", level);
    }

    fn update_score_label(&mut self, score: u64) {
        log::debug!("Score: {}", score);
    }

    fn update_best_label(&mut self, best: u64) {
        log::info!("Best: {}", best);
    }
}
