//! Round engine
//!
//! Owns the round state and drives it through four phases:
//! `Idle` → `Rotating` → `Resolved` → (`Rotating` on a hit after the pause |
//! `Ended` on a miss). Hosts call [`RoundEngine::tick`] once per display
//! refresh and [`RoundEngine::handle_input`] once per tap.

use std::f32::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::persistence::BestScoreStore;
use crate::presentation::Presenter;
use crate::sim::{
    PauseTimer, PauseToken, RenderSnapshot, RingGeometry, RoundPhase, RoundState, TargetArc,
    rotation_speed, success_score, target_span,
};
use crate::tuning::Tuning;

/// What a tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// No run active or the ball was already stopped
    Ignored,
    /// Ball stopped inside the target; the next level follows the pause
    Hit { awarded: u64, token: PauseToken },
    /// Ball stopped outside the target; the run is over
    Miss,
}

/// The round state machine and its two ports
pub struct RoundEngine<S, P> {
    state: RoundState,
    tuning: Tuning,
    /// Ring geometry scaled to the current canvas
    geometry: RingGeometry,
    rng: Pcg32,
    pause: PauseTimer,
    store: S,
    presenter: P,
}

impl<S: BestScoreStore, P: Presenter> RoundEngine<S, P> {
    /// Create an idle engine, loading the best score from `store`
    pub fn new(tuning: Tuning, seed: u64, store: S, mut presenter: P) -> Self {
        // Stores reject anything but a whole decimal number, so a corrupt value
        // such as "12abc" lands here and the run starts from 0
        let best_score = match store.load_best() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                log::warn!("Could not load best score, starting from 0: {e:#}");
                0
            }
        };

        let state = RoundState::new(seed, best_score, tuning.base_rotation_speed);
        let rng = state.rng_state.to_rng();

        presenter.update_best_label(best_score);
        presenter.update_level_label(state.level);
        presenter.show_start_screen();

        let mut engine = Self {
            state,
            geometry: tuning.ring,
            tuning,
            rng,
            pause: PauseTimer::new(),
            store,
            presenter,
        };
        engine.calculate_target_zone();
        engine
    }

    /// Begin a run at the current level, clearing any game-over or success
    /// screen left from the previous run
    pub fn start(&mut self) {
        self.pause.cancel();
        self.state.score = 0;
        self.state.rotation = 0.0;
        self.calculate_target_zone();
        self.state.phase = RoundPhase::Rotating;

        self.presenter.hide_start_screen();
        self.presenter.hide_game_over();
        self.presenter.hide_success_flash();
        self.presenter.update_score_label(0);
        log::info!("Run started at level {}", self.state.level);
    }

    /// Begin a fresh run from level 1
    pub fn restart(&mut self) {
        self.state.level = 1;
        self.presenter.update_level_label(1);
        self.start();
    }

    /// Stop the ball and judge the stop against the target
    pub fn handle_input(&mut self) -> TapOutcome {
        if !self.state.is_rotating() {
            log::debug!("Ignoring tap in {:?}", self.state.phase);
            return TapOutcome::Ignored;
        }

        self.state.phase = RoundPhase::Resolved;
        log::debug!("Stopped rotating at angle {:.4}", self.state.rotation);

        if self.state.target.contains_angle(self.state.rotation) {
            self.success()
        } else {
            self.fail();
            TapOutcome::Miss
        }
    }

    /// Advance one frame.
    ///
    /// Rotation grows by exactly `rotation_speed` per call whatever `dt` is, so
    /// the ball's real speed follows the host's callback rate. `dt` (seconds)
    /// only drives the success pause.
    pub fn tick(&mut self, dt: f32) {
        if !self.state.is_playing() {
            return;
        }

        match self.state.phase {
            RoundPhase::Rotating => self.state.rotation += self.state.rotation_speed,
            RoundPhase::Resolved => {
                if self.pause.advance(dt).is_some() {
                    self.next_level();
                }
            }
            RoundPhase::Idle | RoundPhase::Ended => {}
        }

        self.render();
    }

    /// End the success pause now (for hosts with their own timers).
    ///
    /// Returns false and does nothing if `token` belongs to a pause that was
    /// cancelled, already completed, or superseded.
    pub fn complete_pause(&mut self, token: PauseToken) -> bool {
        if self.state.phase != RoundPhase::Resolved || !self.pause.fire(token) {
            log::debug!("Dropping stale pause completion (gen {})", token.generation());
            return false;
        }
        self.next_level();
        true
    }

    /// Refit the ring to a square canvas of side `size`
    pub fn resize(&mut self, size: f32) {
        let geometry = self.tuning.ring.for_canvas(size);
        if geometry != self.geometry {
            log::debug!("Ring resized for {size}px canvas");
            self.geometry = geometry;
        }
    }

    /// Push the current frame to the presenter
    pub fn render(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.render_frame(&snapshot);
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::new(
            &self.geometry,
            self.state.rotation,
            &self.state.target,
            self.state.level,
            self.state.score,
            self.state.best_score,
            self.state.phase,
        )
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Whether a success pause is waiting to complete
    pub fn pause_pending(&self) -> bool {
        self.pause.is_pending()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn success(&mut self) -> TapOutcome {
        let awarded = success_score(self.state.level);
        self.state.score = self.state.score.saturating_add(awarded);
        log::info!(
            "Hit at level {} (+{}, score {})",
            self.state.level,
            awarded,
            self.state.score
        );

        self.presenter.update_score_label(self.state.score);
        self.presenter.show_success_flash();

        let token = self.pause.schedule(self.tuning.success_pause_secs);
        TapOutcome::Hit { awarded, token }
    }

    fn fail(&mut self) {
        self.pause.cancel();
        self.state.phase = RoundPhase::Ended;
        log::info!(
            "Missed at level {} with score {}",
            self.state.level,
            self.state.score
        );

        if self.state.score > self.state.best_score {
            self.state.best_score = self.state.score;
            log::info!("New best score: {}", self.state.best_score);
            if let Err(e) = self.store.save_best(self.state.best_score) {
                log::warn!("Could not save best score: {e:#}");
            }
            self.presenter.update_best_label(self.state.best_score);
        }

        self.presenter.show_game_over(self.state.level);
    }

    fn next_level(&mut self) {
        self.state.level += 1;
        self.state.rotation = 0.0;
        self.calculate_target_zone();
        self.state.phase = RoundPhase::Rotating;

        self.presenter.hide_success_flash();
        self.presenter.update_level_label(self.state.level);
    }

    /// Place a new target arc and set the speed for the current level
    fn calculate_target_zone(&mut self) {
        let level = self.state.level;
        let start = self.rng.random_range(0.0..TAU);
        self.state.target = TargetArc::new(start, target_span(level));
        self.state.rotation_speed = rotation_speed(level, self.tuning.base_rotation_speed);
        log::debug!(
            "Level {}: speed = {:.3} rad/tick, target span = {:.3} rad",
            level,
            self.state.rotation_speed,
            self.state.target.span()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::presentation::NullPresenter;

    fn engine_with_best(best: u64) -> RoundEngine<MemoryStore, NullPresenter> {
        RoundEngine::new(
            Tuning::default(),
            7,
            MemoryStore::with_best(best),
            NullPresenter,
        )
    }

    /// Put the ball where it will miss
    fn aim_outside(engine: &mut RoundEngine<MemoryStore, NullPresenter>) {
        engine.state.rotation = engine.state.target.mid() + std::f32::consts::PI;
    }

    #[test]
    fn test_miss_updates_and_persists_best() {
        let mut engine = engine_with_best(10);
        engine.start();
        engine.state.level = 3;
        engine.state.score = 14;
        aim_outside(&mut engine);

        assert_eq!(engine.handle_input(), TapOutcome::Miss);
        assert!(!engine.state().is_playing());
        assert_eq!(engine.state().best_score, 14);
        assert_eq!(engine.store().value(), Some(14));
        assert_eq!(engine.store().saves, 1);
    }

    #[test]
    fn test_miss_below_best_does_not_save() {
        let mut engine = engine_with_best(100);
        engine.start();
        engine.state.score = 6;
        aim_outside(&mut engine);

        assert_eq!(engine.handle_input(), TapOutcome::Miss);
        assert_eq!(engine.state().best_score, 100);
        assert_eq!(engine.store().saves, 0);
    }

    #[test]
    fn test_hit_awards_two_to_the_level() {
        let mut engine = engine_with_best(0);
        engine.start();
        engine.state.level = 4;
        engine.state.rotation = engine.state.target.mid();

        match engine.handle_input() {
            TapOutcome::Hit { awarded, .. } => assert_eq!(awarded, 16),
            other => panic!("expected hit, got {other:?}"),
        }
        assert_eq!(engine.state().score, 16);
        assert_eq!(engine.phase(), RoundPhase::Resolved);
    }

    #[test]
    fn test_restart_cancels_pending_pause() {
        let mut engine = engine_with_best(0);
        engine.start();
        engine.state.rotation = engine.state.target.mid();
        let TapOutcome::Hit { token, .. } = engine.handle_input() else {
            panic!("expected hit");
        };

        engine.restart();
        assert!(!engine.pause_pending());
        assert!(!engine.complete_pause(token));
        assert_eq!(engine.state().level, 1);
        assert_eq!(engine.phase(), RoundPhase::Rotating);
    }

    #[test]
    fn test_rotation_ignores_dt() {
        let mut engine = engine_with_best(0);
        engine.start();
        let speed = engine.state().rotation_speed;

        engine.tick(0.0);
        engine.tick(5.0);
        engine.tick(1.0 / 240.0);
        assert!((engine.state().rotation - 3.0 * speed).abs() < 1e-6);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut engine = engine_with_best(0);
        engine.tick(1.0 / 60.0);
        assert_eq!(engine.state().rotation, 0.0);
        assert_eq!(engine.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_resize_scales_snapshot() {
        let mut engine = engine_with_best(0);
        engine.resize(200.0);
        let snap = engine.snapshot();
        assert!((snap.outer_radius - 75.0).abs() < 1e-4);
        engine.resize(500.0);
        assert_eq!(engine.snapshot().outer_radius, 150.0);
    }
}
