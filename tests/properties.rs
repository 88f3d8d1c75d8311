use std::f32::consts::{FRAC_PI_2, PI, TAU};

use proptest::prelude::*;

use tap_on::persistence::MemoryStore;
use tap_on::presentation::NullPresenter;
use tap_on::sim::{TargetArc, rotation_speed, success_score, target_span};
use tap_on::{RoundEngine, Tuning, normalize_angle};

#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Restart,
    Tap,
    Tick(u8),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        1 => Just(Command::Start),
        1 => Just(Command::Restart),
        4 => Just(Command::Tap),
        6 => (1u8..40).prop_map(Command::Tick),
    ]
}

proptest! {
    #[test]
    fn prop_span_follows_linear_ramp(level in 1u32..=10) {
        let expected = FRAC_PI_2 - ((FRAC_PI_2 - PI / 12.0) / 9.0) * (level - 1) as f32;
        prop_assert!((target_span(level) - expected).abs() < 1e-6);
    }

    #[test]
    fn prop_span_clamped_past_ten(level in 11u32..100_000) {
        prop_assert!((target_span(level) - PI / 12.0).abs() < 1e-6);
    }

    #[test]
    fn prop_speed_strictly_increasing(level in 1u32..10_000, base in 0.01f32..1.0) {
        let speed = rotation_speed(level, base);
        prop_assert!((speed - base * (1.0 + (level - 1) as f32 / 9.0)).abs() < speed * 1e-5);
        prop_assert!(rotation_speed(level + 1, base) > speed);
    }

    #[test]
    fn prop_success_score_is_power_of_two(level in 1u32..64) {
        prop_assert_eq!(success_score(level), 2u64.pow(level));
    }

    #[test]
    fn prop_normalize_in_range(angle in -1000.0f32..1000.0) {
        let n = normalize_angle(angle);
        prop_assert!((0.0..TAU).contains(&n));
    }

    #[test]
    fn prop_arc_bounds_inclusive(start in 0.0f32..TAU, span in (PI / 12.0)..FRAC_PI_2) {
        let arc = TargetArc::new(start, span);
        prop_assert!(arc.contains_angle(arc.start));
        prop_assert!(arc.contains_angle(arc.end));
        prop_assert!(arc.contains_angle(arc.mid()));
        prop_assert!(!arc.contains_angle(arc.mid() + PI));
    }

    #[test]
    fn prop_arc_ignores_full_turns(start in 0.0f32..TAU, span in (PI / 12.0)..FRAC_PI_2, turns in 1i32..5) {
        let arc = TargetArc::new(start, span);
        let theta = arc.mid();
        prop_assert!(arc.contains_angle(theta + turns as f32 * TAU));
        prop_assert!(arc.contains_angle(theta - turns as f32 * TAU));
    }

    #[test]
    fn prop_best_never_decreases(seed in any::<u64>(), commands in prop::collection::vec(command(), 1..200)) {
        let mut engine = RoundEngine::new(
            Tuning::default(),
            seed,
            MemoryStore::new(),
            NullPresenter,
        );
        let mut best = engine.state().best_score;

        for command in commands {
            match command {
                Command::Start => engine.start(),
                Command::Restart => engine.restart(),
                Command::Tap => {
                    engine.handle_input();
                }
                Command::Tick(n) => {
                    for _ in 0..n {
                        engine.tick(1.0 / 60.0);
                    }
                }
            }

            let state = engine.state();
            prop_assert!(state.best_score >= best);
            prop_assert!(state.level >= 1);
            if !state.is_playing() {
                prop_assert!(!engine.pause_pending());
            }
            best = state.best_score;
        }

        prop_assert_eq!(engine.store().value().unwrap_or(0), best);
    }
}
