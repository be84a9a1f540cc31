//! Property-based invariant tests for the tick-driven state machines.
//!
//! 1. Ticks delivered while paused never change a routine.
//! 2. N steps of D seconds finish after exactly N*D running ticks.
//! 3. Pause then resume keeps the remaining time.
//! 4. Pattern scores never go negative and input never outgrows the pattern.
//! 5. Color options always contain the target exactly once.
//! 6. Out-of-bounds color selections change nothing.

use proptest::prelude::*;
use tinnitus_core::events::FeedbackKind;
use tinnitus_core::random::seeded;
use tinnitus_core::{
    CheckpointPolicy, ColorMatch, ColorRules, PatternGame, PatternPhase, PatternRules, Routine,
    SelectOutcome, SequenceController,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn routine_strategy() -> impl Strategy<Value = Routine> {
    (1usize..=12, 1u32..=40, 0u32..=12).prop_map(|(steps, secs, at)| {
        Routine::new(
            "prop",
            (0..steps).map(|i| format!("step {i}")).collect(),
            secs,
            CheckpointPolicy::At {
                secs: at,
                cue: FeedbackKind::Notification,
            },
            FeedbackKind::Click,
        )
        .unwrap()
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Paused ticks are no-ops
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn paused_ticks_are_noops(routine in routine_strategy(), warmup in 0u32..30, idle in 1u32..200) {
        let mut c = SequenceController::new(routine);
        c.toggle_running();
        for _ in 0..warmup {
            c.tick();
        }
        if c.is_running() {
            c.toggle_running();
        }
        let before = c.snapshot();
        for _ in 0..idle {
            prop_assert!(c.tick().is_empty());
        }
        prop_assert_eq!(c.snapshot(), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. N*D running ticks reach the terminal state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn finishes_after_steps_times_duration(routine in routine_strategy()) {
        let n = routine.step_count();
        let d = routine.step_secs as usize;
        let mut c = SequenceController::new(routine);
        c.toggle_running();

        let mut completions = 0;
        for i in 0..n * d {
            prop_assert!(c.is_running(), "stopped early at tick {}", i);
            completions += c
                .tick()
                .iter()
                .filter(|event| event.feedback() == FeedbackKind::Success)
                .count();
        }
        prop_assert!(!c.is_running());
        prop_assert!(c.is_finished());
        prop_assert_eq!(c.step_index(), n - 1);
        prop_assert_eq!(c.remaining_secs(), 0);
        prop_assert_eq!(completions, 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Pause/resume keeps remaining time
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pause_resume_preserves_remaining(routine in routine_strategy(), ticks in 0u32..100) {
        let mut c = SequenceController::new(routine);
        c.toggle_running();
        for _ in 0..ticks {
            c.tick();
        }
        let remaining = c.remaining_secs();
        let step = c.step_index();
        c.toggle_running();
        c.toggle_running();
        prop_assert_eq!(c.remaining_secs(), remaining);
        prop_assert_eq!(c.step_index(), step);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Pattern game invariants under arbitrary input
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum Input {
    Tick,
    Tap(u8),
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![Just(Input::Tick), (0u8..=6).prop_map(Input::Tap)]
}

proptest! {
    #[test]
    fn pattern_invariants_hold(seed in any::<u64>(), inputs in prop::collection::vec(input_strategy(), 0..300)) {
        let mut game = PatternGame::new(PatternRules::default(), seeded(seed)).unwrap();
        for input in inputs {
            let phase = game.phase();
            let taps_before = game.user_input().to_vec();
            match input {
                Input::Tick => {
                    game.tick();
                }
                Input::Tap(v) => {
                    game.submit_tap(v);
                    if phase != PatternPhase::AwaitingInput {
                        prop_assert_eq!(game.user_input(), taps_before.as_slice());
                    }
                }
            }
            prop_assert!(game.user_input().len() <= game.pattern().len());
            prop_assert!((3..=8).contains(&game.pattern().len()));
            prop_assert!(game.pattern().iter().all(|v| (1..=4).contains(v)));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 & 6. Color match invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn color_options_hold_target_once(seed in any::<u64>(), count in 1usize..=6, picks in prop::collection::vec(0usize..8, 0..50)) {
        let mut game = ColorMatch::new(ColorRules { option_count: count }, seeded(seed));
        for pick in picks {
            let target = game.target();
            prop_assert_eq!(game.options().len(), count);
            prop_assert_eq!(game.options().iter().filter(|c| **c == target).count(), 1);

            let before = game.snapshot();
            let correct = game.correct_option();
            match game.select_option(pick) {
                SelectOutcome::Rejected => {
                    prop_assert!(pick >= count);
                    prop_assert_eq!(game.snapshot(), before);
                }
                SelectOutcome::Resolved(_) => {
                    let expected = if pick == correct { before.score + 1 } else { before.score };
                    prop_assert_eq!(game.score(), expected);
                    prop_assert_eq!(game.round(), before.round + 1);
                }
            }
        }
    }
}
