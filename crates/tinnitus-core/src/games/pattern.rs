//! Tap-pattern memory game.
//!
//! The engine shows a sequence of colored pads one tick at a time, then
//! waits for the player to tap the same sequence back. A correct answer
//! lengthens the next pattern; a wrong one costs a point and replays the
//! same pattern.
//!
//! ```text
//! Displaying --(len + tail ticks)--> AwaitingInput --(last tap)--> Resolving
//!     ^                                                                |
//!     +------------------------(reset delay ticks)---------------------+
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::ValidationError;
use crate::events::Event;
use crate::random::RandomSource;

pub const TAP_MIN: u8 = 1;
pub const TAP_MAX: u8 = 4;

/// Pad color for a tap value.
pub fn tap_color(value: u8) -> Option<Color> {
    match value {
        1 => Some(Color::Red),
        2 => Some(Color::Blue),
        3 => Some(Color::Green),
        4 => Some(Color::Yellow),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRules {
    #[serde(default = "default_initial_len")]
    pub initial_len: usize,
    /// Cap on how much the score can lengthen the pattern.
    #[serde(default = "default_max_bonus")]
    pub max_bonus: usize,
    /// Blank frames shown after the last pattern value.
    #[serde(default = "default_display_tail_ticks")]
    pub display_tail_ticks: usize,
    /// Ticks between scoring a round and replaying the pattern.
    #[serde(default = "default_reset_delay_ticks")]
    pub reset_delay_ticks: u32,
}

fn default_initial_len() -> usize {
    3
}
fn default_max_bonus() -> usize {
    5
}
fn default_display_tail_ticks() -> usize {
    1
}
fn default_reset_delay_ticks() -> u32 {
    1
}

impl Default for PatternRules {
    fn default() -> Self {
        Self {
            initial_len: default_initial_len(),
            max_bonus: default_max_bonus(),
            display_tail_ticks: default_display_tail_ticks(),
            reset_delay_ticks: default_reset_delay_ticks(),
        }
    }
}

impl PatternRules {
    /// # Errors
    ///
    /// Returns an error if the initial pattern length is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_len == 0 {
            return Err(ValidationError::out_of_range(
                "pattern.initial_len",
                0,
                1,
                i64::MAX,
            ));
        }
        Ok(())
    }

    pub fn pattern_len(&self, score: u32) -> usize {
        self.initial_len + (score as usize).min(self.max_bonus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPhase {
    Displaying,
    AwaitingInput,
    /// Round scored; waiting out the reset delay.
    Resolving,
}

/// Result of [`PatternGame::submit_tap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Wrong phase or value outside `TAP_MIN..=TAP_MAX`. Nothing changed.
    Rejected,
    /// Tap recorded; more are needed.
    Recorded { taps: usize, needed: usize },
    /// Final tap of the round.
    Resolved(Event),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSnapshot {
    pub phase: PatternPhase,
    pub score: u32,
    pub pattern_len: usize,
    pub taps: usize,
    pub lit: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct PatternGame<R> {
    rules: PatternRules,
    rng: R,
    pattern: Vec<u8>,
    user_input: Vec<u8>,
    phase: PatternPhase,
    display_cursor: usize,
    resolve_ticks_left: u32,
    score: u32,
}

impl<R: RandomSource> PatternGame<R> {
    /// New game with a random pattern, already in its first display round.
    ///
    /// # Errors
    ///
    /// Returns an error if `rules` fail [`PatternRules::validate`].
    pub fn new(rules: PatternRules, mut rng: R) -> Result<Self, ValidationError> {
        rules.validate()?;
        let pattern = random_pattern(&mut rng, rules.pattern_len(0));
        Ok(Self::build(rules, rng, pattern))
    }

    /// New game with a fixed opening pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `rules` are invalid, or if `pattern` is empty or
    /// holds a value outside `TAP_MIN..=TAP_MAX`.
    pub fn with_pattern(
        rules: PatternRules,
        rng: R,
        pattern: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        rules.validate()?;
        if pattern.is_empty() {
            return Err(ValidationError::EmptyCollection("pattern".into()));
        }
        if let Some(bad) = pattern.iter().find(|v| !(TAP_MIN..=TAP_MAX).contains(*v)) {
            return Err(ValidationError::out_of_range(
                "pattern",
                i64::from(*bad),
                i64::from(TAP_MIN),
                i64::from(TAP_MAX),
            ));
        }
        Ok(Self::build(rules, rng, pattern))
    }

    fn build(rules: PatternRules, rng: R, pattern: Vec<u8>) -> Self {
        let mut game = Self {
            rules,
            rng,
            pattern,
            user_input: Vec::new(),
            phase: PatternPhase::Displaying,
            display_cursor: 0,
            resolve_ticks_left: 0,
            score: 0,
        };
        game.start_round();
        game
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> PatternPhase {
        self.phase
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn user_input(&self) -> &[u8] {
        &self.user_input
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn display_cursor(&self) -> usize {
        self.display_cursor
    }

    /// Value the host should light while displaying. `None` on the blank
    /// tail frames and outside the display phase.
    pub fn current_display_value(&self) -> Option<u8> {
        if self.phase != PatternPhase::Displaying {
            return None;
        }
        self.pattern.get(self.display_cursor).copied()
    }

    pub fn snapshot(&self) -> PatternSnapshot {
        PatternSnapshot {
            phase: self.phase,
            score: self.score,
            pattern_len: self.pattern.len(),
            taps: self.user_input.len(),
            lit: self.current_display_value(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start_round(&mut self) {
        self.phase = PatternPhase::Displaying;
        self.display_cursor = 0;
        self.user_input.clear();
        self.resolve_ticks_left = 0;
        tracing::trace!(len = self.pattern.len(), "pattern round started");
    }

    /// Show the next display frame. Returns true when the display phase
    /// ended on this call.
    pub fn advance_display(&mut self) -> bool {
        if self.phase != PatternPhase::Displaying {
            return false;
        }
        self.display_cursor += 1;
        if self.display_cursor >= self.pattern.len() + self.rules.display_tail_ticks {
            self.phase = PatternPhase::AwaitingInput;
            self.display_cursor = 0;
            self.user_input.clear();
            return true;
        }
        false
    }

    /// Drive the game by one tick. Returns the new phase if it changed.
    pub fn tick(&mut self) -> Option<PatternPhase> {
        match self.phase {
            PatternPhase::Displaying => self.advance_display().then_some(self.phase),
            PatternPhase::AwaitingInput => None,
            PatternPhase::Resolving => {
                self.resolve_ticks_left = self.resolve_ticks_left.saturating_sub(1);
                if self.resolve_ticks_left == 0 {
                    self.start_round();
                    Some(self.phase)
                } else {
                    None
                }
            }
        }
    }

    pub fn submit_tap(&mut self, value: u8) -> TapOutcome {
        if self.phase != PatternPhase::AwaitingInput || !(TAP_MIN..=TAP_MAX).contains(&value) {
            tracing::trace!(value, phase = ?self.phase, "tap rejected");
            return TapOutcome::Rejected;
        }

        self.user_input.push(value);
        if self.user_input.len() < self.pattern.len() {
            return TapOutcome::Recorded {
                taps: self.user_input.len(),
                needed: self.pattern.len(),
            };
        }

        let event = if self.user_input == self.pattern {
            self.score += 1;
            let len = self.rules.pattern_len(self.score);
            self.pattern = random_pattern(&mut self.rng, len);
            Event::PatternMatched {
                score: self.score,
                next_len: len,
            }
        } else {
            self.score = self.score.saturating_sub(1);
            Event::PatternMissed { score: self.score }
        };
        tracing::debug!(score = self.score, ?event, "pattern round resolved");

        if self.rules.reset_delay_ticks == 0 {
            self.start_round();
        } else {
            self.phase = PatternPhase::Resolving;
            self.resolve_ticks_left = self.rules.reset_delay_ticks;
        }
        TapOutcome::Resolved(event)
    }
}

fn random_pattern<R: RandomSource>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| rng.int_in(u32::from(TAP_MIN), u32::from(TAP_MAX)) as u8)
        .collect()
}
