//! Color matching game.
//!
//! Each round shows a target swatch and a row of options drawn from the
//! palette. The target is always among the options, exactly once.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Purple,
    Color::Orange,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRules {
    /// Swatches offered per round, clamped to the palette size.
    #[serde(default = "default_option_count")]
    pub option_count: usize,
}

fn default_option_count() -> usize {
    4
}

impl Default for ColorRules {
    fn default() -> Self {
        Self {
            option_count: default_option_count(),
        }
    }
}

/// Result of [`ColorMatch::select_option`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Index outside the current options. No new round was dealt.
    Rejected,
    Resolved(Event),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatchSnapshot {
    pub target: Color,
    pub options: Vec<Color>,
    pub score: u32,
    pub round: u32,
}

#[derive(Debug, Clone)]
pub struct ColorMatch<R> {
    palette: Vec<Color>,
    option_count: usize,
    rng: R,
    target_index: usize,
    options: Vec<Color>,
    score: u32,
    round: u32,
}

impl<R: RandomSource> ColorMatch<R> {
    /// Game over the standard six-color palette, first round dealt.
    pub fn new(rules: ColorRules, rng: R) -> Self {
        Self::build(PALETTE.to_vec(), rules.option_count, rng)
    }

    /// # Errors
    ///
    /// Returns an error if `palette` is empty or repeats a color; a
    /// repeated color would make two options correct.
    pub fn with_palette(
        palette: Vec<Color>,
        rules: ColorRules,
        rng: R,
    ) -> Result<Self, ValidationError> {
        if palette.is_empty() {
            return Err(ValidationError::EmptyCollection("palette".into()));
        }
        for (i, color) in palette.iter().enumerate() {
            if palette[..i].contains(color) {
                return Err(ValidationError::Duplicate {
                    collection: "palette".into(),
                    value: color.to_string(),
                });
            }
        }
        Ok(Self::build(palette, rules.option_count, rng))
    }

    fn build(palette: Vec<Color>, option_count: usize, rng: R) -> Self {
        let option_count = option_count.clamp(1, palette.len());
        let mut game = Self {
            palette,
            option_count,
            rng,
            target_index: 0,
            options: Vec::with_capacity(option_count),
            score: 0,
            round: 0,
        };
        game.start_new_round();
        game
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn target(&self) -> Color {
        self.palette[self.target_index]
    }

    pub fn options(&self) -> &[Color] {
        &self.options
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the round on the board.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn snapshot(&self) -> ColorMatchSnapshot {
        ColorMatchSnapshot {
            target: self.target(),
            options: self.options.clone(),
            score: self.score,
            round: self.round,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Pick a new target and deal options that contain it once.
    pub fn start_new_round(&mut self) {
        let last = (self.palette.len() - 1) as u32;
        self.target_index = self.rng.int_in(0, last) as usize;

        let mut distractors: Vec<Color> = self
            .palette
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.target_index)
            .map(|(_, c)| *c)
            .collect();
        self.rng.shuffle(&mut distractors);
        distractors.truncate(self.option_count - 1);

        self.options = distractors;
        self.options.push(self.target());
        self.rng.shuffle(&mut self.options);
        self.round += 1;
        tracing::trace!(goal = %self.target(), options = ?self.options, "color round dealt");
    }

    pub fn select_option(&mut self, index: usize) -> SelectOutcome {
        let Some(chosen) = self.options.get(index).copied() else {
            tracing::trace!(index, len = self.options.len(), "selection rejected");
            return SelectOutcome::Rejected;
        };

        let event = if chosen == self.target() {
            self.score += 1;
            Event::ColorMatched { score: self.score }
        } else {
            Event::ColorMissed { score: self.score }
        };
        tracing::debug!(%chosen, goal = %self.target(), score = self.score, "color chosen");
        self.start_new_round();
        SelectOutcome::Resolved(event)
    }

    /// Index of the correct option in the current round.
    pub fn correct_option(&self) -> usize {
        let target = self.target();
        self.options
            .iter()
            .position(|c| *c == target)
            .unwrap_or_default()
    }
}
