//! Breathing focus pacer.
//!
//! Alternates "breathe in" and "breathe out" on a slow beat and counts
//! completed breaths. Reaching the target is reported once; the pacer keeps
//! alternating afterwards so the host can keep animating.

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::tick::Cadence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingRules {
    /// Seconds per half breath.
    #[serde(default = "default_period_secs")]
    pub period_secs: u32,
    #[serde(default = "default_target_breaths")]
    pub target_breaths: u32,
}

fn default_period_secs() -> u32 {
    4
}
fn default_target_breaths() -> u32 {
    5
}

impl Default for BreathingRules {
    fn default() -> Self {
        Self {
            period_secs: default_period_secs(),
            target_breaths: default_target_breaths(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathPhase {
    Inhale,
    Exhale,
}

impl BreathPhase {
    pub fn prompt(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::Exhale => "Breathe Out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreathingPacer {
    rules: BreathingRules,
    cadence: Cadence,
    phase: BreathPhase,
    completed_breaths: u32,
    reported: bool,
}

impl BreathingPacer {
    pub fn new(rules: BreathingRules) -> Self {
        let cadence = Cadence::new(rules.period_secs);
        Self {
            rules,
            cadence,
            phase: BreathPhase::Exhale,
            completed_breaths: 0,
            reported: false,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn completed_breaths(&self) -> u32 {
        self.completed_breaths
    }

    pub fn target_breaths(&self) -> u32 {
        self.rules.target_breaths
    }

    pub fn is_complete(&self) -> bool {
        self.completed_breaths >= self.rules.target_breaths
    }

    /// Feed one elapsed second; flips the phase once per period.
    pub fn on_second(&mut self) -> Option<Event> {
        if self.cadence.on_second() {
            self.breathe()
        } else {
            None
        }
    }

    /// Flip the phase. Returns the completion event on the breath that
    /// reaches the target.
    pub fn breathe(&mut self) -> Option<Event> {
        self.phase = match self.phase {
            BreathPhase::Inhale => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        };
        if self.phase == BreathPhase::Inhale || self.is_complete() {
            return None;
        }

        self.completed_breaths += 1;
        tracing::trace!(breaths = self.completed_breaths, "breath completed");
        if self.is_complete() && !self.reported {
            self.reported = true;
            return Some(Event::BreathingCompleted {
                breaths: self.completed_breaths,
            });
        }
        None
    }
}

impl Default for BreathingPacer {
    fn default() -> Self {
        Self::new(BreathingRules::default())
    }
}
