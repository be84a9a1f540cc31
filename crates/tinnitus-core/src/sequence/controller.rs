//! Guided routine state machine.
//!
//! One controller backs every timed screen. It does not own a timer: the
//! caller delivers one `tick()` per elapsed second, and the controller only
//! counts down while running.
//!
//! ## State Transitions
//!
//! ```text
//! Paused <-> Running -> (next step, Running) ... -> Finished
//! ```
//!
//! ## Usage
//!
//! ```
//! use tinnitus_core::{Preset, SequenceController};
//!
//! let mut routine = SequenceController::new(Preset::Meditation.routine());
//! routine.toggle_running();
//! while routine.is_running() {
//!     routine.tick();
//! }
//! assert!(routine.is_finished());
//! ```

use serde::{Deserialize, Serialize};

use super::routine::Routine;
use crate::events::Event;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceController {
    routine: Routine,
    step_index: usize,
    remaining_secs: u32,
    running: bool,
    finished: bool,
}

/// Read-only view of a controller for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSnapshot {
    pub title: String,
    pub step_index: usize,
    pub step_count: usize,
    pub prompt: String,
    pub remaining_secs: u32,
    pub step_secs: u32,
    pub clock: String,
    pub running: bool,
    pub finished: bool,
    pub overall_progress_pct: f64,
}

impl SequenceController {
    /// Starts paused on the first step with a full countdown.
    pub fn new(routine: Routine) -> Self {
        let remaining_secs = routine.step_secs;
        Self {
            routine,
            step_index: 0,
            remaining_secs,
            running: false,
            finished: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn routine(&self) -> &Routine {
        &self.routine
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_prompt(&self) -> &str {
        self.routine
            .steps
            .get(self.step_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// 0.0 .. 1.0 progress within the current step.
    pub fn step_progress(&self) -> f64 {
        let total = self.routine.step_secs;
        if total == 0 {
            return 0.0;
        }
        1.0 - (f64::from(self.remaining_secs) / f64::from(total))
    }

    /// Seconds counted down since the routine began.
    pub fn elapsed_secs(&self) -> u64 {
        self.routine.cumulative_secs(self.step_index)
            + u64::from(self.routine.step_secs.saturating_sub(self.remaining_secs))
    }

    /// 0.0 .. 100.0 progress across the whole routine.
    pub fn overall_progress_pct(&self) -> f64 {
        let total = self.routine.total_secs();
        if total == 0 {
            return 0.0;
        }
        (self.elapsed_secs() as f64 / total as f64 * 100.0).min(100.0)
    }

    /// Remaining time of the current step as `MM:SS`.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    pub fn snapshot(&self) -> SequenceSnapshot {
        SequenceSnapshot {
            title: self.routine.title.clone(),
            step_index: self.step_index,
            step_count: self.routine.step_count(),
            prompt: self.current_prompt().to_string(),
            remaining_secs: self.remaining_secs,
            step_secs: self.routine.step_secs,
            clock: self.clock(),
            running: self.running,
            finished: self.finished,
            overall_progress_pct: self.overall_progress_pct(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or pause. Remaining time is kept across a pause.
    ///
    /// A finished routine stays stopped until [`reset`](Self::reset).
    pub fn toggle_running(&mut self) -> Event {
        self.running = !self.running && !self.finished;
        tracing::debug!(
            title = %self.routine.title,
            running = self.running,
            step = self.step_index,
            remaining = self.remaining_secs,
            "sequence toggled"
        );
        if self.running {
            Event::SequenceStarted {
                step_index: self.step_index,
                remaining_secs: self.remaining_secs,
            }
        } else {
            Event::SequencePaused {
                step_index: self.step_index,
                remaining_secs: self.remaining_secs,
            }
        }
    }

    /// Call once per elapsed second.
    ///
    /// Returns the events that happen on this tick, in order: a checkpoint
    /// cue, then the step-advance or completion event when the countdown
    /// reaches zero. Paused or finished controllers ignore ticks.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.running || self.finished {
            return events;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if let Some(cue) = self.routine.checkpoint.cue_for(self.remaining_secs) {
            events.push(Event::Checkpoint {
                step_index: self.step_index,
                remaining_secs: self.remaining_secs,
                cue,
            });
        }
        if self.remaining_secs > 0 {
            return events;
        }

        if self.step_index + 1 < self.routine.step_count() {
            self.step_index += 1;
            self.remaining_secs = self.routine.step_secs;
            tracing::debug!(
                title = %self.routine.title,
                step = self.step_index,
                "sequence step advanced"
            );
            events.push(Event::StepAdvanced {
                step_index: self.step_index,
                duration_secs: self.routine.step_secs,
                cue: self.routine.advance_cue,
            });
        } else {
            self.running = false;
            self.finished = true;
            tracing::debug!(title = %self.routine.title, "sequence completed");
            events.push(Event::SequenceCompleted {
                step_index: self.step_index,
            });
        }
        events
    }

    /// Back to the first step, paused, with a full countdown.
    pub fn reset(&mut self) {
        self.step_index = 0;
        self.remaining_secs = self.routine.step_secs;
        self.running = false;
        self.finished = false;
    }
}
