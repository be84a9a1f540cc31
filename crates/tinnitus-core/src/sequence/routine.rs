use serde::{Deserialize, Serialize};

use super::checkpoint::CheckpointPolicy;
use crate::error::ValidationError;
use crate::events::FeedbackKind;

/// Parameters of one guided routine: ordered prompts, a fixed duration per
/// step, and the cues emitted along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub title: String,
    pub steps: Vec<String>,
    /// Duration of every step in seconds.
    pub step_secs: u32,
    #[serde(default)]
    pub checkpoint: CheckpointPolicy,
    /// Cue played when moving on to the next step.
    #[serde(default = "default_advance_cue")]
    pub advance_cue: FeedbackKind,
}

fn default_advance_cue() -> FeedbackKind {
    FeedbackKind::Click
}

impl Routine {
    /// Validate and build a routine.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is empty or `step_secs` is zero.
    pub fn new(
        title: impl Into<String>,
        steps: Vec<String>,
        step_secs: u32,
        checkpoint: CheckpointPolicy,
        advance_cue: FeedbackKind,
    ) -> Result<Self, ValidationError> {
        let routine = Self {
            title: title.into(),
            steps,
            step_secs,
            checkpoint,
            advance_cue,
        };
        routine.validate()?;
        Ok(routine)
    }

    /// # Errors
    ///
    /// Returns an error if the routine has no steps or a zero step length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.steps.is_empty() {
            return Err(ValidationError::EmptyCollection(format!(
                "steps of routine '{}'",
                self.title
            )));
        }
        if self.step_secs == 0 {
            return Err(ValidationError::out_of_range(
                "step_secs",
                0,
                1,
                i64::from(u32::MAX),
            ));
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn total_secs(&self) -> u64 {
        u64::from(self.step_secs).saturating_mul(self.steps.len() as u64)
    }

    /// Seconds in all steps before `step_index`.
    pub fn cumulative_secs(&self, step_index: usize) -> u64 {
        u64::from(self.step_secs).saturating_mul(step_index.min(self.steps.len()) as u64)
    }
}
