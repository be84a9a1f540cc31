use serde::{Deserialize, Serialize};

/// Cue the host plays in response to a transition (haptic tap, sound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Start,
    Stop,
    Click,
    Notification,
    Success,
    Failure,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Start => "start",
            FeedbackKind::Stop => "stop",
            FeedbackKind::Click => "click",
            FeedbackKind::Notification => "notification",
            FeedbackKind::Success => "success",
            FeedbackKind::Failure => "failure",
        }
    }
}

impl std::fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every observable state change produces an Event.
/// The host renders them and plays their [`FeedbackKind`]; the core never
/// waits for the cue to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SequenceStarted {
        step_index: usize,
        remaining_secs: u32,
    },
    SequencePaused {
        step_index: usize,
        remaining_secs: u32,
    },
    /// Remaining time crossed a checkpoint of the routine.
    Checkpoint {
        step_index: usize,
        remaining_secs: u32,
        cue: FeedbackKind,
    },
    StepAdvanced {
        step_index: usize,
        duration_secs: u32,
        cue: FeedbackKind,
    },
    SequenceCompleted {
        step_index: usize,
    },
    PatternMatched {
        score: u32,
        next_len: usize,
    },
    PatternMissed {
        score: u32,
    },
    ColorMatched {
        score: u32,
    },
    ColorMissed {
        score: u32,
    },
    BreathingCompleted {
        breaths: u32,
    },
}

impl Event {
    /// The cue attached to this event.
    pub fn feedback(&self) -> FeedbackKind {
        match self {
            Event::SequenceStarted { .. } => FeedbackKind::Start,
            Event::SequencePaused { .. } => FeedbackKind::Stop,
            Event::Checkpoint { cue, .. } | Event::StepAdvanced { cue, .. } => *cue,
            Event::SequenceCompleted { .. }
            | Event::PatternMatched { .. }
            | Event::ColorMatched { .. }
            | Event::BreathingCompleted { .. } => FeedbackKind::Success,
            Event::PatternMissed { .. } | Event::ColorMissed { .. } => FeedbackKind::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_carries_its_own_cue() {
        let event = Event::Checkpoint {
            step_index: 0,
            remaining_secs: 5,
            cue: FeedbackKind::Click,
        };
        assert_eq!(event.feedback(), FeedbackKind::Click);
    }

    #[test]
    fn misses_map_to_failure() {
        assert_eq!(Event::PatternMissed { score: 0 }.feedback(), FeedbackKind::Failure);
        assert_eq!(Event::ColorMissed { score: 2 }.feedback(), FeedbackKind::Failure);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(Event::SequenceCompleted { step_index: 4 }).unwrap();
        assert_eq!(json["type"], "SequenceCompleted");
        assert_eq!(json["step_index"], 4);
    }
}
