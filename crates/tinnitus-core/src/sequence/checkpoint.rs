use serde::{Deserialize, Serialize};

use crate::events::FeedbackKind;

/// When a running countdown emits a cue before the step expires.
///
/// Checked against the remaining seconds *after* each decrement, including
/// the tick that reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckpointPolicy {
    #[default]
    Never,
    /// Every multiple of `secs` remaining.
    Every { secs: u32, cue: FeedbackKind },
    /// Exactly `secs` remaining.
    At { secs: u32, cue: FeedbackKind },
}

impl CheckpointPolicy {
    pub fn cue_for(&self, remaining_secs: u32) -> Option<FeedbackKind> {
        match *self {
            CheckpointPolicy::Never => None,
            CheckpointPolicy::Every { secs, cue } if secs > 0 && remaining_secs % secs == 0 => {
                Some(cue)
            }
            CheckpointPolicy::At { secs, cue } if remaining_secs == secs => Some(cue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_matches_multiples_including_zero() {
        let policy = CheckpointPolicy::Every {
            secs: 60,
            cue: FeedbackKind::Notification,
        };
        assert_eq!(policy.cue_for(240), Some(FeedbackKind::Notification));
        assert_eq!(policy.cue_for(239), None);
        assert_eq!(policy.cue_for(0), Some(FeedbackKind::Notification));
    }

    #[test]
    fn at_matches_once() {
        let policy = CheckpointPolicy::At {
            secs: 5,
            cue: FeedbackKind::Notification,
        };
        let hits = (0..=15).filter(|r| policy.cue_for(*r).is_some()).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn every_zero_never_fires() {
        let policy = CheckpointPolicy::Every {
            secs: 0,
            cue: FeedbackKind::Click,
        };
        assert!((0..100).all(|r| policy.cue_for(r).is_none()));
    }
}
