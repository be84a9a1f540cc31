use serde::{Deserialize, Serialize};

use super::checkpoint::CheckpointPolicy;
use super::routine::Routine;
use crate::error::ValidationError;
use crate::events::FeedbackKind;

const MEDITATION_STEPS: &[&str] = &["Sit comfortably, breathe slowly and let each thought pass."];

const RELAXATION_STEPS: &[&str] = &[
    "Focus on your feet. Tense them for 5 seconds, then relax.",
    "Move to your calves. Tense for 5 seconds, then relax.",
    "Tense your thighs for 5 seconds, then relax.",
    "Tense your abdomen for 5 seconds, then relax.",
    "Tense your chest for 5 seconds, then relax.",
    "Tense your hands for 5 seconds, then relax.",
    "Tense your arms for 5 seconds, then relax.",
    "Tense your shoulders for 5 seconds, then relax.",
    "Tense your neck for 5 seconds, then relax.",
    "Tense your face for 5 seconds, then relax.",
    "Feel complete relaxation throughout your body.",
];

const JAW_STEPS: &[&str] = &[
    "Gently open and close your mouth: Open wide, then close slowly. Repeat.",
    "Move your jaw side to side: Shift jaw left to right slowly, 10 times.",
    "Jaw resistance: Place hand under chin, open mouth while providing gentle resistance.",
    "Tongue up: Push tongue against roof of mouth, open and close jaw.",
    "Chin tucks: Pull chin back creating a 'double chin' effect, hold 3 seconds.",
];

const MASSAGE_STEPS: &[&str] = &[
    "Tragus Pull: Gently pull the tragus (the small pointed part of your ear) away from your head.",
    "Ear Lobe Massage: With thumb and index finger, gently massage earlobes in circular motions.",
    "Ear Base Massage: Press and massage around the base of the ear where it connects to the head.",
    "External Ear Canal: Place finger at entrance of ear canal, press gently and massage in circles.",
    "Full Ear Massage: Gently pinch around the outer rim of your ear, moving from top to bottom.",
];

const STRETCH_STEPS: &[&str] = &[
    "Head Tilt: Tilt head towards shoulder, hold 15 seconds, then switch sides.",
    "Chin Tuck: Pull chin toward chest while keeping back straight. Hold for 15 seconds.",
    "Head Turn: Slowly turn head to look over shoulder, hold 15 seconds, then switch sides.",
    "Shoulder Roll: Roll shoulders forward 5 times, then backward 5 times.",
    "Jaw Release: Drop jaw completely open, then close slowly. Repeat 10 times.",
];

/// The five guided routines shipped with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Meditation,
    ProgressiveRelaxation,
    JawExercises,
    EarMassage,
    NeckStretches,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Meditation,
        Preset::ProgressiveRelaxation,
        Preset::JawExercises,
        Preset::EarMassage,
        Preset::NeckStretches,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Preset::Meditation => "Guided Meditation",
            Preset::ProgressiveRelaxation => "Progressive Relaxation",
            Preset::JawExercises => "TMJ Exercises",
            Preset::EarMassage => "Ear Massage",
            Preset::NeckStretches => "Neck Stretches",
        }
    }

    /// Short name used on the command line and in config keys.
    pub fn slug(&self) -> &'static str {
        match self {
            Preset::Meditation => "meditation",
            Preset::ProgressiveRelaxation => "relaxation",
            Preset::JawExercises => "jaw",
            Preset::EarMassage => "massage",
            Preset::NeckStretches => "stretches",
        }
    }

    /// What the step counter calls one step ("Exercise 2 of 5").
    pub fn step_noun(&self) -> &'static str {
        match self {
            Preset::Meditation | Preset::ProgressiveRelaxation => "Step",
            Preset::JawExercises => "Exercise",
            Preset::EarMassage => "Technique",
            Preset::NeckStretches => "Stretch",
        }
    }

    pub fn default_step_secs(&self) -> u32 {
        match self {
            Preset::Meditation => 300,
            Preset::ProgressiveRelaxation | Preset::NeckStretches => 15,
            Preset::JawExercises => 30,
            Preset::EarMassage => 20,
        }
    }

    pub fn steps(&self) -> &'static [&'static str] {
        match self {
            Preset::Meditation => MEDITATION_STEPS,
            Preset::ProgressiveRelaxation => RELAXATION_STEPS,
            Preset::JawExercises => JAW_STEPS,
            Preset::EarMassage => MASSAGE_STEPS,
            Preset::NeckStretches => STRETCH_STEPS,
        }
    }

    pub fn checkpoint(&self) -> CheckpointPolicy {
        match self {
            Preset::Meditation => CheckpointPolicy::Every {
                secs: 60,
                cue: FeedbackKind::Notification,
            },
            Preset::ProgressiveRelaxation | Preset::NeckStretches => CheckpointPolicy::At {
                secs: 5,
                cue: FeedbackKind::Notification,
            },
            Preset::JawExercises => CheckpointPolicy::Every {
                secs: 10,
                cue: FeedbackKind::Notification,
            },
            Preset::EarMassage => CheckpointPolicy::Every {
                secs: 5,
                cue: FeedbackKind::Click,
            },
        }
    }

    pub fn advance_cue(&self) -> FeedbackKind {
        match self {
            Preset::EarMassage => FeedbackKind::Notification,
            _ => FeedbackKind::Click,
        }
    }

    /// Routine with the shipped step duration.
    pub fn routine(&self) -> Routine {
        self.build(self.default_step_secs())
    }

    /// Routine with an overridden step duration.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_secs` is zero.
    pub fn routine_with(&self, step_secs: u32) -> Result<Routine, ValidationError> {
        let routine = self.build(step_secs);
        routine.validate()?;
        Ok(routine)
    }

    fn build(&self, step_secs: u32) -> Routine {
        Routine {
            title: self.title().to_string(),
            steps: self.steps().iter().map(|s| s.to_string()).collect(),
            step_secs,
            checkpoint: self.checkpoint(),
            advance_cue: self.advance_cue(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Preset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.slug() == wanted || p.title().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "preset".into(),
                message: format!(
                    "unknown routine '{s}' (expected one of: {})",
                    Preset::ALL.map(|p| p.slug()).join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::sequence::SequenceController;

    fn run_to_end(preset: Preset) -> Vec<FeedbackKind> {
        let mut c = SequenceController::new(preset.routine());
        let mut cues = vec![c.toggle_running().feedback()];
        while c.is_running() {
            cues.extend(c.tick().iter().map(Event::feedback));
        }
        cues
    }

    #[test]
    fn step_counts_match_screens() {
        assert_eq!(Preset::Meditation.steps().len(), 1);
        assert_eq!(Preset::ProgressiveRelaxation.steps().len(), 11);
        assert_eq!(Preset::JawExercises.steps().len(), 5);
        assert_eq!(Preset::EarMassage.steps().len(), 5);
        assert_eq!(Preset::NeckStretches.steps().len(), 5);
    }

    #[test]
    fn meditation_notifies_every_minute() {
        let cues = run_to_end(Preset::Meditation);
        assert_eq!(
            cues,
            vec![
                FeedbackKind::Start,
                FeedbackKind::Notification,
                FeedbackKind::Notification,
                FeedbackKind::Notification,
                FeedbackKind::Notification,
                FeedbackKind::Notification,
                FeedbackKind::Success,
            ]
        );
    }

    #[test]
    fn jaw_exercises_notify_three_times_per_step() {
        let cues = run_to_end(Preset::JawExercises);
        let notifications = cues
            .iter()
            .filter(|c| **c == FeedbackKind::Notification)
            .count();
        // 20, 10 and 0 seconds remaining, five exercises.
        assert_eq!(notifications, 15);
        assert_eq!(cues.iter().filter(|c| **c == FeedbackKind::Click).count(), 4);
    }

    #[test]
    fn ear_massage_clicks_and_notifies_on_advance() {
        let mut c = SequenceController::new(Preset::EarMassage.routine());
        c.toggle_running();
        let events: Vec<Event> = (0..20).flat_map(|_| c.tick()).collect();
        let cues: Vec<FeedbackKind> = events.iter().map(Event::feedback).collect();
        assert_eq!(
            cues,
            vec![
                FeedbackKind::Click,
                FeedbackKind::Click,
                FeedbackKind::Click,
                FeedbackKind::Click,
                FeedbackKind::Notification,
            ]
        );
    }

    #[test]
    fn relaxation_takes_eleven_steps_of_fifteen_seconds() {
        let mut c = SequenceController::new(Preset::ProgressiveRelaxation.routine());
        c.toggle_running();
        let mut ticks = 0;
        while c.is_running() {
            c.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 11 * 15);
        assert_eq!(c.step_index(), 10);
    }

    #[test]
    fn parses_slugs_and_titles() {
        assert_eq!("jaw".parse::<Preset>().unwrap(), Preset::JawExercises);
        assert_eq!("Ear Massage".parse::<Preset>().unwrap(), Preset::EarMassage);
        assert!("yoga".parse::<Preset>().is_err());
    }

    #[test]
    fn override_rejects_zero_duration() {
        assert!(Preset::NeckStretches.routine_with(0).is_err());
        assert_eq!(Preset::NeckStretches.routine_with(7).unwrap().step_secs, 7);
    }
}
