//! User-facing settings.
//!
//! Held in memory for the lifetime of the app; initial values come from
//! [`crate::Config`]. Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundSound {
    #[default]
    WhiteNoise,
    PinkNoise,
    BrownNoise,
    NatureSounds,
}

impl BackgroundSound {
    pub const ALL: [BackgroundSound; 4] = [
        BackgroundSound::WhiteNoise,
        BackgroundSound::PinkNoise,
        BackgroundSound::BrownNoise,
        BackgroundSound::NatureSounds,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundSound::WhiteNoise => "White Noise",
            BackgroundSound::PinkNoise => "Pink Noise",
            BackgroundSound::BrownNoise => "Brown Noise",
            BackgroundSound::NatureSounds => "Nature Sounds",
        }
    }
}

impl std::str::FromStr for BackgroundSound {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        BackgroundSound::ALL
            .into_iter()
            .find(|sound| sound.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "background_sound".into(),
                message: format!("unknown sound '{s}'"),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub daily_reminders: bool,
    #[serde(default = "default_true")]
    pub haptics: bool,
    #[serde(default)]
    pub background_sound: BackgroundSound,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            haptics: true,
            background_sound: BackgroundSound::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_watch_app() {
        let s = Settings::default();
        assert!(s.daily_reminders);
        assert!(s.haptics);
        assert_eq!(s.background_sound, BackgroundSound::WhiteNoise);
    }

    #[test]
    fn parses_sound_labels_loosely() {
        assert_eq!("pink-noise".parse::<BackgroundSound>().unwrap(), BackgroundSound::PinkNoise);
        assert_eq!(
            "Nature Sounds".parse::<BackgroundSound>().unwrap(),
            BackgroundSound::NatureSounds
        );
        assert!("rain".parse::<BackgroundSound>().is_err());
    }
}
