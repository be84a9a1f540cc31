//! TOML-based configuration.
//!
//! Provides the initial values for:
//! - User settings (reminders, haptics, background sound)
//! - Step durations of each guided routine
//! - Pattern game pacing (display tail, reset delay, length growth)
//! - Color match option count
//! - Breathing pacer beat and target
//!
//! Configuration is read from `~/.config/tinnitus-relief/config.toml`, or
//! from the file named by `TINNITUS_CONFIG`. It is never written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, CoreError, Result, ValidationError};
use crate::games::{BreathingRules, ColorRules, PatternRules};
use crate::sequence::{Preset, Routine};
use crate::settings::Settings;

pub const CONFIG_ENV: &str = "TINNITUS_CONFIG";

/// Step duration of each guided routine, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineConfig {
    #[serde(default = "default_meditation_secs")]
    pub meditation_secs: u32,
    #[serde(default = "default_relaxation_secs")]
    pub relaxation_secs: u32,
    #[serde(default = "default_jaw_secs")]
    pub jaw_secs: u32,
    #[serde(default = "default_massage_secs")]
    pub massage_secs: u32,
    #[serde(default = "default_stretches_secs")]
    pub stretches_secs: u32,
}

fn default_meditation_secs() -> u32 {
    Preset::Meditation.default_step_secs()
}
fn default_relaxation_secs() -> u32 {
    Preset::ProgressiveRelaxation.default_step_secs()
}
fn default_jaw_secs() -> u32 {
    Preset::JawExercises.default_step_secs()
}
fn default_massage_secs() -> u32 {
    Preset::EarMassage.default_step_secs()
}
fn default_stretches_secs() -> u32 {
    Preset::NeckStretches.default_step_secs()
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            meditation_secs: default_meditation_secs(),
            relaxation_secs: default_relaxation_secs(),
            jaw_secs: default_jaw_secs(),
            massage_secs: default_massage_secs(),
            stretches_secs: default_stretches_secs(),
        }
    }
}

impl RoutineConfig {
    pub fn step_secs(&self, preset: Preset) -> u32 {
        match preset {
            Preset::Meditation => self.meditation_secs,
            Preset::ProgressiveRelaxation => self.relaxation_secs,
            Preset::JawExercises => self.jaw_secs,
            Preset::EarMassage => self.massage_secs,
            Preset::NeckStretches => self.stretches_secs,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub routines: RoutineConfig,
    #[serde(default)]
    pub pattern: PatternRules,
    #[serde(default)]
    pub color: ColorRules,
    #[serde(default)]
    pub breathing: BreathingRules,
}

impl Config {
    /// `$TINNITUS_CONFIG`, else `~/.config/tinnitus-relief/config.toml`.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tinnitus-relief")
            .join("config.toml")
    }

    /// Load from the default location, or defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns the first value that cannot drive its component.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for preset in Preset::ALL {
            preset.routine_with(self.routines.step_secs(preset))?;
        }
        self.pattern.validate()?;
        if self.color.option_count == 0 {
            return Err(ValidationError::out_of_range(
                "color.option_count",
                0,
                1,
                i64::MAX,
            ));
        }
        if self.breathing.period_secs == 0 {
            return Err(ValidationError::out_of_range(
                "breathing.period_secs",
                0,
                1,
                i64::from(u32::MAX),
            ));
        }
        Ok(())
    }

    /// Routine for `preset` with the configured step duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured duration is zero.
    pub fn routine(&self, preset: Preset) -> std::result::Result<Routine, ValidationError> {
        preset.routine_with(self.routines.step_secs(preset))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            CoreError::Config(ConfigError::InvalidValue {
                key: String::new(),
                message: e.to_string(),
            })
        })
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Get a config value as string by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist.
    pub fn get(&self, key: &str) -> Result<String> {
        let json = serde_json::to_value(self)?;
        let val = Self::get_json_value_by_path(&json, key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        Ok(match val {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
