//! # Tinnitus Relief Core Library
//!
//! This library provides the logic behind the Tinnitus Relief wrist app:
//! guided relaxation routines, short-term-memory games and the static
//! educational content shown between them. The host (a watch UI, or the
//! `tinnitus-cli` binary) owns rendering and timing; this crate only owns
//! state.
//!
//! ## Architecture
//!
//! - **Sequence Controller**: a tick-driven countdown-per-step state machine
//!   that backs every guided routine (meditation, progressive relaxation,
//!   jaw exercises, ear massage, neck stretches)
//! - **Games**: tap-pattern recall, color matching and a breathing pacer
//! - **Feedback**: every transition returns [`Event`]s carrying a
//!   [`FeedbackKind`]; the host decides whether and how to play each cue
//! - **Content**: daily tips, about text and the activity catalog
//!
//! Nothing in here spawns threads or sleeps. The caller delivers ticks.
//!
//! ## Key Components
//!
//! - [`SequenceController`]: guided routine state machine
//! - [`PatternGame`]: tap-pattern memory game
//! - [`ColorMatch`]: color matching game
//! - [`BreathingPacer`]: inhale/exhale pacer
//! - [`Config`]: read-only configuration defaults

pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod feedback;
pub mod games;
pub mod random;
pub mod sequence;
pub mod settings;
pub mod tick;

pub use config::Config;
pub use content::{catalog, tips, Activity, Tab, ABOUT};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::{Event, FeedbackKind};
pub use feedback::{deliver, FeedbackSink, Gated, Muted};
pub use games::{
    BreathPhase, BreathingPacer, BreathingRules, Color, ColorMatch, ColorRules, PatternGame,
    PatternPhase, PatternRules, SelectOutcome, TapOutcome,
};
pub use random::{seeded, RandomSource};
pub use sequence::{CheckpointPolicy, Preset, Routine, SequenceController, SequenceSnapshot};
pub use settings::{BackgroundSound, Settings};
pub use tick::{Cadence, SimulatedTicks, TickSource};
