mod breathing;
mod color;
mod pattern;

pub use breathing::{BreathPhase, BreathingPacer, BreathingRules};
pub use color::{Color, ColorMatch, ColorMatchSnapshot, ColorRules, SelectOutcome, PALETTE};
pub use pattern::{
    tap_color, PatternGame, PatternPhase, PatternRules, PatternSnapshot, TapOutcome, TAP_MAX,
    TAP_MIN,
};
