mod checkpoint;
mod controller;
mod preset;
mod routine;

pub use checkpoint::CheckpointPolicy;
pub use controller::{SequenceController, SequenceSnapshot};
pub use preset::Preset;
pub use routine::Routine;
