//! Static educational content and navigation.

mod catalog;
mod tips;

pub use catalog::{catalog, Activity, Tab};
pub use tips::{tips, About, ABOUT};
