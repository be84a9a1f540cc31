//! Random source for the games.
//!
//! The games never touch a global generator. They take a [`RandomSource`],
//! which production code builds from entropy and tests build from a seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub trait RandomSource {
    /// Uniform draw from `low..=high`.
    fn int_in(&mut self, low: u32, high: u32) -> u32;

    /// Uniform in-place shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl RandomSource for Pcg64 {
    fn int_in(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// Generator the games use outside of tests.
pub type GameRng = Pcg64;

/// Deterministic generator for a given seed.
pub fn seeded(seed: u64) -> GameRng {
    Pcg64::seed_from_u64(seed)
}

/// Generator seeded from the OS.
pub fn from_entropy() -> GameRng {
    Pcg64::from_entropy()
}
