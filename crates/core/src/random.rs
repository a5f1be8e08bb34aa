use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};

/// Source of randomness for content selection.
///
/// `Default` draws from the thread-local generator. `Seeded` replays the same
/// sequence for a given seed, which keeps tests and demo runs deterministic.
#[derive(Debug, Default)]
pub enum RandomSource {
    #[default]
    Default,
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    /// Returns a source backed by the thread-local generator.
    #[must_use]
    pub fn default_source() -> Self {
        Self::Default
    }

    /// Returns a reproducible source for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[must_use]
    pub fn index(&self, len: usize) -> usize {
        match self {
            RandomSource::Default => rng().random_range(0..len),
            RandomSource::Seeded(inner) => inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .random_range(0..len),
        }
    }

    #[must_use]
    pub fn is_seeded(&self) -> bool {
        matches!(self, RandomSource::Seeded(_))
    }
}
