use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shared randomness for identifier generation and quiz shuffling.
///
/// Held in application state and handed to the services that need it, so tests
/// can swap in a seeded instance and get reproducible identifiers and orders.
pub(crate) struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    pub(crate) fn from_entropy() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    #[cfg(test)]
    pub(crate) fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Returns `len` uniformly drawn decimal digits; leading zeros are kept.
    pub(crate) fn numeric(&self, len: usize) -> String {
        let mut rng = self.lock();
        (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
    }

    pub(crate) fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.lock());
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}
