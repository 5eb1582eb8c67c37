//! Randomness used for knockout draws.
//!
//! The bracket generator only needs one capability, shuffling a list in
//! place, so it takes a [`Shuffler`] rather than reaching for a global RNG.
//! Tests and audit tooling can pass a seeded or order-preserving shuffler.

use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng, seq::SliceRandom};

/// Shuffles a list in place
pub trait Shuffler {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Uniform shuffle backed by any `rand` generator
pub struct RngShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<ThreadRng> {
    /// Shuffler using the thread-local generator
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RngShuffler<StdRng> {
    /// Reproducible shuffler; the same seed always yields the same draw
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngShuffler<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves the list untouched, producing the bracket in input order
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveOrder;

impl Shuffler for PreserveOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
