//! Deterministic random number generation for dealing boards.
//!
//! The engine itself never draws random numbers. Hosts that want the crate
//! to deal for them use `DealRng` so that a seed fully determines the layout,
//! which keeps tests and replays reproducible.
//!
//! ```
//! use memory_match::core::DealRng;
//!
//! let mut a = DealRng::new(42);
//! let mut b = DealRng::new(42);
//!
//! let mut xs = [1, 2, 3, 4, 5, 6];
//! let mut ys = xs;
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for dealing.
///
/// Uses ChaCha8 so the same seed gives the same deal on every platform.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
