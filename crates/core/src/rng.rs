//! RNG module - deterministic randomness for board generation and move planning
//!
//! Wraps ChaCha8 so that the same seed always yields the same board, the same
//! starting team and the same automated moves. Independent streams can be split
//! off per purpose (for example one per automated player) without disturbing
//! the generator's sequence.

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

/// FNV-1a 64-bit over a byte stream; stable across platforms and toolchains
pub(crate) fn fnv1a64(bytes: impl IntoIterator<Item = u8>) -> u64 {
    bytes.into_iter().fold(FNV_OFFSET, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Seeded random source
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for a named purpose
    ///
    /// The same context always produces the same stream from the same seed.
    pub fn for_context(&self, context: &str) -> Self {
        let bytes = self.seed.to_le_bytes().into_iter().chain(context.bytes());
        Self::new(fnv1a64(bytes))
    }

    /// Uniform integer in `range`
    pub fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
