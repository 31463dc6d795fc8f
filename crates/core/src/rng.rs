//! Injectable random source threaded through every generation step.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Uniform randomness consumed by the generators.
///
/// Only `next_u64` is required; the derived operations are defined on top of
/// it so any seeded stream gives reproducible worlds.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform float in `[0, 1)` built from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    /// Uniform integer in `[min, max]`.
    fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max);
        let span = (max - min) as u128 + 1;
        min + ((u128::from(self.next_u64()) * span) >> 64) as usize
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_with = self.range_inclusive(0, index);
            items.swap(index, swap_with);
        }
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.range_inclusive(0, items.len() - 1))
    }
}

#[derive(Clone, Debug)]
pub struct ChaChaSource {
    inner: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn seeded(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaSource {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}
