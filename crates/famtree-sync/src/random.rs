//! Pluggable randomness for fallback focus picks.

use rand::Rng;

pub trait RandomSource {
    /// Uniform index into `0..len`. `len` is never zero at call sites.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for tests, a Lehmer generator over the unit
/// interval.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        Self {
            seed: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_unit(&mut self) -> f64 {
        self.seed = (self.seed * 48_271) % 2_147_483_647;
        (self.seed - 1) as f64 / 2_147_483_646_f64
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }
}
