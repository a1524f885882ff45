//! Random sources for password generation.
//!
//! The generator never touches a global RNG. It draws through
//! [`RandomSource`], which is implemented for every `rand` generator that
//! is also a [`CryptoRng`], so a general-purpose PRNG cannot be plugged in
//! by accident.

use rand::rngs::StdRng;
use rand::{CryptoRng, Rng, SeedableRng};

/// Uniform index draws.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn below(&mut self, len: usize) -> usize;

    /// Uniform index in `0..=max`.
    fn up_to(&mut self, max: usize) -> usize;
}

// `random_range` rejects out-of-zone samples, so there is no modulo bias.
impl<R: Rng + CryptoRng> RandomSource for R {
    #[inline]
    fn below(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    #[inline]
    fn up_to(&mut self, max: usize) -> usize {
        self.random_range(0..=max)
    }
}

/// ChaCha-based CSPRNG seeded from the operating system.
pub fn os_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Human readable name of the production entropy source.
pub fn source_name() -> &'static str {
    "OS entropy (ChaCha12)"
}
