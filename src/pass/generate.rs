//! Password generation.

use rand::rngs::StdRng;
use tracing::debug;
use zeroize::Zeroize;

use super::charset::{self, Category};
use super::options::GenerationOptions;
use crate::entropy::{self, RandomSource};

/// Builds passwords that contain at least one character of every enabled
/// category.
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Generator backed by the OS-seeded CSPRNG.
    pub fn new() -> Self {
        Self::with_source(entropy::os_rng())
    }
}

impl<R: RandomSource> Generator<R> {
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, options: &GenerationOptions) -> String {
        self.compose(options.length(), options.categories().iter())
    }

    /// Generate from an arbitrary category sequence.
    ///
    /// One character per category is always included, so when `length` is
    /// smaller than the number of categories the result is longer than
    /// requested rather than missing a category. No categories yields an
    /// empty string, which callers must treat as "no password".
    pub fn compose(
        &mut self,
        length: usize,
        categories: impl IntoIterator<Item = Category>,
    ) -> String {
        let categories: Vec<Category> = categories.into_iter().collect();
        let alphabet = charset::build(categories.iter().copied());
        if alphabet.is_empty() {
            return String::new();
        }

        let mut buf = Vec::with_capacity(length.max(categories.len()));
        for category in &categories {
            buf.push(random_byte(category.members(), &mut self.rng));
        }

        let remaining = length.saturating_sub(buf.len());
        for _ in 0..remaining {
            buf.push(random_byte(&alphabet, &mut self.rng));
        }

        shuffle(&mut buf, &mut self.rng);

        let pass: String = buf.iter().map(|&b| char::from(b)).collect();
        buf.zeroize();

        debug!(
            requested = length,
            produced = pass.len(),
            categories = categories.len(),
            alphabet = alphabet.len(),
            "generated password"
        );
        pass
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn random_byte<R: RandomSource>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.below(chars.len())]
}

/// Fisher-Yates: walk down from the last slot, swapping each with a uniform
/// slot at or below it.
#[inline]
fn shuffle<R: RandomSource>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.up_to(i);
        chars.swap(i, j);
    }
}
