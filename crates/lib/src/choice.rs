//! # Choice Sources
//!
//! The enhancer never touches a random number generator directly. It asks a
//! [`ChoiceSource`] for "one of N" instead, so callers can pin the output by
//! handing in a seeded source.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Picks one option out of `options`.
pub trait ChoiceSource {
    /// Returns an index in `0..options`. Returns 0 when `options` is 0.
    fn next_choice(&mut self, options: usize) -> usize;
}

/// A choice source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChoices<R> {
    rng: R,
}

impl<R: RngCore> RngChoices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChoices<StdRng> {
    /// A reproducible source: the same seed yields the same sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds the generator from the MD5 digest of `text`.
    pub fn from_text(text: &str) -> Self {
        let digest = md5::compute(text.as_bytes());
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&digest.0[..8]);
        Self::seeded(u64::from_le_bytes(seed))
    }
}

impl<R: RngCore> ChoiceSource for RngChoices<R> {
    fn next_choice(&mut self, options: usize) -> usize {
        if options == 0 {
            return 0;
        }
        self.rng.gen_range(0..options)
    }
}

/// Draws from the thread-local generator on every call.
///
/// Holds no generator itself, so it is `Send` and can live in async code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadChoices;

impl ChoiceSource for ThreadChoices {
    fn next_choice(&mut self, options: usize) -> usize {
        if options == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..options)
    }
}
