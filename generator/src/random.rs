//! Random value source used by the generator.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

use crate::error::GenResult;

/// Source of uniformly distributed integers.
///
/// Every draw the generator makes goes through this trait, so a seeded or
/// stubbed source fully determines the generated bytes.
pub trait RandomSource {
    /// Draws a value uniformly from `0..=max`.
    fn draw_inclusive(&mut self, max: u32) -> GenResult<u32>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn draw_inclusive(&mut self, max: u32) -> GenResult<u32> {
        (**self).draw_inclusive(max)
    }
}

/// Adapts any [`rand::RngCore`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Creates a deterministic source; equal seeds give equal output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from operating system entropy.
    pub fn from_entropy() -> GenResult<Self> {
        let rng = StdRng::from_rng(OsRng)?;
        Ok(Self::new(rng))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn draw_inclusive(&mut self, max: u32) -> GenResult<u32> {
        Ok(self.rng.gen_range(0..=max))
    }
}
