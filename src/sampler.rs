//! Uniform sampling primitives over a single owned generator.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ChanceError;

/// One seeded generator and the uniform draws built on it.
///
/// Every draw advances the generator; the stream is never reset after
/// construction. Generic over the backing generator so tests and benches can
/// substitute their own (e.g. a PCG).
#[derive(Debug, Clone)]
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler {
    /// Sampler seeded from the wall clock at nanosecond resolution.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Self::with_seed(seed)
    }

    /// Fixed-seed sampler; equal seeds replay equal draw sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Sampler<R> {
    /// Wrap an existing `rand` generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn float01(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniform integer over the inclusive range `[min, max]`.
    ///
    /// # Errors
    /// [`ChanceError::InvertedRange`] when `min > max`.
    pub fn uniform_int(&mut self, min: i64, max: i64) -> Result<i64, ChanceError> {
        if min > max {
            return Err(ChanceError::InvertedRange);
        }
        // floor, not a cast: truncation toward zero would bias negative ranges.
        let span = max as f64 - min as f64 + 1.0;
        Ok((self.float01() * span + min as f64).floor() as i64)
    }

    /// Uniform float over the half-open range `[min, max)`.
    ///
    /// # Errors
    /// [`ChanceError::InvertedRange`] when `min > max`.
    pub fn uniform_float(&mut self, min: f64, max: f64) -> Result<f64, ChanceError> {
        if min > max {
            return Err(ChanceError::InvertedRange);
        }
        Ok(self.float01() * (max - min) + min)
    }

    /// Uniform index in `0..n`.
    ///
    /// # Errors
    /// [`ChanceError::Empty`] when `n` is zero.
    pub fn random_index(&mut self, n: usize) -> Result<usize, ChanceError> {
        if n == 0 {
            return Err(ChanceError::Empty);
        }
        Ok(self.index_below(n))
    }

    /// `random_index` for callers that have already ruled out `n == 0`.
    #[inline]
    pub(crate) fn index_below(&mut self, n: usize) -> usize {
        (self.float01() * n as f64) as usize
    }
}
