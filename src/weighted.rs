//! Weighted selection by cumulative-distribution inversion.
//!
//! Both selectors share the same skeleton: drop non-positive weights, sum
//! what is left, draw a position inside the total weight, and walk the
//! running sums until the block containing the draw is found. The index of
//! that block is the selection.

use rand::Rng;

use crate::error::ChanceError;
use crate::sampler::Sampler;

impl<R: Rng> Sampler<R> {
    /// Select one value with probability proportional to its paired weight.
    ///
    /// Pairs whose weight is not positive are dropped before selection. The
    /// draw is an integer in `[1, total]`, so each surviving index owns a
    /// block of exactly `weight` positions.
    ///
    /// # Errors
    /// * [`ChanceError::LengthMismatch`] when the slices differ in length.
    /// * [`ChanceError::Empty`] when no pair survives the weight filter.
    pub fn weighted_int(&mut self, values: &[i64], weights: &[i64]) -> Result<i64, ChanceError> {
        if values.len() != weights.len() {
            return Err(ChanceError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let pairs: Vec<(i64, i64)> = values
            .iter()
            .zip(weights)
            .filter(|&(_, &w)| w > 0)
            .map(|(&v, &w)| (v, w))
            .collect();
        if pairs.is_empty() {
            return Err(ChanceError::Empty);
        }

        // Every surviving weight is >= 1, so total >= 1 and the draw below
        // always has a valid range.
        let total: i64 = pairs.iter().map(|&(_, w)| w).sum();
        let selected = self.uniform_int(1, total)?;

        let mut running = 0i64;
        for (value, weight) in pairs {
            if selected <= running + weight {
                return Ok(value);
            }
            running += weight;
        }
        unreachable!("cumulative walk exhausted: drew {selected} of {running}");
    }

    /// Float-weighted variant of [`weighted_int`](Self::weighted_int).
    ///
    /// When the smallest surviving weight is below 1, all weights are first
    /// rescaled so that it becomes 1, keeping tiny weights wide enough to be
    /// hit. The draw is continuous over `[0, total)`, so each index is hit
    /// with probability `weight / total`. NaN weights fail the positivity
    /// filter and are dropped.
    ///
    /// # Errors
    /// * [`ChanceError::LengthMismatch`] when the slices differ in length.
    /// * [`ChanceError::Empty`] when no pair survives the weight filter.
    /// * [`ChanceError::NonFiniteTotal`] when the scaled weights do not sum
    ///   to a finite value.
    pub fn weighted_float(&mut self, values: &[f64], weights: &[f64]) -> Result<f64, ChanceError> {
        if values.len() != weights.len() {
            return Err(ChanceError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let mut pairs: Vec<(f64, f64)> = values
            .iter()
            .zip(weights)
            .filter(|&(_, &w)| w > 0.0)
            .map(|(&v, &w)| (v, w))
            .collect();
        if pairs.is_empty() {
            return Err(ChanceError::Empty);
        }

        let smallest = pairs.iter().map(|&(_, w)| w).fold(f64::INFINITY, f64::min);
        if smallest < 1.0 {
            let scale = 1.0 / smallest;
            for (_, w) in &mut pairs {
                *w *= scale;
            }
        }

        let total: f64 = pairs.iter().map(|&(_, w)| w).sum();
        if !total.is_finite() {
            return Err(ChanceError::NonFiniteTotal);
        }
        let selected = self.uniform_float(0.0, total)?;

        // running accumulates the same additions in the same order as total,
        // so the final block's upper edge is exactly total and a draw from
        // [0, total) always lands inside some block.
        let mut running = 0.0f64;
        for (value, weight) in pairs {
            if selected < running + weight {
                return Ok(value);
            }
            running += weight;
        }
        unreachable!("cumulative walk exhausted: drew {selected} of {running}");
    }
}
