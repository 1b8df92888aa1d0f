//! Shuffling and without-replacement picking.

use rand::Rng;

use crate::error::ChanceError;
use crate::sampler::Sampler;

impl<R: Rng> Sampler<R> {
    /// Uniformly random permutation of `seq` (Fisher–Yates over a copy).
    pub fn shuffle<T: Clone>(&mut self, seq: &[T]) -> Vec<T> {
        let mut out = seq.to_vec();
        for i in (1..out.len()).rev() {
            // j in [0, i] inclusive; i itself must be a candidate.
            let j = self.index_below(i + 1);
            out.swap(i, j);
        }
        out
    }

    /// `count` distinct elements drawn without replacement.
    ///
    /// A `count` of zero or one yields a single uniformly chosen element.
    /// A `count` of `seq.len()` or more yields a permutation of the whole
    /// sequence.
    ///
    /// # Errors
    /// [`ChanceError::Empty`] when `seq` is empty.
    pub fn pick<T: Clone>(&mut self, seq: &[T], count: usize) -> Result<Vec<T>, ChanceError> {
        if seq.is_empty() {
            return Err(ChanceError::Empty);
        }
        if count <= 1 {
            let i = self.index_below(seq.len());
            return Ok(vec![seq[i].clone()]);
        }
        let mut picked = self.shuffle(seq);
        picked.truncate(count);
        Ok(picked)
    }
}
