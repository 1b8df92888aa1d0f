//! # chancery
//!
//! Seeded pseudo-random value generation: primitives (booleans, integers,
//! floats, characters, strings) and selection helpers (shuffle, pick,
//! weighted pick) over a single shared random stream.
//!
//! Everything draws from one [`Sampler`], an owned seeded generator. Seed it
//! explicitly to replay a stream, or let [`Chance::new`] seed one from the
//! clock:
//!
//! ```rust
//! use chancery::Chance;
//!
//! # fn main() -> Result<(), chancery::ChanceError> {
//! let mut chance = Chance::with_seed(42);
//!
//! let roll = chance.integer(1, 6)?;
//! assert!((1..=6).contains(&roll));
//!
//! let tier = chance.weighted_int(&[1, 2, 3], &[60, 30, 10])?;
//! assert!([1, 2, 3].contains(&tier));
//!
//! let tag = chance.string(8, chancery::HEX_POOL)?;
//! assert_eq!(tag.len(), 8);
//! # Ok(()) }
//! ```
//!
//! ## Weighted selection
//!
//! [`Chance::weighted_int`] and [`Chance::weighted_float`] drop non-positive
//! weights, then invert the cumulative distribution: a draw lands somewhere
//! inside the total weight and the weight block containing it wins. Float
//! weights below 1 are rescaled first so none of them degenerates.
//!
//! ## Gotchas
//! * One generator, one stream: draws mutate the sampler, so share it behind
//!   `&mut` or give each thread its own. Nothing here synchronizes.
//! * Not cryptographic. Seeds and streams are for tests, simulations and
//!   sample data.

mod error;
mod sampler;
mod shuffle;
mod weighted;

pub use error::ChanceError;
pub use sampler::Sampler;

use rand::Rng;
use rand::rngs::StdRng;

pub const NUMBERS: &str = "0123456789";
pub const CHARS_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const CHARS_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const HEX_POOL: &str = "0123456789abcdef";
pub const SYMBOLS: &str = "!@#$%^&*()[]";

/// Letter casing for [`Chance::character`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Casing {
    #[default]
    Any,
    Lower,
    Upper,
}

/// Pool selection for [`Chance::character`].
///
/// The default draws from letters, digits and symbols combined. An explicit
/// non-empty `pool` overrides everything else; otherwise `alpha` restricts
/// the draw to letters (per `casing`) and `symbols` to the symbol set.
#[derive(Debug, Clone, Default)]
pub struct CharOptions {
    pub casing: Casing,
    pub pool: Option<String>,
    pub alpha: bool,
    pub symbols: bool,
}

/// Random value generator over one owned [`Sampler`].
///
/// ```rust
/// use chancery::{Chance, CharOptions};
///
/// let mut chance = Chance::with_seed(7);
/// let c = chance.character(&CharOptions::default()).unwrap();
/// assert!(c.is_ascii());
/// ```
#[derive(Debug, Clone)]
pub struct Chance<R = StdRng> {
    sampler: Sampler<R>,
}

impl Chance {
    /// Time-seeded generator.
    pub fn new() -> Self {
        Self {
            sampler: Sampler::new(),
        }
    }

    /// Fixed-seed generator for reproducible streams.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            sampler: Sampler::with_seed(seed),
        }
    }
}

impl Default for Chance {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Chance<R> {
    /// Wrap an existing `rand` generator.
    pub fn from_rng(rng: R) -> Self {
        Self {
            sampler: Sampler::from_rng(rng),
        }
    }

    /// The underlying sampler, for direct primitive draws.
    pub fn sampler(&mut self) -> &mut Sampler<R> {
        &mut self.sampler
    }

    /// True roughly `likelihood` percent of the time.
    ///
    /// With `clamp`, an out-of-range likelihood saturates into `0..=100`
    /// instead of erroring.
    ///
    /// # Errors
    /// [`ChanceError::Likelihood`] when `likelihood` is outside `0..=100`
    /// and `clamp` is false.
    pub fn boolean(&mut self, likelihood: i64, clamp: bool) -> Result<bool, ChanceError> {
        if !clamp && !(0..=100).contains(&likelihood) {
            return Err(ChanceError::Likelihood { value: likelihood });
        }
        let likelihood = likelihood.clamp(0, 100);
        Ok(((self.sampler.float01() * 100.0) as i64) < likelihood)
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    ///
    /// # Errors
    /// [`ChanceError::InvertedRange`] when `min > max`.
    pub fn integer(&mut self, min: i64, max: i64) -> Result<i64, ChanceError> {
        self.sampler.uniform_int(min, max)
    }

    /// Uniform float in the half-open range `[min, max)`.
    ///
    /// # Errors
    /// [`ChanceError::InvertedRange`] when `min > max`.
    pub fn float(&mut self, min: f64, max: f64) -> Result<f64, ChanceError> {
        self.sampler.uniform_float(min, max)
    }

    /// One character drawn from the pool described by `opts`. An empty
    /// explicit pool is ignored in favor of the fallback pools, so the draw
    /// always has candidates.
    ///
    /// # Errors
    /// [`ChanceError::AlphaAndSymbols`] when both restriction flags are set.
    pub fn character(&mut self, opts: &CharOptions) -> Result<char, ChanceError> {
        if opts.alpha && opts.symbols {
            return Err(ChanceError::AlphaAndSymbols);
        }
        let letters = match opts.casing {
            Casing::Lower => CHARS_LOWER.to_string(),
            Casing::Upper => CHARS_UPPER.to_string(),
            Casing::Any => format!("{CHARS_LOWER}{CHARS_UPPER}"),
        };
        let pool: Vec<char> = match &opts.pool {
            Some(p) if !p.is_empty() => p.chars().collect(),
            _ if opts.alpha => letters.chars().collect(),
            _ if opts.symbols => SYMBOLS.chars().collect(),
            _ => format!("{letters}{NUMBERS}{SYMBOLS}").chars().collect(),
        };
        let at = self.sampler.random_index(pool.len())?;
        Ok(pool[at])
    }

    /// String of `length` characters drawn uniformly from `pool`.
    ///
    /// # Errors
    /// * [`ChanceError::ZeroLength`] when `length` is zero.
    /// * [`ChanceError::Empty`] when `pool` is empty.
    pub fn string(&mut self, length: usize, pool: &str) -> Result<String, ChanceError> {
        if length == 0 {
            return Err(ChanceError::ZeroLength);
        }
        let pool: Vec<char> = pool.chars().collect();
        if pool.is_empty() {
            return Err(ChanceError::Empty);
        }
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            out.push(pool[self.sampler.random_index(pool.len())?]);
        }
        Ok(out)
    }

    /// Uniformly random permutation of `seq`. The input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, seq: &[T]) -> Vec<T> {
        self.sampler.shuffle(seq)
    }

    /// `count` distinct elements drawn without replacement.
    ///
    /// # Errors
    /// [`ChanceError::Empty`] when `seq` is empty.
    pub fn pick<T: Clone>(&mut self, seq: &[T], count: usize) -> Result<Vec<T>, ChanceError> {
        self.sampler.pick(seq, count)
    }

    /// One value selected with probability proportional to its weight.
    ///
    /// # Errors
    /// See [`Sampler::weighted_int`].
    pub fn weighted_int(&mut self, values: &[i64], weights: &[i64]) -> Result<i64, ChanceError> {
        self.sampler.weighted_int(values, weights)
    }

    /// Float-weighted variant of [`weighted_int`](Self::weighted_int).
    ///
    /// # Errors
    /// See [`Sampler::weighted_float`].
    pub fn weighted_float(&mut self, values: &[f64], weights: &[f64]) -> Result<f64, ChanceError> {
        self.sampler.weighted_float(values, weights)
    }
}

/// Uppercase the first character of `word`; empty input stays empty.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_respects_likelihood_bounds() {
        let mut chance = Chance::with_seed(1);
        for _ in 0..1000 {
            assert!(!chance.boolean(0, false).unwrap());
            assert!(chance.boolean(100, false).unwrap());
        }
        assert!(matches!(
            chance.boolean(101, false),
            Err(ChanceError::Likelihood { value: 101 })
        ));
        assert!(matches!(
            chance.boolean(-1, false),
            Err(ChanceError::Likelihood { value: -1 })
        ));
        // clamped likelihoods saturate instead
        assert!(chance.boolean(101, true).unwrap());
        assert!(!chance.boolean(-1, true).unwrap());
    }

    #[test]
    fn boolean_is_roughly_fair_at_fifty() {
        let mut chance = Chance::with_seed(2);
        const DRAWS: usize = 50_000;
        let heads = (0..DRAWS)
            .filter(|_| chance.boolean(50, false).unwrap())
            .count();
        let emp = heads as f64 / DRAWS as f64;
        assert!((emp - 0.5).abs() < 0.01, "emp={emp}");
    }

    #[test]
    fn string_draws_only_from_the_pool() {
        let mut chance = Chance::with_seed(3);
        let s = chance.string(64, HEX_POOL).unwrap();
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| HEX_POOL.contains(c)), "{s}");
    }

    #[test]
    fn string_validates_arguments() {
        let mut chance = Chance::with_seed(4);
        assert!(matches!(
            chance.string(0, HEX_POOL),
            Err(ChanceError::ZeroLength)
        ));
        assert!(matches!(chance.string(5, ""), Err(ChanceError::Empty)));
    }

    #[test]
    fn character_resolves_pools_in_priority_order() {
        let mut chance = Chance::with_seed(5);

        // explicit pool wins over everything
        let opts = CharOptions {
            pool: Some("xyz".into()),
            alpha: true,
            ..CharOptions::default()
        };
        for _ in 0..100 {
            assert!("xyz".contains(chance.character(&opts).unwrap()));
        }

        // casing restricts the alpha pool
        let opts = CharOptions {
            casing: Casing::Upper,
            alpha: true,
            ..CharOptions::default()
        };
        for _ in 0..100 {
            assert!(chance.character(&opts).unwrap().is_ascii_uppercase());
        }

        let opts = CharOptions {
            symbols: true,
            ..CharOptions::default()
        };
        for _ in 0..100 {
            assert!(SYMBOLS.contains(chance.character(&opts).unwrap()));
        }

        // default mixes letters, digits and symbols
        let everything = format!("{CHARS_LOWER}{CHARS_UPPER}{NUMBERS}{SYMBOLS}");
        for _ in 0..100 {
            let c = chance.character(&CharOptions::default()).unwrap();
            assert!(everything.contains(c), "{c}");
        }
    }

    #[test]
    fn character_rejects_conflicting_flags() {
        let mut chance = Chance::with_seed(6);
        let opts = CharOptions {
            alpha: true,
            symbols: true,
            ..CharOptions::default()
        };
        assert!(matches!(
            chance.character(&opts),
            Err(ChanceError::AlphaAndSymbols)
        ));
    }

    #[test]
    fn capitalize_uppercases_the_first_character() {
        assert_eq!(capitalize("word"), "Word");
        assert_eq!(capitalize("Word"), "Word");
        assert_eq!(capitalize("w"), "W");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("über"), "Über");
    }

    #[test]
    fn facade_delegates_to_one_stream() {
        // the facade and a bare sampler on the same seed produce the same draws
        let mut chance = Chance::with_seed(77);
        let mut sampler = Sampler::with_seed(77);
        for _ in 0..50 {
            assert_eq!(
                chance.integer(-100, 100).unwrap(),
                sampler.uniform_int(-100, 100).unwrap()
            );
        }
    }

    #[test]
    fn smoke_time_seeded() {
        let mut chance = Chance::new();
        let _ = chance.integer(1, 6).unwrap();
        let _ = chance.shuffle(&[1, 2, 3]);
    }
}
