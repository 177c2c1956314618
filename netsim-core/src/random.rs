//! Random-number service consumed by [`crate::Network`].
//!
//! The network never touches a global generator. It asks an injected
//! [`RandomSource`] for normal, Poisson, and uniform-integer samples, so tests
//! can substitute a scripted source and simulations can pin a seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Normal, Poisson};

use crate::error::RandomError;

/// Seed used when no explicit seed is configured.
pub(crate) const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Capability that produces samples from the distributions the network needs.
///
/// # Examples
/// ```
/// use netsim_core::{RandomSource, SeededRandom};
///
/// let mut random = SeededRandom::new(7);
/// let samples = random.uniform_int(4, 2, 5)?;
/// assert_eq!(samples.len(), 4);
/// assert!(samples.iter().all(|draw| (2..=5).contains(draw)));
/// # Ok::<(), netsim_core::RandomError>(())
/// ```
pub trait RandomSource {
    /// Draws `count` independent samples from a normal distribution.
    ///
    /// # Errors
    /// Returns [`RandomError::InvalidStdDev`] when `stddev` is negative or
    /// non-finite and [`RandomError::InvalidMean`] when `mean` is non-finite.
    fn normal(&mut self, count: usize, mean: f64, stddev: f64) -> Result<Vec<f64>, RandomError>;

    /// Draws one sample from a Poisson distribution with the given mean.
    ///
    /// # Errors
    /// Returns [`RandomError::InvalidMean`] when `mean` is negative or
    /// non-finite and [`RandomError::CountOverflow`] when the draw does not
    /// fit in `usize`.
    fn poisson(&mut self, mean: f64) -> Result<usize, RandomError>;

    /// Draws `count` independent integers uniformly from `low..=high`.
    ///
    /// # Errors
    /// Returns [`RandomError::InvalidRange`] when `low > high`.
    fn uniform_int(
        &mut self,
        count: usize,
        low: usize,
        high: usize,
    ) -> Result<Vec<usize>, RandomError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn normal(&mut self, count: usize, mean: f64, stddev: f64) -> Result<Vec<f64>, RandomError> {
        (**self).normal(count, mean, stddev)
    }

    fn poisson(&mut self, mean: f64) -> Result<usize, RandomError> {
        (**self).poisson(mean)
    }

    fn uniform_int(
        &mut self,
        count: usize,
        low: usize,
        high: usize,
    ) -> Result<Vec<usize>, RandomError> {
        (**self).uniform_int(count, low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn normal(&mut self, count: usize, mean: f64, stddev: f64) -> Result<Vec<f64>, RandomError> {
        (**self).normal(count, mean, stddev)
    }

    fn poisson(&mut self, mean: f64) -> Result<usize, RandomError> {
        (**self).poisson(mean)
    }

    fn uniform_int(
        &mut self,
        count: usize,
        low: usize,
        high: usize,
    ) -> Result<Vec<usize>, RandomError> {
        (**self).uniform_int(count, low, high)
    }
}

/// Default [`RandomSource`] backed by a seeded [`SmallRng`].
///
/// Two sources built from the same seed yield identical sample streams.
///
/// # Examples
/// ```
/// use netsim_core::{RandomSource, SeededRandom};
///
/// let mut left = SeededRandom::new(11);
/// let mut right = SeededRandom::new(11);
/// assert_eq!(left.normal(3, 0.0, 1.0)?, right.normal(3, 0.0, 1.0)?);
/// # Ok::<(), netsim_core::RandomError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    fn normal(&mut self, count: usize, mean: f64, stddev: f64) -> Result<Vec<f64>, RandomError> {
        if !mean.is_finite() {
            return Err(RandomError::InvalidMean { mean });
        }
        if !stddev.is_finite() || stddev < 0.0 {
            return Err(RandomError::InvalidStdDev { stddev });
        }
        let distribution =
            Normal::new(mean, stddev).map_err(|_| RandomError::InvalidStdDev { stddev })?;
        Ok(distribution
            .sample_iter(&mut self.rng)
            .take(count)
            .collect())
    }

    fn poisson(&mut self, mean: f64) -> Result<usize, RandomError> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(RandomError::InvalidMean { mean });
        }
        // A zero rate is degenerate: every draw is zero.
        if mean == 0.0 {
            return Ok(0);
        }
        let distribution = Poisson::new(mean).map_err(|_| RandomError::InvalidMean { mean })?;
        count_from_draw(distribution.sample(&mut self.rng))
    }

    fn uniform_int(
        &mut self,
        count: usize,
        low: usize,
        high: usize,
    ) -> Result<Vec<usize>, RandomError> {
        if low > high {
            return Err(RandomError::InvalidRange { low, high });
        }
        Ok((0..count)
            .map(|_| self.rng.gen_range(low..=high))
            .collect())
    }
}

/// Converts a floating-point count draw into `usize` without saturating.
fn count_from_draw(draw: f64) -> Result<usize, RandomError> {
    // `usize::MAX as f64` rounds up to 2^64 (or 2^32), which is out of range.
    if !(0.0..usize::MAX as f64).contains(&draw) {
        return Err(RandomError::CountOverflow { draw });
    }
    Ok(draw as usize)
}
