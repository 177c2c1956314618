//! Shared test utilities for `netsim-core`.

use netsim_test_support::{ci::property_test_profile::ProptestRunProfile, random::DrawScript};
use proptest::test_runner::Config as ProptestConfig;

use crate::{error::RandomError, random::RandomSource};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] that replays a [`DrawScript`].
///
/// A spent Poisson failure budget surfaces as [`RandomError::InvalidMean`].
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedRandom(DrawScript);

impl ScriptedRandom {
    #[must_use]
    pub(crate) fn script(&self) -> &DrawScript {
        &self.0
    }
}

impl From<DrawScript> for ScriptedRandom {
    fn from(script: DrawScript) -> Self {
        Self(script)
    }
}

impl RandomSource for ScriptedRandom {
    fn normal(&mut self, count: usize, _mean: f64, _stddev: f64) -> Result<Vec<f64>, RandomError> {
        Ok(self.0.next_normals(count))
    }

    fn poisson(&mut self, mean: f64) -> Result<usize, RandomError> {
        self.0
            .next_poisson()
            .ok_or(RandomError::InvalidMean { mean })
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
        Ok(self.0.next_uniform(count, low))
    }
}

/// [`RandomSource`] that hands back half the requested normal samples.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ShortCountRandom;

impl RandomSource for ShortCountRandom {
    fn normal(&mut self, count: usize, mean: f64, _stddev: f64) -> Result<Vec<f64>, RandomError> {
        Ok(vec![mean; count / 2])
    }

    fn poisson(&mut self, _mean: f64) -> Result<usize, RandomError> {
        Ok(0)
    }

    fn uniform_int(
        &mut self,
        count: usize,
        low: usize,
        _high: usize,
    ) -> Result<Vec<usize>, RandomError> {
        Ok(vec![low; count])
    }
}

/// [`RandomSource`] that refuses every request.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FailingRandom;

impl RandomSource for FailingRandom {
    fn normal(&mut self, _count: usize, _mean: f64, stddev: f64) -> Result<Vec<f64>, RandomError> {
        Err(RandomError::InvalidStdDev { stddev })
    }

    fn poisson(&mut self, mean: f64) -> Result<usize, RandomError> {
        Err(RandomError::InvalidMean { mean })
    }

    fn uniform_int(
        &mut self,
        _count: usize,
        low: usize,
        high: usize,
    ) -> Result<Vec<usize>, RandomError> {
        Err(RandomError::InvalidRange { low, high })
    }
}
