use netsim_core::{RandomError, RandomSource};
use netsim_test_support::random::DrawScript;

/// Public-API [`RandomSource`] that replays a [`DrawScript`].
#[derive(Debug, Default)]
pub struct ReplaySource(DrawScript);

impl From<DrawScript> for ReplaySource {
    fn from(script: DrawScript) -> Self {
        Self(script)
    }
}

impl RandomSource for ReplaySource {
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
        _high: usize,
    ) -> Result<Vec<usize>, RandomError> {
        Ok(self.0.next_uniform(count, low))
    }
}
