//! Pre-recorded draws for scripted random sources.
//!
//! [`DrawScript`] holds the queues only. Each test crate wraps it in a thin
//! `RandomSource` adapter, because the trait lives in the crate under test.

use std::collections::VecDeque;

/// Queues of normal, Poisson, and uniform draws replayed in order.
///
/// Exhausted queues fall back to `0.0` for normals, `0` for Poisson draws,
/// and the lower bound for uniform draws, which keeps unscripted nodes
/// isolated.
///
/// # Examples
/// ```
/// use netsim_test_support::random::DrawScript;
///
/// let mut script = DrawScript::new()
///     .with_poisson([2])
///     .with_uniform([4])
///     .fail_poisson_after(1);
/// assert_eq!(script.next_poisson(), Some(2));
/// assert_eq!(script.next_uniform(2, 1), vec![4, 1]);
/// assert_eq!(script.next_poisson(), None);
/// assert_eq!(script.poisson_calls(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DrawScript {
    normals: VecDeque<f64>,
    poisson: VecDeque<usize>,
    uniform: VecDeque<usize>,
    poisson_calls: usize,
    poisson_budget: Option<usize>,
}

impl DrawScript {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends normal samples.
    #[must_use]
    pub fn with_normals(mut self, normals: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(normals);
        self
    }

    /// Appends Poisson draws.
    #[must_use]
    pub fn with_poisson(mut self, draws: impl IntoIterator<Item = usize>) -> Self {
        self.poisson.extend(draws);
        self
    }

    /// Appends uniform draws.
    #[must_use]
    pub fn with_uniform(mut self, draws: impl IntoIterator<Item = usize>) -> Self {
        self.uniform.extend(draws);
        self
    }

    /// Makes every Poisson request after the first `calls` fail.
    #[must_use]
    pub fn fail_poisson_after(mut self, calls: usize) -> Self {
        self.poisson_budget = Some(calls);
        self
    }

    /// Number of Poisson draws requested so far, failed ones included.
    #[must_use]
    pub fn poisson_calls(&self) -> usize {
        self.poisson_calls
    }

    /// Pops `count` normal samples.
    pub fn next_normals(&mut self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| self.normals.pop_front().unwrap_or(0.0))
            .collect()
    }

    /// Pops one Poisson draw, or `None` once the failure budget is spent.
    pub fn next_poisson(&mut self) -> Option<usize> {
        self.poisson_calls += 1;
        if self
            .poisson_budget
            .is_some_and(|budget| self.poisson_calls > budget)
        {
            return None;
        }
        Some(self.poisson.pop_front().unwrap_or(0))
    }

    /// Pops `count` uniform draws, falling back to `low`.
    pub fn next_uniform(&mut self, count: usize, low: usize) -> Vec<usize> {
        (0..count)
            .map(|_| self.uniform.pop_front().unwrap_or(low))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn exhausted_queues_fall_back_to_defaults() {
        let mut script = DrawScript::new().with_normals([1.5]);
        assert_eq!(script.next_normals(3), vec![1.5, 0.0, 0.0]);
        assert_eq!(script.next_poisson(), Some(0));
        assert_eq!(script.next_uniform(2, 7), vec![7, 7]);
    }

    #[rstest]
    #[case(0, vec![None, None])]
    #[case(1, vec![Some(3), None])]
    #[case(2, vec![Some(3), Some(5)])]
    fn failure_budget_limits_poisson_draws(
        #[case] budget: usize,
        #[case] expected: Vec<Option<usize>>,
    ) {
        let mut script = DrawScript::new()
            .with_poisson([3, 5])
            .fail_poisson_after(budget);
        let drawn: Vec<_> = (0..2).map(|_| script.next_poisson()).collect();
        assert_eq!(drawn, expected);
        assert_eq!(script.poisson_calls(), 2);
    }
}
