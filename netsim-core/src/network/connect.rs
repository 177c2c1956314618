//! Poisson-degree random topology generation.

use tracing::{info, instrument};

use crate::{Result, error::NetworkError, random::RandomSource};

use super::Network;

/// Largest mean degree [`Network::random_connect`] accepts.
///
/// Every drawn partner becomes a buffered candidate, so larger means are
/// refused before any link is touched.
pub const MAX_MEAN_DEGREE: f64 = 1.0e6;

/// Tally of one `random_connect` pass.
#[derive(Clone, Copy, Debug, Default)]
struct ConnectTally {
    created: usize,
    drawn: usize,
    rejected: usize,
}

impl<R: RandomSource> Network<R> {
    /// Discards every link and rewires the network at random.
    ///
    /// Each node draws a target degree from a Poisson distribution with mean
    /// `mean_degree`, then draws that many candidate partners uniformly from
    /// all node indices and tries to link to each one. Candidates that are the
    /// node itself or already linked are skipped without a redraw, so a pass
    /// usually creates fewer links than it draws.
    ///
    /// Returns the number of links created. Every call starts from an empty
    /// link set and consumes fresh samples.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidMeanDegree`] when `mean_degree` is
    /// non-finite, negative, or above [`MAX_MEAN_DEGREE`]; the network is
    /// untouched in that case.
    /// Returns [`NetworkError::Random`] if the random source fails part way,
    /// leaving the links created up to that point.
    ///
    /// # Examples
    /// ```
    /// use netsim_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(50)?;
    /// let links = network.random_connect(3.0)?;
    /// assert_eq!(links, network.link_count());
    ///
    /// network.resize(0)?;
    /// assert_eq!(network.random_connect(1.0)?, 0);
    /// # Ok::<(), netsim_core::NetworkError>(())
    /// ```
    #[instrument(
        name = "network.random_connect",
        err,
        skip(self),
        fields(nodes = self.values.len()),
    )]
    pub fn random_connect(&mut self, mean_degree: f64) -> Result<usize> {
        if !(0.0..=MAX_MEAN_DEGREE).contains(&mean_degree) {
            return Err(NetworkError::InvalidMeanDegree { mean_degree });
        }

        self.links.clear();
        let node_count = self.values.len();
        let mut tally = ConnectTally::default();

        for node in 0..node_count {
            let degree = self.random.poisson(mean_degree)?;
            if degree == 0 {
                continue;
            }
            tally.drawn = tally.drawn.saturating_add(degree);
            let candidates = self.random.uniform_int(degree, 0, node_count - 1)?;
            for candidate in candidates {
                match self.links.try_insert(node, candidate, node_count) {
                    Ok(()) => tally.created += 1,
                    Err(_) => tally.rejected += 1,
                }
            }
        }

        info!(
            links = tally.created,
            drawn = tally.drawn,
            rejected = tally.rejected,
            "random connection completed"
        );
        Ok(tally.created)
    }
}
