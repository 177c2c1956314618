//! The [`Network`] entity: scalar node values plus an undirected link
//! relation over node indices.
//!
//! A node is identified solely by its position in the value sequence. Links
//! are unweighted, loop-free, and stored once per direction.

mod connect;
mod links;

#[cfg(test)]
mod property;

use tracing::{debug, instrument, trace, warn};

use crate::{
    Result,
    builder::{NetworkBuilder, ResizePolicy},
    error::NetworkError,
    invariants::NetworkInvariantChecker,
    random::{RandomSource, SeededRandom},
};

pub use self::connect::MAX_MEAN_DEGREE;
pub use self::links::LinkRejection;
pub(crate) use self::links::LinkTable;

/// Undirected graph of scalar-valued nodes.
///
/// A freshly constructed network has no nodes. [`Network::resize`] is the
/// only operation that changes the node count, [`Network::random_connect`]
/// rebuilds the link relation in bulk, and [`Network::add_link`] adds one
/// edge at a time.
///
/// # Examples
/// ```
/// use netsim_core::Network;
///
/// let mut network = Network::new();
/// network.resize(3)?;
/// assert!(network.add_link(0, 2));
/// assert!(!network.add_link(2, 0));
/// assert_eq!(network.neighbors(2)?, vec![0]);
/// assert_eq!(network.degree(1)?, 0);
/// # Ok::<(), netsim_core::NetworkError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Network<R = SeededRandom> {
    values: Vec<f64>,
    links: LinkTable,
    random: R,
    resize_policy: ResizePolicy,
}

impl Network<SeededRandom> {
    /// Creates an empty network with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        NetworkBuilder::new().build()
    }
}

impl Default for Network<SeededRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Network<R> {
    /// Creates an empty network that draws samples from `random`.
    #[must_use]
    pub fn with_random_source(random: R) -> Self {
        NetworkBuilder::new().build_with(random)
    }

    pub(crate) fn from_parts(random: R, resize_policy: ResizePolicy) -> Self {
        Self {
            values: Vec::new(),
            links: LinkTable::default(),
            random,
            resize_policy,
        }
    }

    /// Sets the node count to `size` and redraws every value from a standard
    /// normal distribution.
    ///
    /// Links are handled according to the configured [`ResizePolicy`]. With
    /// the default policy, links between surviving nodes are kept.
    ///
    /// # Errors
    /// Returns [`NetworkError::Random`] if the random source fails and
    /// [`NetworkError::SampleCountMismatch`] if it returns a batch of the
    /// wrong length. The network is left unchanged in both cases.
    ///
    /// # Examples
    /// ```
    /// use netsim_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(5)?;
    /// assert_eq!(network.size(), 5);
    /// network.resize(0)?;
    /// assert!(network.is_empty());
    /// # Ok::<(), netsim_core::NetworkError>(())
    /// ```
    #[instrument(name = "network.resize", err, skip(self), fields(policy = ?self.resize_policy))]
    pub fn resize(&mut self, size: usize) -> Result<()> {
        let samples = self.random.normal(size, 0.0, 1.0)?;
        if samples.len() != size {
            return Err(NetworkError::SampleCountMismatch {
                expected: size,
                actual: samples.len(),
            });
        }
        self.values = samples;

        match self.resize_policy {
            ResizePolicy::PruneOutOfRange => {
                let dropped = self.links.retain_below(size);
                if dropped > 0 {
                    warn!(dropped, size, "resize dropped out-of-range links");
                }
            }
            ResizePolicy::ClearLinks => {
                let dropped = self.links.edge_count();
                self.links.clear();
                debug!(dropped, "resize cleared links");
            }
        }
        Ok(())
    }

    /// Overwrites node values position by position and returns the node
    /// count, which never changes.
    ///
    /// Only the first `min(size, new_values.len())` entries are written;
    /// surplus entries in `new_values` are ignored and trailing node values
    /// are left as they were.
    ///
    /// # Examples
    /// ```
    /// use netsim_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(5)?;
    /// network.set_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(network.set_values(&[9.0, 9.0, 9.0]), 5);
    /// assert_eq!(network.values(), &[9.0, 9.0, 9.0, 4.0, 5.0]);
    /// # Ok::<(), netsim_core::NetworkError>(())
    /// ```
    pub fn set_values(&mut self, new_values: &[f64]) -> usize {
        for (slot, value) in self.values.iter_mut().zip(new_values) {
            *slot = *value;
        }
        if new_values.len() != self.values.len() {
            debug!(
                size = self.values.len(),
                supplied = new_values.len(),
                "set_values length mismatch"
            );
        }
        self.values.len()
    }

    /// Attempts to link `a` and `b`, returning whether a new edge was created.
    ///
    /// Self-loops, out-of-range endpoints, and existing edges are refused
    /// without touching the link relation. Use [`Network::try_add_link`] to
    /// learn why a request was refused.
    pub fn add_link(&mut self, a: usize, b: usize) -> bool {
        self.try_add_link(a, b).is_ok()
    }

    /// Attempts to link `a` and `b`, reporting why the request was refused.
    ///
    /// # Errors
    /// Returns the [`LinkRejection`] describing a self-loop, an out-of-range
    /// endpoint, or a duplicate edge.
    ///
    /// # Examples
    /// ```
    /// use netsim_core::{LinkRejection, Network};
    ///
    /// let mut network = Network::new();
    /// network.resize(2)?;
    /// assert_eq!(network.try_add_link(1, 1), Err(LinkRejection::SelfLoop { node: 1 }));
    /// assert_eq!(network.try_add_link(0, 1), Ok(()));
    /// # Ok::<(), netsim_core::NetworkError>(())
    /// ```
    pub fn try_add_link(&mut self, a: usize, b: usize) -> core::result::Result<(), LinkRejection> {
        let node_count = self.values.len();
        self.links
            .try_insert(a, b, node_count)
            .inspect_err(|rejection| trace!(a, b, %rejection, "link rejected"))
    }

    /// Removes every link, leaving node values untouched.
    pub fn clear_links(&mut self) {
        self.links.clear();
    }

    /// Returns the random source backing this network.
    #[must_use]
    pub fn random_source(&self) -> &R {
        &self.random
    }

    /// Returns the random source mutably, e.g. to draw auxiliary samples
    /// from the same stream.
    pub fn random_source_mut(&mut self) -> &mut R {
        &mut self.random
    }
}

impl<R> Network<R> {
    /// Returns the number of nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns every node value in index order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the value of node `node`.
    ///
    /// # Errors
    /// Returns [`NetworkError::NodeOutOfRange`] when `node >= size()`.
    pub fn value(&self, node: usize) -> Result<f64> {
        self.values
            .get(node)
            .copied()
            .ok_or_else(|| self.out_of_range(node))
    }

    /// Returns all node values in descending order without reordering the
    /// network itself. Equal values have no guaranteed relative order.
    ///
    /// # Examples
    /// ```
    /// use netsim_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(3)?;
    /// network.set_values(&[0.5, 2.0, -1.0]);
    /// assert_eq!(network.sorted_values(), vec![2.0, 0.5, -1.0]);
    /// assert_eq!(network.values(), &[0.5, 2.0, -1.0]);
    /// # Ok::<(), netsim_core::NetworkError>(())
    /// ```
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(|left, right| right.total_cmp(left));
        sorted
    }

    /// Returns the number of distinct neighbours of `node`.
    ///
    /// # Errors
    /// Returns [`NetworkError::NodeOutOfRange`] when `node >= size()`.
    pub fn degree(&self, node: usize) -> Result<usize> {
        self.ensure_node(node)?;
        Ok(self.links.degree(node))
    }

    /// Returns every node linked to `node`, in ascending index order.
    ///
    /// # Errors
    /// Returns [`NetworkError::NodeOutOfRange`] when `node >= size()`.
    pub fn neighbors(&self, node: usize) -> Result<Vec<usize>> {
        self.ensure_node(node)?;
        Ok(self.links.neighbours(node).collect())
    }

    /// Returns the number of undirected links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.edge_count()
    }

    /// Returns the policy [`Network::resize`] applies to existing links.
    #[must_use]
    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    /// Returns a checker for the structural invariants of the link relation.
    #[must_use]
    pub fn invariants(&self) -> NetworkInvariantChecker<'_> {
        NetworkInvariantChecker::new(&self.links, self.values.len())
    }

    fn ensure_node(&self, node: usize) -> Result<()> {
        if node < self.values.len() {
            Ok(())
        } else {
            Err(self.out_of_range(node))
        }
    }

    fn out_of_range(&self, node: usize) -> NetworkError {
        NetworkError::NodeOutOfRange {
            node,
            node_count: self.values.len(),
        }
    }
}
