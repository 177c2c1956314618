//! Builder utilities for configuring [`Network`] instances.
//!
//! Exposes the random seed and the link policy applied when a network is
//! resized.

use crate::{
    network::Network,
    random::{DEFAULT_SEED, RandomSource, SeededRandom},
};

/// Determines what [`Network::resize`] does with existing links.
///
/// Node values are always redrawn on resize; links are the only state that
/// can outlive a size change.
///
/// # Examples
/// ```
/// use netsim_core::ResizePolicy;
///
/// assert_eq!(ResizePolicy::default(), ResizePolicy::PruneOutOfRange);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Keep links whose endpoints both survive the resize and drop the rest.
    /// Growing the network leaves every link in place.
    #[default]
    PruneOutOfRange,
    /// Remove every link whenever the network is resized.
    ClearLinks,
}

/// Configures and constructs [`Network`] instances.
///
/// # Examples
/// ```
/// use netsim_core::{NetworkBuilder, ResizePolicy};
///
/// let network = NetworkBuilder::new()
///     .with_seed(42)
///     .with_resize_policy(ResizePolicy::ClearLinks)
///     .build();
/// assert_eq!(network.size(), 0);
/// assert_eq!(network.resize_policy(), ResizePolicy::ClearLinks);
/// assert_eq!(network.random_source().seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    seed: u64,
    resize_policy: ResizePolicy,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            resize_policy: ResizePolicy::default(),
        }
    }
}

impl NetworkBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the seed handed to the default [`SeededRandom`] source.
    ///
    /// Ignored by [`NetworkBuilder::build_with`], which takes its source
    /// as given.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets the link policy applied by [`Network::resize`].
    #[must_use]
    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    /// Returns the configured resize policy.
    #[must_use]
    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    /// Constructs an empty network drawing from a [`SeededRandom`] source.
    #[must_use]
    pub fn build(self) -> Network<SeededRandom> {
        let random = SeededRandom::new(self.seed);
        self.build_with(random)
    }

    /// Constructs an empty network drawing from the supplied source.
    ///
    /// # Examples
    /// ```
    /// use netsim_core::{NetworkBuilder, SeededRandom};
    ///
    /// let mut network = NetworkBuilder::new().build_with(SeededRandom::new(3));
    /// network.resize(4)?;
    /// assert_eq!(network.size(), 4);
    /// # Ok::<(), netsim_core::NetworkError>(())
    /// ```
    #[must_use]
    pub fn build_with<R: RandomSource>(self, random: R) -> Network<R> {
        Network::from_parts(random, self.resize_policy)
    }
}
