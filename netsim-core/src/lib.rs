//! Netsim core library.
//!
//! Models an undirected network of scalar-valued nodes for simulations driven
//! by random-graph structure. Values are drawn from a normal distribution and
//! links from a Poisson-degree random wiring, both through an injectable
//! [`RandomSource`].

mod builder;
mod error;
mod invariants;
mod network;
mod random;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{NetworkBuilder, ResizePolicy},
    error::{NetworkError, NetworkErrorCode, RandomError, RandomErrorCode, Result},
    invariants::{NetworkInvariant, NetworkInvariantChecker, NetworkInvariantViolation},
    network::{LinkRejection, MAX_MEAN_DEGREE, Network},
    random::{RandomSource, SeededRandom},
};
