//! Structural invariant checks for the network link relation.
//!
//! The checkers are surfaced via [`crate::Network::invariants`] so tests can
//! assert link health after any sequence of operations without walking the
//! adjacency themselves.

mod checks;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::network::LinkTable;

use self::checks::{check_in_range, check_no_self_loops, check_symmetry};

/// Enumerates the structural invariants of the link relation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NetworkInvariant {
    /// Every stored `(a, b)` entry has a matching `(b, a)` entry.
    Symmetry,
    /// No node is linked to itself.
    NoSelfLoops,
    /// Every link endpoint is a valid node index.
    InRange,
}

impl NetworkInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::InRange, Self::NoSelfLoops, Self::Symmetry]
    }
}

/// Reports an invariant violation surfaced by [`NetworkInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NetworkInvariantViolation {
    /// A directed entry lacks its reverse entry.
    #[error("node {origin} links to {target}, but {target} does not link back")]
    MissingBacklink {
        /// Node holding the one-sided entry.
        origin: usize,
        /// Node missing the reverse entry.
        target: usize,
    },
    /// A node lists itself as a neighbour.
    #[error("node {node} is linked to itself")]
    SelfLoop {
        /// The self-linked node.
        node: usize,
    },
    /// A link references an index at or beyond the node count.
    #[error("link ({origin}, {target}) references a node outside 0..{node_count}")]
    OutOfRange {
        /// Source of the offending entry.
        origin: usize,
        /// Target of the offending entry.
        target: usize,
        /// Node count the link was checked against.
        node_count: usize,
    },
}

/// Runs structural invariant checks against a network's links.
#[derive(Clone, Copy, Debug)]
pub struct NetworkInvariantChecker<'net> {
    links: &'net LinkTable,
    node_count: usize,
}

impl<'net> NetworkInvariantChecker<'net> {
    pub(crate) fn new(links: &'net LinkTable, node_count: usize) -> Self {
        Self { links, node_count }
    }

    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), NetworkInvariantViolation> {
        self.check_many(NetworkInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
    ) -> Result<(), NetworkInvariantViolation> {
        self.run_with_mode(invariants, EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check(&self, invariant: NetworkInvariant) -> Result<(), NetworkInvariantViolation> {
        self.check_many([invariant])
    }

    /// Runs the symmetry invariant directly.
    ///
    /// # Errors
    /// Returns [`NetworkInvariantViolation::MissingBacklink`] on failure.
    pub fn symmetry(&self) -> Result<(), NetworkInvariantViolation> {
        self.check(NetworkInvariant::Symmetry)
    }

    /// Runs the self-loop invariant directly.
    ///
    /// # Errors
    /// Returns [`NetworkInvariantViolation::SelfLoop`] on failure.
    pub fn no_self_loops(&self) -> Result<(), NetworkInvariantViolation> {
        self.check(NetworkInvariant::NoSelfLoops)
    }

    /// Runs the index-range invariant directly.
    ///
    /// # Errors
    /// Returns [`NetworkInvariantViolation::OutOfRange`] on failure.
    pub fn in_range(&self) -> Result<(), NetworkInvariantViolation> {
        self.check(NetworkInvariant::InRange)
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<NetworkInvariantViolation> {
        self.collect_many(NetworkInvariant::all())
    }

    /// Executes the selected invariants and returns every violation discovered.
    #[must_use]
    pub fn collect_many(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
    ) -> Vec<NetworkInvariantViolation> {
        let mut violations = Vec::new();
        // Collect mode records instead of failing, so the result is always Ok.
        let _ = self.run_with_mode(invariants, EvaluationMode::Collect(&mut violations));
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
        mut mode: EvaluationMode<'_>,
    ) -> Result<(), NetworkInvariantViolation> {
        let ctx = LinkContext {
            links: self.links,
            node_count: self.node_count,
        };
        for invariant in invariants {
            dispatch(ctx, invariant, &mut mode)?;
        }
        Ok(())
    }
}

fn dispatch(
    ctx: LinkContext<'_>,
    invariant: NetworkInvariant,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    match invariant {
        NetworkInvariant::Symmetry => check_symmetry(ctx, mode),
        NetworkInvariant::NoSelfLoops => check_no_self_loops(ctx, mode),
        NetworkInvariant::InRange => check_in_range(ctx, mode),
    }
}

#[derive(Clone, Copy)]
pub(super) struct LinkContext<'a> {
    links: &'a LinkTable,
    node_count: usize,
}

pub(super) enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<NetworkInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(
        &mut self,
        violation: NetworkInvariantViolation,
    ) -> Result<(), NetworkInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}
