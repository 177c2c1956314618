//! Undirected link storage for [`super::Network`].
//!
//! Each node maps to the set of its neighbours. Every insertion writes both
//! directions, so the table stays symmetric and free of duplicate edges.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Reason a link request was refused.
///
/// Rejections are ordinary outcomes of [`super::Network::try_add_link`] and
/// leave the link table unchanged.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LinkRejection {
    /// Both endpoints named the same node.
    #[error("node {node} cannot link to itself")]
    SelfLoop {
        /// The node named twice.
        node: usize,
    },
    /// An endpoint was at or beyond the node count.
    #[error("node {node} is out of range for a network of {node_count} node(s)")]
    OutOfRange {
        /// The first endpoint found out of range.
        node: usize,
        /// Node count at the time of the request.
        node_count: usize,
    },
    /// The two nodes are already linked.
    #[error("nodes {a} and {b} are already linked")]
    Duplicate {
        /// Requested source endpoint.
        a: usize,
        /// Requested target endpoint.
        b: usize,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LinkTable {
    adjacency: BTreeMap<usize, BTreeSet<usize>>,
}

impl LinkTable {
    /// Inserts the edge `{a, b}` in both directions.
    ///
    /// Self-loops are checked first, then bounds, then duplicates.
    pub(crate) fn try_insert(
        &mut self,
        a: usize,
        b: usize,
        node_count: usize,
    ) -> Result<(), LinkRejection> {
        if a == b {
            return Err(LinkRejection::SelfLoop { node: a });
        }
        if let Some(node) = [a, b].into_iter().find(|node| *node >= node_count) {
            return Err(LinkRejection::OutOfRange { node, node_count });
        }
        if self.contains(a, b) {
            return Err(LinkRejection::Duplicate { a, b });
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        Ok(())
    }

    pub(crate) fn contains(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    pub(crate) fn degree(&self, node: usize) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeSet::len)
    }

    pub(crate) fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().copied())
    }

    /// Number of undirected edges.
    pub(crate) fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(BTreeSet::len).sum();
        directed / 2
    }

    pub(crate) fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Drops every edge touching a node at or beyond `node_count`, returning
    /// the number of undirected edges removed.
    pub(crate) fn retain_below(&mut self, node_count: usize) -> usize {
        let before = self.edge_count();
        self.adjacency.retain(|node, neighbours| {
            if *node >= node_count {
                return false;
            }
            neighbours.retain(|neighbour| *neighbour < node_count);
            !neighbours.is_empty()
        });
        before - self.edge_count()
    }

    /// Iterates over every stored directed entry `(source, target)`.
    pub(crate) fn directed_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().flat_map(|(source, neighbours)| {
            neighbours.iter().map(move |target| (*source, *target))
        })
    }

    #[cfg(test)]
    pub(crate) fn insert_directed_unchecked(&mut self, source: usize, target: usize) {
        self.adjacency.entry(source).or_default().insert(target);
    }
}
