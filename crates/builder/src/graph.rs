use std::fmt::{Debug, Display};
use std::hash::Hash;

use fxhash::FxHashMap;

/// A node identifier in a quiz graph.
///
/// Blanket-implemented for any copyable, hashable, totally ordered type
/// that can be displayed, e.g. `char` labels or integer ids.
pub trait NodeId: Copy + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Ord + Debug + Display {}

/// An undirected graph with `i64` edge weights.
///
/// Symmetric by construction: an edge `(u, v, w)` is stored as both
/// `u -> v` and `v -> u` with the same weight. Nodes keep their
/// registration order, which makes node iteration deterministic.
/// Graphs are immutable once built.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<NI: NodeId> {
    nodes: Vec<NI>,
    adjacency: FxHashMap<NI, FxHashMap<NI, i64>>,
    edge_count: usize,
}

impl<NI: NodeId> UndirectedGraph<NI> {
    pub(crate) fn from_adjacency(
        nodes: Vec<NI>,
        adjacency: FxHashMap<NI, FxHashMap<NI, i64>>,
    ) -> Self {
        let edge_count = adjacency.values().map(|targets| targets.len()).sum::<usize>() / 2;

        Self {
            nodes,
            adjacency,
            edge_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes in registration order.
    pub fn nodes(&self) -> &[NI] {
        &self.nodes
    }

    pub fn contains(&self, node: NI) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn degree(&self, node: NI) -> usize {
        self.adjacency.get(&node).map_or(0, |targets| targets.len())
    }

    /// The neighbors of `node` together with the connecting edge weight.
    ///
    /// Iteration order is unspecified.
    pub fn neighbors(&self, node: NI) -> impl Iterator<Item = (NI, i64)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flatten()
            .map(|(&target, &weight)| (target, weight))
    }

    /// The weight of the edge between `u` and `v`, if present.
    pub fn weight(&self, u: NI, v: NI) -> Option<i64> {
        self.adjacency.get(&u)?.get(&v).copied()
    }
}
