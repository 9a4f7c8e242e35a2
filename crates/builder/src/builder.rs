use fxhash::{FxHashMap, FxHashSet};

use crate::graph::{NodeId, UndirectedGraph};
use crate::Error;

/// A builder to create [`UndirectedGraph`]s from explicit nodes and
/// weighted edges.
///
/// Nodes can be declared up front with [`GraphBuilder::nodes`]; nodes
/// that only appear in edges are registered in first-seen order. An
/// edge listed twice overwrites the earlier weight.
pub struct GraphBuilder<NI: NodeId> {
    nodes: Vec<NI>,
    edges: Vec<(NI, NI, i64)>,
}

impl<NI: NodeId> GraphBuilder<NI> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = NI>,
    {
        self.nodes.extend(nodes);
        self
    }

    pub fn edges_with_values<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (NI, NI, i64)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] for an edge connecting a node to
    /// itself and [`Error::ZeroWeight`] for an edge of weight 0.
    /// Negative weights are admitted; the shortest-path game never
    /// produces them, but Bellman-Ford must be able to see them.
    pub fn build(self) -> Result<UndirectedGraph<NI>, Error> {
        let mut nodes = Vec::new();
        let mut seen = FxHashSet::default();
        let mut adjacency: FxHashMap<NI, FxHashMap<NI, i64>> = FxHashMap::default();

        let mut register = |node: NI, nodes: &mut Vec<NI>| {
            if seen.insert(node) {
                nodes.push(node);
            }
        };

        for &node in &self.nodes {
            register(node, &mut nodes);
            adjacency.entry(node).or_default();
        }

        for (u, v, weight) in self.edges {
            if u == v {
                return Err(Error::SelfLoop {
                    node: u.to_string(),
                });
            }
            if weight == 0 {
                return Err(Error::ZeroWeight {
                    from: u.to_string(),
                    to: v.to_string(),
                });
            }

            register(u, &mut nodes);
            register(v, &mut nodes);

            adjacency.entry(u).or_default().insert(v, weight);
            adjacency.entry(v).or_default().insert(u, weight);
        }

        Ok(UndirectedGraph::from_adjacency(nodes, adjacency))
    }
}

impl<NI: NodeId> Default for GraphBuilder<NI> {
    fn default() -> Self {
        Self::new()
    }
}
