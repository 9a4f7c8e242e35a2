//! A building block for the algorithm quiz games.
//!
//! The crate provides an undirected, weighted graph keyed by a node
//! identifier type, a builder to construct graphs programmatically and
//! a random generator that produces the game rounds.
//!
//! # How to build a graph
//!
//! Graphs are created from a list of weighted edges. Nodes that only
//! appear in edges are registered in first-seen order:
//!
//! ```
//! use quiz_graph::prelude::*;
//!
//! let graph: UndirectedGraph<char> = GraphBuilder::new()
//!     .edges_with_values([('A', 'B', 10), ('B', 'C', 5), ('A', 'C', 20)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.degree('B'), 2);
//! assert_eq!(graph.weight('A', 'B'), Some(10));
//! assert_eq!(graph.weight('B', 'A'), Some(10));
//! ```
//!
//! # How to generate a random graph
//!
//! A game round starts from a fixed set of labels. Every unordered pair
//! of labels gets an edge with a configurable probability and a weight
//! drawn uniformly from a configurable range. The generator guarantees
//! that no node is isolated and, by default, that the graph is a single
//! connected component:
//!
//! ```
//! use quiz_graph::prelude::*;
//! use rand::prelude::*;
//!
//! let labels: Vec<char> = ('A'..='J').collect();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng).unwrap();
//!
//! assert_eq!(graph.node_count(), 10);
//! assert!(labels.iter().all(|&label| graph.degree(label) >= 1));
//! ```

pub mod builder;
pub mod gen;
pub mod graph;
pub mod prelude;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("graph generation requires at least 2 nodes, got {got}")]
    TooFewNodes { got: usize },
    #[error("self loop at node {node}")]
    SelfLoop { node: String },
    #[error("zero-weight edge between {from} and {to}")]
    ZeroWeight { from: String, to: String },
}
