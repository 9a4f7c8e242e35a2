//! The algorithms behind the two quiz games.
//!
//! The shortest-path game generates a random weighted graph (see
//! `quiz_graph`), computes ground truth with two independent solvers
//! ([`dijkstra::dijkstra`] and [`bellman_ford::bellman_ford`]) and
//! reconstructs explicit paths from the predecessor map. The
//! value-index game runs five search algorithms against the same
//! sorted dataset and compares their answers ([`search`]). Player
//! answers for both games are scored by [`answer`].

pub mod answer;
pub mod bellman_ford;
pub mod dijkstra;
pub mod paths;
pub mod prelude;
pub mod search;

pub use crate::bellman_ford::NegativeCycle;
pub use crate::paths::ShortestPaths;
