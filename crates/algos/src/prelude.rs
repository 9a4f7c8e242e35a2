pub use quiz_graph::prelude::*;

pub use crate::answer::{agreed_index, check_distance, check_index, check_path};
pub use crate::bellman_ford::{bellman_ford, NegativeCycle};
pub use crate::dijkstra::dijkstra;
pub use crate::paths::{reconstruct_path, ShortestPaths};
pub use crate::search::{
    binary_search, exponential_search, fibonacci_search, interpolation_search, jump_search,
    random_dataset, run_search_benchmark, SearchAlgorithm, SearchResult,
};
