pub use crate::builder::GraphBuilder;
pub use crate::gen::{random_graph, RandomGraphConfig};
pub use crate::graph::{NodeId, UndirectedGraph};
pub use crate::Error;
