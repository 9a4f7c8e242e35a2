use std::time::Instant;

use log::info;
use thiserror::Error;

use quiz_graph::prelude::*;

use crate::paths::ShortestPaths;

/// The graph contains a cycle whose total weight is negative, so no
/// shortest-path answer exists for the round.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("negative cycle detected")]
pub struct NegativeCycle;

/// Computes shortest paths from `source` with the Bellman-Ford
/// algorithm.
///
/// Performs `node_count - 1` relaxation passes over every directed
/// edge (each undirected edge is relaxed in both directions, in node
/// registration order). A final pass checks whether any edge still
/// admits a relaxation; if so, the graph contains a negative cycle and
/// no partial result is returned. Callers must treat that as fatal to
/// the round and must not substitute the Dijkstra answer.
pub fn bellman_ford<NI: NodeId>(
    graph: &UndirectedGraph<NI>,
    source: NI,
) -> Result<ShortestPaths<NI>, NegativeCycle> {
    let start = Instant::now();

    let mut paths = ShortestPaths::new(source);

    for _ in 1..graph.node_count() {
        for &node in graph.nodes() {
            let Some(distance) = paths.distance(node) else {
                continue;
            };
            for (neighbor, weight) in graph.neighbors(node) {
                let next = distance + weight;
                if paths.distance(neighbor).map_or(true, |best| next < best) {
                    paths.relax(neighbor, next, node);
                }
            }
        }
    }

    for &node in graph.nodes() {
        let Some(distance) = paths.distance(node) else {
            continue;
        };
        for (neighbor, weight) in graph.neighbors(node) {
            if paths
                .distance(neighbor)
                .map_or(true, |best| distance + weight < best)
            {
                return Err(NegativeCycle);
            }
        }
    }

    info!(
        "Computed Bellman-Ford from {} in {:?}",
        source,
        start.elapsed()
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn triangle_distances_and_predecessors() {
        let graph = GraphBuilder::new()
            .edges_with_values([('A', 'B', 10), ('B', 'C', 5), ('A', 'C', 20)])
            .build()
            .unwrap();

        let paths = bellman_ford(&graph, 'A').unwrap();

        assert_eq!(paths.distance('A'), Some(0));
        assert_eq!(paths.distance('B'), Some(10));
        assert_eq!(paths.distance('C'), Some(15));

        assert_eq!(paths.predecessor('B'), Some('A'));
        assert_eq!(paths.predecessor('C'), Some('B'));
        assert_eq!(paths.path_to('C'), Some(vec!['A', 'B', 'C']));
    }

    #[test]
    fn agrees_with_dijkstra_on_a_positive_graph() {
        let graph = GraphBuilder::new()
            .edges_with_values([
                (0, 1, 4),
                (0, 2, 2),
                (1, 2, 5),
                (1, 3, 10),
                (2, 4, 3),
                (3, 5, 11),
                (4, 3, 4),
            ])
            .build()
            .unwrap();

        let bellman = bellman_ford(&graph, 0).unwrap();
        let reference = dijkstra(&graph, 0);

        for &node in graph.nodes() {
            assert_eq!(bellman.distance(node), reference.distance(node));
        }
    }

    #[test]
    fn negative_edge_forms_a_negative_cycle() {
        // in an undirected graph any negative edge is a negative
        // two-node cycle
        let graph = GraphBuilder::new()
            .edges_with_values([('A', 'B', 10), ('B', 'C', -5), ('A', 'C', 20)])
            .build()
            .unwrap();

        assert_eq!(bellman_ford(&graph, 'A').unwrap_err(), NegativeCycle);
    }

    #[test]
    fn disconnected_node_is_unreachable() {
        let graph = GraphBuilder::new()
            .edges_with_values([('A', 'B', 10), ('C', 'D', 5)])
            .build()
            .unwrap();

        let paths = bellman_ford(&graph, 'A').unwrap();

        assert_eq!(paths.distance('D'), None);
        assert_eq!(paths.path_to('D'), None);
    }
}
