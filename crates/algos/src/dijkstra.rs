use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::info;

use quiz_graph::prelude::*;

use crate::paths::ShortestPaths;

/// Computes shortest paths from `source` with Dijkstra's algorithm.
///
/// The priority queue holds `(distance, node)` pairs ordered by
/// tentative distance; instead of a decrease-key operation, improved
/// nodes are pushed again and stale entries are skipped when popped.
/// Correct for non-negative edge weights only, which the random graph
/// generator guarantees.
pub fn dijkstra<NI: NodeId>(graph: &UndirectedGraph<NI>, source: NI) -> ShortestPaths<NI> {
    let start = Instant::now();

    let mut paths = ShortestPaths::new(source);
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((0_i64, source)));

    while let Some(Reverse((distance, node))) = queue.pop() {
        // stale entry, the node was finalized with a smaller distance
        if paths.distance(node).map_or(true, |best| distance > best) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let next = distance + weight;
            if paths.distance(neighbor).map_or(true, |best| next < best) {
                paths.relax(neighbor, next, node);
                queue.push(Reverse((next, neighbor)));
            }
        }
    }

    info!("Computed Dijkstra from {} in {:?}", source, start.elapsed());

    paths
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

        let paths = dijkstra(&graph, 'A');

        assert_eq!(paths.distance('A'), Some(0));
        assert_eq!(paths.distance('B'), Some(10));
        assert_eq!(paths.distance('C'), Some(15));

        assert_eq!(paths.predecessor('A'), None);
        assert_eq!(paths.predecessor('B'), Some('A'));
        assert_eq!(paths.predecessor('C'), Some('B'));

        assert_eq!(paths.path_to('C'), Some(vec!['A', 'B', 'C']));
    }

    #[test]
    fn six_node_distances() {
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

        let paths = dijkstra(&graph, 0);
        let actual: Vec<Option<i64>> = (0..6).map(|node| paths.distance(node)).collect();

        assert_eq!(
            actual,
            vec![Some(0), Some(4), Some(2), Some(9), Some(5), Some(20)]
        );
    }

    #[test]
    fn longer_hop_count_can_be_shorter() {
        let graph = GraphBuilder::new()
            .edges_with_values([('A', 'D', 30), ('A', 'B', 5), ('B', 'C', 5), ('C', 'D', 5)])
            .build()
            .unwrap();

        let paths = dijkstra(&graph, 'A');

        assert_eq!(paths.distance('D'), Some(15));
        assert_eq!(paths.path_to('D'), Some(vec!['A', 'B', 'C', 'D']));
    }

    #[test]
    fn disconnected_node_is_unreachable() {
        let graph = GraphBuilder::new()
            .edges_with_values([('A', 'B', 10), ('C', 'D', 5)])
            .build()
            .unwrap();

        let paths = dijkstra(&graph, 'A');

        assert_eq!(paths.distance('C'), None);
        assert_eq!(paths.path_to('C'), None);
    }
}
