use std::ops::RangeInclusive;

use fxhash::{FxHashMap, FxHashSet};
use log::debug;
use rand::Rng;

use crate::graph::{NodeId, UndirectedGraph};
use crate::Error;

/// Configuration for [`random_graph`].
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    /// Probability that any unordered node pair gets an edge.
    pub edge_probability: f64,
    /// Uniform range the edge weights are drawn from.
    pub weight_range: RangeInclusive<i64>,
    /// Bridge disconnected components so the generated graph is a
    /// single connected component. Without this only a minimum degree
    /// of 1 is guaranteed.
    pub connect_components: bool,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            edge_probability: 0.3,
            weight_range: 5..=50,
            connect_components: true,
        }
    }
}

/// Generates a random undirected weighted graph over `nodes`.
///
/// Every unordered node pair gets an edge with
/// [`RandomGraphConfig::edge_probability`]; every node left isolated
/// afterwards is connected to a distinct random other node, so the
/// minimum degree is 1. With
/// [`RandomGraphConfig::connect_components`] the remaining components
/// are bridged with random edges and the whole graph becomes reachable
/// from any node.
///
/// # Errors
///
/// Returns [`Error::TooFewNodes`] for fewer than two nodes.
pub fn random_graph<NI, R>(
    nodes: &[NI],
    config: &RandomGraphConfig,
    rng: &mut R,
) -> Result<UndirectedGraph<NI>, Error>
where
    NI: NodeId,
    R: Rng + ?Sized,
{
    if nodes.len() < 2 {
        return Err(Error::TooFewNodes { got: nodes.len() });
    }

    let mut adjacency: FxHashMap<NI, FxHashMap<NI, i64>> = nodes
        .iter()
        .map(|&node| (node, FxHashMap::default()))
        .collect();

    for i in 0..nodes.len() {
        for j in i + 1..nodes.len() {
            if rng.gen_bool(config.edge_probability) {
                let weight = rng.gen_range(config.weight_range.clone());
                insert_edge(&mut adjacency, nodes[i], nodes[j], weight);
            }
        }
    }

    // minimum degree 1: connect every isolated node to a random other node
    for (i, &node) in nodes.iter().enumerate() {
        if adjacency[&node].is_empty() {
            let j = loop {
                let j = rng.gen_range(0..nodes.len());
                if j != i {
                    break j;
                }
            };
            let weight = rng.gen_range(config.weight_range.clone());
            insert_edge(&mut adjacency, node, nodes[j], weight);
        }
    }

    if config.connect_components {
        bridge_components(nodes, &mut adjacency, config, rng);
    }

    let graph = UndirectedGraph::from_adjacency(nodes.to_vec(), adjacency);

    debug!(
        "Generated graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Attaches every component beyond the first to a random node of the
/// already connected part.
fn bridge_components<NI, R>(
    nodes: &[NI],
    adjacency: &mut FxHashMap<NI, FxHashMap<NI, i64>>,
    config: &RandomGraphConfig,
    rng: &mut R,
) where
    NI: NodeId,
    R: Rng + ?Sized,
{
    let mut seen = FxHashSet::default();
    let mut connected = Vec::with_capacity(nodes.len());
    collect_component(nodes[0], adjacency, &mut seen, &mut connected);

    for &node in &nodes[1..] {
        if seen.contains(&node) {
            continue;
        }

        let mut component = Vec::new();
        collect_component(node, adjacency, &mut seen, &mut component);

        let from = component[rng.gen_range(0..component.len())];
        let to = connected[rng.gen_range(0..connected.len())];
        let weight = rng.gen_range(config.weight_range.clone());
        insert_edge(adjacency, from, to, weight);

        connected.extend_from_slice(&component);
    }
}

fn collect_component<NI: NodeId>(
    start: NI,
    adjacency: &FxHashMap<NI, FxHashMap<NI, i64>>,
    seen: &mut FxHashSet<NI>,
    component: &mut Vec<NI>,
) {
    let mut stack = vec![start];
    seen.insert(start);

    while let Some(node) = stack.pop() {
        component.push(node);
        for &next in adjacency[&node].keys() {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
}

fn insert_edge<NI: NodeId>(
    adjacency: &mut FxHashMap<NI, FxHashMap<NI, i64>>,
    u: NI,
    v: NI,
    weight: i64,
) {
    adjacency.entry(u).or_default().insert(v, weight);
    adjacency.entry(v).or_default().insert(u, weight);
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use crate::prelude::*;

    fn labels() -> Vec<char> {
        ('A'..='J').collect()
    }

    #[test]
    fn too_few_nodes_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = random_graph(&['A'], &RandomGraphConfig::default(), &mut rng);

        assert!(matches!(result, Err(Error::TooFewNodes { got: 1 })));
    }

    #[test]
    fn every_node_has_degree_at_least_one() {
        let labels = labels();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..50 {
            let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng).unwrap();
            for &label in &labels {
                assert!(graph.degree(label) >= 1, "{label} is isolated");
            }
        }
    }

    #[test]
    fn weights_stay_within_the_configured_range() {
        let labels = labels();
        let config = RandomGraphConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let graph = random_graph(&labels, &config, &mut rng).unwrap();
            for &u in graph.nodes() {
                for (_, weight) in graph.neighbors(u) {
                    assert!(config.weight_range.contains(&weight), "weight {weight}");
                }
            }
        }
    }

    #[test]
    fn generated_graphs_are_symmetric() {
        let labels = labels();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..50 {
            let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng).unwrap();
            for &u in graph.nodes() {
                for (v, weight) in graph.neighbors(u) {
                    assert_eq!(graph.weight(v, u), Some(weight));
                }
            }
        }
    }

    #[test]
    fn generated_graphs_are_connected() {
        let labels = labels();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng).unwrap();
            assert_eq!(reachable_from(&graph, labels[0]), labels.len());
        }
    }

    #[test]
    fn sparse_generation_still_guarantees_degree_one() {
        let labels = labels();
        let config = RandomGraphConfig {
            edge_probability: 0.0,
            connect_components: false,
            ..RandomGraphConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..50 {
            let graph = random_graph(&labels, &config, &mut rng).unwrap();
            for &label in &labels {
                assert!(graph.degree(label) >= 1);
            }
        }
    }

    fn reachable_from(graph: &UndirectedGraph<char>, start: char) -> usize {
        let mut seen = vec![start];
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for (next, _) in graph.neighbors(node) {
                if !seen.contains(&next) {
                    seen.push(next);
                    stack.push(next);
                }
            }
        }
        seen.len()
    }
}
