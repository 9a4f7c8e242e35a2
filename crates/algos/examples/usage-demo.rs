use log::info;
use rand::prelude::*;

use quiz_algos::prelude::*;

type AppResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> AppResult {
    // First, we want to prepare some logging, so that we can see
    // the output of what's going on.
    env_logger::init();

    // A round of the shortest-path game starts from a fixed set of
    // city labels. The default configuration connects any pair with
    // probability 0.3, draws weights from 5..=50 and bridges the
    // remaining components, so every city is reachable.
    let labels: Vec<char> = ('A'..='J').collect();
    let mut rng = StdRng::seed_from_u64(42);

    let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng)?;
    info!(
        "round graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Both solvers compute the same distances; Bellman-Ford would
    // additionally refuse the round if the graph had a negative cycle.
    let source = 'A';
    let bellman = bellman_ford(&graph, source)?;
    let paths = dijkstra(&graph, source);

    for &target in graph.nodes() {
        assert_eq!(paths.distance(target), bellman.distance(target));

        // The predecessor map turns into an explicit path per target.
        if let (Some(distance), Some(path)) = (paths.distance(target), paths.path_to(target)) {
            info!("{source} -> {target}: distance {distance}, {path:?}");
        }
    }

    // A round of the value-index game draws a sorted dataset of
    // distinct values and a target that is known to be present.
    let data = random_dataset(5000, 1_000_000, &mut rng);
    let target = data[rng.gen_range(0..data.len())];

    // All five algorithms must agree on the index.
    let results = run_search_benchmark(&data, target);
    let index = agreed_index(&results).ok_or("the search algorithms disagree")?;
    info!("target {target} sits at index {index}");

    Ok(())
}
