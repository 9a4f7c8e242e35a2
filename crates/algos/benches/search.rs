use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use quiz_algos::prelude::*;

fn search_algorithms(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let data = random_dataset(5000, 1_000_000, &mut rng);
    let target = data[data.len() / 2];

    let mut group = c.benchmark_group("search");
    for algorithm in SearchAlgorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.run(black_box(&data), black_box(target)))
        });
    }
    group.finish();
}

fn shortest_path_solvers(c: &mut Criterion) {
    let labels: Vec<char> = ('A'..='J').collect();
    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng).unwrap();

    let mut group = c.benchmark_group("solvers");
    group.bench_function("dijkstra", |b| b.iter(|| dijkstra(black_box(&graph), 'A')));
    group.bench_function("bellman_ford", |b| {
        b.iter(|| bellman_ford(black_box(&graph), 'A'))
    });
    group.finish();
}

criterion_group!(benches, search_algorithms, shortest_path_solvers);
criterion_main!(benches);
