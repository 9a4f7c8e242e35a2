//! The shortest-path quiz game.
//!
//! Generates a random weighted graph over city labels, prints its
//! adjacency matrix and computes ground truth with both solvers. With
//! `--quiz` the player is asked for the distance and a path to every
//! city; without it the answers are printed directly.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::info;
use rand::prelude::*;

use quiz_algos::prelude::*;

const HELP: &str = "\
shortest_path

USAGE:
  shortest_path [OPTIONS]

OPTIONS:
  --seed <u64>     seed for the round (random if omitted)
  --nodes <count>  number of cities, 2..=26 [default: 10]
  --source <char>  starting city (random if omitted)
  --quiz           ask for answers on stdin instead of printing them
  -h, --help       print this help
";

#[derive(Debug)]
struct Args {
    seed: Option<u64>,
    nodes: usize,
    source: Option<char>,
    quiz: bool,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        seed: pargs.opt_value_from_str("--seed")?,
        nodes: pargs.opt_value_from_str("--nodes")?.unwrap_or(10),
        source: pargs.opt_value_from_str("--source")?,
        quiz: pargs.contains("--quiz"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(args)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = parse_args()?;
    if !(2..=26).contains(&args.nodes) {
        return Err("--nodes must be in 2..=26".into());
    }

    let labels: Vec<char> = ('A'..='Z').take(args.nodes).collect();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let graph = random_graph(&labels, &RandomGraphConfig::default(), &mut rng)?;
    let source = match args.source {
        Some(source) if labels.contains(&source) => source,
        Some(source) => return Err(format!("unknown city {source}").into()),
        None => labels[rng.gen_range(0..labels.len())],
    };

    print_matrix(&graph);
    println!("\nStarting city: {source}\n");

    let start = Instant::now();
    let bellman = bellman_ford(&graph, source)?;
    info!("Bellman-Ford finished in {:?}", start.elapsed());

    let start = Instant::now();
    let paths = dijkstra(&graph, source);
    info!("Dijkstra finished in {:?}", start.elapsed());

    for &node in graph.nodes() {
        if bellman.distance(node) != paths.distance(node) {
            return Err(format!("solvers disagree on the distance to {node}").into());
        }
    }

    if args.quiz {
        play_quiz(&graph, &paths)
    } else {
        print_answers(&graph, &paths);
        Ok(())
    }
}

fn print_matrix(graph: &UndirectedGraph<char>) {
    print!("    ");
    for &label in graph.nodes() {
        print!("{label:>4}");
    }
    println!();

    for &row in graph.nodes() {
        print!("{row:>4}");
        for &column in graph.nodes() {
            match graph.weight(row, column) {
                Some(weight) => print!("{weight:>4}"),
                None => print!("{:>4}", "-"),
            }
        }
        println!();
    }
}

fn print_answers(graph: &UndirectedGraph<char>, paths: &ShortestPaths<char>) {
    for &target in graph.nodes() {
        if target == paths.source() {
            continue;
        }
        match (paths.distance(target), paths.path_to(target)) {
            (Some(distance), Some(path)) => {
                println!("{target}: distance {distance:>3}, path {}", join(&path));
            }
            _ => println!("{target}: unreachable"),
        }
    }
}

fn play_quiz(
    graph: &UndirectedGraph<char>,
    paths: &ShortestPaths<char>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut score = 0_usize;
    let mut rounds = 0_usize;

    for &target in graph.nodes() {
        if target == paths.source() {
            continue;
        }

        let claimed_distance: i64 = loop {
            let line = prompt(&mut lines, &format!("Distance to {target}: "))?;
            match line.trim().parse() {
                Ok(value) => break value,
                Err(_) => println!("Please enter a whole number."),
            }
        };

        let line = prompt(&mut lines, &format!("Path to {target} (comma-separated): "))?;
        let claimed_path: Vec<char> = line
            .split(',')
            .filter_map(|part| part.trim().chars().next())
            .collect();

        rounds += 2;
        if check_distance(paths, target, claimed_distance) {
            score += 1;
        } else {
            println!(
                "Wrong distance, the shortest is {}.",
                paths.distance(target).unwrap_or(i64::MAX)
            );
        }
        if check_path(graph, paths, target, &claimed_path) {
            score += 1;
        } else if let Some(path) = paths.path_to(target) {
            println!("Wrong path, one shortest path is {}.", join(&path));
        }
    }

    println!("\nScore: {score}/{rounds}");
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(lines.next().ok_or("unexpected end of input")??)
}

fn join(path: &[char]) -> String {
    path.iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
