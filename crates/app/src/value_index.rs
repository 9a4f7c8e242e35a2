//! The value-index quiz game.
//!
//! Generates a sorted dataset of distinct values, picks a target that
//! is present and races the five search algorithms against it. With
//! `--quiz` the player is asked to predict the index; without it the
//! per-algorithm results and the agreed index are printed.

use std::io::{self, BufRead, Write};

use rand::prelude::*;

use quiz_algos::prelude::*;

const MAX_VALUE: usize = 1_000_000;

const HELP: &str = "\
value_index

USAGE:
  value_index [OPTIONS]

OPTIONS:
  --seed <u64>   seed for the round (random if omitted)
  --len <count>  dataset size, 1..=1000000 [default: 5000]
  --quiz         ask for the index on stdin instead of printing it
  -h, --help     print this help
";

#[derive(Debug)]
struct Args {
    seed: Option<u64>,
    len: usize,
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
        len: pargs.opt_value_from_str("--len")?.unwrap_or(5000),
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
    if args.len == 0 || args.len > MAX_VALUE {
        return Err(format!("--len must be in 1..={MAX_VALUE}").into());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let data = random_dataset(args.len, MAX_VALUE, &mut rng);
    let target = data[rng.gen_range(0..data.len())];

    println!(
        "Dataset of {} distinct values in 1..={MAX_VALUE}.",
        data.len()
    );
    println!("Predict the index of {target}.\n");

    let results = run_search_benchmark(&data, target);

    println!("{:<22} {:>8}  {}", "Algorithm", "Index", "Time");
    for result in &results {
        let index = result
            .index
            .map_or_else(|| "-".to_string(), |index| index.to_string());
        println!(
            "{:<22} {:>8}  {:?}",
            result.algorithm.name(),
            index,
            result.elapsed
        );
    }

    let index = agreed_index(&results).ok_or("the search algorithms disagree")?;

    if args.quiz {
        let claimed = read_index()?;
        if check_index(&results, claimed) {
            println!("Correct, the index is {index}.");
        } else {
            println!("Wrong, the index is {index}.");
        }
    } else {
        println!("\nAgreed index: {index}");
    }

    Ok(())
}

fn read_index() -> Result<usize, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nYour guess: ");
        io::stdout().flush()?;

        let line = lines.next().ok_or("unexpected end of input")??;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter an index."),
        }
    }
}
