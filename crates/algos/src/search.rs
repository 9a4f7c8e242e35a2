use std::time::{Duration, Instant};

use log::info;
use rand::Rng;

/// The search algorithms raced against each other in the value-index
/// game.
///
/// All of them require the dataset to be sorted in ascending order;
/// the game additionally generates distinct values, so a found index
/// is unique and all algorithms must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Binary,
    Jump,
    Exponential,
    Fibonacci,
    Interpolation,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::Binary,
        SearchAlgorithm::Jump,
        SearchAlgorithm::Exponential,
        SearchAlgorithm::Fibonacci,
        SearchAlgorithm::Interpolation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Binary => "Binary Search",
            SearchAlgorithm::Jump => "Jump Search",
            SearchAlgorithm::Exponential => "Exponential Search",
            SearchAlgorithm::Fibonacci => "Fibonacci Search",
            SearchAlgorithm::Interpolation => "Interpolation Search",
        }
    }

    pub fn run(self, data: &[i64], target: i64) -> Option<usize> {
        match self {
            SearchAlgorithm::Binary => binary_search(data, target),
            SearchAlgorithm::Jump => jump_search(data, target),
            SearchAlgorithm::Exponential => exponential_search(data, target),
            SearchAlgorithm::Fibonacci => fibonacci_search(data, target),
            SearchAlgorithm::Interpolation => interpolation_search(data, target),
        }
    }
}

/// Index and elapsed wall-clock time of one algorithm run.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub algorithm: SearchAlgorithm,
    /// The index of the target, or `None` if it is absent.
    pub index: Option<usize>,
    pub elapsed: Duration,
}

/// Runs all five algorithms against the same dataset and target,
/// timing each run.
pub fn run_search_benchmark(data: &[i64], target: i64) -> Vec<SearchResult> {
    SearchAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let start = Instant::now();
            let index = algorithm.run(data, target);
            let elapsed = start.elapsed();

            info!("{} found {:?} in {:?}", algorithm.name(), index, elapsed);

            SearchResult {
                algorithm,
                index,
                elapsed,
            }
        })
        .collect()
}

/// Draws `len` distinct values from `1..=max_value` and returns them
/// in ascending order.
///
/// # Panics
///
/// Panics if `len > max_value`; there are not enough distinct values
/// to draw from in that case.
pub fn random_dataset<R>(len: usize, max_value: usize, rng: &mut R) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let mut data: Vec<i64> = rand::seq::index::sample(rng, max_value, len)
        .into_iter()
        .map(|value| value as i64 + 1)
        .collect();
    data.sort_unstable();
    data
}

/// Classic halving over the whole range.
pub fn binary_search(data: &[i64], target: i64) -> Option<usize> {
    let mut low = 0;
    let mut high = data.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if data[mid] == target {
            return Some(mid);
        }
        if data[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    None
}

/// Advances in blocks of ⌊√n⌋ until a block ends at or past the
/// target, then scans that block linearly.
pub fn jump_search(data: &[i64], target: i64) -> Option<usize> {
    let n = data.len();
    if n == 0 {
        return None;
    }

    let step = ((n as f64).sqrt() as usize).max(1);
    let mut prev = 0;
    let mut end = step;

    while data[end.min(n) - 1] < target {
        prev = end;
        if prev >= n {
            return None;
        }
        end += step;
    }

    data[prev..end.min(n)]
        .iter()
        .position(|&value| value == target)
        .map(|offset| prev + offset)
}

/// Doubles a probe index until it overshoots the target, then binary
/// searches the bounded sub-range.
pub fn exponential_search(data: &[i64], target: i64) -> Option<usize> {
    if data.is_empty() {
        return None;
    }
    if data[0] == target {
        return Some(0);
    }

    let mut bound = 1;
    while bound < data.len() && data[bound] <= target {
        bound *= 2;
    }

    let low = bound / 2;
    let high = data.len().min(bound + 1);

    binary_search(&data[low..high], target).map(|offset| low + offset)
}

/// Partitions the range by Fibonacci-ratio offsets, using the smallest
/// Fibonacci number that is at least the dataset length.
pub fn fibonacci_search(data: &[i64], target: i64) -> Option<usize> {
    let n = data.len();
    if n == 0 {
        return None;
    }

    let (mut fib2, mut fib1) = (0_usize, 1_usize);
    let mut fib = fib1 + fib2;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib1 + fib2;
    }

    // one before the start of the remaining range
    let mut offset: isize = -1;

    while fib > 1 {
        let probe = ((offset + fib2 as isize) as usize).min(n - 1);

        if data[probe] < target {
            fib = fib1;
            fib1 = fib2;
            fib2 = fib - fib1;
            offset = probe as isize;
        } else if data[probe] > target {
            fib = fib2;
            fib1 -= fib2;
            fib2 = fib - fib1;
        } else {
            return Some(probe);
        }
    }

    let last = (offset + 1) as usize;
    if fib1 == 1 && last < n && data[last] == target {
        return Some(last);
    }

    None
}

/// Estimates the probe position by linear interpolation between the
/// range's endpoint values.
///
/// Logarithmic only for roughly uniform value distributions; degrades
/// towards a linear scan on adversarial ones.
pub fn interpolation_search(data: &[i64], target: i64) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = data.len() - 1;

    while low <= high && data[low] <= target && target <= data[high] {
        if data[low] == data[high] {
            return (data[low] == target).then_some(low);
        }

        let spread = (data[high] - data[low]) as i128;
        let probe = low
            + (((target - data[low]) as i128 * (high - low) as i128) / spread) as usize;

        if data[probe] == target {
            return Some(probe);
        }
        if data[probe] < target {
            low = probe + 1;
        } else {
            if probe == 0 {
                return None;
            }
            high = probe - 1;
        }
    }

    None
}
