//! Scoring of player answers against the solver and benchmark output.

use quiz_graph::prelude::*;

use crate::paths::ShortestPaths;
use crate::search::SearchResult;

/// Checks a claimed shortest distance to `target`.
///
/// Unreachable targets have no correct distance, so any claim for them
/// is wrong.
pub fn check_distance<NI: NodeId>(paths: &ShortestPaths<NI>, target: NI, claimed: i64) -> bool {
    paths.distance(target) == Some(claimed)
}

/// Checks a claimed path from the source to `target`.
///
/// A path is accepted when it starts at the source, ends at the
/// target, every hop is an edge of the graph and its total weight
/// equals the shortest distance. Equal-weight alternatives to the
/// solver's own reconstruction count as correct.
pub fn check_path<NI: NodeId>(
    graph: &UndirectedGraph<NI>,
    paths: &ShortestPaths<NI>,
    target: NI,
    claimed: &[NI],
) -> bool {
    let Some(shortest) = paths.distance(target) else {
        return false;
    };
    let (Some(&first), Some(&last)) = (claimed.first(), claimed.last()) else {
        return false;
    };
    if first != paths.source() || last != target {
        return false;
    }

    let mut total = 0_i64;
    for hop in claimed.windows(2) {
        match graph.weight(hop[0], hop[1]) {
            Some(weight) => total += weight,
            None => return false,
        }
    }

    total == shortest
}

/// The index all algorithms agreed on, or `None` if any run missed the
/// target or disagreed.
pub fn agreed_index(results: &[SearchResult]) -> Option<usize> {
    let mut indices = results.iter().map(|result| result.index);
    let first = indices.next()??;
    indices.all(|index| index == Some(first)).then_some(first)
}

/// Checks a claimed index for the value-index game.
pub fn check_index(results: &[SearchResult], claimed: usize) -> bool {
    agreed_index(results) == Some(claimed)
}
