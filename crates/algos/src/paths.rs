use fxhash::FxHashMap;

use quiz_graph::prelude::*;

/// Distances and predecessors from a single source, as produced by the
/// shortest-path solvers.
///
/// A node that is absent from the distance map is unreachable from the
/// source; [`ShortestPaths::distance`] returns `None` for it. The
/// connected random generator never produces such nodes, but callers
/// with hand-built graphs get an explicit answer.
#[derive(Debug, Clone)]
pub struct ShortestPaths<NI: NodeId> {
    source: NI,
    distances: FxHashMap<NI, i64>,
    predecessors: FxHashMap<NI, NI>,
}

impl<NI: NodeId> ShortestPaths<NI> {
    pub(crate) fn new(source: NI) -> Self {
        let mut distances = FxHashMap::default();
        distances.insert(source, 0);

        Self {
            source,
            distances,
            predecessors: FxHashMap::default(),
        }
    }

    pub(crate) fn relax(&mut self, node: NI, distance: i64, predecessor: NI) {
        self.distances.insert(node, distance);
        self.predecessors.insert(node, predecessor);
    }

    pub fn source(&self) -> NI {
        self.source
    }

    /// The shortest distance from the source to `node`, or `None` if
    /// `node` is unreachable.
    pub fn distance(&self, node: NI) -> Option<i64> {
        self.distances.get(&node).copied()
    }

    /// The node immediately preceding `node` on a shortest path from
    /// the source. `None` for the source itself and for unreachable
    /// nodes.
    pub fn predecessor(&self, node: NI) -> Option<NI> {
        self.predecessors.get(&node).copied()
    }

    /// The raw predecessor map.
    pub fn predecessors(&self) -> &FxHashMap<NI, NI> {
        &self.predecessors
    }

    /// The shortest path from the source to `target`, both endpoints
    /// included, or `None` if `target` is unreachable.
    pub fn path_to(&self, target: NI) -> Option<Vec<NI>> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Walks a predecessor map from `target` back to `source` and returns
/// the path in source-to-target order, both endpoints included.
///
/// Returns `None` when the predecessor chain never reaches the source,
/// i.e. when the target is unreachable. The walk is bounded by the map
/// size, so a malformed map cannot loop forever.
pub fn reconstruct_path<NI: NodeId>(
    predecessors: &FxHashMap<NI, NI>,
    source: NI,
    target: NI,
) -> Option<Vec<NI>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = *predecessors.get(&current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;

    use crate::prelude::*;

    #[test]
    fn reconstructs_the_triangle_path() {
        let mut predecessors = FxHashMap::default();
        predecessors.insert('B', 'A');
        predecessors.insert('C', 'B');

        assert_eq!(
            reconstruct_path(&predecessors, 'A', 'C'),
            Some(vec!['A', 'B', 'C'])
        );
        assert_eq!(
            reconstruct_path(&predecessors, 'A', 'B'),
            Some(vec!['A', 'B'])
        );
    }

    #[test]
    fn source_reconstructs_to_itself() {
        let predecessors = FxHashMap::default();

        assert_eq!(reconstruct_path(&predecessors, 'A', 'A'), Some(vec!['A']));
    }

    #[test]
    fn unreachable_target_yields_none() {
        let mut predecessors = FxHashMap::default();
        predecessors.insert('B', 'A');

        assert_eq!(reconstruct_path(&predecessors, 'A', 'Z'), None);
    }

    #[test]
    fn cyclic_predecessor_map_terminates() {
        let mut predecessors = FxHashMap::default();
        predecessors.insert('B', 'C');
        predecessors.insert('C', 'B');

        assert_eq!(reconstruct_path(&predecessors, 'A', 'B'), None);
    }
}
