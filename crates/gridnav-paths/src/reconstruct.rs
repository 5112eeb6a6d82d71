//! Backtrace from the predecessor table to an ordered path.

use gridnav_core::Cell;

use crate::error::SearchError;
use crate::searcher::{NO_PARENT, Node};

/// Walk predecessors from `goal` back to `start` and return the path in
/// start-to-goal order.
///
/// Returns `[start]` when goal == start and an empty path when the goal
/// was never reached. Fails with [`SearchError::BrokenChain`] if the walk
/// does not terminate at `start` within one step per grid cell; that
/// indicates corrupted bookkeeping, not a property of the grid.
pub(crate) fn reconstruct(
    nodes: &[Node],
    generation: u32,
    cols: i32,
    start: usize,
    goal: usize,
) -> Result<Vec<Cell>, SearchError> {
    let cell_of = |i: usize| Cell::new(i as i32 / cols, i as i32 % cols);

    if goal == start {
        return Ok(vec![cell_of(start)]);
    }
    if nodes[goal].generation != generation || nodes[goal].parent == NO_PARENT {
        // Unreached goal: a normal outcome, not an error.
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut cur = goal;
    for _ in 0..nodes.len() {
        path.push(cell_of(cur));
        if cur == start {
            path.reverse();
            return Ok(path);
        }
        let n = &nodes[cur];
        if n.generation != generation || n.parent == NO_PARENT {
            return Err(SearchError::BrokenChain);
        }
        cur = n.parent;
    }
    Err(SearchError::BrokenChain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(len: usize) -> Vec<Node> {
        vec![Node::default(); len]
    }

    fn link(nodes: &mut [Node], child: usize, parent: usize, generation: u32) {
        nodes[child].parent = parent;
        nodes[child].generation = generation;
    }

    #[test]
    fn start_equals_goal_yields_single_cell() {
        let nodes = arena(9);
        let path = reconstruct(&nodes, 1, 3, 4, 4).unwrap();
        assert_eq!(path, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn unreached_goal_yields_empty_path() {
        let mut nodes = arena(9);
        nodes[0].generation = 1;
        let path = reconstruct(&nodes, 1, 3, 0, 8).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn stale_generation_counts_as_unreached() {
        let mut nodes = arena(9);
        nodes[0].generation = 2;
        // Parent chain written by an older run.
        link(&mut nodes, 8, 0, 1);
        let path = reconstruct(&nodes, 2, 3, 0, 8).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn walks_chain_in_order() {
        // 0 -> 1 -> 2 -> 5 on a 3x3 grid.
        let mut nodes = arena(9);
        nodes[0].generation = 1;
        link(&mut nodes, 1, 0, 1);
        link(&mut nodes, 2, 1, 1);
        link(&mut nodes, 5, 2, 1);
        let path = reconstruct(&nodes, 1, 3, 0, 5).unwrap();
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn cycle_is_detected() {
        let mut nodes = arena(9);
        nodes[0].generation = 1;
        link(&mut nodes, 1, 2, 1);
        link(&mut nodes, 2, 1, 1);
        assert_eq!(
            reconstruct(&nodes, 1, 3, 0, 1),
            Err(SearchError::BrokenChain)
        );
    }

    #[test]
    fn chain_missing_start_is_detected() {
        let mut nodes = arena(9);
        nodes[0].generation = 1;
        // Goal's chain dead-ends at 4, which has no parent.
        nodes[4].generation = 1;
        link(&mut nodes, 5, 4, 1);
        assert_eq!(
            reconstruct(&nodes, 1, 3, 0, 5),
            Err(SearchError::BrokenChain)
        );
    }
}
