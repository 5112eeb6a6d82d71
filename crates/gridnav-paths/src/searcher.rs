use gridnav_core::Cell;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::traits::SearchGrid;

/// Parent sentinel for the start cell and for unreached cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search bookkeeping, stored in a flat grid-sized arena.
///
/// `generation` stamps which run last touched the node; nodes from an
/// earlier run are treated as unreached without any per-run reset pass.
#[derive(Clone)]
pub(crate) struct Node {
    /// Lowest known cost from the start (gscore).
    pub(crate) g: i32,
    /// Priority key: equals `g` for uniform-cost search, `g + heuristic`
    /// for A*. A popped frontier entry is stale when its priority no
    /// longer matches this.
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Which algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Dijkstra-style search ordered by cost alone.
    UniformCost,
    /// A* with the Manhattan-distance heuristic.
    AStar,
}

/// Terminal state of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was expanded; `path` holds a shortest route.
    Found,
    /// The frontier emptied first: the goal is not connected to the
    /// start. A normal result, not an error.
    Exhausted,
}

/// Everything a search run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Cells in the order they were finalized for expansion. On
    /// [`Outcome::Exhausted`] this is every cell reachable from the start.
    pub visited: Vec<Cell>,
    /// Start-to-goal path, both endpoints included. Empty on
    /// [`Outcome::Exhausted`]; `[start]` when start == goal. Callers
    /// distinguishing "unreachable" from "already there" should check
    /// `outcome`, not path emptiness alone.
    pub path: Vec<Cell>,
}

impl SearchReport {
    /// Number of cells explored.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Path length in cells (0 when the goal is unreachable).
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Reusable shortest-path search engine.
///
/// Owns the node arena and the frontier so repeated runs reuse their
/// allocations; a generation counter invalidates stale node state between
/// runs. One run at a time per `Searcher` (`&mut self`); side-by-side
/// runs on the same grid take one `Searcher` each, which is safe because
/// searches only read the grid.
#[derive(Default)]
pub struct Searcher {
    nodes: Vec<Node>,
    generation: u32,
    frontier: Frontier,
}

impl Searcher {
    /// Create a searcher with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the selected algorithm from `start` to `goal` on `map`.
    pub fn search<M: SearchGrid>(
        &mut self,
        map: &M,
        start: Cell,
        goal: Cell,
        algorithm: Algorithm,
    ) -> Result<SearchReport, SearchError> {
        match algorithm {
            Algorithm::UniformCost => self.uniform_cost(map, start, goal),
            Algorithm::AStar => self.astar(map, start, goal),
        }
    }

    /// Shared driver for both algorithms. Uniform-cost search is the
    /// zero-heuristic case; A* passes the Manhattan distance to the goal.
    pub(crate) fn drive<M: SearchGrid>(
        &mut self,
        map: &M,
        start: Cell,
        goal: Cell,
        heuristic: impl Fn(Cell) -> i32,
    ) -> Result<SearchReport, SearchError> {
        let rows = map.rows();
        let cols = map.cols();
        for cell in [start, goal] {
            if !map.contains(cell) {
                return Err(SearchError::InvalidCoordinate { cell, rows, cols });
            }
        }

        let len = (rows * cols) as usize;
        if self.nodes.len() < len {
            // Grown past capacity: start generations over on a fresh arena.
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let idx = |c: Cell| (c.row * cols + c.col) as usize;
        let cell_of = |i: usize| Cell::new(i as i32 / cols, i as i32 % cols);
        let start_idx = idx(start);
        let goal_idx = idx(goal);

        {
            let n = &mut self.nodes[start_idx];
            n.g = 0;
            n.f = heuristic(start);
            n.parent = NO_PARENT;
            n.generation = cur_gen;
        }
        self.frontier.clear();
        self.frontier.push(self.nodes[start_idx].f, start_idx);

        let mut visited = Vec::new();
        let mut found = false;

        while !self.frontier.is_empty() {
            let (priority, ci) = self.frontier.pop_min()?;

            // Stale entry: a cheaper push superseded it.
            if priority != self.nodes[ci].f {
                continue;
            }

            let current = cell_of(ci);
            visited.push(current);
            if ci == goal_idx {
                found = true;
                break;
            }

            let current_g = self.nodes[ci].g;
            for nb in current.neighbors_4() {
                if !map.is_passable(nb) {
                    continue;
                }
                let ni = idx(nb);
                let tentative = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.f = tentative + heuristic(nb);
                n.parent = ci;
                self.frontier.push(n.f, ni);
            }
        }

        let path = crate::reconstruct::reconstruct(&self.nodes, cur_gen, cols, start_idx, goal_idx)?;
        let outcome = if found {
            Outcome::Found
        } else {
            Outcome::Exhausted
        };
        Ok(SearchReport {
            outcome,
            visited,
            path,
        })
    }
}
