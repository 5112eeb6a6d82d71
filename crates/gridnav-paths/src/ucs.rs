use gridnav_core::Cell;

use crate::Searcher;
use crate::error::SearchError;
use crate::searcher::SearchReport;
use crate::traits::SearchGrid;

impl Searcher {
    /// Uniform-cost (Dijkstra-style) search from `start` to `goal`.
    ///
    /// Cells are expanded in order of cost from the start, one unit per
    /// grid step, so a found path is a shortest one. Fails with
    /// [`SearchError::InvalidCoordinate`] when either endpoint is outside
    /// the grid; an unreachable goal is reported via
    /// [`Outcome::Exhausted`](crate::Outcome::Exhausted), not an error.
    pub fn uniform_cost<M: SearchGrid>(
        &mut self,
        map: &M,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchReport, SearchError> {
        let report = self.drive(map, start, goal, |_| 0)?;
        log::debug!(
            "uniform-cost {start} -> {goal}: visited {}, path length {}",
            report.visited_count(),
            report.path_len()
        );
        Ok(report)
    }
}
