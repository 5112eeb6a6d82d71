use gridnav_core::Cell;

use crate::Searcher;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::searcher::SearchReport;
use crate::traits::SearchGrid;

impl Searcher {
    /// A* search from `start` to `goal` with the Manhattan-distance
    /// heuristic.
    ///
    /// Manhattan distance is admissible and consistent on a 4-connected
    /// unit-cost grid, so the result is as short as the uniform-cost
    /// path while typically expanding fewer cells. Error behaviour
    /// matches [`uniform_cost`](Self::uniform_cost).
    pub fn astar<M: SearchGrid>(
        &mut self,
        map: &M,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchReport, SearchError> {
        let report = self.drive(map, start, goal, |c| manhattan(c, goal))?;
        log::debug!(
            "astar {start} -> {goal}: visited {}, path length {}",
            report.visited_count(),
            report.path_len()
        );
        Ok(report)
    }
}
