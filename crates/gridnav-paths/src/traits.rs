use gridnav_core::{Cell, Grid};

/// The map contract consumed by the search engine: bounds plus a
/// blocked-cell predicate.
///
/// Forcing the start and goal cells open before a search is the caller's
/// responsibility; the engine does not check passability of endpoints.
pub trait SearchGrid {
    /// Number of rows.
    fn rows(&self) -> i32;

    /// Number of columns.
    fn cols(&self) -> i32;

    /// Whether `cell` can be entered. Must return false for cells
    /// outside the bounds.
    fn is_passable(&self, cell: Cell) -> bool;

    /// Whether `cell` lies within the bounds.
    #[inline]
    fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows() && cell.col >= 0 && cell.col < self.cols()
    }
}

impl SearchGrid for Grid {
    #[inline]
    fn rows(&self) -> i32 {
        Grid::rows(self)
    }

    #[inline]
    fn cols(&self) -> i32 {
        Grid::cols(self)
    }

    #[inline]
    fn is_passable(&self, cell: Cell) -> bool {
        Grid::is_passable(self, cell)
    }
}
