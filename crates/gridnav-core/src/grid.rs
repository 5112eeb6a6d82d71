//! A rectangular occupancy grid of [`Tile`] values.
//!
//! [`Grid`] is built once per search request and treated as read-only
//! afterwards: search runs take `&Grid`, so several runs can read the same
//! grid side by side without locking.

use std::fmt;

use rand::Rng;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cell::Cell;

/// Occupancy state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// The cell can be entered.
    #[default]
    Open,
    /// The cell is a wall.
    Blocked,
}

/// A rows × cols occupancy grid with row-major flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid with every cell [`Tile::Open`].
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is less than 1.
    pub fn open(rows: i32, cols: i32) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid dimensions must be >= 1x1");
        Self {
            rows,
            cols,
            tiles: vec![Tile::Open; (rows * cols) as usize],
        }
    }

    /// Generate a grid where each cell is independently [`Tile::Blocked`]
    /// with probability `blocked_fraction`, drawn from the caller-owned
    /// `rng`. Cells are sampled in row-major order, so a given RNG stream
    /// always reproduces the same grid.
    ///
    /// Callers searching on the result must [`force_open`](Self::force_open)
    /// their start and goal cells first; generation does not know about
    /// endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are less than 1x1 or `blocked_fraction`
    /// is outside 0.0–1.0.
    pub fn generate(rows: i32, cols: i32, blocked_fraction: f64, rng: &mut impl Rng) -> Self {
        assert!(
            (0.0..=1.0).contains(&blocked_fraction),
            "blocked_fraction must be within 0.0-1.0, got {blocked_fraction}"
        );
        let mut grid = Self::open(rows, cols);
        for tile in grid.tiles.iter_mut() {
            if rng.random::<f64>() < blocked_fraction {
                *tile = Tile::Blocked;
            }
        }
        grid
    }

    /// Generate a grid from a seed. Repeat calls with the same seed,
    /// dimensions and fraction produce a bit-identical grid.
    pub fn generate_seeded(rows: i32, cols: i32, blocked_fraction: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(rows, cols, blocked_fraction, &mut rng)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `cell` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// The tile at `cell`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.idx(cell).map(|i| self.tiles[i])
    }

    /// Whether `cell` can be entered: false if [`Tile::Blocked`] or out
    /// of bounds.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        matches!(self.tile(cell), Some(Tile::Open))
    }

    /// Set the tile at `cell`. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, cell: Cell, tile: Tile) {
        if let Some(i) = self.idx(cell) {
            self.tiles[i] = tile;
        }
    }

    /// Force `cell` to [`Tile::Open`]. Callers apply this to start and
    /// goal after random generation, before searching.
    pub fn force_open(&mut self, cell: Cell) {
        self.set_tile(cell, Tile::Open);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Blocked).count()
    }

    /// Convert a cell to a row-major flat index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.row * self.cols + cell.col) as usize)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        Cell::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }
}

impl fmt::Display for Grid {
    /// Render as text, one row per line, `.` open and `#` blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = match self.tiles[(r * self.cols + c) as usize] {
                    Tile::Open => '.',
                    Tile::Blocked => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_is_all_passable() {
        let g = Grid::open(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.blocked_count(), 0);
        for r in 0..3 {
            for c in 0..4 {
                assert!(g.is_passable(Cell::new(r, c)));
            }
        }
    }

    #[test]
    #[should_panic]
    fn zero_dimension_panics() {
        let _ = Grid::open(0, 5);
    }

    #[test]
    fn out_of_bounds_is_not_passable() {
        let g = Grid::open(2, 2);
        assert!(!g.is_passable(Cell::new(-1, 0)));
        assert!(!g.is_passable(Cell::new(0, -1)));
        assert!(!g.is_passable(Cell::new(2, 0)));
        assert!(!g.is_passable(Cell::new(0, 2)));
        assert_eq!(g.tile(Cell::new(5, 5)), None);
    }

    #[test]
    fn same_seed_reproduces_grid() {
        let a = Grid::generate_seeded(10, 10, 0.3, 42);
        let b = Grid::generate_seeded(10, 10, 0.3, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = Grid::generate_seeded(10, 10, 0.5, 1);
        let b = Grid::generate_seeded(10, 10, 0.5, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn extreme_fractions() {
        let full = Grid::generate_seeded(4, 4, 1.0, 7);
        assert_eq!(full.blocked_count(), 16);
        let none = Grid::generate_seeded(4, 4, 0.0, 7);
        assert_eq!(none.blocked_count(), 0);
    }

    #[test]
    fn force_open_clears_a_blocked_cell() {
        let mut g = Grid::generate_seeded(4, 4, 1.0, 0);
        let start = Cell::new(0, 0);
        assert!(!g.is_passable(start));
        g.force_open(start);
        assert!(g.is_passable(start));
        assert_eq!(g.blocked_count(), 15);
    }

    #[test]
    fn idx_round_trip() {
        let g = Grid::open(3, 5);
        for i in 0..g.len() {
            assert_eq!(g.idx(g.cell(i)), Some(i));
        }
        assert_eq!(g.idx(Cell::new(3, 0)), None);
    }

    #[test]
    fn display_renders_walls() {
        let mut g = Grid::open(2, 3);
        g.set_tile(Cell::new(0, 1), Tile::Blocked);
        assert_eq!(g.to_string(), ".#.\n...\n");
    }
}
