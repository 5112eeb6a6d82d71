use gridnav_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent as an A* heuristic on a 4-connected grid
/// with unit step cost.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(4, 4)), 8);
        assert_eq!(manhattan(Cell::new(2, 7), Cell::new(5, 1)), 9);
        assert_eq!(manhattan(Cell::new(3, 3), Cell::new(3, 3)), 0);
        // Symmetric.
        assert_eq!(
            manhattan(Cell::new(1, 9), Cell::new(6, 2)),
            manhattan(Cell::new(6, 2), Cell::new(1, 9)),
        );
    }
}
