//! Search error taxonomy.
//!
//! An unreachable goal is NOT an error: a correct search over a
//! disconnected grid succeeds with an empty path. The variants here are
//! either caller mistakes rejected at the API boundary
//! ([`InvalidCoordinate`](SearchError::InvalidCoordinate)) or internal
//! invariant violations that indicate a defect.

use std::fmt;

use gridnav_core::Cell;

/// Errors produced by the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid bounds. Rejected before any
    /// search work happens.
    InvalidCoordinate { cell: Cell, rows: i32, cols: i32 },
    /// The frontier was popped while empty. The engine checks emptiness
    /// before popping, so this surfacing to a caller is a bug.
    EmptyQueue,
    /// The predecessor chain did not terminate at the start cell within
    /// `rows * cols` steps. A bug, never a recoverable condition.
    BrokenChain,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { cell, rows, cols } => {
                write!(f, "coordinate {cell} outside {rows}x{cols} grid")
            }
            Self::EmptyQueue => write!(f, "frontier popped while empty"),
            Self::BrokenChain => write!(f, "predecessor chain does not terminate at start"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = SearchError::InvalidCoordinate {
            cell: Cell::new(7, -1),
            rows: 5,
            cols: 5,
        };
        assert_eq!(err.to_string(), "coordinate (7, -1) outside 5x5 grid");
        assert_eq!(SearchError::EmptyQueue.to_string(), "frontier popped while empty");
    }
}
