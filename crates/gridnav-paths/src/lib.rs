//! Shortest-path search over 2-D occupancy grids.
//!
//! This crate implements two informed/uninformed search algorithms on
//! 4-connected unit-cost grids:
//!
//! - **Uniform-cost search** (Dijkstra mode, [`Searcher::uniform_cost`])
//! - **A\*** with the Manhattan heuristic ([`Searcher::astar`])
//!
//! Both run through [`Searcher`], which owns a flat node arena and the
//! [`Frontier`] priority queue so repeated queries reuse allocations.
//! A run produces a [`SearchReport`]: the order in which cells were
//! explored plus the reconstructed shortest path (empty when the goal is
//! unreachable, which is a normal [`Outcome::Exhausted`] result rather
//! than an error).
//!
//! Instead of a decrease-key heap, the frontier keeps duplicate entries
//! and the engine skips entries whose priority no longer matches the
//! cell's best known cost (lazy invalidation).
//!
//! Grids enter through the [`SearchGrid`] trait — bounds plus a
//! blocked-cell predicate — implemented by `gridnav_core::Grid`.

mod astar;
mod distance;
mod error;
mod frontier;
mod reconstruct;
mod searcher;
mod traits;
mod ucs;

pub use distance::manhattan;
pub use error::SearchError;
pub use frontier::Frontier;
pub use searcher::{Algorithm, Outcome, SearchReport, Searcher};
pub use traits::SearchGrid;
