//! **gridnav-core** — occupancy grids and geometry for grid-based
//! shortest-path search.
//!
//! This crate provides the value types shared across the *gridnav*
//! workspace: the [`Cell`] coordinate, the [`Tile`] occupancy state, and
//! the [`Grid`] model with seeded random generation. Search algorithms
//! live in the `gridnav-paths` crate.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{Grid, Tile};
