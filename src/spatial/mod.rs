//! Toroidal lattice state and connectivity queries

/// Toroidal cell/wall grid with symmetric wall removal
pub mod grid;

pub use grid::{Direction, Grid};
