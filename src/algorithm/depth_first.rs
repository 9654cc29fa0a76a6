//! Depth-first growth with an explicit cell stack
//!
//! The recursive backtracker, flattened into an explicit stack so depth
//! stays bounded on large grids. From the current cell, carve into a
//! uniformly chosen unvisited neighbor; at a dead end, pop without carving.

use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::policy::{CarveEvent, GrowthPolicy, VisitedSet, unvisited_directions};
use crate::spatial::Grid;
use crate::spatial::grid::Cell;

/// Depth-first policy state: a visited set and the backtracking stack
#[derive(Debug)]
pub struct DepthFirst {
    visited: VisitedSet,
    stack: Vec<Cell>,
}

impl DepthFirst {
    /// Start a depth-first run at `start`
    ///
    /// A zero-area grid yields a policy that is immediately done.
    pub fn new(grid: &Grid, start: Cell) -> Self {
        let mut visited = VisitedSet::new(grid.width(), grid.height());
        let mut stack = Vec::new();
        if grid.cell_count() > 0 {
            visited.mark(start);
            stack.push(start);
        }
        Self { visited, stack }
    }
}

impl GrowthPolicy for DepthFirst {
    fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Option<CarveEvent> {
        let current = *self.stack.last()?;
        let candidates = unvisited_directions(grid, &self.visited, current);

        if candidates.is_empty() {
            // Dead end: backtrack without carving.
            self.stack.pop();
            return None;
        }
        let choice = rng.random_range(0..candidates.len());
        let direction = *candidates.get(choice)?;

        grid.remove_wall(current, direction);
        let next = grid.neighbor(current, direction);
        self.visited.mark(next);
        self.stack.push(next);

        Some(CarveEvent {
            from: current,
            to: next,
            direction,
        })
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    fn visited_count(&self) -> usize {
        self.visited.count()
    }
}
