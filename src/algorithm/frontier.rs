//! Uniform random frontier growth
//!
//! Prim-flavored expansion: keep every (unvisited cell, entry wall) pair
//! bordering the visited region and consume one uniformly at random per
//! carve. Growth is diffuse, so consecutive carves land far apart and the
//! per-frame changed rectangle tends toward the whole canvas. That is the
//! documented cost of this policy, not a defect.

use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::policy::{
    CarveEvent, FrontierEntry, GrowthPolicy, VisitedSet, expose_neighbors,
};
use crate::spatial::Grid;
use crate::spatial::grid::Cell;

/// Frontier policy state: a visited set and the pending expansion entries
#[derive(Debug)]
pub struct RandomFrontier {
    visited: VisitedSet,
    frontier: Vec<FrontierEntry>,
}

impl RandomFrontier {
    /// Start a frontier run at `start`
    ///
    /// A zero-area grid yields a policy that is immediately done.
    pub fn new(grid: &Grid, start: Cell) -> Self {
        let mut visited = VisitedSet::new(grid.width(), grid.height());
        let mut frontier = Vec::new();
        if grid.cell_count() > 0 {
            visited.mark(start);
            expose_neighbors(grid, &visited, &mut frontier, start);
        }
        Self { visited, frontier }
    }
}

impl GrowthPolicy for RandomFrontier {
    fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Option<CarveEvent> {
        while !self.frontier.is_empty() {
            let choice = rng.random_range(0..self.frontier.len());
            let entry = self.frontier.swap_remove(choice);
            if self.visited.contains(entry.cell) {
                // Reached through another wall since insertion; discard.
                continue;
            }

            grid.remove_wall(entry.cell, entry.entry);
            let from = grid.neighbor(entry.cell, entry.entry);
            self.visited.mark(entry.cell);
            expose_neighbors(grid, &self.visited, &mut self.frontier, entry.cell);

            return Some(CarveEvent {
                from,
                to: entry.cell,
                direction: entry.entry.opposite(),
            });
        }
        None
    }

    fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    fn visited_count(&self) -> usize {
        self.visited.count()
    }
}
