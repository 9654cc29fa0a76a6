//! Stack/frontier hybrid growth
//!
//! Keeps both depth-first and frontier bookkeeping live. Each step draws
//! against `stack_bias` to pick the advancing rule; a frontier advance also
//! pushes the entered cell onto the stack so later depth-first steps resume
//! from it. Newly visited cells feed the frontier under both rules, keeping
//! the frontier populated through long depth-first runs.

use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::policy::{
    CarveEvent, FrontierEntry, GrowthPolicy, VisitedSet, expose_neighbors, unvisited_directions,
};
use crate::spatial::Grid;
use crate::spatial::grid::Cell;

/// Hybrid policy state: visited set, backtracking stack, and frontier
#[derive(Debug)]
pub struct Hybrid {
    visited: VisitedSet,
    stack: Vec<Cell>,
    frontier: Vec<FrontierEntry>,
    stack_bias: f64,
}

impl Hybrid {
    /// Start a hybrid run at `start`
    ///
    /// `stack_bias` is the per-step probability of advancing by the
    /// depth-first rule instead of the frontier rule. A zero-area grid
    /// yields a policy that is immediately done.
    pub fn new(grid: &Grid, start: Cell, stack_bias: f64) -> Self {
        let mut visited = VisitedSet::new(grid.width(), grid.height());
        let mut stack = Vec::new();
        let mut frontier = Vec::new();
        if grid.cell_count() > 0 {
            visited.mark(start);
            stack.push(start);
            expose_neighbors(grid, &visited, &mut frontier, start);
        }
        Self {
            visited,
            stack,
            frontier,
            stack_bias,
        }
    }

    fn advance_stack(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Option<CarveEvent> {
        let current = *self.stack.last()?;
        let candidates = unvisited_directions(grid, &self.visited, current);

        if candidates.is_empty() {
            self.stack.pop();
            return None;
        }
        let choice = rng.random_range(0..candidates.len());
        let direction = *candidates.get(choice)?;

        grid.remove_wall(current, direction);
        let next = grid.neighbor(current, direction);
        self.visited.mark(next);
        self.stack.push(next);
        expose_neighbors(grid, &self.visited, &mut self.frontier, next);

        Some(CarveEvent {
            from: current,
            to: next,
            direction,
        })
    }

    fn advance_frontier(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Option<CarveEvent> {
        while !self.frontier.is_empty() {
            let choice = rng.random_range(0..self.frontier.len());
            let entry = self.frontier.swap_remove(choice);
            if self.visited.contains(entry.cell) {
                continue;
            }

            grid.remove_wall(entry.cell, entry.entry);
            let from = grid.neighbor(entry.cell, entry.entry);
            self.visited.mark(entry.cell);
            self.stack.push(entry.cell);
            expose_neighbors(grid, &self.visited, &mut self.frontier, entry.cell);

            return Some(CarveEvent {
                from,
                to: entry.cell,
                direction: entry.entry.opposite(),
            });
        }
        None
    }
}

impl GrowthPolicy for Hybrid {
    fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Option<CarveEvent> {
        let use_stack = if self.stack.is_empty() {
            false
        } else if self.frontier.is_empty() {
            true
        } else {
            rng.random::<f64>() < self.stack_bias
        };

        if use_stack {
            self.advance_stack(grid, rng)
        } else {
            self.advance_frontier(grid, rng)
        }
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty() && self.frontier.is_empty()
    }

    fn visited_count(&self) -> usize {
        self.visited.count()
    }
}
