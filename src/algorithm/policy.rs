//! Shared machinery for the three growth policies
//!
//! A policy owns its bookkeeping (visited set, stack, frontier) and mutates
//! the grid one wall at a time. Each step yields at most one carve event;
//! steps that only adjust bookkeeping (a backtrack, a stale frontier entry)
//! yield none. The engine keeps stepping until the policy reports done.

use bitvec::bitvec;
use bitvec::prelude::BitVec;
use rand::rngs::StdRng;

use crate::io::error::{MazeError, Result};
use crate::spatial::grid::Cell;
use crate::spatial::{Direction, Grid};

/// Identifier for one of the three growth policies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Explicit-stack depth-first growth
    DepthFirst,
    /// Uniform random frontier growth
    RandomFrontier,
    /// Probabilistic mix of the stack and frontier rules
    Hybrid,
}

impl AlgorithmKind {
    /// Resolve the numeric CLI identifier (1, 2, or 3)
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidParameter`] for any other value.
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Self::DepthFirst),
            2 => Ok(Self::RandomFrontier),
            3 => Ok(Self::Hybrid),
            _ => Err(MazeError::InvalidParameter {
                parameter: "algorithm",
                value: id.to_string(),
                reason: "must be 1 (depth-first), 2 (frontier), or 3 (hybrid)".to_string(),
            }),
        }
    }

    /// The numeric CLI identifier of this policy
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::DepthFirst => 1,
            Self::RandomFrontier => 2,
            Self::Hybrid => 3,
        }
    }
}

/// A single wall removal, recorded as it happens
///
/// Consumed once by the canvas to paint the entered cell and the shared
/// edge, then discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarveEvent {
    /// Already-visited cell the passage grew from
    pub from: Cell,
    /// Newly visited cell the passage opened into
    pub to: Cell,
    /// Direction from `from` to `to`; the removed wall's orientation
    pub direction: Direction,
}

/// An unvisited cell adjacent to the visited region, plus the wall whose
/// removal would connect it
///
/// Entries can go stale when their cell is reached through another wall
/// first; stale entries are discarded without carving.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    /// The unvisited cell at insertion time
    pub cell: Cell,
    /// Direction from `cell` toward the visited cell that exposed it
    pub entry: Direction,
}

/// Per-cell visitation flags, disjoint from wall state
///
/// Drives termination: a policy is done once every cell is marked.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    width: usize,
    marked: usize,
    total: usize,
}

impl VisitedSet {
    /// Create an all-unvisited set for a `width` by `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        let total = width * height;
        Self {
            bits: bitvec![0; total],
            width,
            marked: 0,
            total,
        }
    }

    /// Mark a cell visited, returning whether it was newly marked
    pub fn mark(&mut self, cell: Cell) -> bool {
        let index = cell[1] * self.width + cell[0];
        if self.bits.get(index).as_deref() == Some(&false) {
            self.bits.set(index, true);
            self.marked += 1;
            true
        } else {
            false
        }
    }

    /// Whether the cell has been visited
    pub fn contains(&self, cell: Cell) -> bool {
        let index = cell[1] * self.width + cell[0];
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of visited cells
    pub const fn count(&self) -> usize {
        self.marked
    }

    /// Whether every cell has been visited
    pub const fn all_visited(&self) -> bool {
        self.marked == self.total
    }
}

/// One growth policy advancing a maze toward completion
pub trait GrowthPolicy {
    /// Advance by one bookkeeping action
    ///
    /// Returns the carve event if this step removed a wall, or `None` for
    /// pure bookkeeping (backtracking, discarding a stale frontier entry,
    /// or a step on an already-finished policy).
    fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Option<CarveEvent>;

    /// Whether the policy has exhausted its work
    fn is_done(&self) -> bool;

    /// Number of cells visited so far
    fn visited_count(&self) -> usize;
}

/// Collect the directions of currently unvisited neighbors of a cell
///
/// On narrow tori two directions may reach the same neighbor; both are kept
/// so the draw stays uniform over candidate walls.
pub(crate) fn unvisited_directions(grid: &Grid, visited: &VisitedSet, cell: Cell) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| !visited.contains(grid.neighbor(cell, direction)))
        .collect()
}

/// Insert frontier entries for the unvisited neighbors of a just-visited cell
pub(crate) fn expose_neighbors(
    grid: &Grid,
    visited: &VisitedSet,
    frontier: &mut Vec<FrontierEntry>,
    cell: Cell,
) {
    for direction in Direction::ALL {
        let candidate = grid.neighbor(cell, direction);
        if !visited.contains(candidate) {
            frontier.push(FrontierEntry {
                cell: candidate,
                entry: direction.opposite(),
            });
        }
    }
}
