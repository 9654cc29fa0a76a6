//! Toroidal grid of walled cells
//!
//! Every cell starts fully walled; the growth policies open passages by
//! removing shared walls. Adjacency wraps modulo the grid dimensions, so
//! there is no border handling anywhere else in the crate: all wrap
//! arithmetic lives in [`Grid::neighbor`].

use bitvec::prelude::BitVec;
use bitvec::bitvec;
use ndarray::Array2;

/// Cell coordinates as `[x, y]` in cell units
pub type Cell = [usize; 2];

/// One of the four cardinal wall directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing y (wrapping to the bottom row)
    North,
    /// Toward increasing y (wrapping to the top row)
    South,
    /// Toward increasing x (wrapping to the leftmost column)
    East,
    /// Toward decreasing x (wrapping to the rightmost column)
    West,
}

impl Direction {
    /// All four directions, in a fixed iteration order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction pointing back across the same shared wall
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Wall flag bit for this direction
    const fn bit(self) -> u8 {
        match self {
            Self::North => 0b0001,
            Self::South => 0b0010,
            Self::East => 0b0100,
            Self::West => 0b1000,
        }
    }

    /// Coordinate delta `[dx, dy]` for one step in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [0, -1],
            Self::South => [0, 1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }
}

/// Wrap a coordinate by a single-step delta on an axis of the given length
///
/// Deltas are restricted to -1, 0, and 1 since cells only ever reference
/// their direct neighbors.
const fn wrap(value: usize, delta: i32, len: usize) -> usize {
    match delta {
        -1 => (value + len - 1) % len,
        1 => (value + 1) % len,
        _ => value,
    }
}

const ALL_WALLS: u8 = 0b1111;

/// Toroidal lattice of cells with four wall flags each
///
/// Wall state is symmetric by construction: removing a wall clears the flag
/// on both sides of the shared edge. The grid carries no visitation state;
/// that belongs to the active growth policy.
#[derive(Debug, Clone)]
pub struct Grid {
    walls: Array2<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a fully walled toroidal grid of `width` by `height` cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            walls: Array2::from_elem((height, width), ALL_WALLS),
            width,
            height,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The adjacent cell in the given direction, wrapping modulo the grid
    /// dimensions
    ///
    /// On a zero-area grid this returns the input cell unchanged; the
    /// policies never step such a grid, but the query itself must not fail.
    pub const fn neighbor(&self, cell: Cell, direction: Direction) -> Cell {
        if self.width == 0 || self.height == 0 {
            return cell;
        }
        let [dx, dy] = direction.offset();
        [wrap(cell[0], dx, self.width), wrap(cell[1], dy, self.height)]
    }

    /// Whether the wall on the given side of the cell is still present
    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.walls
            .get([cell[1], cell[0]])
            .is_some_and(|&flags| flags & direction.bit() != 0)
    }

    /// Remove the wall between the cell and its neighbor in `direction`
    ///
    /// Clears the flag on both sides of the shared edge. Idempotent: removing
    /// an already-open wall changes nothing.
    pub fn remove_wall(&mut self, cell: Cell, direction: Direction) {
        let other = self.neighbor(cell, direction);
        if let Some(flags) = self.walls.get_mut([cell[1], cell[0]]) {
            *flags &= !direction.bit();
        }
        if let Some(flags) = self.walls.get_mut([other[1], other[0]]) {
            *flags &= !direction.opposite().bit();
        }
    }

    /// Whether any wall of the cell has been removed
    pub fn is_carved(&self, cell: Cell) -> bool {
        self.walls
            .get([cell[1], cell[0]])
            .is_some_and(|&flags| flags != ALL_WALLS)
    }

    /// Whether every cell is reachable from cell `[0, 0]` through open walls
    ///
    /// Flood fill over passages; a freshly created grid reports `false`
    /// (unless it has at most one cell), a completed maze reports `true`.
    pub fn fully_connected(&self) -> bool {
        let total = self.cell_count();
        if total <= 1 {
            return true;
        }

        let mut reached: BitVec = bitvec![0; total];
        let mut pending: Vec<Cell> = vec![[0, 0]];
        let mut count = 0usize;
        reached.set(0, true);

        while let Some(cell) = pending.pop() {
            count += 1;
            for direction in Direction::ALL {
                if self.has_wall(cell, direction) {
                    continue;
                }
                let next = self.neighbor(cell, direction);
                let index = next[1] * self.width + next[0];
                if reached.get(index).as_deref() == Some(&false) {
                    reached.set(index, true);
                    pending.push(next);
                }
            }
        }

        count == total
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Grid};

    #[test]
    fn test_neighbor_wraps_at_every_seam() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.neighbor([0, 0], Direction::West), [3, 0]);
        assert_eq!(grid.neighbor([3, 0], Direction::East), [0, 0]);
        assert_eq!(grid.neighbor([0, 0], Direction::North), [0, 2]);
        assert_eq!(grid.neighbor([0, 2], Direction::South), [0, 0]);
        assert_eq!(grid.neighbor([2, 1], Direction::East), [3, 1]);
    }

    #[test]
    fn test_remove_wall_is_symmetric_and_idempotent() {
        let mut grid = Grid::new(5, 5);
        grid.remove_wall([1, 1], Direction::East);

        assert!(!grid.has_wall([1, 1], Direction::East));
        assert!(!grid.has_wall([2, 1], Direction::West));
        assert!(grid.has_wall([1, 1], Direction::North));

        grid.remove_wall([1, 1], Direction::East);
        assert!(!grid.has_wall([1, 1], Direction::East));
    }

    #[test]
    fn test_remove_wall_symmetry_across_wrap_seam() {
        let mut grid = Grid::new(4, 4);
        grid.remove_wall([3, 2], Direction::East);
        assert!(!grid.has_wall([3, 2], Direction::East));
        assert!(!grid.has_wall([0, 2], Direction::West));

        grid.remove_wall([1, 0], Direction::North);
        assert!(!grid.has_wall([1, 0], Direction::North));
        assert!(!grid.has_wall([1, 3], Direction::South));
    }

    #[test]
    fn test_fresh_grid_is_not_connected() {
        let grid = Grid::new(3, 3);
        assert!(!grid.fully_connected());
        assert!(!grid.is_carved([1, 1]));
    }

    #[test]
    fn test_single_cell_grid_is_connected() {
        let grid = Grid::new(1, 1);
        assert!(grid.fully_connected());
    }
}
