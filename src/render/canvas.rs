//! Canvas state at unit resolution with minimal-change tracking
//!
//! The canvas is a lattice of unit squares at twice the cell resolution:
//! unit `(2x, 2y)` is the interior of cell `(x, y)`, odd-coordinate units
//! are the shared edges and corner posts between cells. Each unit expands
//! to a `thickness`-sized pixel block at frame extraction time, so the GIF
//! canvas measures `(2W * t) x (2H * t)` pixels.
//!
//! Every mutation that actually flips a unit is recorded along with the
//! bounding box of all flips since the last flush. Flushing yields a frame
//! that covers exactly that box, with untouched pixels rendered as the
//! transparent index so the decoder keeps the previous frame's content
//! underneath ("do not dispose" disposal).

use ndarray::Array2;

use crate::algorithm::policy::CarveEvent;
use crate::render::frame::FrameDescriptor;
use crate::render::palette::{PASSAGE_INDEX, TRANSPARENT_INDEX, WALL_INDEX};
use crate::spatial::grid::Cell;

/// Inclusive bounding box of changed units
#[derive(Clone, Copy, Debug)]
struct DiffBox {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
}

impl DiffBox {
    const fn at(ux: usize, uy: usize) -> Self {
        Self {
            left: ux,
            top: uy,
            right: ux,
            bottom: uy,
        }
    }

    fn include(&mut self, ux: usize, uy: usize) {
        self.left = self.left.min(ux);
        self.right = self.right.max(ux);
        self.top = self.top.min(uy);
        self.bottom = self.bottom.max(uy);
    }
}

/// Unit-resolution raster of the maze plus pending-change bookkeeping
#[derive(Debug)]
pub struct Canvas {
    units: Array2<u8>,
    unit_width: usize,
    unit_height: usize,
    thickness: usize,
    changes: Vec<[usize; 2]>,
    diff: Option<DiffBox>,
}

impl Canvas {
    /// Create an all-wall canvas for a `grid_width` by `grid_height` cell
    /// grid with the given pixel thickness per unit
    pub fn new(grid_width: usize, grid_height: usize, thickness: usize) -> Self {
        let unit_width = grid_width * 2;
        let unit_height = grid_height * 2;
        Self {
            units: Array2::from_elem((unit_height, unit_width), WALL_INDEX),
            unit_width,
            unit_height,
            thickness,
            changes: Vec::new(),
            diff: None,
        }
    }

    /// Canvas width in pixels
    pub const fn pixel_width(&self) -> usize {
        self.unit_width * self.thickness
    }

    /// Canvas height in pixels
    pub const fn pixel_height(&self) -> usize {
        self.unit_height * self.thickness
    }

    /// Number of units flipped since the last flush
    pub const fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    /// Open the interior unit of a cell (the engine's start cell)
    pub fn open_cell(&mut self, cell: Cell) {
        self.paint(cell[0] * 2, cell[1] * 2, PASSAGE_INDEX);
    }

    /// Apply one carve event: open both cell interiors and the shared edge
    pub fn apply_carve(&mut self, event: &CarveEvent) {
        let [dx, dy] = event.direction.offset();
        let from_ux = event.from[0] * 2;
        let from_uy = event.from[1] * 2;
        let edge_ux = Self::wrap_unit(from_ux, dx, self.unit_width);
        let edge_uy = Self::wrap_unit(from_uy, dy, self.unit_height);

        self.paint(from_ux, from_uy, PASSAGE_INDEX);
        self.paint(edge_ux, edge_uy, PASSAGE_INDEX);
        self.paint(event.to[0] * 2, event.to[1] * 2, PASSAGE_INDEX);
    }

    const fn wrap_unit(value: usize, delta: i32, len: usize) -> usize {
        match delta {
            -1 => (value + len - 1) % len,
            1 => (value + 1) % len,
            _ => value,
        }
    }

    fn paint(&mut self, ux: usize, uy: usize, index: u8) {
        let Some(unit) = self.units.get_mut([uy, ux]) else {
            return;
        };
        if *unit == index {
            return;
        }
        *unit = index;
        self.changes.push([ux, uy]);
        match &mut self.diff {
            Some(diff) => diff.include(ux, uy),
            None => self.diff = Some(DiffBox::at(ux, uy)),
        }
    }

    /// Flush pending changes into a delta frame, if any exist
    ///
    /// The frame covers exactly the bounding box of flipped units; pixels
    /// of untouched units within the box come out as the transparent index.
    /// Clears the change list and the diff box.
    pub fn take_frame(&mut self, delay: u16) -> Option<FrameDescriptor> {
        let diff = self.diff.take()?;
        let t = self.thickness;
        let box_width = diff.right - diff.left + 1;
        let box_height = diff.bottom - diff.top + 1;
        let width_px = box_width * t;
        let height_px = box_height * t;

        let mut pixels = vec![TRANSPARENT_INDEX; width_px * height_px];
        for &[ux, uy] in &self.changes {
            let value = self.units.get([uy, ux]).copied().unwrap_or(WALL_INDEX);
            Self::fill_block(
                &mut pixels,
                width_px,
                (ux - diff.left) * t,
                (uy - diff.top) * t,
                t,
                value,
            );
        }
        self.changes.clear();

        Some(FrameDescriptor {
            left: (diff.left * t) as u16,
            top: (diff.top * t) as u16,
            width: width_px as u16,
            height: height_px as u16,
            delay,
            transparency: Some(TRANSPARENT_INDEX),
            pixels,
        })
    }

    /// Render the whole canvas as an opaque frame
    ///
    /// Open units take `open_index` (the lead frame passes the highlight
    /// index), walls stay at the background index. Does not touch the
    /// pending-change state.
    pub fn full_frame(&self, delay: u16, open_index: u8) -> FrameDescriptor {
        let t = self.thickness;
        let width_px = self.pixel_width();
        let height_px = self.pixel_height();
        let mut pixels = vec![WALL_INDEX; width_px * height_px];

        for ((uy, ux), &unit) in self.units.indexed_iter() {
            if unit != WALL_INDEX {
                Self::fill_block(&mut pixels, width_px, ux * t, uy * t, t, open_index);
            }
        }

        FrameDescriptor {
            left: 0,
            top: 0,
            width: width_px as u16,
            height: height_px as u16,
            delay,
            transparency: None,
            pixels,
        }
    }

    fn fill_block(pixels: &mut [u8], row_width: usize, px: usize, py: usize, t: usize, value: u8) {
        for row in 0..t {
            let start = (py + row) * row_width + px;
            if let Some(slot) = pixels.get_mut(start..start + t) {
                slot.fill(value);
            }
        }
    }
}
