//! Maze growth animation on a toroidal grid, rendered as an animated GIF
//!
//! The engine carves passages on a wrap-around lattice using one of three
//! growth policies, while the encoder tracks minimal per-frame change
//! rectangles and writes a hand-assembled GIF89a stream with LZW-compressed
//! image data.

#![forbid(unsafe_code)]

/// Growth policies and the engine driving the render/encode pipeline
pub mod algorithm;
/// LZW compression, bit packing, and GIF container assembly
pub mod encode;
/// Input/output operations and error handling
pub mod io;
/// Palette, canvas state, and changed-rectangle frame extraction
pub mod render;
/// Toroidal grid management and connectivity queries
pub mod spatial;

pub use io::error::{MazeError, Result};
