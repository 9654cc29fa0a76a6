//! Raster state and changed-rectangle frame extraction

/// Unit-lattice pixel state with change tracking and diff boxes
pub mod canvas;
/// Changed-rectangle pixel buffers handed to the encoder
pub mod frame;
/// Fixed four-entry color table
pub mod palette;

pub use canvas::Canvas;
pub use frame::FrameDescriptor;
pub use palette::Palette;
