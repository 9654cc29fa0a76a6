//! Frame descriptors: one changed rectangle plus its pixel buffer
//!
//! Produced by the canvas, consumed immediately by the container encoder;
//! nothing here outlives a single frame.

/// One encodable frame: a rectangle of palette indices within the canvas
#[derive(Clone, Debug)]
pub struct FrameDescriptor {
    /// Left edge of the rectangle in canvas pixels
    pub left: u16,
    /// Top edge of the rectangle in canvas pixels
    pub top: u16,
    /// Rectangle width in pixels
    pub width: u16,
    /// Rectangle height in pixels
    pub height: u16,
    /// Display delay in 1/100ths of a second
    pub delay: u16,
    /// Transparent palette index, if this is a delta frame
    pub transparency: Option<u8>,
    /// Row-major palette indices, `width * height` entries
    pub pixels: Vec<u8>,
}

impl FrameDescriptor {
    /// Number of pixels the buffer must hold
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
