//! Fixed four-entry color table shared by renderer and encoder
//!
//! Three drawable indices (wall, passage, highlight) plus the transparent
//! index used for interframe deltas. The table never changes after startup,
//! so the encoder writes it once as the global color table.

/// Palette index of wall pixels; also the background color index
pub const WALL_INDEX: u8 = 0;
/// Palette index of carved passage pixels
pub const PASSAGE_INDEX: u8 = 1;
/// Palette index of the completed-maze lead frame
pub const HIGHLIGHT_INDEX: u8 = 2;
/// Palette index reserved for transparency in delta frames
pub const TRANSPARENT_INDEX: u8 = 3;

/// Bits needed to address the palette; the LZW minimum code size
pub const PALETTE_BITS: u8 = 2;
/// Number of entries in the global color table
pub const PALETTE_SIZE: usize = 1 << PALETTE_BITS;

/// RGB values behind the four palette indices
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Wall / background color
    pub wall: [u8; 3],
    /// Passage foreground color
    pub passage: [u8; 3],
    /// Alternate foreground used by the lead frame
    pub highlight: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: [10, 10, 10],
            passage: [200, 200, 200],
            highlight: [20, 20, 20],
        }
    }
}

impl Palette {
    /// The global color table in palette-index order
    ///
    /// The transparent slot still needs an RGB value on the wire; it is
    /// never displayed.
    #[must_use]
    pub const fn entries(&self) -> [[u8; 3]; PALETTE_SIZE] {
        [self.wall, self.passage, self.highlight, [0, 255, 0]]
    }
}

#[cfg(test)]
mod tests {
    use super::{PALETTE_SIZE, Palette, TRANSPARENT_INDEX, WALL_INDEX};

    #[test]
    fn test_indices_fit_the_table() {
        assert!((TRANSPARENT_INDEX as usize) < PALETTE_SIZE);
        assert_eq!(WALL_INDEX, 0);
        assert_eq!(Palette::default().entries().len(), PALETTE_SIZE);
    }
}
