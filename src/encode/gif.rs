//! GIF89a container assembly
//!
//! Writes the block sequence straight to an appendable byte sink: header,
//! logical screen descriptor, global color table, Netscape loop extension,
//! then per frame a graphic control extension, image descriptor, and the
//! LZW data framed as length-prefixed sub-blocks. Nothing already written
//! is ever revisited; a failed write aborts the run.

use std::io::Write;

use crate::encode::lzw;
use crate::io::error::{MazeError, Result};
use crate::render::frame::FrameDescriptor;
use crate::render::palette::{PALETTE_BITS, PALETTE_SIZE, Palette, TRANSPARENT_INDEX};

const SIGNATURE: &[u8; 6] = b"GIF89a";
const TRAILER: u8 = 0x3B;
const EXTENSION_INTRODUCER: u8 = 0x21;
const GRAPHIC_CONTROL_LABEL: u8 = 0xF9;
const APPLICATION_LABEL: u8 = 0xFF;
const IMAGE_SEPARATOR: u8 = 0x2C;
const SUB_BLOCK_LIMIT: usize = 255;

/// Disposal "do not dispose": later frames composite over this one
const DISPOSAL_KEEP: u8 = 1;

/// Sequential GIF block writer over an appendable byte sink
#[derive(Debug)]
pub struct GifEncoder<W: Write> {
    sink: W,
}

impl<W: Write> GifEncoder<W> {
    /// Wrap a byte sink
    pub const fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write the signature, logical screen descriptor, global color table,
    /// and the infinite-loop application extension
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutputWrite`] if the sink rejects a write.
    pub fn write_header(&mut self, width: u16, height: u16, palette: &Palette) -> Result<()> {
        self.sink.write_all(SIGNATURE)?;

        // Logical screen descriptor: global table present, 2-bit color
        // resolution, 2^(1+1) = 4 table entries.
        self.sink.write_all(&width.to_le_bytes())?;
        self.sink.write_all(&height.to_le_bytes())?;
        self.sink.write_all(&[0b1001_0001, 0, 0])?;

        for entry in palette.entries() {
            self.sink.write_all(&entry)?;
        }

        // Netscape application extension: loop forever.
        self.sink
            .write_all(&[EXTENSION_INTRODUCER, APPLICATION_LABEL, 11])?;
        self.sink.write_all(b"NETSCAPE2.0")?;
        self.sink.write_all(&[3, 1, 0, 0, 0])?;

        Ok(())
    }

    /// Write one frame: graphic control extension, image descriptor, and
    /// LZW-compressed sub-blocks
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::PaletteOverflow`] if a pixel index falls outside
    /// the color table (an internal invariant failure, not a recoverable
    /// state), or [`MazeError::OutputWrite`] on sink failure.
    pub fn write_frame(&mut self, frame: &FrameDescriptor) -> Result<()> {
        debug_assert_eq!(frame.pixels.len(), frame.pixel_count());
        if let Some(&index) = frame.pixels.iter().find(|&&p| p as usize >= PALETTE_SIZE) {
            return Err(MazeError::PaletteOverflow {
                index,
                palette_size: PALETTE_SIZE,
            });
        }

        let transparency_flag = u8::from(frame.transparency.is_some());
        let packed = (DISPOSAL_KEEP << 2) | transparency_flag;
        self.sink
            .write_all(&[EXTENSION_INTRODUCER, GRAPHIC_CONTROL_LABEL, 4, packed])?;
        self.sink.write_all(&frame.delay.to_le_bytes())?;
        self.sink
            .write_all(&[frame.transparency.unwrap_or(0), 0])?;

        self.sink.write_all(&[IMAGE_SEPARATOR])?;
        self.sink.write_all(&frame.left.to_le_bytes())?;
        self.sink.write_all(&frame.top.to_le_bytes())?;
        self.sink.write_all(&frame.width.to_le_bytes())?;
        self.sink.write_all(&frame.height.to_le_bytes())?;
        self.sink.write_all(&[0])?;

        self.sink.write_all(&[PALETTE_BITS])?;
        let packed_stream = lzw::compress(&frame.pixels, PALETTE_BITS);
        for chunk in packed_stream.chunks(SUB_BLOCK_LIMIT) {
            self.sink.write_all(&[chunk.len() as u8])?;
            self.sink.write_all(chunk)?;
        }
        self.sink.write_all(&[0])?;

        Ok(())
    }

    /// Write a 1x1 fully transparent frame that only contributes its delay
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutputWrite`] if the sink rejects a write.
    pub fn write_hold_frame(&mut self, delay: u16) -> Result<()> {
        self.write_frame(&FrameDescriptor {
            left: 0,
            top: 0,
            width: 1,
            height: 1,
            delay,
            transparency: Some(TRANSPARENT_INDEX),
            pixels: vec![TRANSPARENT_INDEX],
        })
    }

    /// Append bytes already encoded by another `GifEncoder`
    ///
    /// Used to splice the buffered animation stream in after the lead frame.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutputWrite`] if the sink rejects a write.
    pub fn append_encoded(&mut self, bytes: &[u8]) -> Result<()> {
        self.sink.write_all(bytes)?;
        Ok(())
    }

    /// Write the trailer byte and hand back the sink
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutputWrite`] if the sink rejects a write.
    pub fn finish(mut self) -> Result<W> {
        self.sink.write_all(&[TRAILER])?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Hand back the sink without writing a trailer
    ///
    /// Used for the intermediate in-memory animation stream, which gets
    /// spliced into the outer file rather than terminated.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::GifEncoder;
    use crate::render::frame::FrameDescriptor;
    use crate::render::palette::Palette;

    #[test]
    fn test_header_layout() {
        let mut encoder = GifEncoder::new(Vec::new());
        encoder
            .write_header(8, 4, &Palette::default())
            .expect("vec sink");
        let bytes = encoder.into_inner();

        assert_eq!(bytes.get(..6), Some(b"GIF89a".as_slice()));
        // Logical screen descriptor
        assert_eq!(bytes.get(6..13), Some([8, 0, 4, 0, 0b1001_0001, 0, 0].as_slice()));
        // Global color table: 4 RGB triples
        assert_eq!(bytes.get(13..16), Some([10, 10, 10].as_slice()));
        // Netscape block directly after the table
        assert_eq!(bytes.get(25..28), Some([0x21, 0xFF, 11].as_slice()));
        assert_eq!(bytes.get(28..39), Some(b"NETSCAPE2.0".as_slice()));
        assert_eq!(bytes.get(39..44), Some([3, 1, 0, 0, 0].as_slice()));
    }

    #[test]
    fn test_frame_blocks_and_sub_block_framing() {
        let mut encoder = GifEncoder::new(Vec::new());
        let frame = FrameDescriptor {
            left: 3,
            top: 2,
            width: 2,
            height: 1,
            delay: 7,
            transparency: Some(3),
            pixels: vec![1, 1],
        };
        encoder.write_frame(&frame).expect("vec sink");
        let bytes = encoder.into_inner();

        // Graphic control: introducer, label, size, packed(keep + transparent),
        // delay, transparent index, terminator
        assert_eq!(
            bytes.get(..8),
            Some([0x21, 0xF9, 4, 0b0000_0101, 7, 0, 3, 0].as_slice())
        );
        // Image descriptor
        assert_eq!(
            bytes.get(8..18),
            Some([0x2C, 3, 0, 2, 0, 2, 0, 1, 0, 0].as_slice())
        );
        // Minimum code size, then length-prefixed data, then terminator
        assert_eq!(bytes.get(18), Some(&2));
        let data_len = *bytes.get(19).expect("length byte") as usize;
        assert!(data_len <= 255);
        assert_eq!(bytes.len(), 19 + 1 + data_len + 1);
        assert_eq!(bytes.last(), Some(&0));
    }

    #[test]
    fn test_palette_overflow_is_rejected() {
        let mut encoder = GifEncoder::new(Vec::new());
        let frame = FrameDescriptor {
            left: 0,
            top: 0,
            width: 1,
            height: 1,
            delay: 0,
            transparency: None,
            pixels: vec![4],
        };
        assert!(encoder.write_frame(&frame).is_err());
    }
}
