//! Packed bit stream for variable-width LZW codes
//!
//! Codes are written least-significant-bit first, concatenated with no
//! alignment between codes; the final partial byte stays zero-padded. This
//! is exactly the packing GIF image data expects.

/// Accumulates variable-width codes into a byte vector
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_pos: usize,
}

impl BitWriter {
    /// Create an empty writer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_pos: 0,
        }
    }

    /// Append the low `width` bits of `code`, LSB first
    pub fn write_bits(&mut self, code: u16, width: u8) {
        for bit in 0..width {
            if self.bytes.len() * 8 <= self.bit_pos {
                self.bytes.push(0);
            }
            if code >> bit & 1 == 1 {
                if let Some(last) = self.bytes.last_mut() {
                    *last |= 1 << (self.bit_pos % 8);
                }
            }
            self.bit_pos += 1;
        }
    }

    /// Number of bytes written so far, counting the partial byte
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Consume the writer and return the packed bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::BitWriter;

    #[test]
    fn test_codes_pack_lsb_first_without_alignment() {
        let mut writer = BitWriter::new();
        // Three 3-bit codes: 0b100, 0b011, 0b101 -> bits 001 110 101
        writer.write_bits(0b100, 3);
        writer.write_bits(0b011, 3);
        writer.write_bits(0b101, 3);
        // Stream (LSB first): 0,0,1,1,1,0,1,0 | 1
        assert_eq!(writer.into_bytes(), vec![0b0101_1100, 0b0000_0001]);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1, 1);
        assert_eq!(writer.byte_len(), 1);
        assert_eq!(writer.into_bytes(), vec![0b0000_0001]);
    }
}
