//! GIF-flavor LZW compression
//!
//! Variable code width starting at `min_code_size + 1` bits, Clear and End
//! codes reserved immediately after the literal range, 12-bit / 4096-entry
//! dictionary ceiling. The dictionary resets (Clear Code on the wire) when
//! the ceiling is reached, which bounds memory and keeps any standard
//! decoder in sync. Each call owns its dictionary: frames never share
//! compression state.
//!
//! The dictionary maps `(prefix code, next symbol)` pairs to codes instead
//! of materializing the variable-length strings themselves.

use std::collections::HashMap;

use crate::encode::bitstream::BitWriter;

/// Dictionary ceiling imposed by the 12-bit code width
pub const MAX_CODES: u16 = 4096;
/// Widest code the format permits
pub const MAX_CODE_WIDTH: u8 = 12;

/// Compress palette indices into a packed LZW bit stream
///
/// Returns the raw packed bytes; length-prefixed sub-block framing is the
/// container's concern. The stream always begins with a Clear Code and ends
/// with the End Code, and an empty input yields exactly that pair.
#[must_use]
pub fn compress(indices: &[u8], min_code_size: u8) -> Vec<u8> {
    let clear_code: u16 = 1 << min_code_size;
    let end_code: u16 = clear_code + 1;

    let mut writer = BitWriter::new();
    let mut width = min_code_size + 1;
    let mut next_code = end_code + 1;
    let mut table: HashMap<(u16, u8), u16> = HashMap::new();

    writer.write_bits(clear_code, width);

    let mut pending = indices.iter().copied();
    let Some(first) = pending.next() else {
        writer.write_bits(end_code, width);
        return writer.into_bytes();
    };
    let mut prefix = u16::from(first);

    for symbol in pending {
        if let Some(&code) = table.get(&(prefix, symbol)) {
            prefix = code;
            continue;
        }

        writer.write_bits(prefix, width);
        table.insert((prefix, symbol), next_code);
        if next_code == 1 << width && width < MAX_CODE_WIDTH {
            width += 1;
        }
        next_code += 1;
        if next_code == MAX_CODES {
            // Ceiling reached: emit a clear code and start a fresh table.
            writer.write_bits(clear_code, width);
            width = min_code_size + 1;
            next_code = end_code + 1;
            table.clear();
        }

        prefix = u16::from(symbol);
    }

    writer.write_bits(prefix, width);
    writer.write_bits(end_code, width);
    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::compress;

    #[test]
    fn test_empty_input_is_clear_then_end() {
        // min code size 2: clear=4 (100), end=5 (101), 3-bit codes.
        // LSB-first: 001 101 -> 0b00101100
        assert_eq!(compress(&[], 2), vec![0b0010_1100]);
    }

    #[test]
    fn test_single_pixel_stream() {
        // clear=4, literal 3, end=5 at 3 bits: 001 110 101
        assert_eq!(compress(&[3], 2), vec![0b0101_1100, 0b0000_0001]);
    }

    #[test]
    fn test_repeated_pixels_build_dictionary_entries() {
        // 0,0,0,0 with min size 2: clear, code 0, new entry 6=(0,0),
        // emit 6 for the next pair, final 0, end.
        let packed = compress(&[0, 0, 0, 0], 2);
        // Codes at 3 bits: 4, 0, 6, 0, 5
        assert_eq!(packed, vec![0b1000_0100, 0b0101_0001]);
    }
}
