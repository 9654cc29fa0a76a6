//! Validates LZW compression against a reference decoder and the GIF
//! sub-block framing rules

#![allow(clippy::expect_used, clippy::indexing_slicing)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use torusmaze::encode::gif::GifEncoder;
use torusmaze::encode::lzw::compress;
use torusmaze::render::frame::FrameDescriptor;

/// Textbook GIF-LZW decoder used only to verify the encoder
fn decompress(packed: &[u8], min_code_size: u8) -> Vec<u8> {
    let clear_code = 1u16 << min_code_size;
    let end_code = clear_code + 1;

    let seed_table = || -> Vec<Vec<u8>> {
        let mut table: Vec<Vec<u8>> = (0..clear_code).map(|i| vec![i as u8]).collect();
        table.push(Vec::new()); // clear
        table.push(Vec::new()); // end
        table
    };

    let mut table = seed_table();
    let mut width = min_code_size + 1;
    let mut bit_pos = 0usize;
    let mut previous: Option<u16> = None;
    let mut output = Vec::new();

    let read_code = |bit_pos: &mut usize, width: u8| -> u16 {
        let mut code = 0u16;
        for bit in 0..width {
            let byte = packed.get(*bit_pos / 8).copied().unwrap_or(0);
            if byte >> (*bit_pos % 8) & 1 == 1 {
                code |= 1 << bit;
            }
            *bit_pos += 1;
        }
        code
    };

    loop {
        let code = read_code(&mut bit_pos, width);
        if code == clear_code {
            table = seed_table();
            width = min_code_size + 1;
            previous = None;
            continue;
        }
        if code == end_code {
            break;
        }

        let entry = if (code as usize) < table.len() {
            table[code as usize].clone()
        } else {
            // KwKwK case: the code being defined right now.
            let prev = table[previous.expect("KwKwK without prefix") as usize].clone();
            let mut entry = prev.clone();
            entry.push(prev[0]);
            entry
        };

        if let Some(prev_code) = previous {
            let mut new_entry = table[prev_code as usize].clone();
            new_entry.push(entry[0]);
            table.push(new_entry);
            if table.len() - 1 == (1usize << width) - 1 && width < 12 {
                width += 1;
            }
        }

        output.extend_from_slice(&entry);
        previous = Some(code);
    }
    output
}

fn random_indices(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..4u8)).collect()
}

#[test]
fn test_round_trip_empty_input() {
    let packed = compress(&[], 2);
    assert_eq!(decompress(&packed, 2), Vec::<u8>::new());
}

#[test]
fn test_round_trip_single_pixel() {
    let packed = compress(&[3], 2);
    assert_eq!(decompress(&packed, 2), vec![3]);
}

#[test]
fn test_round_trip_uniform_run() {
    let pixels = vec![1u8; 5_000];
    let packed = compress(&pixels, 2);
    assert_eq!(decompress(&packed, 2), pixels);
}

#[test]
fn test_round_trip_4096_pixels() {
    let pixels = random_indices(4096, 9);
    let packed = compress(&pixels, 2);
    assert_eq!(decompress(&packed, 2), pixels);
}

#[test]
fn test_round_trip_100000_pixels_crosses_dictionary_ceiling() {
    let pixels = random_indices(100_000, 27);
    let packed = compress(&pixels, 2);
    assert_eq!(decompress(&packed, 2), pixels);
}

#[test]
fn test_round_trip_wider_palette() {
    let mut rng = StdRng::seed_from_u64(5);
    let pixels: Vec<u8> = (0..20_000).map(|_| rng.random_range(0..128u8)).collect();
    let packed = compress(&pixels, 7);
    assert_eq!(decompress(&packed, 7), pixels);
}

#[test]
fn test_compression_shrinks_repetitive_data() {
    let pixels = vec![1u8; 10_000];
    let packed = compress(&pixels, 2);
    assert!(packed.len() < pixels.len() / 10);
}

#[test]
fn test_sub_block_framing_of_a_large_frame() {
    let pixels = random_indices(300 * 300, 13);
    let frame = FrameDescriptor {
        left: 0,
        top: 0,
        width: 300,
        height: 300,
        delay: 2,
        transparency: Some(3),
        pixels: pixels.clone(),
    };

    let mut encoder = GifEncoder::new(Vec::new());
    encoder.write_frame(&frame).expect("vec sink");
    let bytes = encoder.into_inner();

    // Skip graphic control (8 bytes), image descriptor (10), min code size.
    let mut offset = 8 + 10 + 1;
    let mut reassembled = Vec::new();
    let mut blocks = 0usize;
    loop {
        let len = *bytes.get(offset).expect("length byte") as usize;
        offset += 1;
        if len == 0 {
            break;
        }
        assert!(len <= 255);
        reassembled.extend_from_slice(bytes.get(offset..offset + len).expect("block body"));
        offset += len;
        blocks += 1;
    }

    assert!(blocks > 1, "expected multiple sub-blocks");
    assert_eq!(offset, bytes.len(), "exactly one zero-length terminator");
    assert_eq!(reassembled, compress(&pixels, 2));
    assert_eq!(decompress(&reassembled, 2), pixels);
}
