//! Lossless image-data compression and GIF container assembly

/// LSB-first variable-width code packing
pub mod bitstream;
/// GIF89a block writers and sub-block framing
pub mod gif;
/// GIF-flavor LZW compression
pub mod lzw;

pub use gif::GifEncoder;
