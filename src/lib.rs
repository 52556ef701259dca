pub mod bits;
pub mod deflate;
pub mod error;
pub mod huffman;

pub use deflate::tokens::Token;
pub use error::{Error, Result};

/// Largest input `compress` will accept, chosen so every length/distance/
/// position computed over the input fits comfortably in `u32`.
pub const MAX_INPUT_SIZE: usize = u32::MAX as usize;

/// Compress `input` into a DEFLATE (RFC 1951) stream: a single dynamic-Huffman
/// block (BTYPE=2) with BFINAL=1, produced by running the input through LZ77
/// matching, tallying literal/length and distance symbol frequencies, building
/// canonical Huffman tables for both alphabets, and writing the block's exact
/// bit sequence.
///
/// There is no decompressor, no stored or fixed-Huffman block type, no
/// multi-block splitting, and no gzip/zlib wrapper framing - the output is
/// the bare DEFLATE stream described by spec.md, nothing more.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(Error::InputTooLarge { size: input.len(), max: MAX_INPUT_SIZE });
    }

    let tokens = deflate::lz77_compress(input);
    Ok(deflate::BlockWriter::write(&tokens))
}
