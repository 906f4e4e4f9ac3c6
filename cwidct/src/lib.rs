#![forbid(unsafe_code)]

pub mod block;
pub mod error;
pub mod idct;
pub mod pack;
pub mod vectors;

pub use block::{block_from_slice, format_block, format_block_hex, parse_blocks, transpose};
pub use error::{Error, Result};
pub use idct::{fast_idct, iclip, idct_col, idct_row};
pub use pack::{PackedBlock, transform_packed};
pub use vectors::{Outcome, REFERENCE_VECTORS, ReferenceVector};

pub const BLOCK_LEN: usize = 64;

/// One 8x8 block of samples in row-major order.
pub type Block = [i16; BLOCK_LEN];

/// Inverse-transforms one coefficient block into spatial samples in `[-256, 255]`.
pub fn transform(block: &Block) -> Block {
    let mut out = *block;
    fast_idct(&mut out);
    out
}

pub fn transform_blocks(blocks: &mut [Block]) {
    for block in blocks {
        fast_idct(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_leaves_input_untouched() {
        let input = REFERENCE_VECTORS[2].input_block();
        let copy = input;
        let out = transform(&input);
        assert_eq!(input, copy);
        assert_eq!(out, REFERENCE_VECTORS[2].expected);
    }

    #[test]
    fn in_place_matches_copying_transform() {
        let input = REFERENCE_VECTORS[3].input_block();
        let mut block = input;
        fast_idct(&mut block);
        assert_eq!(block, transform(&input));
    }

    #[test]
    fn batch_transforms_each_block() {
        let mut blocks: Vec<Block> = REFERENCE_VECTORS.iter().map(|v| v.input_block()).collect();
        transform_blocks(&mut blocks);
        for (got, v) in blocks.iter().zip(REFERENCE_VECTORS.iter()) {
            assert_eq!(got, &v.expected, "{}", v.name);
        }
    }
}
