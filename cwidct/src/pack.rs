//! Bus-width adapter: a block as sixteen 64-bit words.
//!
//! Row `r` travels as two words: `lo[r]` carries samples `0..4` and `hi[r]`
//! samples `4..8`. Sample `j` of a word sits in bits `16 * j..16 * j + 16`.

use crate::error::{Error, Result};
use crate::{Block, transform};

pub const WORDS_PER_HALF: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedBlock {
    pub lo: [u64; WORDS_PER_HALF],
    pub hi: [u64; WORDS_PER_HALF],
}

fn pack_word(samples: &[i16]) -> u64 {
    samples
        .iter()
        .enumerate()
        .fold(0, |word, (j, &s)| word | (u64::from(s as u16) << (16 * j)))
}

fn unpack_sample(word: u64, j: usize) -> i16 {
    (word >> (16 * j)) as u16 as i16
}

impl PackedBlock {
    pub fn pack(block: &Block) -> Self {
        let mut packed = Self::default();
        for (r, row) in block.chunks_exact(8).enumerate() {
            packed.lo[r] = pack_word(&row[..4]);
            packed.hi[r] = pack_word(&row[4..]);
        }
        packed
    }

    pub fn unpack(&self) -> Block {
        std::array::from_fn(|i| {
            let (r, c) = (i / 8, i % 8);
            if c < 4 {
                unpack_sample(self.lo[r], c)
            } else {
                unpack_sample(self.hi[r], c - 4)
            }
        })
    }

    pub fn from_words(lo: &[u64], hi: &[u64]) -> Result<Self> {
        let half = |words: &[u64]| -> Result<[u64; WORDS_PER_HALF]> {
            words.try_into().map_err(|_| Error::WordCount {
                expected: WORDS_PER_HALF,
                got: words.len(),
            })
        };
        Ok(Self {
            lo: half(lo)?,
            hi: half(hi)?,
        })
    }
}

/// Unpacks, transforms and repacks one block.
pub fn transform_packed(input: &PackedBlock) -> PackedBlock {
    PackedBlock::pack(&transform(&input.unpack()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_little_end_first() {
        let mut block = [0i16; 64];
        block[..8].copy_from_slice(&[-24, -23, -21, -21, 1, 2, 3, 4]);
        let packed = PackedBlock::pack(&block);
        assert_eq!(packed.lo[0], 0xffeb_ffeb_ffe9_ffe8);
        assert_eq!(packed.hi[0], 0x0004_0003_0002_0001);
        assert!(packed.lo[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn unpack_restores_block() {
        let block: Block = std::array::from_fn(|i| (i as i16 - 32) * 1021);
        assert_eq!(PackedBlock::pack(&block).unpack(), block);
    }

    #[test]
    fn from_words_checks_lengths() {
        assert!(PackedBlock::from_words(&[0; 8], &[0; 8]).is_ok());
        assert_eq!(
            PackedBlock::from_words(&[0; 8], &[0; 7]),
            Err(Error::WordCount {
                expected: 8,
                got: 7
            })
        );
    }

    #[test]
    fn packed_transform_of_dc_block() {
        let mut block = [0i16; 64];
        block[0] = 23;
        block[1] = -1;
        block[2] = -2;
        let out = transform_packed(&PackedBlock::pack(&block));
        for r in 0..8 {
            assert_eq!(out.lo[r], 0x0003_0003_0003_0002);
            assert_eq!(out.hi[r], 0x0003_0003_0003_0003);
        }
    }
}
