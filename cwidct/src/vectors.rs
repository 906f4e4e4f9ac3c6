//! Known input/output pairs for the fixed-point transform.
//!
//! Inputs are kept as they were declared for the streaming kernel: short ones
//! are implicitly zero-padded, and `idct3` carries a spare ninth row that
//! never reaches the transform.

use crate::{BLOCK_LEN, Block, transform};

#[derive(Debug, Clone, Copy)]
pub struct ReferenceVector {
    pub name: &'static str,
    pub input: &'static [i16],
    pub expected: Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub got: Block,
    pub passed: bool,
}

impl ReferenceVector {
    pub fn input_block(&self) -> Block {
        let mut block = [0i16; BLOCK_LEN];
        let n = self.input.len().min(BLOCK_LEN);
        block[..n].copy_from_slice(&self.input[..n]);
        block
    }

    pub fn check(&self) -> Outcome {
        let got = transform(&self.input_block());
        Outcome {
            got,
            passed: got == self.expected,
        }
    }
}

#[rustfmt::skip]
pub const REFERENCE_VECTORS: [ReferenceVector; 4] = [
    ReferenceVector {
        name: "idct0",
        input: &[23, -1, -2],
        expected: [
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
            2, 3, 3, 3, 3, 3, 3, 3,
        ],
    },
    ReferenceVector {
        name: "idct1",
        input: &[13, -7, 0, 0, 0, 0, 0, 0, 0, 2],
        expected: [
            1, 1, 1, 1, 2, 2, 2, 2,
            1, 1, 1, 1, 2, 2, 2, 2,
            1, 1, 1, 1, 2, 2, 2, 3,
            1, 1, 1, 1, 2, 2, 3, 3,
            0, 1, 1, 1, 2, 2, 3, 3,
            0, 0, 1, 1, 2, 2, 3, 3,
            0, 0, 1, 1, 2, 3, 3, 3,
            0, 0, 1, 1, 2, 3, 3, 3,
        ],
    },
    ReferenceVector {
        name: "idct2",
        input: &[-166, -7, -4, -4, 0, 0, 0, 0, -2, 0, 0, 0, 0, 0, 0, 0, -2],
        expected: [
            -24, -23, -21, -21, -21, -21, -21, -20,
            -24, -22, -21, -20, -21, -21, -21, -20,
            -23, -22, -21, -20, -20, -21, -20, -20,
            -23, -22, -20, -20, -20, -20, -20, -19,
            -23, -22, -20, -20, -20, -20, -20, -19,
            -23, -22, -20, -20, -20, -20, -20, -19,
            -23, -22, -20, -20, -20, -20, -20, -19,
            -23, -22, -20, -20, -20, -20, -20, -20,
        ],
    },
    ReferenceVector {
        name: "idct3",
        input: &[
            -240,  8, -11,  47,  26,  -6,   0,   5,
              28, -6,  85,  44,  -4, -25,   5,  16,
              21,  8,  32, -16, -24,   0,  30,  12,
              -2, 18,   0,  -2,   0,   7,   0, -15,
               7,  4,  15, -24,   0,   9,   8,  -6,
               4,  9,   0,  -5,  -6,   0,   0,   0,
              -4,  0,  -6,   0,   0,  10, -10,  -8,
               6,  0,   0,   0,   0,   0,   0,  -8,
               0,  0,   0,   0,   0,   0,   0,   0,
        ],
        expected: [
             21, -10, -26, -61, -43, -17, -22,  -8,
              5, -28, -47, -73, -11, -14, -24, -17,
            -14, -31, -61, -45,  -5, -18, -22, -34,
            -23, -36, -49, -32, -12, -33, -33, -35,
            -30, -39, -53,  -8, -19, -31, -43, -42,
            -41, -43, -50,  -4, -15, -33, -44, -66,
            -40, -38, -21, -14, -17, -26, -46, -52,
            -44, -47,  -9, -12, -30, -33, -38, -37,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_are_zero_padded() {
        let block = REFERENCE_VECTORS[0].input_block();
        assert_eq!(&block[..3], &[23, -1, -2]);
        assert!(block[3..].iter().all(|&v| v == 0));
    }

    #[test]
    fn long_inputs_are_truncated_to_one_block() {
        let v = &REFERENCE_VECTORS[3];
        assert_eq!(v.input.len(), 72);
        let block = v.input_block();
        assert_eq!(block[0], -240);
        assert_eq!(block[63], -8);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in REFERENCE_VECTORS.iter().enumerate() {
            for b in &REFERENCE_VECTORS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_vector_passes() {
        for v in &REFERENCE_VECTORS {
            let outcome = v.check();
            assert!(outcome.passed, "{} failed: got {:?}", v.name, outcome.got);
        }
    }
}
