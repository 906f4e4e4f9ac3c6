use std::fmt::Write;

use crate::error::{Error, Result};
use crate::{BLOCK_LEN, Block};

pub fn block_from_slice(samples: &[i16]) -> Result<Block> {
    samples.try_into().map_err(|_| Error::BlockLength {
        expected: BLOCK_LEN,
        got: samples.len(),
    })
}

pub fn transpose(block: &Block) -> Block {
    std::array::from_fn(|i| block[(i % 8) * 8 + i / 8])
}

/// Parses row-major blocks from text.
///
/// Samples are decimal integers separated by whitespace or commas. A `#`
/// comments out the rest of its line. Every 64 samples make one block.
pub fn parse_blocks(text: &str) -> Result<Vec<Block>> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value: i64 = token.parse().map_err(|_| Error::InvalidSample {
                line: line_no,
                token: token.to_owned(),
            })?;
            let sample = i16::try_from(value).map_err(|_| Error::SampleOutOfRange {
                line: line_no,
                value,
            })?;
            samples.push(sample);
        }
    }

    let chunks = samples.chunks_exact(BLOCK_LEN);
    let rest = chunks.remainder().len();
    if rest != 0 {
        return Err(Error::IncompleteBlock { got: rest });
    }

    let blocks = chunks
        .map(block_from_slice)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("parsed {} blocks ({} samples)", blocks.len(), samples.len());
    Ok(blocks)
}

/// Eight rows of eight right-aligned samples, each row indented by four spaces.
pub fn format_block(block: &Block) -> String {
    let mut out = String::with_capacity(8 * (4 + 8 * 5 + 1));
    for row in block.chunks_exact(8) {
        out.push_str("    ");
        for &v in row {
            let _ = write!(out, " {v:4}");
        }
        out.push('\n');
    }
    out
}

/// Same layout as [`format_block`] with each sample as a 16-bit two's-complement hex word.
pub fn format_block_hex(block: &Block) -> String {
    let mut out = String::with_capacity(8 * (4 + 8 * 5 + 1));
    for row in block.chunks_exact(8) {
        out.push_str("    ");
        for &v in row {
            let _ = write!(out, " {:04x}", v as u16);
        }
        out.push('\n');
    }
    out
}
