//! Chen-Wang fast inverse DCT (IEEE ASSP-32, pp. 803-816, Aug. 1984).
//!
//! 11 multiplies and 29 adds per 1-D transform. The coefficients are 12-bit
//! (`2048 * sqrt(2) * cos(k * pi / 16)`), which keeps the 2-D transform within
//! the IEEE 1180-1990 accuracy bounds.
//!
//! `>>` on the scratch registers is an arithmetic shift: `(-3) >> 1 == -2`.

use crate::Block;

pub const W1: i64 = 2841;
pub const W2: i64 = 2676;
pub const W3: i64 = 2408;
pub const W5: i64 = 1609;
pub const W6: i64 = 1108;
pub const W7: i64 = 565;

/// `256 / sqrt(2)`, used by the stage-three rotation.
pub const ROTATE: i64 = 181;

pub const CLIP_MIN: i16 = -256;
pub const CLIP_MAX: i16 = 255;

macro_rules! trace_registers {
    ($pass:literal, $stage:literal, $($x:ident),+) => {
        log::trace!(
            concat!($pass, " stage ", $stage, ":", $(" ", stringify!($x), "={}",)+),
            $($x),+
        )
    };
}

/// Saturates `v` to `[-256, 255]`.
#[inline]
pub fn iclip(v: i64) -> i16 {
    v.clamp(i64::from(CLIP_MIN), i64::from(CLIP_MAX)) as i16
}

#[inline]
fn ac_is_zero(b: &[i16; 8]) -> bool {
    b[1..].iter().all(|&v| v == 0)
}

/// Row (horizontal) IDCT.
///
/// ```text
///           7                       pi         1
/// dst[k] = sum c[l] * src[l] * cos( -- * ( k + - ) * l )
///          l=0                      8          2
///
/// where: c[0]    = 128
///        c[1..7] = 128*sqrt(2)
/// ```
///
/// The result is scaled up by 8 relative to the true IDCT so the column pass
/// has extra precision to round from. Nothing is clipped here.
pub fn idct_row(b: [i16; 8]) -> [i16; 8] {
    if ac_is_zero(&b) {
        // Stored with the same 16-bit wrap as the butterfly output.
        return [(i64::from(b[0]) << 3) as i16; 8];
    }
    row_butterfly(b)
}

/// Full row butterfly without the DC-only shortcut.
pub fn row_butterfly(b: [i16; 8]) -> [i16; 8] {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = b.map(i64::from);

    // +128 rounds the fourth stage
    let mut x0 = (b0 << 11) + 128;
    let mut x1 = b4 << 11;
    let mut x2 = b6;
    let mut x3 = b2;
    let mut x4 = b1;
    let mut x5 = b7;
    let mut x6 = b5;
    let mut x7 = b3;

    // first stage
    let mut x8 = W7 * (x4 + x5);
    x4 = x8 + (W1 - W7) * x4;
    x5 = x8 - (W1 + W7) * x5;
    x8 = W3 * (x6 + x7);
    x6 = x8 - (W3 - W5) * x6;
    x7 = x8 - (W3 + W5) * x7;
    trace_registers!("row", 1, x0, x1, x2, x3, x4, x5, x6, x7, x8);

    // second stage
    x8 = x0 + x1;
    x0 -= x1;
    x1 = W6 * (x3 + x2);
    x2 = x1 - (W2 + W6) * x2;
    x3 = x1 + (W2 - W6) * x3;
    x1 = x4 + x6;
    x4 -= x6;
    x6 = x5 + x7;
    x5 -= x7;
    trace_registers!("row", 2, x0, x1, x2, x3, x4, x5, x6, x7, x8);

    // third stage
    x7 = x8 + x3;
    x8 -= x3;
    x3 = x0 + x2;
    x0 -= x2;
    x2 = (ROTATE * (x4 + x5) + 128) >> 8;
    x4 = (ROTATE * (x4 - x5) + 128) >> 8;
    trace_registers!("row", 3, x0, x1, x2, x3, x4, x5, x6, x7, x8);

    // fourth stage
    [
        (x7 + x1) >> 8,
        (x3 + x2) >> 8,
        (x0 + x4) >> 8,
        (x8 + x6) >> 8,
        (x8 - x6) >> 8,
        (x0 - x4) >> 8,
        (x3 - x2) >> 8,
        (x7 - x1) >> 8,
    ]
    .map(|v| v as i16)
}

/// Column (vertical) IDCT over one column of a row-transformed block.
///
/// ```text
///             7                         pi         1
/// dst[8*k] = sum c[l] * src[8*l] * cos( -- * ( k + - ) * l )
///            l=0                        8          2
///
/// where: c[0]    = 1/1024
///        c[1..7] = (1/1024)*sqrt(2)
/// ```
///
/// Every output is clipped to `[-256, 255]`.
pub fn idct_col(b: [i16; 8]) -> [i16; 8] {
    if ac_is_zero(&b) {
        return [iclip((i64::from(b[0]) + 32) >> 6); 8];
    }
    col_butterfly(b)
}

/// Full column butterfly without the DC-only shortcut.
pub fn col_butterfly(b: [i16; 8]) -> [i16; 8] {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = b.map(i64::from);

    let mut x0 = (b0 << 8) + 8192;
    let mut x1 = b4 << 8;
    let mut x2 = b6;
    let mut x3 = b2;
    let mut x4 = b1;
    let mut x5 = b7;
    let mut x6 = b5;
    let mut x7 = b3;

    // first stage
    let mut x8 = W7 * (x4 + x5) + 4;
    x4 = (x8 + (W1 - W7) * x4) >> 3;
    x5 = (x8 - (W1 + W7) * x5) >> 3;
    x8 = W3 * (x6 + x7) + 4;
    x6 = (x8 - (W3 - W5) * x6) >> 3;
    x7 = (x8 - (W3 + W5) * x7) >> 3;
    trace_registers!("col", 1, x0, x1, x2, x3, x4, x5, x6, x7, x8);

    // second stage
    x8 = x0 + x1;
    x0 -= x1;
    x1 = W6 * (x3 + x2) + 4;
    x2 = (x1 - (W2 + W6) * x2) >> 3;
    x3 = (x1 + (W2 - W6) * x3) >> 3;
    x1 = x4 + x6;
    x4 -= x6;
    x6 = x5 + x7;
    x5 -= x7;
    trace_registers!("col", 2, x0, x1, x2, x3, x4, x5, x6, x7, x8);

    // third stage
    x7 = x8 + x3;
    x8 -= x3;
    x3 = x0 + x2;
    x0 -= x2;
    x2 = (ROTATE * (x4 + x5) + 128) >> 8;
    x4 = (ROTATE * (x4 - x5) + 128) >> 8;
    trace_registers!("col", 3, x0, x1, x2, x3, x4, x5, x6, x7, x8);

    // fourth stage
    [
        (x7 + x1) >> 14,
        (x3 + x2) >> 14,
        (x0 + x4) >> 14,
        (x8 + x6) >> 14,
        (x8 - x6) >> 14,
        (x0 - x4) >> 14,
        (x3 - x2) >> 14,
        (x7 - x1) >> 14,
    ]
    .map(iclip)
}

/// Two-dimensional inverse DCT, in place: all rows, then all columns.
pub fn fast_idct(block: &mut Block) {
    for i in 0..8 {
        let row = std::array::from_fn(|k| block[8 * i + k]);
        block[8 * i..8 * i + 8].copy_from_slice(&idct_row(row));
    }

    for i in 0..8 {
        let col = std::array::from_fn(|k| block[i + 8 * k]);
        for (k, v) in idct_col(col).into_iter().enumerate() {
            block[i + 8 * k] = v;
        }
    }
}
