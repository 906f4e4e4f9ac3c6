use std::slice;

use cwidct::pack::WORDS_PER_HALF;
use cwidct::{BLOCK_LEN, Block, PackedBlock};

pub const CWIDCT_OK: i32 = 0;
pub const CWIDCT_ERR_NULL: i32 = -1;

/// Transforms 64 row-major samples in place.
///
/// # Safety
///
/// `block` must be null or point to 64 writable `i16` values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cwidct_transform(block: *mut i16) -> i32 {
    if block.is_null() {
        return CWIDCT_ERR_NULL;
    }

    let samples = unsafe { slice::from_raw_parts_mut(block, BLOCK_LEN) };
    let mut work: Block = [0; BLOCK_LEN];
    work.copy_from_slice(samples);
    cwidct::fast_idct(&mut work);
    samples.copy_from_slice(&work);
    CWIDCT_OK
}

/// Reads 64 coefficients from `input` and writes 64 samples to `output`.
///
/// # Safety
///
/// `input` must point to 64 readable and `output` to 64 writable `i16`
/// values. The two may alias.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cwidct_transform_copy(input: *const i16, output: *mut i16) -> i32 {
    if input.is_null() || output.is_null() {
        return CWIDCT_ERR_NULL;
    }

    let mut work: Block = [0; BLOCK_LEN];
    work.copy_from_slice(unsafe { slice::from_raw_parts(input, BLOCK_LEN) });
    cwidct::fast_idct(&mut work);
    unsafe { slice::from_raw_parts_mut(output, BLOCK_LEN) }.copy_from_slice(&work);
    CWIDCT_OK
}

/// Packed-word variant: each row arrives as a low and a high 64-bit word
/// of four 16-bit samples.
///
/// # Safety
///
/// `ibl` and `ibh` must point to 8 readable `u64` values, `obl` and `obh` to
/// 8 writable ones.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cwidct_transform_packed(
    ibl: *const u64,
    ibh: *const u64,
    obl: *mut u64,
    obh: *mut u64,
) -> i32 {
    if ibl.is_null() || ibh.is_null() || obl.is_null() || obh.is_null() {
        return CWIDCT_ERR_NULL;
    }

    let input = PackedBlock {
        lo: unsafe { *(ibl as *const [u64; WORDS_PER_HALF]) },
        hi: unsafe { *(ibh as *const [u64; WORDS_PER_HALF]) },
    };
    let out = cwidct::transform_packed(&input);
    unsafe {
        slice::from_raw_parts_mut(obl, WORDS_PER_HALF).copy_from_slice(&out.lo);
        slice::from_raw_parts_mut(obh, WORDS_PER_HALF).copy_from_slice(&out.hi);
    }
    CWIDCT_OK
}

#[unsafe(no_mangle)]
pub extern "C" fn cwidct_clip(v: i32) -> i16 {
    cwidct::iclip(i64::from(v))
}
