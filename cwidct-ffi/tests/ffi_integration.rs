use std::ptr;

use cwidct::{PackedBlock, REFERENCE_VECTORS};
use cwidct_ffi::{
    CWIDCT_ERR_NULL, CWIDCT_OK, cwidct_clip, cwidct_transform, cwidct_transform_copy,
    cwidct_transform_packed,
};

#[test]
fn transform_in_place() {
    for v in &REFERENCE_VECTORS {
        let mut block = v.input_block();
        let rc = unsafe { cwidct_transform(block.as_mut_ptr()) };
        assert_eq!(rc, CWIDCT_OK);
        assert_eq!(block, v.expected, "{}", v.name);
    }
}

#[test]
fn transform_copy_leaves_input_alone() {
    let v = &REFERENCE_VECTORS[1];
    let input = v.input_block();
    let mut output = [0i16; 64];
    let rc = unsafe { cwidct_transform_copy(input.as_ptr(), output.as_mut_ptr()) };
    assert_eq!(rc, CWIDCT_OK);
    assert_eq!(output, v.expected);
    assert_eq!(input, v.input_block());
}

#[test]
fn transform_copy_allows_aliasing() {
    let v = &REFERENCE_VECTORS[3];
    let mut block = v.input_block();
    let p = block.as_mut_ptr();
    let rc = unsafe { cwidct_transform_copy(p, p) };
    assert_eq!(rc, CWIDCT_OK);
    assert_eq!(block, v.expected);
}

#[test]
fn transform_packed_words() {
    let v = &REFERENCE_VECTORS[2];
    let input = PackedBlock::pack(&v.input_block());
    let mut obl = [0u64; 8];
    let mut obh = [0u64; 8];
    let rc = unsafe {
        cwidct_transform_packed(
            input.lo.as_ptr(),
            input.hi.as_ptr(),
            obl.as_mut_ptr(),
            obh.as_mut_ptr(),
        )
    };
    assert_eq!(rc, CWIDCT_OK);
    let out = PackedBlock { lo: obl, hi: obh };
    assert_eq!(out.unpack(), v.expected);
    assert_eq!(obl[0], 0xffeb_ffeb_ffe9_ffe8);
}

#[test]
fn null_pointers_are_rejected() {
    let mut words = [0u64; 8];
    unsafe {
        assert_eq!(cwidct_transform(ptr::null_mut()), CWIDCT_ERR_NULL);
        assert_eq!(
            cwidct_transform_copy(ptr::null(), ptr::null_mut()),
            CWIDCT_ERR_NULL
        );
        assert_eq!(
            cwidct_transform_packed(
                words.as_ptr(),
                ptr::null(),
                words.as_mut_ptr(),
                words.as_mut_ptr()
            ),
            CWIDCT_ERR_NULL
        );
    }
}

#[test]
fn clip_saturates_to_nine_bits() {
    assert_eq!(cwidct_clip(-1000), -256);
    assert_eq!(cwidct_clip(-256), -256);
    assert_eq!(cwidct_clip(100), 100);
    assert_eq!(cwidct_clip(255), 255);
    assert_eq!(cwidct_clip(i32::MAX), 255);
}
