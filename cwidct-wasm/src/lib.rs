#![forbid(unsafe_code)]

use wasm_bindgen::prelude::*;

/// Inverse-transforms one row-major block of 64 coefficients.
#[wasm_bindgen]
pub fn transform(block: &[i16]) -> Result<Vec<i16>, JsError> {
    let block = cwidct::block_from_slice(block).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(cwidct::transform(&block).to_vec())
}

/// Inverse-transforms any number of consecutive blocks.
#[wasm_bindgen]
pub fn transform_many(samples: &[i16]) -> Result<Vec<i16>, JsError> {
    if !samples.len().is_multiple_of(cwidct::BLOCK_LEN) {
        return Err(JsError::new(&format!(
            "sample count {} is not a multiple of {}",
            samples.len(),
            cwidct::BLOCK_LEN
        )));
    }
    let mut out = Vec::with_capacity(samples.len());
    for chunk in samples.chunks_exact(cwidct::BLOCK_LEN) {
        let block = cwidct::block_from_slice(chunk).map_err(|e| JsError::new(&e.to_string()))?;
        out.extend_from_slice(&cwidct::transform(&block));
    }
    Ok(out)
}

#[wasm_bindgen]
pub fn clip(v: i32) -> i16 {
    cwidct::iclip(i64::from(v))
}

#[wasm_bindgen(js_name = selfTest)]
pub fn self_test() -> bool {
    cwidct::REFERENCE_VECTORS.iter().all(|v| v.check().passed)
}
