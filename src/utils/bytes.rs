/*!
 * Byte Utilities
 * Element-agnostic swapping and reversal
 */

use crate::core::errors::{DsResult, ResultCode};
use crate::core::types::Size;
use crate::{bail, ensure};

/// Exchange the contents of two equal-length regions
pub fn swap_bytes(a: &mut [u8], b: &mut [u8]) -> DsResult {
    ensure!(a.len() == b.len(), "Regions to swap differ in length");
    a.swap_with_slice(b);
    Ok(())
}

/// Reverse the order of `element_size`-byte elements in `data`
///
/// Bytes inside each element keep their order.
pub fn reverse_bytes(data: &mut [u8], element_size: Size) -> DsResult {
    ensure!(element_size > 0, "Element size must be non-zero");
    if data.len() % element_size != 0 {
        bail!(
            ResultCode::InvalidArgument,
            "Region length is not a multiple of the element size"
        );
    }

    let count = data.len() / element_size;
    for i in 0..count / 2 {
        let j = count - 1 - i;
        let (head, tail) = data.split_at_mut(j * element_size);
        head[i * element_size..(i + 1) * element_size]
            .swap_with_slice(&mut tail[..element_size]);
    }
    Ok(())
}
