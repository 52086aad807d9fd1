/*!
 * Byte-Region Operations
 * Single call surface for copy, move, compare and fill
 *
 * None of these touch allocator statistics.
 */

use crate::core::errors::{DsResult, ResultCode};
use std::cmp::Ordering;
use std::ops::Range;

/// Copy `min(dst.len(), src.len())` bytes from `src` to `dst`
///
/// Returns the number of bytes copied.
#[inline]
pub fn copy(dst: &mut [u8], src: &[u8]) -> usize {
    let len = dst.len().min(src.len());
    dst[..len].copy_from_slice(&src[..len]);
    len
}

/// Overlap-safe move of `src` to `dest` within one buffer
pub fn move_within(buf: &mut [u8], src: Range<usize>, dest: usize) -> DsResult {
    crate::ensure!(src.start <= src.end, "Source range is reversed");
    if src.end > buf.len() || dest > buf.len() - src.len() {
        crate::bail!(ResultCode::IndexOutOfBounds, "Move range exceeds buffer");
    }
    buf.copy_within(src, dest);
    Ok(())
}

/// Lexicographic comparison of the common prefix of `a` and `b`
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().min(b.len());
    a[..len].cmp(&b[..len])
}

/// Set every byte of `dst` to `value`
///
/// Returns the number of bytes written.
#[inline]
pub fn fill(dst: &mut [u8], value: u8) -> usize {
    dst.fill(value);
    dst.len()
}

/// Copy `size` bytes between non-overlapping regions
///
/// # Safety
/// - `src` must be valid for reads of `size` bytes
/// - `dst` must be valid for writes of `size` bytes
/// - the regions must not overlap (use [`move_raw`] otherwise)
#[inline]
pub unsafe fn copy_raw(dst: *mut u8, src: *const u8, size: usize) {
    unsafe { std::ptr::copy_nonoverlapping(src, dst, size) }
}

/// Copy `size` bytes between possibly overlapping regions
///
/// # Safety
/// `src` must be valid for reads and `dst` for writes of `size` bytes.
#[inline]
pub unsafe fn move_raw(dst: *mut u8, src: *const u8, size: usize) {
    unsafe { std::ptr::copy(src, dst, size) }
}

/// Compare `size` bytes
///
/// # Safety
/// Both pointers must be valid for reads of `size` bytes.
#[inline]
pub unsafe fn compare_raw(a: *const u8, b: *const u8, size: usize) -> Ordering {
    if size == 0 {
        return Ordering::Equal;
    }
    let (a, b) = unsafe {
        (
            std::slice::from_raw_parts(a, size),
            std::slice::from_raw_parts(b, size),
        )
    };
    a.cmp(b)
}

/// Set `size` bytes at `dst` to `value`
///
/// # Safety
/// `dst` must be valid for writes of `size` bytes.
#[inline]
pub unsafe fn fill_raw(dst: *mut u8, value: u8, size: usize) {
    unsafe { std::ptr::write_bytes(dst, value, size) }
}
