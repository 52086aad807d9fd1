/*!
 * Platform Allocator
 * Thin wrapper around the C runtime's malloc family
 */

use super::traits::RawAllocator;
use crate::core::types::{Handle, Size};
use std::ptr::NonNull;

/// System allocator backed by `malloc`/`calloc`/`realloc`/`free`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

// SAFETY: libc's allocator is thread-safe on all supported platforms and
// returns blocks aligned for any fundamental type, or null on failure.
unsafe impl RawAllocator for SystemAllocator {
    #[inline]
    fn allocate(&self, size: Size) -> Option<Handle> {
        // SAFETY: malloc accepts any size and reports failure with null.
        NonNull::new(unsafe { libc::malloc(size) }.cast::<u8>())
    }

    #[inline]
    fn allocate_zeroed(&self, count: Size, size: Size) -> Option<Handle> {
        // SAFETY: calloc checks count * size for overflow itself and returns
        // zeroed memory or null.
        NonNull::new(unsafe { libc::calloc(count, size) }.cast::<u8>())
    }

    #[inline]
    unsafe fn resize(&self, handle: Handle, new_size: Size) -> Option<Handle> {
        // SAFETY: caller guarantees `handle` came from this allocator. On
        // failure realloc leaves the original block intact.
        NonNull::new(unsafe { libc::realloc(handle.as_ptr().cast(), new_size) }.cast::<u8>())
    }

    #[inline]
    unsafe fn release(&self, handle: Handle) {
        // SAFETY: caller guarantees `handle` came from this allocator and is
        // released exactly once.
        unsafe { libc::free(handle.as_ptr().cast()) }
    }
}
