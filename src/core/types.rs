/*!
 * Core Types
 * Common types used across the crate
 */

use std::ptr::NonNull;

/// Address type for block bookkeeping
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;

/// Raw memory handle returned by the allocator
pub type Handle = NonNull<u8>;

/// Numeric address of a handle
#[inline(always)]
pub fn address_of(handle: Handle) -> Address {
    handle.as_ptr() as Address
}
