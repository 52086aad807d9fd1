/*!
 * Memory Traits
 * Allocation and statistics abstractions
 */

use super::types::MemoryStats;
use crate::core::types::{Handle, Size};

/// Platform allocation primitives
///
/// The seam under [`InstrumentedAllocator`](super::InstrumentedAllocator):
/// fresh allocation, zeroing allocation, resize and release. Failure is
/// signalled by `None`; implementations never panic on exhaustion.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of the
/// requested number of bytes, aligned to at least
/// [`MALLOC_ALIGNMENT`](crate::core::limits::MALLOC_ALIGNMENT), and not
/// aliased by any other live block. `allocate_zeroed` must zero-fill.
pub unsafe trait RawAllocator: Send + Sync {
    /// Allocate `size` uninitialized bytes
    fn allocate(&self, size: Size) -> Option<Handle>;

    /// Allocate `count * size` zeroed bytes
    fn allocate_zeroed(&self, count: Size, size: Size) -> Option<Handle>;

    /// Resize a block, possibly moving it
    ///
    /// # Safety
    /// `handle` must have been returned by this allocator and not yet
    /// released. On `Some`, the old handle is invalid; on `None`, it is
    /// untouched and still owned by the caller.
    unsafe fn resize(&self, handle: Handle, new_size: Size) -> Option<Handle>;

    /// Return a block to the platform
    ///
    /// # Safety
    /// `handle` must have been returned by this allocator and not yet released.
    unsafe fn release(&self, handle: Handle);
}

/// Statistics provider
pub trait MemoryInfo {
    /// Value copy of the live counters
    fn snapshot(&self) -> MemoryStats;

    /// Zero every counter
    fn reset(&self);

    /// Human-readable rendering of the counters
    fn report(&self) -> String {
        self.snapshot().to_string()
    }
}
