/*!
 * Instrumented Allocator
 * Allocation, resize and release with usage statistics
 */

use super::config::{AccountingMode, AllocatorConfig};
use super::platform::SystemAllocator;
use super::tracking::BlockTable;
use super::traits::{MemoryInfo, RawAllocator};
use super::types::MemoryStats;
use crate::core::errors::{DsResult, Origin, Outcome, ResultCode};
use crate::core::limits::MALLOC_ALIGNMENT;
use crate::core::sync::SeqlockStats;
use crate::core::types::{address_of, Handle, Size};
use std::ptr::NonNull;
use tracing::{debug, info, trace, warn};

/// Message carried by allocation-failure outcomes
pub const ALLOCATION_FAILED: &str = "Failed to allocate memory block";

/// Message carried by overflow outcomes from array allocation
pub const ARRAY_SIZE_OVERFLOW: &str = "Array allocation size overflows usize";

/// Message carried by outcomes for over-aligned types
pub const ALIGNMENT_UNSUPPORTED: &str = "Type alignment exceeds allocator guarantee";

/// Allocator that updates usage counters on every call
///
/// Counters live in a seqlock, so the allocator can be shared across threads
/// and each update sequence is applied as a unit. In
/// [`AccountingMode::Exact`] a side table records every live block's size.
pub struct InstrumentedAllocator<A: RawAllocator = SystemAllocator> {
    raw: A,
    stats: SeqlockStats<MemoryStats>,
    blocks: Option<BlockTable>,
    config: AllocatorConfig,
}

impl InstrumentedAllocator<SystemAllocator> {
    /// System-backed allocator with approximate accounting
    pub fn new() -> Self {
        Self::with_config(AllocatorConfig::default())
    }

    pub fn with_config(config: AllocatorConfig) -> Self {
        Self::with_raw(SystemAllocator, config)
    }
}

impl Default for InstrumentedAllocator<SystemAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: RawAllocator> InstrumentedAllocator<A> {
    /// Wrap arbitrary platform primitives
    pub fn with_raw(raw: A, config: AllocatorConfig) -> Self {
        let blocks = match config.accounting {
            AccountingMode::Exact => Some(BlockTable::new()),
            AccountingMode::Approximate => None,
        };

        debug!(accounting = ?config.accounting, "instrumented allocator created");

        Self {
            raw,
            stats: SeqlockStats::new(MemoryStats::ZERO),
            blocks,
            config,
        }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    pub fn accounting(&self) -> AccountingMode {
        self.config.accounting
    }

    /// Underlying platform primitives
    pub fn raw(&self) -> &A {
        &self.raw
    }

    /// Number of blocks with a known size (always 0 in approximate mode)
    pub fn tracked_blocks(&self) -> usize {
        self.blocks.as_ref().map_or(0, BlockTable::len)
    }

    /// Bytes held by blocks with a known size (always 0 in approximate mode)
    pub fn tracked_bytes(&self) -> Size {
        self.blocks.as_ref().map_or(0, BlockTable::live_bytes)
    }

    /// Size recorded for a live block, if exact accounting is enabled
    pub fn block_size(&self, handle: Handle) -> Option<Size> {
        self.blocks.as_ref()?.get(address_of(handle))
    }

    /// Allocate `size` uninitialized bytes
    ///
    /// On failure the counters are untouched and `None` is returned; use
    /// [`alloc_checked`](Self::alloc_checked) to get an [`Outcome`] instead.
    pub fn allocate(&self, size: Size) -> Option<Handle> {
        match self.raw.allocate(size) {
            Some(handle) => {
                self.track_new(handle, size);
                Some(handle)
            }
            None => {
                warn!(size, "allocation failed");
                None
            }
        }
    }

    /// Allocate `count * size` zeroed bytes
    pub fn allocate_zeroed(&self, count: Size, size: Size) -> Option<Handle> {
        let Some(total) = count.checked_mul(size) else {
            warn!(count, size, "zeroed allocation size overflows usize");
            return None;
        };

        match self.raw.allocate_zeroed(count, size) {
            Some(handle) => {
                self.track_new(handle, total);
                Some(handle)
            }
            None => {
                warn!(count, size, "zeroed allocation failed");
                None
            }
        }
    }

    /// Resize a block
    ///
    /// In approximate mode a successful resize charges the entire new size to
    /// `total_allocated` and `current_usage`, even when shrinking. A
    /// `new_size` of zero releases the block and returns `None`.
    ///
    /// # Safety
    /// `handle` must come from this allocator and still be live. On `Some`
    /// the old handle is invalid; on `None` with `new_size > 0` the old block
    /// is still valid and owned by the caller.
    pub unsafe fn resize(&self, handle: Handle, new_size: Size) -> Option<Handle> {
        if new_size == 0 {
            // SAFETY: forwarded caller contract.
            unsafe { self.release(handle) };
            return None;
        }

        let old_address = address_of(handle);
        // Drop the old entry before the platform call so a concurrent
        // allocation that reuses the address cannot be clobbered.
        let old_size = self.blocks.as_ref().and_then(|b| b.remove(old_address));

        // SAFETY: forwarded caller contract.
        let Some(resized) = (unsafe { self.raw.resize(handle, new_size) }) else {
            if let (Some(blocks), Some(size)) = (&self.blocks, old_size) {
                blocks.insert(old_address, size);
            }
            warn!(new_size, address = old_address, "resize failed");
            return None;
        };

        match &self.blocks {
            Some(blocks) => {
                blocks.insert(address_of(resized), new_size);
                self.stats
                    .update(|s| s.record_exact_resize(old_size.unwrap_or(0), new_size));
            }
            None => self.stats.update(|s| s.record_resize(new_size)),
        }

        if self.config.trace_allocations {
            trace!(
                from = old_address,
                to = address_of(resized),
                new_size,
                "resized"
            );
        }

        Some(resized)
    }

    /// Release a block
    ///
    /// Always increments `free_count`. Bytes are only credited back in exact
    /// mode; in approximate mode the block size is unknown.
    ///
    /// # Safety
    /// `handle` must come from this allocator and be released exactly once.
    pub unsafe fn release(&self, handle: Handle) {
        let address = address_of(handle);
        let size = self.blocks.as_ref().and_then(|b| b.remove(address));

        // SAFETY: forwarded caller contract.
        unsafe { self.raw.release(handle) };
        self.stats.update(|s| s.record_release(size));

        if self.config.trace_allocations {
            trace!(address, size = ?size, "released");
        }
    }

    /// Allocate a zeroed array of `count` elements of `element_size` bytes
    pub fn allocate_array(&self, count: Size, element_size: Size) -> Option<Handle> {
        self.allocate_zeroed(count, element_size)
    }

    /// Resize an array to `count` elements of `element_size` bytes
    ///
    /// # Safety
    /// Same contract as [`resize`](Self::resize). On size overflow `None` is
    /// returned and the original block stays valid.
    pub unsafe fn resize_array(
        &self,
        handle: Handle,
        count: Size,
        element_size: Size,
    ) -> Option<Handle> {
        let Some(total) = count.checked_mul(element_size) else {
            warn!(count, element_size, "array resize size overflows usize");
            return None;
        };
        // SAFETY: forwarded caller contract.
        unsafe { self.resize(handle, total) }
    }

    /// Allocate room for one `T`, converting failure into an [`Outcome`]
    ///
    /// The memory is uninitialized. Callers never observe a null handle.
    #[track_caller]
    pub fn alloc_checked<T>(&self) -> DsResult<NonNull<T>> {
        let origin = Origin::caller();
        if std::mem::align_of::<T>() > MALLOC_ALIGNMENT {
            return Err(Outcome::with_origin(
                ResultCode::InvalidArgument,
                ALIGNMENT_UNSUPPORTED,
                origin,
            ));
        }

        match self.allocate(std::mem::size_of::<T>()) {
            Some(handle) => Ok(handle.cast()),
            None => {
                warn!(type_name = std::any::type_name::<T>(), "checked allocation failed");
                Err(Outcome::with_origin(
                    ResultCode::MemoryAllocation,
                    ALLOCATION_FAILED,
                    origin,
                ))
            }
        }
    }

    /// Allocate a zeroed array of `count` values of `T`
    #[track_caller]
    pub fn alloc_array_checked<T>(&self, count: Size) -> DsResult<NonNull<T>> {
        let origin = Origin::caller();
        if std::mem::align_of::<T>() > MALLOC_ALIGNMENT {
            return Err(Outcome::with_origin(
                ResultCode::InvalidArgument,
                ALIGNMENT_UNSUPPORTED,
                origin,
            ));
        }
        if count.checked_mul(std::mem::size_of::<T>()).is_none() {
            return Err(Outcome::with_origin(
                ResultCode::Overflow,
                ARRAY_SIZE_OVERFLOW,
                origin,
            ));
        }

        match self.allocate_array(count, std::mem::size_of::<T>()) {
            Some(handle) => Ok(handle.cast()),
            None => {
                warn!(
                    type_name = std::any::type_name::<T>(),
                    count, "checked array allocation failed"
                );
                Err(Outcome::with_origin(
                    ResultCode::MemoryAllocation,
                    ALLOCATION_FAILED,
                    origin,
                ))
            }
        }
    }

    /// Emit the counters as a structured event
    pub fn log_report(&self) {
        let s = self.snapshot();
        info!(
            total_allocated = s.total_allocated,
            total_freed = s.total_freed,
            current_usage = s.current_usage,
            peak_usage = s.peak_usage,
            allocation_count = s.allocation_count,
            free_count = s.free_count,
            "memory statistics"
        );
    }

    fn track_new(&self, handle: Handle, size: Size) {
        if let Some(blocks) = &self.blocks {
            blocks.insert(address_of(handle), size);
        }
        self.stats.update(|s| s.record_allocation(size));

        if self.config.trace_allocations {
            trace!(address = address_of(handle), size, "allocated");
        }
    }
}

impl<A: RawAllocator> MemoryInfo for InstrumentedAllocator<A> {
    fn snapshot(&self) -> MemoryStats {
        self.stats.read()
    }

    /// Zero the counters; exact-mode block sizes are kept so live blocks
    /// still release correctly
    fn reset(&self) {
        self.stats.replace(MemoryStats::ZERO);
        debug!("memory statistics reset");
    }
}

impl<A: RawAllocator + std::fmt::Debug> std::fmt::Debug for InstrumentedAllocator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentedAllocator")
            .field("raw", &self.raw)
            .field("stats", &self.stats)
            .field("tracked_blocks", &self.tracked_blocks())
            .field("config", &self.config)
            .finish()
    }
}
