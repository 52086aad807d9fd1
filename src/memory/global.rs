/*!
 * Global Allocator Facade
 * Process-wide instrumented allocator behind free functions
 *
 * Components that want isolated statistics should construct their own
 * [`InstrumentedAllocator`] instead.
 */

use super::allocator::InstrumentedAllocator;
use super::config::AllocatorConfig;
use super::traits::MemoryInfo;
use super::types::MemoryStats;
use crate::core::types::{Handle, Size};
use std::io;
use std::sync::OnceLock;
use tracing::warn;

static GLOBAL: OnceLock<InstrumentedAllocator> = OnceLock::new();

/// Process-wide allocator, configured from the environment on first use
pub fn global() -> &'static InstrumentedAllocator {
    GLOBAL.get_or_init(|| {
        let config = AllocatorConfig::from_env().unwrap_or_else(|e| {
            warn!(error = %e, "invalid allocator configuration, using defaults");
            AllocatorConfig::default()
        });
        InstrumentedAllocator::with_config(config)
    })
}

pub fn ds_malloc(size: Size) -> Option<Handle> {
    global().allocate(size)
}

pub fn ds_calloc(count: Size, size: Size) -> Option<Handle> {
    global().allocate_zeroed(count, size)
}

/// Resize a block obtained from the global allocator
///
/// A `None` handle behaves like [`ds_malloc`].
///
/// # Safety
/// `handle`, if present, must come from the global allocator and still be
/// live.
pub unsafe fn ds_realloc(handle: Option<Handle>, new_size: Size) -> Option<Handle> {
    match handle {
        // SAFETY: forwarded caller contract.
        Some(handle) => unsafe { global().resize(handle, new_size) },
        None => global().allocate(new_size),
    }
}

/// Release a block obtained from the global allocator; `None` is a no-op
///
/// # Safety
/// `handle`, if present, must come from the global allocator and be
/// released exactly once.
pub unsafe fn ds_free(handle: Option<Handle>) {
    if let Some(handle) = handle {
        // SAFETY: forwarded caller contract.
        unsafe { global().release(handle) }
    }
}

pub fn ds_alloc_array(count: Size, element_size: Size) -> Option<Handle> {
    global().allocate_array(count, element_size)
}

/// Resize an array obtained from the global allocator
///
/// A `None` handle behaves like [`ds_malloc`] of `count * element_size`
/// bytes: the block is not zeroed, unlike [`ds_alloc_array`].
///
/// # Safety
/// Same contract as [`ds_realloc`].
pub unsafe fn ds_realloc_array(
    handle: Option<Handle>,
    count: Size,
    element_size: Size,
) -> Option<Handle> {
    match handle {
        // SAFETY: forwarded caller contract.
        Some(handle) => unsafe { global().resize_array(handle, count, element_size) },
        None => {
            let Some(total) = count.checked_mul(element_size) else {
                warn!(count, element_size, "array resize size overflows usize");
                return None;
            };
            global().allocate(total)
        }
    }
}

pub fn ds_get_memory_stats() -> MemoryStats {
    global().snapshot()
}

pub fn ds_reset_memory_stats() {
    global().reset()
}

/// Write the statistics report to stdout
pub fn ds_print_memory_stats() {
    let stats = global().snapshot();
    if let Err(e) = write_stats(&mut io::stdout().lock(), &stats) {
        warn!(error = %e, "failed to write memory statistics");
    }
}

/// The report already ends in a newline
fn write_stats(out: &mut dyn io::Write, stats: &MemoryStats) -> io::Result<()> {
    write!(out, "{stats}")?;
    out.flush()
}
