/*!
 * Allocation Failure Tests
 * Forced exhaustion through a budgeted platform allocator
 */

use ds_foundation::core::types::{Handle, Size};
use ds_foundation::memory::{
    AllocatorConfig, GenericBuffer, InstrumentedAllocator, MemoryInfo, RawAllocator,
    SystemAllocator, ALLOCATION_FAILED,
};
use ds_foundation::ResultCode;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Delegates to the system allocator until the byte budget runs out
struct BudgetAllocator {
    remaining: AtomicUsize,
}

impl BudgetAllocator {
    fn new(budget: Size) -> Self {
        Self {
            remaining: AtomicUsize::new(budget),
        }
    }

    fn take(&self, size: Size) -> bool {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(size))
            .is_ok()
    }
}

unsafe impl RawAllocator for BudgetAllocator {
    fn allocate(&self, size: Size) -> Option<Handle> {
        if !self.take(size) {
            return None;
        }
        SystemAllocator.allocate(size)
    }

    fn allocate_zeroed(&self, count: Size, size: Size) -> Option<Handle> {
        if !self.take(count.checked_mul(size)?) {
            return None;
        }
        SystemAllocator.allocate_zeroed(count, size)
    }

    unsafe fn resize(&self, handle: Handle, new_size: Size) -> Option<Handle> {
        if !self.take(new_size) {
            return None;
        }
        unsafe { SystemAllocator.resize(handle, new_size) }
    }

    unsafe fn release(&self, handle: Handle) {
        unsafe { SystemAllocator.release(handle) }
    }
}

#[test]
fn test_failed_allocation_leaves_counters_unchanged() {
    let allocator = InstrumentedAllocator::with_raw(BudgetAllocator::new(100), AllocatorConfig::new());
    let block = allocator.allocate(80).unwrap();
    let before = allocator.snapshot();

    assert!(allocator.allocate(40).is_none());
    assert!(allocator.allocate_zeroed(10, 4).is_none());
    assert_eq!(allocator.snapshot(), before);

    unsafe { allocator.release(block) };
}

#[test]
fn test_failed_resize_keeps_block() {
    let allocator =
        InstrumentedAllocator::with_raw(BudgetAllocator::new(64), AllocatorConfig::exact());
    let block = allocator.allocate(32).unwrap();
    unsafe { block.as_ptr().write(0xAB) };

    assert!(unsafe { allocator.resize(block, 1024) }.is_none());
    assert_eq!(allocator.block_size(block), Some(32));
    assert_eq!(unsafe { block.as_ptr().read() }, 0xAB);
    assert_eq!(allocator.snapshot().current_usage, 32);

    unsafe { allocator.release(block) };
    assert_eq!(allocator.snapshot().current_usage, 0);
}

#[test]
fn test_checked_allocation_reports_outcome() {
    let allocator = InstrumentedAllocator::with_raw(BudgetAllocator::new(0), AllocatorConfig::new());

    let err = allocator.alloc_checked::<u64>().unwrap_err();
    assert_eq!(err.code(), ResultCode::MemoryAllocation);
    assert_eq!(err.message(), ALLOCATION_FAILED);
    assert!(err.origin().file.ends_with("exhaustion_test.rs"));
    assert!(allocator.snapshot().is_zero());

    let err = allocator.alloc_array_checked::<u32>(16).unwrap_err();
    assert_eq!(err.code(), ResultCode::MemoryAllocation);
}

#[test]
fn test_buffer_growth_failure_preserves_contents() {
    let allocator = InstrumentedAllocator::with_raw(BudgetAllocator::new(8), AllocatorConfig::new());
    let mut buffer = GenericBuffer::new(&allocator, 1).unwrap();

    for i in 0..8u8 {
        buffer.push(&[i]).unwrap();
    }
    let err = buffer.push(&[8]).unwrap_err();
    assert_eq!(err.code(), ResultCode::MemoryAllocation);
    assert_eq!(buffer.len(), 8);
    assert_eq!(buffer.as_bytes(), &[0, 1, 2, 3, 4, 5, 6, 7]);
}
