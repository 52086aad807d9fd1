/*!
 * Instrumented Allocator Tests
 * Counter bookkeeping in both accounting modes
 */

use ds_foundation::memory::{
    AccountingMode, AllocatorConfig, InstrumentedAllocator, MemoryInfo, MemoryStats,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

#[test]
fn test_fresh_allocator_is_zero() {
    let allocator = InstrumentedAllocator::new();
    assert_eq!(allocator.snapshot(), MemoryStats::default());
    assert_eq!(allocator.accounting(), AccountingMode::Approximate);
}

#[test]
fn test_allocate_then_release_approximate() {
    let allocator = InstrumentedAllocator::new();
    let a = allocator.allocate(100).unwrap();
    let b = allocator.allocate(50).unwrap();

    unsafe { allocator.release(a) };

    assert_eq!(
        allocator.snapshot(),
        MemoryStats {
            total_allocated: 150,
            total_freed: 0,
            current_usage: 150,
            peak_usage: 150,
            allocation_count: 2,
            free_count: 1,
        }
    );

    unsafe { allocator.release(b) };
}

#[test]
fn test_exact_mode_tracks_releases() {
    let allocator = InstrumentedAllocator::with_config(AllocatorConfig::exact());
    let a = allocator.allocate(100).unwrap();
    let b = allocator.allocate(50).unwrap();
    unsafe { allocator.release(a) };

    let stats = allocator.snapshot();
    assert_eq!(stats.current_usage, 50);
    assert_eq!(stats.total_freed, 100);
    assert_eq!(stats.peak_usage, 150);

    let b = unsafe { allocator.resize(b, 10) }.unwrap();
    assert_eq!(allocator.snapshot().current_usage, 10);
    assert_eq!(allocator.block_size(b), Some(10));

    unsafe { allocator.release(b) };
    assert_eq!(allocator.snapshot().current_usage, 0);
}

#[test]
fn test_zeroed_allocation_contents() {
    let allocator = InstrumentedAllocator::new();
    let handle = allocator.allocate_zeroed(8, 8).unwrap();
    let bytes = unsafe { std::slice::from_raw_parts(handle.as_ptr(), 64) };
    assert!(bytes.iter().all(|&b| b == 0));
    assert_eq!(allocator.snapshot().total_allocated, 64);
    unsafe { allocator.release(handle) };
}

#[test]
fn test_reset_then_snapshot_is_zero() {
    let allocator = InstrumentedAllocator::with_config(AllocatorConfig::exact());
    let handle = allocator.allocate(256).unwrap();
    allocator.reset();
    assert!(allocator.snapshot().is_zero());

    // Block sizes survive reset; the release saturates at zero usage
    unsafe { allocator.release(handle) };
    let stats = allocator.snapshot();
    assert_eq!(stats.current_usage, 0);
    assert_eq!(stats.total_freed, 256);
    assert_eq!(stats.free_count, 1);
}

#[test]
fn test_report_format() {
    let allocator = InstrumentedAllocator::new();
    let handle = allocator.allocate(10).unwrap();
    unsafe { allocator.release(handle) };

    assert_eq!(
        allocator.report(),
        "Memory Statistics:\n\
         \x20 Total Allocated: 10 bytes\n\
         \x20 Total Freed:     0 bytes\n\
         \x20 Current Usage:   10 bytes\n\
         \x20 Peak Usage:      10 bytes\n\
         \x20 Allocation Count:1\n\
         \x20 Free Count:      1\n"
    );
}

#[test]
fn test_concurrent_allocations_are_counted() {
    let allocator = Arc::new(InstrumentedAllocator::with_config(AllocatorConfig::exact()));
    let mut handles = vec![];

    for _ in 0..4 {
        let allocator = Arc::clone(&allocator);
        handles.push(thread::spawn(move || {
            for _ in 0..250 {
                let block = allocator.allocate(16).unwrap();
                unsafe { allocator.release(block) };
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = allocator.snapshot();
    assert_eq!(stats.allocation_count, 1000);
    assert_eq!(stats.free_count, 1000);
    assert_eq!(stats.total_allocated, 16_000);
    assert_eq!(stats.current_usage, 0);
    assert!(stats.peak_usage >= 16);
    assert!(stats.peak_usage <= 64);
}
