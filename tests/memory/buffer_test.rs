/*!
 * Generic Buffer Tests
 * Buffer operations against a shared allocator context
 */

use ds_foundation::memory::{AllocatorConfig, GenericBuffer, InstrumentedAllocator, MemoryInfo};
use ds_foundation::utils::{compare_int, IntOps};
use ds_foundation::{Comparator, ResultCode};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;

fn int_at(buffer: &GenericBuffer<'_>, index: usize) -> i32 {
    let bytes: [u8; 4] = buffer.get(index).unwrap().try_into().unwrap();
    i32::from_ne_bytes(bytes)
}

#[test]
fn test_two_buffers_share_one_context() {
    let allocator = InstrumentedAllocator::with_config(AllocatorConfig::exact());
    {
        let mut a = GenericBuffer::new(&allocator, 4).unwrap();
        let mut b = GenericBuffer::new(&allocator, 8).unwrap();
        a.push(&1i32.to_ne_bytes()).unwrap();
        b.push(&2u64.to_ne_bytes()).unwrap();
        assert_eq!(allocator.tracked_blocks(), 2);
        assert_eq!(allocator.snapshot().allocation_count, 2);
    }

    let stats = allocator.snapshot();
    assert_eq!(stats.free_count, 2);
    assert_eq!(stats.current_usage, 0);
}

#[test]
fn test_set_and_position_by_comparator() {
    let allocator = InstrumentedAllocator::new();
    let mut buffer = GenericBuffer::new(&allocator, 4).unwrap();
    for value in [10i32, 20, 30] {
        buffer.push(&value.to_ne_bytes()).unwrap();
    }

    buffer.set(1, &25i32.to_ne_bytes()).unwrap();
    assert_eq!(int_at(&buffer, 1), 25);
    assert_eq!(
        buffer.set(3, &0i32.to_ne_bytes()).unwrap_err().code(),
        ResultCode::IndexOutOfBounds
    );

    let as_int = |a: &[u8], b: &[u8]| -> Ordering {
        let a = i32::from_ne_bytes(a.try_into().unwrap_or_default());
        let b = i32::from_ne_bytes(b.try_into().unwrap_or_default());
        IntOps.compare(&a, &b)
    };
    assert_eq!(buffer.position_by(&30i32.to_ne_bytes(), &as_int).unwrap(), 2);
    assert_eq!(compare_int(&int_at(&buffer, 0), &int_at(&buffer, 2)), Ordering::Less);
}

#[test]
fn test_reserve_overflow() {
    let allocator = InstrumentedAllocator::new();
    let mut buffer = GenericBuffer::new(&allocator, 16).unwrap();
    assert_eq!(
        buffer.reserve(usize::MAX).unwrap_err().code(),
        ResultCode::Overflow
    );
    assert_eq!(buffer.capacity(), 0);
    assert!(allocator.snapshot().is_zero());
}
