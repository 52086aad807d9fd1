/*!
 * Global Facade Tests
 * Free functions over the process-wide allocator
 */

use ds_foundation::memory::{
    ds_alloc_array, ds_calloc, ds_free, ds_get_memory_stats, ds_malloc, ds_print_memory_stats,
    ds_realloc, ds_realloc_array, ds_reset_memory_stats,
};
use serial_test::serial;

#[test]
#[serial]
fn test_malloc_free_counts() {
    ds_reset_memory_stats();

    let block = ds_malloc(100);
    assert!(block.is_some());
    let stats = ds_get_memory_stats();
    assert_eq!(stats.allocation_count, 1);
    assert_eq!(stats.total_allocated, 100);

    unsafe { ds_free(block) };
    assert_eq!(ds_get_memory_stats().free_count, 1);
}

#[test]
#[serial]
fn test_free_none_is_noop() {
    ds_reset_memory_stats();
    unsafe { ds_free(None) };
    assert!(ds_get_memory_stats().is_zero());
}

#[test]
#[serial]
fn test_realloc_none_allocates() {
    ds_reset_memory_stats();

    let block = unsafe { ds_realloc(None, 32) };
    assert!(block.is_some());
    assert_eq!(ds_get_memory_stats().allocation_count, 1);

    let block = unsafe { ds_realloc(block, 64) };
    assert!(block.is_some());
    assert_eq!(ds_get_memory_stats().allocation_count, 1);

    unsafe { ds_free(block) };
}

#[test]
#[serial]
fn test_array_helpers() {
    ds_reset_memory_stats();

    let zeroed = ds_calloc(4, 4);
    let array = ds_alloc_array(10, 8);
    assert!(zeroed.is_some() && array.is_some());
    assert_eq!(ds_get_memory_stats().total_allocated, 16 + 80);

    let array = unsafe { ds_realloc_array(array, 20, 8) };
    assert!(array.is_some());
    assert!(unsafe { ds_realloc_array(None, usize::MAX, 2) }.is_none());

    unsafe {
        ds_free(zeroed);
        ds_free(array);
    }
    assert_eq!(ds_get_memory_stats().free_count, 2);
}

#[test]
#[serial]
fn test_reset_and_print() {
    let block = ds_malloc(8);
    ds_reset_memory_stats();
    assert!(ds_get_memory_stats().is_zero());

    ds_print_memory_stats();
    unsafe { ds_free(block) };
}

#[test]
#[serial]
fn test_realloc_array_none_is_plain_allocation() {
    ds_reset_memory_stats();

    let array = unsafe { ds_realloc_array(None, 4, 8) };
    assert!(array.is_some());
    let stats = ds_get_memory_stats();
    assert_eq!(stats.allocation_count, 1);
    assert_eq!(stats.total_allocated, 32);

    assert!(unsafe { ds_realloc_array(None, usize::MAX / 2, 4) }.is_none());
    assert_eq!(ds_get_memory_stats().allocation_count, 1);

    unsafe { ds_free(array) };
}
