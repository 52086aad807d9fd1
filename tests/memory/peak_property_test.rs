/*!
 * Peak Usage Properties
 * Peak tracks the highest current usage over random operation sequences
 */

use ds_foundation::memory::{AccountingMode, AllocatorConfig, InstrumentedAllocator, MemoryInfo};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Allocate(usize),
    Release(usize),
    Resize(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..512).prop_map(Op::Allocate),
        any::<usize>().prop_map(Op::Release),
        (any::<usize>(), 1usize..512).prop_map(|(i, n)| Op::Resize(i, n)),
    ]
}

fn accounting_mode() -> impl Strategy<Value = AccountingMode> {
    prop_oneof![Just(AccountingMode::Approximate), Just(AccountingMode::Exact)]
}

proptest! {
    #[test]
    fn peak_is_max_observed_usage(
        mode in accounting_mode(),
        ops in prop::collection::vec(op(), 1..64)
    ) {
        let exact = mode == AccountingMode::Exact;
        let allocator =
            InstrumentedAllocator::with_config(AllocatorConfig::new().with_accounting(mode));
        let mut live = Vec::new();
        let mut observed_max = 0usize;
        let mut last_peak = 0usize;

        for op in ops {
            match op {
                Op::Allocate(size) => {
                    live.push(allocator.allocate(size).unwrap());
                }
                Op::Release(i) if !live.is_empty() => {
                    let block = live.swap_remove(i % live.len());
                    unsafe { allocator.release(block) };
                }
                Op::Resize(i, size) if !live.is_empty() => {
                    let slot = i % live.len();
                    live[slot] = unsafe { allocator.resize(live[slot], size) }.unwrap();
                }
                _ => {}
            }

            let stats = allocator.snapshot();
            observed_max = observed_max.max(stats.current_usage);
            prop_assert!(stats.peak_usage >= last_peak);
            prop_assert!(stats.peak_usage >= stats.current_usage);
            if exact {
                prop_assert_eq!(stats.current_usage, allocator.tracked_bytes());
            }
            last_peak = stats.peak_usage;
        }

        prop_assert_eq!(allocator.snapshot().peak_usage, observed_max);

        let before_release = allocator.snapshot();
        for block in live {
            unsafe { allocator.release(block) };
        }
        let after = allocator.snapshot();
        if exact {
            prop_assert_eq!(after.current_usage, 0);
        } else {
            // Approximate releases only count
            prop_assert_eq!(after.current_usage, before_release.current_usage);
        }
        prop_assert_eq!(after.peak_usage, observed_max);
    }
}
