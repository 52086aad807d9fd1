/*!
 * Data Structure Foundation
 * Outcome propagation, instrumented allocation and growth utilities for
 * container libraries
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod utils;

// Re-exports
pub use crate::core::errors::{describe_raw, DsResult, Origin, Outcome, ResultCode};
pub use crate::core::traits::{Comparator, ElementHasher, Printer};
pub use crate::core::types::{Handle, Size};
pub use memory::{
    global, AccountingMode, AllocatorConfig, ConfigError, GenericBuffer, InstrumentedAllocator,
    MemoryInfo, MemoryStats, RawAllocator, SystemAllocator,
};
pub use monitoring::init_tracing;
