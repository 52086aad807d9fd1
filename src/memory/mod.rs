/*!
 * Memory Module
 * Instrumented allocation, usage statistics and byte-region operations
 */

pub mod allocator;
pub mod buffer;
pub mod config;
pub mod global;
pub mod ops;
pub mod platform;
mod tracking;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use allocator::{InstrumentedAllocator, ALIGNMENT_UNSUPPORTED, ALLOCATION_FAILED};
pub use buffer::GenericBuffer;
pub use config::{AccountingMode, AllocatorConfig, ConfigError};
pub use global::*;
pub use platform::SystemAllocator;
pub use traits::*;
pub use types::*;
