/*!
 * Memory Types
 * Statistics counters and their update rules
 */

use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory statistics
///
/// Returned by value from [`snapshot`](crate::memory::MemoryInfo::snapshot);
/// mutating a snapshot never affects the live counters.
///
/// In approximate accounting mode `current_usage` and `total_freed` drift:
/// releases do not know the block size, and resizes charge the full new size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_allocated: Size,
    pub total_freed: Size,
    pub current_usage: Size,
    pub peak_usage: Size,
    pub allocation_count: Size,
    pub free_count: Size,
}

impl MemoryStats {
    /// All counters zero
    pub const ZERO: MemoryStats = MemoryStats {
        total_allocated: 0,
        total_freed: 0,
        current_usage: 0,
        peak_usage: 0,
        allocation_count: 0,
        free_count: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Serialize the counters for machine-readable diagnostics
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Fresh block of `size` bytes
    pub(crate) fn record_allocation(&mut self, size: Size) {
        self.total_allocated = self.total_allocated.saturating_add(size);
        self.current_usage = self.current_usage.saturating_add(size);
        self.allocation_count += 1;
        self.raise_peak();
    }

    /// Resize without knowledge of the previous size: charge the whole new size
    pub(crate) fn record_resize(&mut self, new_size: Size) {
        self.total_allocated = self.total_allocated.saturating_add(new_size);
        self.current_usage = self.current_usage.saturating_add(new_size);
        self.raise_peak();
    }

    /// Resize with a known previous size: release old, charge new
    pub(crate) fn record_exact_resize(&mut self, old_size: Size, new_size: Size) {
        self.total_freed = self.total_freed.saturating_add(old_size);
        self.total_allocated = self.total_allocated.saturating_add(new_size);
        self.current_usage = self
            .current_usage
            .saturating_sub(old_size)
            .saturating_add(new_size);
        self.raise_peak();
    }

    /// Release; `size` is known only in exact accounting mode
    pub(crate) fn record_release(&mut self, size: Option<Size>) {
        self.free_count += 1;
        if let Some(size) = size {
            self.total_freed = self.total_freed.saturating_add(size);
            self.current_usage = self.current_usage.saturating_sub(size);
        }
    }

    #[inline]
    fn raise_peak(&mut self) {
        if self.current_usage > self.peak_usage {
            self.peak_usage = self.current_usage;
        }
    }
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Memory Statistics:")?;
        writeln!(f, "  Total Allocated: {} bytes", self.total_allocated)?;
        writeln!(f, "  Total Freed:     {} bytes", self.total_freed)?;
        writeln!(f, "  Current Usage:   {} bytes", self.current_usage)?;
        writeln!(f, "  Peak Usage:      {} bytes", self.peak_usage)?;
        writeln!(f, "  Allocation Count:{}", self.allocation_count)?;
        writeln!(f, "  Free Count:      {}", self.free_count)
    }
}
