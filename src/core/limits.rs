/*!
 * Limits and Constants
 *
 * Centralized location for thresholds and magic numbers, grouped by domain.
 * Performance-relevant constants are marked with [PERF].
 */

// =============================================================================
// ALLOCATION
// =============================================================================

/// Alignment guaranteed by the platform `malloc` family
/// Two machine words, matching glibc's `MALLOC_ALIGNMENT`
pub const MALLOC_ALIGNMENT: usize = 2 * std::mem::size_of::<usize>();

/// Environment variable selecting the accounting mode (`approximate` | `exact`)
pub const ENV_ACCOUNTING: &str = "DS_MEMORY_ACCOUNTING";

/// Environment variable enabling per-call allocation trace events
pub const ENV_TRACE_ALLOCATIONS: &str = "DS_TRACE_ALLOCATIONS";

// =============================================================================
// GROWTH
// =============================================================================

/// Minimum number of elements added when a buffer grows
/// [PERF] Avoids repeated single-slot reallocations for tiny buffers
pub const DEFAULT_MIN_GROWTH: usize = 8;

// =============================================================================
// ELEMENT HELPERS
// =============================================================================

/// Values closer than this compare equal as `f32`
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Values closer than this compare equal as `f64`
pub const DOUBLE_EPSILON: f64 = 1e-12;

/// Fixed seeds for deterministic element hashing
pub const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

// =============================================================================
// MONITORING
// =============================================================================

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "DS_TRACE_JSON";
