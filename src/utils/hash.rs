/*!
 * Element Hashing
 *
 * Deterministic 64-bit hashes built on a fixed-seed ahash state. The seeds
 * never change at runtime, so a value hashes the same for the life of the
 * process.
 */

use crate::core::limits::HASH_SEEDS;
use ahash::RandomState;
use std::hash::Hash;
use std::sync::OnceLock;

fn state() -> &'static RandomState {
    static STATE: OnceLock<RandomState> = OnceLock::new();
    STATE.get_or_init(|| {
        RandomState::with_seeds(HASH_SEEDS[0], HASH_SEEDS[1], HASH_SEEDS[2], HASH_SEEDS[3])
    })
}

#[inline]
fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    state().hash_one(value)
}

#[inline]
pub fn hash_int(value: &i32) -> u64 {
    hash_one(value)
}

/// Hashes the bit pattern; `-0.0` hashes like `0.0`
#[inline]
pub fn hash_float(value: &f32) -> u64 {
    let normalized = if *value == 0.0 { 0.0f32 } else { *value };
    hash_one(&normalized.to_bits())
}

/// Hashes the bit pattern; `-0.0` hashes like `0.0`
#[inline]
pub fn hash_double(value: &f64) -> u64 {
    let normalized = if *value == 0.0 { 0.0f64 } else { *value };
    hash_one(&normalized.to_bits())
}

#[inline]
pub fn hash_string(value: &str) -> u64 {
    hash_one(value)
}

#[inline]
pub fn hash_bytes(value: &[u8]) -> u64 {
    hash_one(value)
}
