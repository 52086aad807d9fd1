/*!
 * Element Comparison
 * Three-way ordering for the built-in element kinds
 */

use crate::core::limits::{DOUBLE_EPSILON, FLOAT_EPSILON};
use std::cmp::Ordering;

#[inline]
pub fn compare_int(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Values within [`FLOAT_EPSILON`] compare equal
///
/// NaN orders after every other value.
///
/// The tolerance makes this relation non-transitive (`0.0 ~ 0.6e-6 ~ 1.2e-6`
/// but `0.0 < 1.2e-6`). Do not pass it to `sort_by` or other algorithms that
/// require a total order; use `f32::total_cmp` there.
#[inline]
pub fn compare_float(a: &f32, b: &f32) -> Ordering {
    if (a - b).abs() < FLOAT_EPSILON {
        return Ordering::Equal;
    }
    a.partial_cmp(b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Values within [`DOUBLE_EPSILON`] compare equal
///
/// Not transitive, for the same reason as [`compare_float`]; sort with
/// `f64::total_cmp` instead.
#[inline]
pub fn compare_double(a: &f64, b: &f64) -> Ordering {
    if (a - b).abs() < DOUBLE_EPSILON {
        return Ordering::Equal;
    }
    a.partial_cmp(b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Lexicographic byte order
#[inline]
pub fn compare_string(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[inline]
pub fn compare_char(a: &char, b: &char) -> Ordering {
    a.cmp(b)
}
