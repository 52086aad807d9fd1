/*!
 * Growth Policy
 * Power-of-two rounding and capacity growth for dynamic containers
 */

use crate::core::errors::{DsResult, ResultCode};
use crate::core::types::Size;

/// Smallest power of two greater than or equal to `n`
///
/// `next_power_of_two(0)` is 1. Values above the largest representable power
/// of two wrap to 0; use [`checked_next_power_of_two`] to detect that.
///
/// # Example
/// ```
/// use ds_foundation::utils::next_power_of_two;
///
/// assert_eq!(next_power_of_two(37), 64);
/// assert_eq!(next_power_of_two(usize::MAX), 0);
/// ```
#[inline]
#[must_use]
pub const fn next_power_of_two(n: Size) -> Size {
    match n.checked_next_power_of_two() {
        Some(p) => p,
        None => 0,
    }
}

/// Like [`next_power_of_two`], but `None` instead of wrapping
#[inline]
#[must_use]
pub const fn checked_next_power_of_two(n: Size) -> Option<Size> {
    n.checked_next_power_of_two()
}

#[inline]
#[must_use]
pub const fn is_power_of_two(n: Size) -> bool {
    n.is_power_of_two()
}

/// New capacity for a structure holding `current` slots that needs at least
/// `min_growth` more
///
/// Doubles the capacity unless that is smaller than `current + min_growth`.
/// An empty structure starts at `max(min_growth, 1)`. Saturates at
/// `usize::MAX`.
#[inline]
#[must_use]
pub const fn calculate_growth(current: Size, min_growth: Size) -> Size {
    if current == 0 {
        return if min_growth > 1 { min_growth } else { 1 };
    }

    let doubled = current.saturating_mul(2);
    let required = current.saturating_add(min_growth);
    if doubled < required {
        required
    } else {
        doubled
    }
}

/// [`calculate_growth`] that reports overflow instead of saturating
pub fn try_calculate_growth(current: Size, min_growth: Size) -> DsResult<Size> {
    if current == 0 {
        return Ok(min_growth.max(1));
    }

    match (current.checked_mul(2), current.checked_add(min_growth)) {
        (Some(doubled), Some(required)) => Ok(doubled.max(required)),
        _ => crate::bail!(ResultCode::Overflow, "Capacity growth overflows usize"),
    }
}
