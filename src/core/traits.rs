/*!
 * Core Traits
 * Element capabilities that containers accept polymorphically
 */

use std::cmp::Ordering;
use std::fmt;

/// Orders two elements
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Renders an element for debugging output
pub trait Printer<T: ?Sized> {
    fn print(&self, out: &mut dyn fmt::Write, value: &T) -> fmt::Result;
}

/// Produces a 64-bit hash of an element
///
/// Implementations must be deterministic for the life of the process so
/// hash-based containers can rely on stable bucket placement.
pub trait ElementHasher<T: ?Sized> {
    fn hash(&self, value: &T) -> u64;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

impl<T, F> Printer<T> for F
where
    T: ?Sized,
    F: Fn(&mut dyn fmt::Write, &T) -> fmt::Result,
{
    #[inline]
    fn print(&self, out: &mut dyn fmt::Write, value: &T) -> fmt::Result {
        self(out, value)
    }
}

impl<T, F> ElementHasher<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> u64,
{
    #[inline]
    fn hash(&self, value: &T) -> u64 {
        self(value)
    }
}
