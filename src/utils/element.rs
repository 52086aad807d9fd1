/*!
 * Built-in Element Operations
 * Comparator, printer and hasher bundles for the common element kinds
 */

use super::compare::{compare_char, compare_double, compare_float, compare_int, compare_string};
use super::hash::{hash_double, hash_float, hash_int, hash_string};
use super::print::{print_char, print_double, print_float, print_int, print_string};
use crate::core::traits::{Comparator, ElementHasher, Printer};
use std::cmp::Ordering;
use std::fmt;

macro_rules! element_ops {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $compare:ident, $print:ident, $hash:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Comparator<$ty> for $name {
            #[inline]
            fn compare(&self, a: &$ty, b: &$ty) -> Ordering {
                $compare(a, b)
            }
        }

        impl Printer<$ty> for $name {
            #[inline]
            fn print(&self, out: &mut dyn fmt::Write, value: &$ty) -> fmt::Result {
                $print(out, value)
            }
        }

        impl ElementHasher<$ty> for $name {
            #[inline]
            fn hash(&self, value: &$ty) -> u64 {
                $hash(value)
            }
        }
    };
}

element_ops!(
    /// `i32` elements
    IntOps, i32, compare_int, print_int, hash_int
);
element_ops!(
    /// `f32` elements, equal within `FLOAT_EPSILON`; not a total order, so
    /// unsuitable for sorting
    FloatOps, f32, compare_float, print_float, hash_float
);
element_ops!(
    /// `f64` elements, equal within `DOUBLE_EPSILON`; not a total order, so
    /// unsuitable for sorting
    DoubleOps, f64, compare_double, print_double, hash_double
);
element_ops!(
    /// String slices
    StrOps, str, compare_string, print_string, hash_string
);
element_ops!(
    /// `char` elements, hashed by code point
    CharOps, char, compare_char, print_char, |c: &char| hash_int(&(*c as i32))
);
