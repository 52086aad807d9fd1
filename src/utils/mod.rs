/*!
 * Utilities
 * Growth policy, byte manipulation and built-in element operations
 */

pub mod bytes;
pub mod compare;
pub mod element;
pub mod growth;
pub mod hash;
pub mod print;

// Re-export for convenience
pub use bytes::{reverse_bytes, swap_bytes};
pub use compare::*;
pub use element::{CharOps, DoubleOps, FloatOps, IntOps, StrOps};
pub use growth::{
    calculate_growth, checked_next_power_of_two, is_power_of_two, next_power_of_two,
    try_calculate_growth,
};
pub use hash::*;
pub use print::*;
