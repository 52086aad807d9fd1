/*!
 * Core Module
 * Outcome taxonomy, shared types, constants and element traits
 */

pub mod errors;
pub mod limits;
pub mod sync;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use traits::*;
pub use types::*;
