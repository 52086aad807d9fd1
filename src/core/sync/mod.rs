/*!
 * Synchronization Primitives
 * Read-mostly shared state for statistics
 */

mod seqlock_stats;

pub use seqlock_stats::SeqlockStats;
