/*!
 * Seqlock-based Statistics Cell
 * Wait-free snapshots for counter blocks that are written on every allocation
 */

use seqlock::SeqLock;

/// Seqlock wrapper for `Copy` statistics structures
///
/// # Performance
///
/// - **Reads**: wait-free copy, retried only if a writer raced the read
/// - **Writes**: short critical section, bumps the sequence number
///
/// Every `update` runs as one unit: readers never observe a half-applied
/// counter sequence.
///
/// # Example
///
/// ```ignore
/// let stats = SeqlockStats::new(MemoryStats::default());
/// stats.update(|s| s.allocation_count += 1);
/// let snapshot = stats.read();
/// ```
pub struct SeqlockStats<T: Copy> {
    inner: SeqLock<T>,
}

impl<T: Copy> SeqlockStats<T> {
    #[inline]
    pub fn new(initial: T) -> Self {
        Self {
            inner: SeqLock::new(initial),
        }
    }

    /// Copy of the current value
    #[inline(always)]
    pub fn read(&self) -> T {
        self.inner.read()
    }

    /// Apply a mutation under the write lock and return its result
    #[inline]
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.lock_write();
        f(&mut *guard)
    }

    /// Replace the value entirely
    #[inline]
    pub fn replace(&self, value: T) {
        *self.inner.lock_write() = value;
    }
}

impl<T: Copy + Default> Default for SeqlockStats<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + std::fmt::Debug> std::fmt::Debug for SeqlockStats<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SeqlockStats").field(&self.read()).finish()
    }
}
