/*!
 * Block Size Tracking
 * Side table of live block sizes for exact accounting
 */

use crate::core::types::{Address, Size};
use ahash::RandomState;
use dashmap::DashMap;

/// Live block sizes keyed by address
#[derive(Debug, Default)]
pub(super) struct BlockTable {
    sizes: DashMap<Address, Size, RandomState>,
}

impl BlockTable {
    pub fn new() -> Self {
        Self {
            sizes: DashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn insert(&self, address: Address, size: Size) {
        self.sizes.insert(address, size);
    }

    pub fn remove(&self, address: Address) -> Option<Size> {
        self.sizes.remove(&address).map(|(_, size)| size)
    }

    pub fn get(&self, address: Address) -> Option<Size> {
        self.sizes.get(&address).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Sum of every tracked block
    pub fn live_bytes(&self) -> Size {
        self.sizes.iter().map(|entry| *entry.value()).sum()
    }
}
