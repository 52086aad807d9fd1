/*!
 * Generic Buffer
 * Owned block of fixed-size elements allocated through an instrumented allocator
 */

use super::allocator::{InstrumentedAllocator, ALLOCATION_FAILED};
use super::ops;
use super::platform::SystemAllocator;
use super::traits::RawAllocator;
use crate::core::errors::{DsResult, ResultCode};
use crate::core::limits::DEFAULT_MIN_GROWTH;
use crate::core::traits::Comparator;
use crate::core::types::{Handle, Size};
use crate::utils::bytes::{reverse_bytes, swap_bytes};
use crate::utils::growth::calculate_growth;
use crate::{bail, ensure};
use std::cmp::Ordering;
use std::fmt;

/// Buffer descriptor: data handle, elements in use, capacity, element size
///
/// Invariants: `size <= capacity`; when `capacity > 0`,
/// `capacity * element_size` bytes are addressable through the handle. The
/// handle is owned exclusively and released on drop.
pub struct GenericBuffer<'a, A: RawAllocator = SystemAllocator> {
    allocator: &'a InstrumentedAllocator<A>,
    data: Option<Handle>,
    size: Size,
    capacity: Size,
    element_size: Size,
}

impl<'a, A: RawAllocator> GenericBuffer<'a, A> {
    /// Empty buffer; nothing is allocated until the first element arrives
    pub fn new(allocator: &'a InstrumentedAllocator<A>, element_size: Size) -> DsResult<Self> {
        ensure!(element_size > 0, "Element size must be non-zero");
        Ok(Self {
            allocator,
            data: None,
            size: 0,
            capacity: 0,
            element_size,
        })
    }

    /// Buffer with room for `capacity` elements
    pub fn with_capacity(
        allocator: &'a InstrumentedAllocator<A>,
        element_size: Size,
        capacity: Size,
    ) -> DsResult<Self> {
        let mut buffer = Self::new(allocator, element_size)?;
        if capacity > 0 {
            buffer.grow_to(capacity)?;
        }
        Ok(buffer)
    }

    #[inline]
    pub fn len(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> Size {
        self.capacity
    }

    #[inline]
    pub fn element_size(&self) -> Size {
        self.element_size
    }

    /// Bytes of the elements in use
    pub fn as_bytes(&self) -> &[u8] {
        match self.data {
            // SAFETY: `size * element_size` bytes are initialized and within
            // the block.
            Some(data) => unsafe {
                std::slice::from_raw_parts(data.as_ptr(), self.size * self.element_size)
            },
            None => &[],
        }
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self.data {
            // SAFETY: as above; `&mut self` gives exclusive access.
            Some(data) => unsafe {
                std::slice::from_raw_parts_mut(data.as_ptr(), self.size * self.element_size)
            },
            None => &mut [],
        }
    }

    /// Make room for at least `additional` more elements
    pub fn reserve(&mut self, additional: Size) -> DsResult {
        let Some(required) = self.size.checked_add(additional) else {
            bail!(ResultCode::Overflow, "Required capacity overflows usize");
        };
        if required <= self.capacity {
            return Ok(());
        }

        let min_growth = (required - self.capacity).max(DEFAULT_MIN_GROWTH);
        self.grow_to(calculate_growth(self.capacity, min_growth))
    }

    fn grow_to(&mut self, new_capacity: Size) -> DsResult {
        if new_capacity.checked_mul(self.element_size).is_none() {
            bail!(ResultCode::Overflow, "Buffer byte size overflows usize");
        }

        let grown = match self.data {
            None => self.allocator.allocate_array(new_capacity, self.element_size),
            // SAFETY: `data` came from `allocator` and is live; on failure it
            // stays valid and is kept.
            Some(data) => unsafe {
                self.allocator
                    .resize_array(data, new_capacity, self.element_size)
            },
        };

        match grown {
            Some(handle) => {
                self.data = Some(handle);
                self.capacity = new_capacity;
                Ok(())
            }
            None => bail!(ResultCode::MemoryAllocation, ALLOCATION_FAILED),
        }
    }

    /// Append one element
    pub fn push(&mut self, element: &[u8]) -> DsResult {
        ensure!(
            element.len() == self.element_size,
            "Element length does not match element size"
        );
        self.reserve(1)?;
        let Some(data) = self.data else {
            bail!(ResultCode::CorruptedData, "Buffer has capacity but no block");
        };

        // The slot past `size` may hold uninitialized bytes after a realloc,
        // so it is written through the raw pointer before it joins the slice.
        let offset = self.size * self.element_size;
        // SAFETY: `size < capacity` after `reserve`, so the slot lies within
        // the block, and `element` cannot alias memory owned by the buffer.
        unsafe { ops::copy_raw(data.as_ptr().add(offset), element.as_ptr(), self.element_size) };
        self.size += 1;
        Ok(())
    }

    /// Remove the last element, copying it into `out`
    pub fn pop_into(&mut self, out: &mut [u8]) -> DsResult {
        ensure!(
            out.len() == self.element_size,
            "Output length does not match element size"
        );
        if self.is_empty() {
            bail!(ResultCode::EmptyContainer, "Cannot pop from an empty buffer");
        }

        let last = self.get(self.size - 1)?;
        ops::copy(out, last);
        self.size -= 1;
        Ok(())
    }

    /// Element at `index`
    pub fn get(&self, index: Size) -> DsResult<&[u8]> {
        if index >= self.size {
            bail!(ResultCode::IndexOutOfBounds, "Buffer index out of bounds");
        }
        let start = index * self.element_size;
        Ok(&self.as_bytes()[start..start + self.element_size])
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: Size, element: &[u8]) -> DsResult {
        ensure!(
            element.len() == self.element_size,
            "Element length does not match element size"
        );
        if index >= self.size {
            bail!(ResultCode::IndexOutOfBounds, "Buffer index out of bounds");
        }
        let start = index * self.element_size;
        let element_size = self.element_size;
        ops::copy(
            &mut self.as_bytes_mut()[start..start + element_size],
            element,
        );
        Ok(())
    }

    /// Exchange the elements at `a` and `b`
    pub fn swap(&mut self, a: Size, b: Size) -> DsResult {
        if a >= self.size || b >= self.size {
            bail!(ResultCode::IndexOutOfBounds, "Buffer index out of bounds");
        }
        if a == b {
            return Ok(());
        }

        let (lo, hi) = (a.min(b), a.max(b));
        let element_size = self.element_size;
        let (head, tail) = self.as_bytes_mut().split_at_mut(hi * element_size);
        swap_bytes(
            &mut head[lo * element_size..(lo + 1) * element_size],
            &mut tail[..element_size],
        )
    }

    /// Reverse the element order in place
    pub fn reverse(&mut self) -> DsResult {
        if self.size < 2 {
            return Ok(());
        }
        let element_size = self.element_size;
        reverse_bytes(self.as_bytes_mut(), element_size)
    }

    /// Index of the first element byte-equal to `element`
    pub fn position(&self, element: &[u8]) -> DsResult<Size> {
        self.position_by(element, &|a: &[u8], b: &[u8]| {
            if a.len() == b.len() {
                ops::compare(a, b)
            } else {
                a.len().cmp(&b.len())
            }
        })
    }

    /// Index of the first element the comparator considers equal to `element`
    pub fn position_by<C>(&self, element: &[u8], comparator: &C) -> DsResult<Size>
    where
        C: Comparator<[u8]> + ?Sized,
    {
        self.as_bytes()
            .chunks_exact(self.element_size)
            .position(|candidate| comparator.compare(candidate, element) == Ordering::Equal)
            .ok_or_else(|| {
                crate::core::errors::Outcome::error(ResultCode::NotFound, "No matching element")
            })
    }

    /// Drop every element, keeping the capacity
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Shrink the block to exactly `len()` elements
    pub fn shrink_to_fit(&mut self) -> DsResult {
        let Some(data) = self.data else {
            return Ok(());
        };
        if self.size == self.capacity {
            return Ok(());
        }

        if self.size == 0 {
            // SAFETY: `data` came from `allocator` and is released once.
            unsafe { self.allocator.release(data) };
            self.data = None;
            self.capacity = 0;
            return Ok(());
        }

        // SAFETY: `data` came from `allocator` and is live.
        match unsafe { self.allocator.resize_array(data, self.size, self.element_size) } {
            Some(handle) => {
                self.data = Some(handle);
                self.capacity = self.size;
                Ok(())
            }
            None => bail!(ResultCode::MemoryAllocation, ALLOCATION_FAILED),
        }
    }
}

impl<A: RawAllocator> Drop for GenericBuffer<'_, A> {
    fn drop(&mut self) {
        if let Some(data) = self.data.take() {
            // SAFETY: the buffer owns `data` exclusively and releases it once.
            unsafe { self.allocator.release(data) };
        }
    }
}

impl<A: RawAllocator> fmt::Debug for GenericBuffer<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericBuffer")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("element_size", &self.element_size)
            .finish()
    }
}
