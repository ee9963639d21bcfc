use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::error::ByteVecError;
use crate::iter::ByteVecIter;

/// Multiplier applied to the requested element count whenever the capacity grows.
pub const GROWTH_FACTOR: f64 = 1.5;

/// Scales `count` by [`GROWTH_FACTOR`], truncating to a whole number of elements.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn grown(count: usize) -> usize {
    (count as f64 * GROWTH_FACTOR) as usize
}

/// A growable array of fixed-width, type-erased elements.
///
/// The backing buffer always holds exactly `capacity * element_size` bytes and
/// every slot past the logical length is zero-filled.
pub struct ByteVec {
    elements: Vec<u8>,
    capacity: usize,
    size: usize,
    element_size: usize,
}

impl ByteVec {
    /// Creates a vector for elements of `element_size` bytes.
    ///
    /// When `initial_count` is non-zero, room for `initial_count * 1.5`
    /// (truncated) zeroed elements is reserved up front.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::ZeroElementSize` if `element_size` is 0
    /// - `ByteVecError::CapacityOverflow` / `ByteVecError::AllocationFailed` if
    ///   the initial buffer cannot be allocated
    pub fn new(element_size: usize, initial_count: usize) -> Result<Self, ByteVecError> {
        if element_size == 0 {
            return Err(ByteVecError::ZeroElementSize);
        }

        let mut vec = Self::unallocated(element_size);
        if initial_count > 0 {
            vec.set_capacity(grown(initial_count))?;
        }
        Ok(vec)
    }

    fn unallocated(element_size: usize) -> Self {
        Self {
            elements: Vec::new(),
            capacity: 0,
            size: 0,
            element_size,
        }
    }

    fn byte_len(&self, count: usize) -> Result<usize, ByteVecError> {
        count
            .checked_mul(self.element_size)
            .ok_or(ByteVecError::CapacityOverflow {
                elements: count,
                element_size: self.element_size,
            })
    }

    /// Reallocates the buffer to hold exactly `new_capacity` elements.
    ///
    /// Newly exposed slots are zeroed. On error nothing is changed.
    fn set_capacity(&mut self, new_capacity: usize) -> Result<(), ByteVecError> {
        let bytes = self.byte_len(new_capacity)?;
        if bytes > self.elements.len() {
            self.elements
                .try_reserve_exact(bytes - self.elements.len())
                .map_err(|_| ByteVecError::AllocationFailed { bytes })?;
            self.elements.resize(bytes, 0);
        } else {
            self.elements.truncate(bytes);
            self.elements.shrink_to_fit();
        }
        self.capacity = new_capacity;
        Ok(())
    }

    fn grow_for_one_more(&mut self) -> Result<(), ByteVecError> {
        if self.size < self.capacity {
            return Ok(());
        }
        let target = self
            .capacity
            .checked_add(1)
            .ok_or(ByteVecError::CapacityOverflow {
                elements: self.capacity,
                element_size: self.element_size,
            })?;
        self.set_capacity(grown(target))
    }

    fn check_width(&self, element: &[u8]) -> Result<(), ByteVecError> {
        if element.len() == self.element_size {
            Ok(())
        } else {
            Err(ByteVecError::ElementSizeMismatch {
                expected: self.element_size,
                actual: element.len(),
            })
        }
    }

    // Callers guarantee `index < capacity`, so the range is inside `elements`.
    fn slot(&self, index: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of element slots currently allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&[u8]> {
        if index >= self.size {
            return None;
        }
        self.elements.get(self.slot(index))
    }

    /// Mutable counterpart of [`ByteVec::at`]. The slice length is fixed, so
    /// the element width cannot be changed through it.
    #[must_use]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.size {
            return None;
        }
        let range = self.slot(index);
        self.elements.get_mut(range)
    }

    /// Tries to get the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_at(&self, index: usize) -> Result<&[u8], ByteVecError> {
        self.at(index).ok_or(ByteVecError::IndexOutOfBounds {
            index,
            length: self.size,
        })
    }

    #[must_use]
    pub fn front(&self) -> Option<&[u8]> {
        self.at(0)
    }

    #[must_use]
    pub fn back(&self) -> Option<&[u8]> {
        self.size.checked_sub(1).and_then(|last| self.at(last))
    }

    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn try_front(&self) -> Result<&[u8], ByteVecError> {
        self.front().ok_or(ByteVecError::EmptyVector)
    }

    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    pub fn try_back(&self) -> Result<&[u8], ByteVecError> {
        self.back().ok_or(ByteVecError::EmptyVector)
    }

    /// Bytes of the logical elements, `len() * element_size()` long.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // size <= capacity
    pub fn data(&self) -> &[u8] {
        &self.elements[..self.size * self.element_size]
    }

    /// Copies as many whole elements as fit into `out`, front first.
    ///
    /// Returns the number of elements copied.
    #[allow(clippy::indexing_slicing)]
    pub fn to_array(&self, out: &mut [u8]) -> usize {
        let count = self.size.min(out.len() / self.element_size);
        let bytes = count * self.element_size;
        out[..bytes].copy_from_slice(&self.elements[..bytes]);
        count
    }

    /// Ensures room for at least `size` elements.
    ///
    /// When `size` exceeds the current capacity, the capacity becomes
    /// `size * 1.5`. The capacity never shrinks here.
    ///
    /// # Errors
    ///
    /// `ByteVecError::CapacityOverflow` or `ByteVecError::AllocationFailed`;
    /// the vector is left unchanged.
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteVecError> {
        if size == 0 || size <= self.capacity {
            return Ok(());
        }
        self.set_capacity(grown(size))
    }

    /// Changes the logical length to `size`.
    ///
    /// New slots receive a copy of `fill`, or zeroes when `fill` is `None`.
    /// Shrinking erases the trailing elements.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::ElementSizeMismatch` if `fill` has the wrong width
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn resize(&mut self, size: usize, fill: Option<&[u8]>) -> Result<(), ByteVecError> {
        if let Some(fill) = fill {
            self.check_width(fill)?;
        }

        if size > self.size {
            self.reserve(size)?;
            for index in self.size..size {
                let range = self.slot(index);
                match fill {
                    Some(fill) => self.elements[range].copy_from_slice(fill),
                    None => self.elements[range].fill(0),
                }
            }
        } else {
            let es = self.element_size;
            self.elements[size * es..self.size * es].fill(0);
        }
        self.size = size;
        Ok(())
    }

    /// Releases every slot beyond the logical length.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity > self.size {
            self.elements.truncate(self.size * self.element_size);
            self.elements.shrink_to_fit();
            self.capacity = self.size;
        }
    }

    /// Appends a copy of `element`, growing the buffer when it is full.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::ElementSizeMismatch` if `element.len() != element_size()`
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn push_back(&mut self, element: &[u8]) -> Result<(), ByteVecError> {
        self.check_width(element)?;
        self.grow_for_one_more()?;

        let range = self.slot(self.size);
        self.elements[range].copy_from_slice(element);
        self.size += 1;
        Ok(())
    }

    /// Removes the last element. Read it with [`ByteVec::back`] first if it is needed.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::EmptyVector` if the vector is empty.
    #[allow(clippy::indexing_slicing)]
    pub fn pop_back(&mut self) -> Result<(), ByteVecError> {
        if self.size == 0 {
            return Err(ByteVecError::EmptyVector);
        }
        self.size -= 1;
        let range = self.slot(self.size);
        self.elements[range].fill(0);
        Ok(())
    }

    /// Inserts a copy of `element` before the element at `index`.
    ///
    /// `index` must address an existing element; use [`ByteVec::push_back`]
    /// to append.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::ElementSizeMismatch` if `element` has the wrong width
    /// - `ByteVecError::IndexOutOfBounds` if `index >= len()`
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn insert(&mut self, element: &[u8], index: usize) -> Result<(), ByteVecError> {
        self.check_width(element)?;
        if index >= self.size {
            return Err(ByteVecError::IndexOutOfBounds {
                index,
                length: self.size,
            });
        }
        self.grow_for_one_more()?;

        let es = self.element_size;
        self.elements
            .copy_within(index * es..self.size * es, (index + 1) * es);
        let range = self.slot(index);
        self.elements[range].copy_from_slice(element);
        self.size += 1;
        Ok(())
    }

    /// Removes the elements in the inclusive range `[start, end]`.
    ///
    /// Later elements move left to close the gap; the length drops by
    /// `end - start + 1`.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::InvalidRange` if `start > end`
    /// - `ByteVecError::IndexOutOfBounds` if `end >= len()`
    #[allow(clippy::indexing_slicing)]
    pub fn erase(&mut self, start: usize, end: usize) -> Result<(), ByteVecError> {
        if start > end {
            return Err(ByteVecError::InvalidRange { start, end });
        }
        if end >= self.size {
            return Err(ByteVecError::IndexOutOfBounds {
                index: end,
                length: self.size,
            });
        }

        let es = self.element_size;
        let new_size = self.size - (end - start + 1);
        self.elements
            .copy_within((end + 1) * es..self.size * es, start * es);
        self.elements[new_size * es..self.size * es].fill(0);
        self.size = new_size;
        Ok(())
    }

    /// Replaces the content with `count` copies of `element`.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::ElementSizeMismatch` if `element` has the wrong width
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn assign(&mut self, element: &[u8], count: usize) -> Result<(), ByteVecError> {
        self.check_width(element)?;
        self.reserve(count)?;

        let es = self.element_size;
        for index in 0..count {
            let range = self.slot(index);
            self.elements[range].copy_from_slice(element);
        }
        if self.size > count {
            self.elements[count * es..self.size * es].fill(0);
        }
        self.size = count;
        Ok(())
    }

    /// Removes all elements, keeping the allocation.
    #[allow(clippy::indexing_slicing)]
    pub fn clear(&mut self) {
        let bytes = self.size * self.element_size;
        self.elements[..bytes].fill(0);
        self.size = 0;
    }

    /// Replaces the content with a copy of `src`'s elements.
    ///
    /// # Errors
    ///
    /// - `ByteVecError::ElementSizeMismatch` if the element widths differ
    /// - allocation errors from growing; `self` is left unchanged
    #[allow(clippy::indexing_slicing)]
    pub fn copy_from(&mut self, src: &ByteVec) -> Result<(), ByteVecError> {
        if src.element_size != self.element_size {
            return Err(ByteVecError::ElementSizeMismatch {
                expected: self.element_size,
                actual: src.element_size,
            });
        }
        self.reserve(src.size)?;

        self.clear();
        let bytes = src.size * src.element_size;
        self.elements[..bytes].copy_from_slice(src.data());
        self.size = src.size;
        Ok(())
    }

    /// Deep copy that reports allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns `ByteVecError::AllocationFailed` if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ByteVecError> {
        let mut copy = Self::unallocated(self.element_size);
        copy.set_capacity(self.capacity)?;
        copy.copy_from(self)?;
        Ok(copy)
    }

    /// Takes over `src`'s buffer. `src` is left empty, with no allocation.
    pub fn move_from(&mut self, src: &mut ByteVec) {
        let empty = Self::unallocated(src.element_size);
        *self = core::mem::replace(src, empty);
    }

    /// Exchanges the whole content of two vectors, element widths included.
    pub fn swap_with(&mut self, other: &mut ByteVec) {
        core::mem::swap(self, other);
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> ByteVecIter<'_> {
        self.into_iter()
    }
}

impl Clone for ByteVec {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            capacity: self.capacity,
            size: self.size,
            element_size: self.element_size,
        }
    }
}

impl PartialEq for ByteVec {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.data() == other.data()
    }
}

impl Eq for ByteVec {}

impl fmt::Debug for ByteVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteVec")
            .field("element_size", &self.element_size)
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("data", &self.data())
            .finish()
    }
}
