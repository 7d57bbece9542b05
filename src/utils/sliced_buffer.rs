/*!
# CSR-based Sliced Buffers

This module provides a **Compressed Sparse Row (CSR)**-like data structure for
storing variable-length slices efficiently.

The key idea:

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<NumEdges>` stores slice boundaries, where
  slice `i` is `buffer[offsets[i]..offsets[i+1]]`.

### Invariants
All constructions verify the following invariants:

1. `offsets.len() >= 2`
2. `offsets` is non-decreasing
3. `offsets` entries are within `buffer` bounds

All accesses are bounds-checked.
*/

use std::ops::{Index, IndexMut, Range};

use crate::{edge::NumEdges, node::*};

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice
#[derive(Debug, Clone)]
pub struct SlicedBuffer<T> {
    buffer: Vec<T>,
    offsets: Vec<NumEdges>,
}

impl<T> SlicedBuffer<T> {
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets.len() < 2`
    /// - `offsets` is not sorted
    /// - `offsets` exceed `buffer` length
    /// - there are more than `Node::MAX` slices
    pub fn new(buffer: Vec<T>, offsets: Vec<NumEdges>) -> Self {
        assert!(offsets.len() > 1);
        assert!(offsets.len() - 1 <= Node::MAX as usize);
        assert!(offsets.is_sorted());
        assert!(*offsets.last().unwrap() as usize <= buffer.len());

        Self { buffer, offsets }
    }

    /// Returns the number of slices as `usize`.
    ///
    /// # Examples
    /// ```
    /// use tricount::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
    /// assert_eq!(sb.len(), 3);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of slices as [`NumNodes`].
    #[inline(always)]
    pub fn number_of_slices(&self) -> NumNodes {
        self.len() as NumNodes
    }

    /// Returns the total number of entries in the buffer.
    ///
    /// # Examples
    /// ```
    /// use tricount::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
    /// assert_eq!(sb.number_of_entries(), 7);
    /// ```
    #[inline(always)]
    pub fn number_of_entries(&self) -> NumEdges {
        self.buffer.len() as NumEdges
    }

    /// Returns the length of slice `u`.
    ///
    /// # Examples
    /// ```
    /// use tricount::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
    /// assert_eq!(sb.size_of(2), 3);
    /// ```
    #[inline(always)]
    pub fn size_of(&self, u: Node) -> NumEdges {
        self.offsets[u as usize + 1] - self.offsets[u as usize]
    }

    /// Returns the buffer range covered by slice `u`.
    #[inline(always)]
    pub fn range_of(&self, u: Node) -> Range<usize> {
        self.offsets[u as usize] as usize..self.offsets[u as usize + 1] as usize
    }

    /// Returns a reference to the complete buffer.
    #[inline(always)]
    pub fn raw_buffer_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns a reference to the offsets array.
    ///
    /// # Examples
    /// ```
    /// use tricount::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
    /// assert!(sb.raw_offset_slice().is_sorted());
    /// ```
    #[inline(always)]
    pub fn raw_offset_slice(&self) -> &[NumEdges] {
        &self.offsets
    }

    /// Swaps in a new flat buffer under the unchanged offsets and returns the
    /// old one. Used when a pass rewrites every slice without moving the
    /// slice boundaries.
    ///
    /// # Panics
    /// Panics if the new buffer differs in length from the old one.
    pub fn replace_buffer(&mut self, buffer: Vec<T>) -> Vec<T> {
        assert_eq!(buffer.len(), self.buffer.len());
        std::mem::replace(&mut self.buffer, buffer)
    }
}

impl<T> Index<Node> for SlicedBuffer<T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, u: Node) -> &Self::Output {
        &self.buffer[self.range_of(u)]
    }
}

impl<T> IndexMut<Node> for SlicedBuffer<T> {
    #[inline(always)]
    fn index_mut(&mut self, u: Node) -> &mut Self::Output {
        let range = self.range_of(u);
        &mut self.buffer[range]
    }
}
