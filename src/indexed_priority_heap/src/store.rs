//! Backing stores of a heap
use alloc::vec::Vec;
use arrayvec::ArrayVec;
use core::ops;

/// A contiguous, growable sequence usable as the backing store of an
/// [`IndexedPriorityHeap`].
///
/// [`IndexedPriorityHeap`]: crate::IndexedPriorityHeap
pub trait BackingStore: ops::Deref<Target = [<Self as BackingStore>::Element]> + ops::DerefMut {
    type Element;

    /// Construct an empty store with room for at least `capacity` elements if
    /// the store supports reservation.
    fn with_capacity(capacity: usize) -> Self;

    /// The number of elements the store can ever hold.
    fn limit(&self) -> usize;

    /// The number of elements the store can hold without reallocation.
    fn capacity(&self) -> usize;

    /// Append an element. The caller must ensure `self.len() < self.limit()`.
    fn push(&mut self, x: Self::Element);

    fn pop(&mut self) -> Option<Self::Element>;

    fn clear(&mut self);
}

impl<T> BackingStore for Vec<T> {
    type Element = T;
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }
    fn limit(&self) -> usize {
        usize::MAX
    }
    fn capacity(&self) -> usize {
        self.capacity()
    }
    fn push(&mut self, x: Self::Element) {
        self.push(x)
    }
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    fn clear(&mut self) {
        self.clear()
    }
}

impl<T, const N: usize> BackingStore for ArrayVec<T, N> {
    type Element = T;
    fn with_capacity(_: usize) -> Self {
        ArrayVec::new()
    }
    fn limit(&self) -> usize {
        N
    }
    fn capacity(&self) -> usize {
        N
    }
    fn push(&mut self, x: Self::Element) {
        self.push(x)
    }
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    fn clear(&mut self) {
        self.clear()
    }
}
