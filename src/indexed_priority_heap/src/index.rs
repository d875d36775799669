//! Index accessors: where an element's current heap position is recorded
//!
//! Every time the heap moves an element, it reports the element's new
//! position through [`IndexAccessor::set_position`]. An element leaving the
//! heap gets `None`. The heap relies on [`IndexAccessor::position`] to find
//! an element given by the caller.
//!
//! Three strategies are provided:
//!
//!  - [`Intrusive`]: the position is stored in the element itself
//!    ([`HeapNode`]).
//!  - [`DenseIndex`]: the position is stored in a table addressed by a small
//!    integer identifier derived from the element.
//!  - [`HashIndex`] (requires the `std` feature): the position is stored in a
//!    hash map keyed by a projection of the element.
//!
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "std")]
mod hash;
#[cfg(feature = "std")]
pub use self::hash::*;

/// Maps an element to its current position in the heap.
pub trait IndexAccessor<T> {
    /// Get the recorded position of `item`, or `None` if it's not in the heap.
    fn position(&self, item: &T) -> Option<usize>;

    /// Record the position of `item`. `None` indicates `item` has left the
    /// heap.
    fn set_position(&mut self, item: &mut T, pos: Option<usize>);
}

/// An element position stored inline, using `usize::MAX` to represent the
/// absence of a position.
///
/// A heap never assigns `usize::MAX` because its length is bounded by
/// `usize::MAX`, so this doesn't collide with a legitimate position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapPos(usize);

/// The raw value of [`HeapPos::NONE`].
const HEAP_POS_NONE: usize = usize::MAX;

impl HeapPos {
    /// The value indicating the element is not in a heap.
    pub const NONE: Self = Self(HEAP_POS_NONE);

    /// Construct a `HeapPos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is `Some(usize::MAX)`.
    #[inline]
    pub const fn new(pos: Option<usize>) -> Self {
        match pos {
            Some(pos) => {
                assert!(pos != HEAP_POS_NONE, "position out of range");
                Self(pos)
            }
            None => Self::NONE,
        }
    }

    /// Get the position.
    #[inline]
    pub const fn get(self) -> Option<usize> {
        if self.0 == HEAP_POS_NONE {
            None
        } else {
            Some(self.0)
        }
    }

    /// Get a flag indicating whether the element is in a heap.
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != HEAP_POS_NONE
    }
}

impl Default for HeapPos {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl From<Option<usize>> for HeapPos {
    #[inline]
    fn from(x: Option<usize>) -> Self {
        Self::new(x)
    }
}

impl From<HeapPos> for Option<usize> {
    #[inline]
    fn from(x: HeapPos) -> Self {
        x.get()
    }
}

impl fmt::Debug for HeapPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

/// An element type carrying its own heap position. Used by [`Intrusive`].
///
/// Elements that share state (e.g., `Rc<Node>`) can keep the position in a
/// [`Cell`](core::cell::Cell)`<HeapPos>`, which lets the caller look up the
/// position through any handle to the same node.
///
/// ```
/// use indexed_priority_heap::{HeapNode, HeapPos};
///
/// struct Task {
///     deadline: u64,
///     heap_pos: HeapPos,
/// }
///
/// impl HeapNode for Task {
///     fn heap_pos(&self) -> HeapPos {
///         self.heap_pos
///     }
///     fn set_heap_pos(&mut self, pos: HeapPos) {
///         self.heap_pos = pos;
///     }
/// }
/// ```
pub trait HeapNode {
    /// Get the recorded position of this element.
    fn heap_pos(&self) -> HeapPos;

    /// Record the position of this element.
    fn set_heap_pos(&mut self, pos: HeapPos);
}

impl<T: HeapNode + ?Sized> HeapNode for &'_ mut T {
    #[inline]
    fn heap_pos(&self) -> HeapPos {
        (**self).heap_pos()
    }

    #[inline]
    fn set_heap_pos(&mut self, pos: HeapPos) {
        (**self).set_heap_pos(pos)
    }
}

/// An [`IndexAccessor`] reading and writing the position stored in the
/// element by [`HeapNode`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Intrusive;

impl<T: HeapNode> IndexAccessor<T> for Intrusive {
    #[inline]
    fn position(&self, item: &T) -> Option<usize> {
        item.heap_pos().get()
    }

    #[inline]
    fn set_position(&mut self, item: &mut T, pos: Option<usize>) {
        item.set_heap_pos(HeapPos::new(pos));
    }
}

/// An [`IndexAccessor`] storing positions in a table indexed by an identifier
/// that `F` derives from each element.
///
/// The table grows to accommodate the largest identifier seen so far, so the
/// identifiers should be small and dense (e.g., vertex numbers in a graph).
///
/// ```
/// use indexed_priority_heap::{DenseIndex, IndexedPriorityHeap};
///
/// // (vertex, distance)
/// let mut heap = IndexedPriorityHeap::with_index(
///     |x: &(usize, u32), y: &(usize, u32)| x.1.cmp(&y.1),
///     DenseIndex::new(|x: &(usize, u32)| x.0),
/// );
/// heap.push((0, 10)).unwrap();
/// heap.push((1, 20)).unwrap();
/// heap.update((1, 5)).unwrap();
/// assert_eq!(heap.pop(), Ok((1, 5)));
/// ```
pub struct DenseIndex<F> {
    slots: Vec<HeapPos>,
    id: F,
}

impl<F> DenseIndex<F> {
    /// Construct an empty `DenseIndex`.
    pub const fn new(id: F) -> Self {
        Self {
            slots: Vec::new(),
            id,
        }
    }

    /// Construct an empty `DenseIndex` with room for identifiers in
    /// `0..capacity` without reallocation.
    pub fn with_capacity(capacity: usize, id: F) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(capacity, HeapPos::NONE);
        Self { slots, id }
    }

    /// Get the recorded position of the element identified by `id`.
    #[inline]
    pub fn position_of_id(&self, id: usize) -> Option<usize> {
        self.slots.get(id).and_then(|pos| pos.get())
    }
}

impl<F> fmt::Debug for DenseIndex<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DenseIndex")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl<T, F: Fn(&T) -> usize> IndexAccessor<T> for DenseIndex<F> {
    #[inline]
    fn position(&self, item: &T) -> Option<usize> {
        self.position_of_id((self.id)(item))
    }

    fn set_position(&mut self, item: &mut T, pos: Option<usize>) {
        let id = (self.id)(item);
        if let Some(slot) = self.slots.get_mut(id) {
            *slot = HeapPos::new(pos);
        } else if let Some(pos) = pos {
            // The table only covers identifiers that were given a position
            self.slots.resize(id + 1, HeapPos::NONE);
            self.slots[id] = HeapPos::new(Some(pos));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pos_round_trip() {
        assert_eq!(HeapPos::NONE.get(), None);
        assert_eq!(HeapPos::default(), HeapPos::NONE);
        assert_eq!(HeapPos::new(Some(0)).get(), Some(0));
        assert_eq!(HeapPos::from(Some(42)).get(), Some(42));
        assert_eq!(Option::<usize>::from(HeapPos::new(None)), None);
        assert!(!HeapPos::NONE.is_some());
        assert!(HeapPos::new(Some(usize::MAX - 1)).is_some());
    }

    #[test]
    #[should_panic]
    fn heap_pos_rejects_sentinel() {
        let _ = HeapPos::new(Some(usize::MAX));
    }

    #[test]
    fn heap_pos_debug() {
        assert_eq!(std::format!("{:?}", HeapPos::NONE), "None");
        assert_eq!(std::format!("{:?}", HeapPos::new(Some(3))), "Some(3)");
    }

    struct Node {
        pos: HeapPos,
    }

    impl HeapNode for Node {
        fn heap_pos(&self) -> HeapPos {
            self.pos
        }
        fn set_heap_pos(&mut self, pos: HeapPos) {
            self.pos = pos;
        }
    }

    #[test]
    fn intrusive() {
        let mut node = Node { pos: HeapPos::NONE };
        let mut index = Intrusive;

        assert_eq!(index.position(&node), None);
        index.set_position(&mut node, Some(1));
        assert_eq!(node.pos.get(), Some(1));
        assert_eq!(index.position(&node), Some(1));

        // Through a mutable reference
        let mut node_ref = &mut node;
        index.set_position(&mut node_ref, Some(3));
        assert_eq!(index.position(&node_ref), Some(3));
        assert_eq!(node.pos.get(), Some(3));

        index.set_position(&mut node, None);
        assert_eq!(index.position(&node), None);
    }

    #[test]
    fn dense_index_grows() {
        let mut index = DenseIndex::new(|x: &usize| *x);
        assert_eq!(index.position(&5), None);

        // Clearing an unknown identifier must not grow the table
        index.set_position(&mut 7, None);
        assert_eq!(index.slots.len(), 0);

        index.set_position(&mut 5, Some(2));
        assert_eq!(index.position(&5), Some(2));
        assert_eq!(index.position(&4), None);
        assert_eq!(index.slots.len(), 6);

        index.set_position(&mut 5, None);
        assert_eq!(index.position(&5), None);
        assert_eq!(index.position_of_id(100), None);
    }

    #[test]
    fn dense_index_with_capacity() {
        let index = DenseIndex::with_capacity(4, |x: &usize| *x);
        assert_eq!(index.slots.len(), 4);
        assert!(index.slots.iter().all(|p| !p.is_some()));
    }
}
