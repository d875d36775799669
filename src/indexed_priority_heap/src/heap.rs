//! Binary min-heap with a three-way comparator and position tracking
//!
//! The sift operations are based on the Rust standard library's `BinaryHeap`,
//! extended to report every element move to an [`IndexAccessor`].
use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, marker::PhantomData, mem, slice};

use crate::{
    BackingStore, Comparator, HeapConfig, IndexAccessor, Intrusive, NaturalOrder, PopError,
    PushError, RemoveError, UpdateError,
};

mod hole;
mod sift;

use self::sift::{sift_down, sift_up, sift_up_or_down, SiftCtx};

#[doc = svgbobdoc::transform!(
/// A binary min-heap that records the current position of each element,
/// supporting logarithmic-time key changes and removal of arbitrary elements.
///
/// The elements are stored in a backing store `S` representing a complete
/// binary tree. The element at position `i` has its parent at `(i - 1) / 2`
/// and its children at `2 * i + 1` and `2 * i + 2`.
///
/// <center>
/// ```svgbob
///                 ,---,
///        pos 0    | 1 |
///                 '-+-'
///           .-------+-------.
///         ,-+-,           ,-+-,
///  pos 1  | 4 |           | 2 |  pos 2
///         '-+-'           '---'
///       .---+---.
///     ,-+-,   ,-+-,
///     | 7 |   | 5 |  pos 3, 4
///     '---'   '---'
///
///     ,---+---+---+---+---,
///  S: | 1 | 4 | 2 | 7 | 5 |
///     '---+---+---+---+---'
///       0   1   2   3   4
/// ```
/// </center>
///
/// Whenever an element is placed at a position, the heap reports it to the
/// index accessor `I`. Whenever an element leaves the heap, `I` is told its
/// position is `None`. This allows the heap to locate an element given by the
/// caller in constant time. The comparator `C` defines the order; the least
/// element is at the top.
///
/// # Examples
///
/// ```
/// use indexed_priority_heap::{HeapNode, HeapPos, IndexedPriorityHeap};
/// use std::{cell::Cell, rc::Rc};
///
/// #[derive(Default)]
/// struct Node {
///     dist: Cell<u32>,
///     heap_pos: Cell<HeapPos>,
/// }
///
/// #[derive(Clone)]
/// struct NodeRef(Rc<Node>);
///
/// impl HeapNode for NodeRef {
///     fn heap_pos(&self) -> HeapPos {
///         self.0.heap_pos.get()
///     }
///     fn set_heap_pos(&mut self, pos: HeapPos) {
///         self.0.heap_pos.set(pos);
///     }
/// }
///
/// let nodes: Vec<_> = [30, 10, 20]
///     .into_iter()
///     .map(|d| NodeRef(Rc::new(Node { dist: Cell::new(d), ..Node::default() })))
///     .collect();
///
/// let mut open = IndexedPriorityHeap::with_index(
///     |x: &NodeRef, y: &NodeRef| x.0.dist.get().cmp(&y.0.dist.get()),
///     indexed_priority_heap::Intrusive,
/// );
/// for node in &nodes {
///     open.push(node.clone()).unwrap();
/// }
///
/// // Decrease the key of a queued node
/// nodes[0].0.dist.set(5);
/// open.update(nodes[0].clone()).unwrap();
///
/// assert_eq!(open.pop().unwrap().0.dist.get(), 5);
/// assert_eq!(nodes[0].0.heap_pos.get(), HeapPos::NONE);
///
/// // Remove an arbitrary node
/// open.remove(&nodes[2]).unwrap();
/// assert_eq!(open.pop().unwrap().0.dist.get(), 10);
/// assert!(open.is_empty());
/// ```
///
/// # Panic Safety
///
/// If the comparator or the index accessor panics, no memory is leaked or
/// double-freed, but the heap order and the recorded positions are
/// unspecified afterwards.
)]
pub struct IndexedPriorityHeap<T, C = NaturalOrder, I = Intrusive, S = Vec<T>> {
    store: S,
    comparator: C,
    index: I,
    /// `min(HeapConfig::max_capacity, S::limit)`
    max_capacity: usize,
    _phantom: PhantomData<T>,
}

/// The [`SiftCtx`] connecting a heap's comparator and index accessor.
struct HeapCtx<'a, C, I> {
    comparator: &'a C,
    index: &'a mut I,
}

impl<T, C: Comparator<T>, I: IndexAccessor<T>> SiftCtx<T> for HeapCtx<'_, C, I> {
    #[inline]
    fn lt(&mut self, x: &T, y: &T) -> bool {
        self.comparator.lt(x, y)
    }

    #[inline]
    fn on_move(&mut self, e: &mut T, new_index: usize) {
        self.index.set_position(e, Some(new_index));
    }
}

impl<T, C, I> IndexedPriorityHeap<T, C, I, Vec<T>> {
    /// Construct an empty, unbounded heap.
    pub fn new() -> Self
    where
        C: Default,
        I: Default,
    {
        Self::with_index(C::default(), I::default())
    }

    /// Construct an empty, unbounded heap with the specified comparator and
    /// index accessor.
    pub fn with_index(comparator: C, index: I) -> Self {
        Self::with_config(HeapConfig::DEFAULT, comparator, index)
    }

    /// Construct an empty heap with the specified capacity parameters,
    /// comparator, and index accessor.
    pub fn with_config(config: HeapConfig, comparator: C, index: I) -> Self {
        Self::from_config(config, comparator, index)
    }
}

impl<T, C, I, S: BackingStore<Element = T>> IndexedPriorityHeap<T, C, I, S> {
    /// Construct an empty heap on any backing store.
    ///
    /// The effective maximum capacity is the lesser of
    /// [`HeapConfig::max_capacity`] and the limit of the backing store.
    ///
    /// ```
    /// use arrayvec::ArrayVec;
    /// use indexed_priority_heap::{
    ///     HashIndex, HeapConfig, IndexedPriorityHeap, NaturalOrder, PushError,
    /// };
    ///
    /// type Heap = IndexedPriorityHeap<u8, NaturalOrder, HashIndex<u8, fn(&u8) -> u8>, ArrayVec<u8, 2>>;
    ///
    /// let mut heap = Heap::from_config(HeapConfig::new(), NaturalOrder, HashIndex::by_value());
    /// assert_eq!(heap.max_capacity(), 2);
    /// heap.push(3).unwrap();
    /// heap.push(1).unwrap();
    /// assert_eq!(heap.push(2), Err(PushError::CapacityExceeded));
    /// ```
    pub fn from_config(config: HeapConfig, comparator: C, index: I) -> Self {
        let store = S::with_capacity(config.reservation());
        let max_capacity = config.max_capacity().min(store.limit());
        Self {
            store,
            comparator,
            index,
            max_capacity,
            _phantom: PhantomData,
        }
    }

    /// Get the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Get a flag indicating whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get a flag indicating whether [`Self::push`] would fail with
    /// [`PushError::CapacityExceeded`].
    #[inline]
    pub fn is_full(&self) -> bool {
        self.store.len() >= self.max_capacity
    }

    /// Get the maximum number of elements the heap can hold.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Get the number of elements the backing store can hold without
    /// reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Get the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Get the index accessor.
    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Get the least element without removing it.
    #[inline]
    pub fn peek(&self) -> Result<&T, PopError> {
        self.store.first().ok_or(PopError::Underflow)
    }

    /// Get the element at the specified position.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.store.get(pos)
    }

    /// Get the elements in the order of their positions (not the heap order).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.store
    }

    /// Iterate over the elements in the order of their positions (not the heap
    /// order).
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.store.iter()
    }

    /// Apply `f` to every element in the order of their positions (not the
    /// heap order).
    ///
    /// Changing the ordering-relevant state of an element here does not
    /// restore the heap order. Call [`Self::update`] or [`Self::update_at`]
    /// for every such element afterwards. `f` must not change the positions
    /// recorded in the elements.
    pub fn for_each(&mut self, f: impl FnMut(&mut T)) {
        self.store.iter_mut().for_each(f);
    }

    fn parts(&mut self) -> (&mut [T], HeapCtx<'_, C, I>) {
        (
            &mut *self.store,
            HeapCtx {
                comparator: &self.comparator,
                index: &mut self.index,
            },
        )
    }
}

impl<T, C, I, S> IndexedPriorityHeap<T, C, I, S>
where
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
    /// Get the recorded position of `item`.
    #[inline]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.index.position(item)
    }

    /// Get a flag indicating whether `item` is in the heap, according to its
    /// recorded position.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.index.position(item).is_some()
    }

    /// Remove all elements, resetting their recorded positions.
    pub fn clear(&mut self) {
        for item in self.store.iter_mut() {
            self.index.set_position(item, None);
        }
        self.store.clear();
    }
}

impl<T, C, I, S> IndexedPriorityHeap<T, C, I, S>
where
    C: Comparator<T>,
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
    /// Push an element onto the heap and return its position.
    ///
    /// The element's recorded position must be `None`. On failure, `item` is
    /// dropped and the heap is left unchanged.
    pub fn push(&mut self, item: T) -> Result<usize, PushError> {
        if self.index.position(&item).is_some() {
            log::debug!("push: the element is already in the heap");
            return Err(PushError::AlreadyQueued);
        }

        let i = self.store.len();
        if i >= self.max_capacity {
            log::debug!("push: the heap is full ({} elements)", i);
            return Err(PushError::CapacityExceeded);
        }

        self.store.push(item);

        let (slice, ctx) = self.parts();
        debug_assert!(i < slice.len());

        // Safety: `i` points to an element within `slice`.
        let pos = unsafe { sift_up(slice, i, ctx) };
        log::trace!("push: {} → {}", i, pos);

        Ok(pos)
    }

    /// Remove the least element from the heap and return it.
    pub fn pop(&mut self) -> Result<T, PopError> {
        let Some(mut item) = self.store.pop() else {
            log::debug!("pop: the heap is empty");
            return Err(PopError::Underflow);
        };

        let (slice, ctx) = self.parts();
        if !slice.is_empty() {
            // Move the last element to the top
            mem::swap(&mut slice[0], &mut item);

            // Safety: `slice` is not empty.
            let pos = unsafe { sift_down(slice, 0, ctx) };
            log::trace!("pop: {} → {}", slice.len(), pos);
        }

        debug_assert_eq!(self.index.position(&item), Some(0));
        self.index.set_position(&mut item, None);

        Ok(item)
    }

    /// Replace the queued element identified by `item` (as determined by the
    /// index accessor) with `item`, restore the heap order, and return the
    /// replaced element.
    ///
    /// This is how a key change is reported to the heap: the caller passes
    /// the element with its new priority. For elements sharing their state
    /// (e.g., `Rc<Node>` handles), the passed element and the replaced one
    /// are handles of the same node.
    ///
    /// The replaced element's recorded position is reset to `None` before the
    /// new element's position is recorded. Fails with
    /// [`UpdateError::NotQueued`] if `item` is not in the heap, in which case
    /// `item` is dropped.
    pub fn update(&mut self, item: T) -> Result<T, UpdateError> {
        let Some(pos) = self.queued_position(&item) else {
            log::debug!("update: the element is not in the heap");
            return Err(UpdateError::NotQueued);
        };

        let (old, _) = self.replace_at(pos, item);
        Ok(old)
    }

    /// Mutate the element at the specified position through `f`, restore the
    /// heap order, and return the element's new position.
    ///
    /// If `f` panics, the heap order is unspecified afterwards.
    pub fn update_at(&mut self, pos: usize, f: impl FnOnce(&mut T)) -> Result<usize, UpdateError> {
        let Some(item) = self.store.get_mut(pos) else {
            log::debug!("update_at: position {} is out of range", pos);
            return Err(UpdateError::NotQueued);
        };
        f(item);

        let (slice, ctx) = self.parts();
        // Safety: `pos` points to an element within `slice`.
        let new_pos = unsafe { sift_up_or_down(slice, pos, ctx) };
        log::trace!("update_at: {} → {}", pos, new_pos);

        Ok(new_pos)
    }

    /// [Push](Self::push) `item` if it's not in the heap; otherwise,
    /// [update](Self::update) the queued element with `item` and drop the
    /// replaced element. Returns the element's position.
    pub fn insert_or_update(&mut self, item: T) -> Result<usize, PushError> {
        if let Some(pos) = self.queued_position(&item) {
            let (_, new_pos) = self.replace_at(pos, item);
            Ok(new_pos)
        } else {
            self.push(item)
        }
    }

    /// Remove the queued element identified by `item` (as determined by the
    /// index accessor) and return it.
    pub fn remove(&mut self, item: &T) -> Result<T, RemoveError> {
        let Some(pos) = self.queued_position(item) else {
            log::debug!("remove: the element is not in the heap");
            return Err(RemoveError::NotQueued);
        };
        self.remove_at(pos)
    }

    /// Remove the element at the specified position and return it.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, RemoveError> {
        if pos >= self.store.len() {
            log::debug!("remove_at: position {} is out of range", pos);
            return Err(RemoveError::NotQueued);
        }

        let Some(mut item) = self.store.pop() else {
            return Err(RemoveError::NotQueued);
        };

        let (slice, ctx) = self.parts();
        if pos < slice.len() {
            // Swap the last item with the item at `pos`
            mem::swap(&mut slice[pos], &mut item);

            // Safety: `pos` points to an element within `slice`.
            let new_pos = unsafe { sift_up_or_down(slice, pos, ctx) };
            log::trace!("remove_at: {} → {}", slice.len(), new_pos);
        }

        self.index.set_position(&mut item, None);

        Ok(item)
    }

    /// Return an iterator that removes the elements in the heap order.
    ///
    /// The elements not consumed by the iterator are removed when the
    /// iterator is dropped.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C, I, S> {
        DrainSorted { heap: self }
    }

    /// Remove all elements and return them in the heap order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.drain_sorted());
        out
    }

    /// Get the recorded position of `item` if it refers to a queued element.
    fn queued_position(&self, item: &T) -> Option<usize> {
        let pos = self.index.position(item)?;
        (pos < self.store.len()).then_some(pos)
    }

    /// Replace the element at `pos` with `item`, restore the heap order, and
    /// return the replaced element and the new element's position.
    fn replace_at(&mut self, pos: usize, item: T) -> (T, usize) {
        let mut old = mem::replace(&mut self.store[pos], item);
        self.index.set_position(&mut old, None);

        let (slice, ctx) = self.parts();
        // Safety: `pos` points to an element within `slice`.
        let new_pos = unsafe { sift_up_or_down(slice, pos, ctx) };
        log::trace!("update: {} → {}", pos, new_pos);

        (old, new_pos)
    }
}

impl<T, C: Default, I: Default, S: BackingStore<Element = T>> Default
    for IndexedPriorityHeap<T, C, I, S>
{
    fn default() -> Self {
        Self::from_config(HeapConfig::DEFAULT, C::default(), I::default())
    }
}

impl<T: fmt::Debug, C, I, S: BackingStore<Element = T>> fmt::Debug
    for IndexedPriorityHeap<T, C, I, S>
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("IndexedPriorityHeap")
            .field("elements", &self.as_slice())
            .field("max_capacity", &self.max_capacity)
            .finish_non_exhaustive()
    }
}

impl<'a, T, C, I, S: BackingStore<Element = T>> IntoIterator
    for &'a IndexedPriorityHeap<T, C, I, S>
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator removing the elements of an [`IndexedPriorityHeap`] in the heap
/// order. Created by [`IndexedPriorityHeap::drain_sorted`].
pub struct DrainSorted<'a, T, C, I, S>
where
    C: Comparator<T>,
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
    heap: &'a mut IndexedPriorityHeap<T, C, I, S>,
}

impl<T, C, I, S> Iterator for DrainSorted<'_, T, C, I, S>
where
    C: Comparator<T>,
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C, I, S> ExactSizeIterator for DrainSorted<'_, T, C, I, S>
where
    C: Comparator<T>,
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
}

impl<T, C, I, S> FusedIterator for DrainSorted<'_, T, C, I, S>
where
    C: Comparator<T>,
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
}

impl<T, C, I, S> Drop for DrainSorted<'_, T, C, I, S>
where
    C: Comparator<T>,
    I: IndexAccessor<T>,
    S: BackingStore<Element = T>,
{
    fn drop(&mut self) {
        self.heap.clear();
    }
}
