use core::{fmt, hash::Hash};
use std::collections::HashMap;

use super::IndexAccessor;

/// An [`IndexAccessor`] storing positions in a hash map keyed by a projection
/// `F` of each element.
///
/// The elements don't have to reserve storage for their positions. The
/// identity of an element is established by the equality of keys. An element
/// given to [`IndexedPriorityHeap::update`] replaces the queued element with
/// the same key.
///
/// [`IndexedPriorityHeap::update`]: crate::IndexedPriorityHeap::update
///
/// ```
/// use indexed_priority_heap::{ByKey, HashIndex, IndexedPriorityHeap};
///
/// #[derive(Debug, PartialEq)]
/// struct Job {
///     name: &'static str,
///     cost: u32,
/// }
///
/// let mut heap = IndexedPriorityHeap::with_index(
///     ByKey(|job: &Job| job.cost),
///     HashIndex::new(|job: &Job| job.name),
/// );
/// heap.push(Job { name: "build", cost: 30 }).unwrap();
/// heap.push(Job { name: "test", cost: 20 }).unwrap();
/// assert!(heap.contains(&Job { name: "build", cost: 0 }));
///
/// let old = heap.update(Job { name: "build", cost: 10 }).unwrap();
/// assert_eq!(old.cost, 30);
/// assert_eq!(heap.pop().unwrap().name, "build");
/// ```
pub struct HashIndex<K, F> {
    map: HashMap<K, usize>,
    key: F,
}

impl<K, F> HashIndex<K, F> {
    /// Construct an empty `HashIndex`.
    pub fn new(key: F) -> Self {
        Self {
            map: HashMap::new(),
            key,
        }
    }

    /// Construct an empty `HashIndex` with room for at least `capacity`
    /// entries without reallocation.
    pub fn with_capacity(capacity: usize, key: F) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            key,
        }
    }

    /// Get the number of elements that currently have a position.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Get a flag indicating whether no element currently has a position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T: Clone + Hash + Eq> HashIndex<T, fn(&T) -> T> {
    /// Construct an empty `HashIndex` keyed by whole elements.
    pub fn by_value() -> Self {
        Self::new(T::clone)
    }
}

impl<K: fmt::Debug, F> fmt::Debug for HashIndex<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashIndex")
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}

impl<T, K: Hash + Eq, F: Fn(&T) -> K> IndexAccessor<T> for HashIndex<K, F> {
    #[inline]
    fn position(&self, item: &T) -> Option<usize> {
        self.map.get(&(self.key)(item)).copied()
    }

    fn set_position(&mut self, item: &mut T, pos: Option<usize>) {
        let key = (self.key)(item);
        if let Some(pos) = pos {
            self.map.insert(key, pos);
        } else {
            self.map.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_projection() {
        let mut index = HashIndex::new(|x: &(char, i32)| x.0);
        assert!(index.is_empty());

        index.set_position(&mut ('a', 1), Some(4));
        assert_eq!(index.position(&('a', -100)), Some(4));
        assert_eq!(index.position(&('b', 1)), None);
        assert_eq!(index.len(), 1);

        index.set_position(&mut ('a', 7), None);
        assert_eq!(index.position(&('a', 1)), None);
        assert!(index.is_empty());

        // Clearing an unknown key is a no-op
        index.set_position(&mut ('z', 0), None);
        assert!(index.is_empty());
    }

    #[test]
    fn by_value() {
        let mut index = HashIndex::<u32, fn(&u32) -> u32>::by_value();
        index.set_position(&mut 10, Some(0));
        index.set_position(&mut 20, Some(1));
        assert_eq!(index.position(&10), Some(0));
        assert_eq!(index.position(&20), Some(1));
        assert_eq!(index.position(&30), None);
    }
}
