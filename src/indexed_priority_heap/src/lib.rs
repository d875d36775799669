//! A binary min-heap that tracks the position of every element, supporting
//! decrease-key, increase-key, and removal of arbitrary elements in
//! logarithmic time.
//!
//! This is the "open list" of best-first search algorithms, event simulators,
//! and schedulers that need to change the priority of an element after it's
//! queued, without scanning the heap or leaving stale entries behind.
//!
//! # Overview
//!
//! [`IndexedPriorityHeap`]`<T, C, I, S>` is parameterized by:
//!
//!  - `C`: a [`Comparator`] defining the order. The least element is at the
//!    top. [`NaturalOrder`], [`ReverseOrder`], [`ByKey`], [`FromLess`], and
//!    closures `Fn(&T, &T) -> Ordering` are provided.
//!
//!  - `I`: an [`IndexAccessor`] recording the position of each element.
//!    [`Intrusive`] stores it in the element ([`HeapNode`]), [`DenseIndex`]
//!    in a table indexed by an element identifier, and [`HashIndex`] in a
//!    hash map keyed by a projection of the element.
//!
//!  - `S`: a [`BackingStore`]. `Vec<T>` grows on demand; `ArrayVec<T, N>`
//!    has a fixed capacity.
//!
//! The capacity parameters are specified by [`HeapConfig`].
//!
//! # Invariants
//!
//! After each operation returns:
//!
//!  - No element is less than its parent.
//!  - The recorded position of every element in the heap is the element's
//!    actual position. The recorded position of every element that has left
//!    the heap is `None`.
//!  - The heap holds no more than its maximum capacity.
//!
//! Failed operations leave the heap unchanged and report an error
//! ([`PushError`], [`PopError`], [`UpdateError`], [`RemoveError`]).
//!
//! # Example
//!
//! ```
//! use indexed_priority_heap::{
//!     ByKey, HeapConfig, HeapNode, HeapPos, IndexedPriorityHeap, Intrusive, PushError,
//! };
//!
//! #[derive(Debug)]
//! struct Event {
//!     time: u64,
//!     pos: HeapPos,
//! }
//!
//! impl HeapNode for Event {
//!     fn heap_pos(&self) -> HeapPos {
//!         self.pos
//!     }
//!     fn set_heap_pos(&mut self, pos: HeapPos) {
//!         self.pos = pos;
//!     }
//! }
//!
//! let mut events = IndexedPriorityHeap::with_config(
//!     HeapConfig::new().with_max_capacity(3),
//!     ByKey(|e: &Event| e.time),
//!     Intrusive,
//! );
//!
//! for time in [30, 10, 20] {
//!     events.push(Event { time, pos: HeapPos::NONE }).unwrap();
//! }
//! assert_eq!(
//!     events.push(Event { time: 40, pos: HeapPos::NONE }),
//!     Err(PushError::CapacityExceeded),
//! );
//!
//! // Postpone the earliest event
//! let pos = events.update_at(0, |e| e.time = 25).unwrap();
//! assert_eq!(events.get(pos).unwrap().time, 25);
//!
//! let times: Vec<u64> = events.drain_sorted().map(|e| e.time).collect();
//! assert_eq!(times, [20, 25, 30]);
//! ```
//!
//! # Features
//!
//!  - `std` (default): enables [`HashIndex`] and the `std::error::Error`
//!    implementations.
//!  - `doc`: renders the diagrams in the documentation.
#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod compare;
mod config;
mod error;
mod heap;
mod index;
mod store;

pub use self::{compare::*, config::*, error::*, heap::*, index::*, store::*};
