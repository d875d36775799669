//! Three-way comparators defining heap order
use core::cmp::Ordering;

/// A three-way comparator establishing the order of a heap.
///
/// The order must be total and must not change while an element is in the
/// heap, except through [`IndexedPriorityHeap::update`] or
/// [`IndexedPriorityHeap::update_at`], which must be called right after an
/// element's ordering-relevant state is changed.
///
/// Any closure of type `Fn(&T, &T) -> Ordering` is a comparator.
///
/// [`IndexedPriorityHeap::update`]: crate::IndexedPriorityHeap::update
/// [`IndexedPriorityHeap::update_at`]: crate::IndexedPriorityHeap::update_at
pub trait Comparator<T: ?Sized> {
    /// Compare `x` with `y`. The least element is at the top of the heap.
    fn compare(&self, x: &T, y: &T) -> Ordering;

    /// Return `true` iff `x < y`.
    #[inline]
    fn lt(&self, x: &T, y: &T) -> bool {
        self.compare(x, y) == Ordering::Less
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self(x, y)
    }
}

/// Orders elements by their [`Ord`] implementation, yielding a min-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        x.cmp(y)
    }
}

/// Orders elements by the reverse of their [`Ord`] implementation, yielding a
/// max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        y.cmp(x)
    }
}

/// Orders elements by a key extracted by the wrapped function.
///
/// ```
/// use indexed_priority_heap::{ByKey, Comparator};
/// use std::cmp::Ordering;
///
/// let by_len = ByKey(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<F> {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        (self.0)(x).cmp(&(self.0)(y))
    }
}

/// Adapts a strict less-than predicate into a three-way comparator.
///
/// Two elements compare equal if neither is less than the other.
///
/// ```
/// use indexed_priority_heap::{Comparator, FromLess};
/// use std::cmp::Ordering;
///
/// let cmp = FromLess(|x: &f64, y: &f64| x < y);
/// assert_eq!(cmp.compare(&1.0, &2.0), Ordering::Less);
/// assert_eq!(cmp.compare(&2.0, &1.0), Ordering::Greater);
/// assert_eq!(cmp.compare(&1.0, &1.0), Ordering::Equal);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FromLess<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for FromLess<F> {
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        if (self.0)(x, y) {
            Ordering::Less
        } else if (self.0)(y, x) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn lt(&self, x: &T, y: &T) -> bool {
        (self.0)(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn natural_and_reverse_are_opposite(x: i32, y: i32) {
        assert_eq!(
            Comparator::<i32>::compare(&NaturalOrder, &x, &y),
            Comparator::<i32>::compare(&ReverseOrder, &x, &y).reverse(),
        );
    }

    #[quickcheck]
    fn from_less_matches_ord(x: i16, y: i16) {
        let cmp = FromLess(|a: &i16, b: &i16| a < b);
        assert_eq!(cmp.compare(&x, &y), x.cmp(&y));
        assert_eq!(cmp.lt(&x, &y), x < y);
    }

    #[test]
    fn closure_comparator() {
        let cmp = |x: &(u8, char), y: &(u8, char)| x.0.cmp(&y.0);
        assert!(cmp.lt(&(1, 'z'), &(2, 'a')));
        assert_eq!(cmp.compare(&(3, 'a'), &(3, 'b')), Ordering::Equal);
    }

    #[test]
    fn by_key() {
        let cmp = ByKey(|x: &(u8, i32)| x.1);
        assert!(cmp.lt(&(9, -4), &(0, 7)));
    }
}
