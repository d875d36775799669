use core::{mem::ManuallyDrop, ptr};

/// A vacant slot in a slice, whose original element is held aside while
/// other elements are shifted into the slot.
///
/// On drop, the held element is written into the slot the hole has ended up
/// at, so the slice is whole again even if a comparator panics midway.
pub(super) struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// # Safety
    ///
    /// `pos` must be within the data slice.
    #[inline]
    pub(super) unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // Safety: `pos` is inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns a reference to the element held aside.
    #[inline]
    pub(super) fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a mutable reference to the element held aside.
    #[inline]
    pub(super) fn element_mut(&mut self) -> &mut T {
        &mut self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the data slice and not equal to `pos`.
    #[inline]
    pub(super) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the data slice and not equal to `pos`.
    #[inline]
    pub(super) unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Move the element at `index` into the hole, moving the hole to `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the data slice and not equal to `pos`.
    #[inline]
    pub(super) unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            ptr::copy_nonoverlapping(ptr.add(index), ptr.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // Fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{rc::Rc, vec, vec::Vec};

    #[test]
    fn refills_on_drop() {
        let mut data = vec![10, 20, 30, 40];
        unsafe {
            let mut hole = Hole::new(&mut data, 3);
            assert_eq!(*hole.element(), 40);
            hole.move_to(1);
            assert_eq!(*hole.get(3), 20);
            hole.move_to(0);
            assert_eq!(hole.pos(), 0);
            assert_eq!(hole.len(), 4);
        }
        assert_eq!(data, [40, 10, 30, 20]);
    }

    #[test]
    fn no_double_drop() {
        // Every element must end up owned by exactly one slot
        let items: Vec<Rc<u8>> = (0..4).map(Rc::new).collect();
        let mut data = items.clone();
        unsafe {
            let mut hole = Hole::new(&mut data, 2);
            hole.move_to(0);
            let replacement = Rc::clone(hole.get(1));
            *hole.element_mut() = replacement;
        }
        drop(data);
        assert_eq!(Rc::strong_count(&items[0]), 1);
        assert_eq!(Rc::strong_count(&items[2]), 1);
    }
}
