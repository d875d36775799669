use super::hole::Hole;

/// Context type for the sift operations.
pub(super) trait SiftCtx<Element> {
    /// Return `true` iff `x < y`.
    fn lt(&mut self, x: &Element, y: &Element) -> bool;

    /// Called when the element `e` is moved to the new position `new_index`.
    fn on_move(&mut self, e: &mut Element, new_index: usize);
}

/// Restore the heap order around `pos` after the element there was replaced,
/// by moving it up if it's less than its parent and down otherwise. Returns
/// the element's final position.
///
/// # Safety
///
/// `pos` must point to an element within `this`.
pub(super) unsafe fn sift_up_or_down<Element>(
    this: &mut [Element],
    pos: usize,
    mut ctx: impl SiftCtx<Element>,
) -> usize {
    debug_assert!(pos < this.len());
    let should_sift_up = pos > 0 && ctx.lt(&this[pos], &this[(pos - 1) / 2]);

    // Safety: `pos` points to an element within `this`.
    unsafe {
        if should_sift_up {
            sift_up(this, pos, ctx)
        } else {
            sift_down(this, pos, ctx)
        }
    }
}

// The implementations of sift_up and sift_down move an element out of the
// slice (leaving behind a hole), shift along the others and move the removed
// element back into the slice at the final location of the hole. Every
// element shifted into the hole's previous location is reported to
// `on_move` right away, so the recorded positions never lag behind by more
// than the element being carried.

/// Take an element at `pos` and move it up the heap while it's less than its
/// parent. Returns the element's final position.
///
/// # Safety
///
/// `pos` must point to an element within `this`.
pub(super) unsafe fn sift_up<Element>(
    this: &mut [Element],
    pos: usize,
    mut ctx: impl SiftCtx<Element>,
) -> usize {
    unsafe {
        // Take out the value at `pos` and create a hole.
        let mut hole = Hole::new(this, pos);

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;
            if !ctx.lt(hole.element(), hole.get(parent)) {
                break;
            }

            let prev_pos = hole.pos();
            hole.move_to(parent);

            // `[prev_pos]` is now filled with the element moved from `[parent]`
            ctx.on_move(hole.get_mut(prev_pos), prev_pos);
        }

        // Report the final position of the carried element
        let pos = hole.pos();
        ctx.on_move(hole.element_mut(), pos);

        pos
    }
}

/// Take an element at `pos` and move it down the heap while it's greater
/// than the lesser of its children. Returns the element's final position.
///
/// # Safety
///
/// `pos` must point to an element within `this`.
pub(super) unsafe fn sift_down<Element>(
    this: &mut [Element],
    pos: usize,
    mut ctx: impl SiftCtx<Element>,
) -> usize {
    unsafe {
        let mut hole = Hole::new(this, pos);
        let end = hole.len();
        let mut child = 2 * pos + 1;
        while child < end {
            let right = child + 1;
            // Compare with the lesser of the two children. The right child
            // wins only if it's strictly less.
            if right < end && ctx.lt(hole.get(right), hole.get(child)) {
                child = right;
            }

            // If we are already in order, stop.
            if !ctx.lt(hole.get(child), hole.element()) {
                break;
            }

            let prev_pos = hole.pos();
            hole.move_to(child);

            // `[prev_pos]` is now filled with the element moved from `[child]`
            ctx.on_move(hole.get_mut(prev_pos), prev_pos);

            child = 2 * hole.pos() + 1;
        }

        // Report the final position of the carried element
        let pos = hole.pos();
        ctx.on_move(hole.element_mut(), pos);

        pos
    }
}
