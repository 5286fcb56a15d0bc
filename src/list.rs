//! Insertion-order list threaded through the slot array.
//!
//! The list is circular through a head that lives directly in [`OrderList`];
//! no phantom element is allocated for it. Every link field holds a slot
//! index, [`HEAD`], or [`UNLINKED`]. The list itself stores nothing but the
//! head's two links, so it operates on the slot array passed into each
//! method, the same way a list over external storage does.

use crate::linked::{Linked, HEAD, UNLINKED};

/// Head links of the circular insertion-order list.
///
/// `head_next` is the first element's slot, `head_prev` the last's. An
/// empty list has both set to [`HEAD`], which makes the empty and the
/// non-empty cases uniform: the head behaves like one more node.
#[derive(Debug, Clone)]
pub(crate) struct OrderList {
    head_prev: u32,
    head_next: u32,
}

impl OrderList {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            head_prev: HEAD,
            head_next: HEAD,
        }
    }

    /// First element's slot, or [`HEAD`] if the list is empty.
    #[inline]
    pub(crate) fn first(&self) -> u32 {
        self.head_next
    }

    /// Last element's slot, or [`HEAD`] if the list is empty.
    #[inline]
    pub(crate) fn last(&self) -> u32 {
        self.head_prev
    }

    /// Splices the element at `slot` in as the new last element.
    ///
    /// The element must already be stored in `slots` and must be unlinked.
    pub(crate) fn push_back<T: Linked>(&mut self, slots: &mut [Option<T>], slot: u32) {
        let tail = self.head_prev;
        {
            let e = slots[slot as usize]
                .as_mut()
                .expect("slot being linked is occupied");
            debug_assert!(!e.is_linked(), "element is already linked");
            e.set_prev(tail);
            e.set_next(HEAD);
        }
        if tail == HEAD {
            self.head_next = slot;
        } else {
            slots[tail as usize]
                .as_mut()
                .expect("list tail slot is occupied")
                .set_next(slot);
        }
        self.head_prev = slot;
    }

    /// Unlinks an element that has already been taken out of its slot,
    /// patching its neighbours and resetting its links to [`UNLINKED`].
    pub(crate) fn unlink_detached<T: Linked>(&mut self, slots: &mut [Option<T>], e: &mut T) {
        let prev = e.prev();
        let next = e.next();
        debug_assert!(prev != UNLINKED && next != UNLINKED, "element is not linked");

        if prev == HEAD {
            self.head_next = next;
        } else {
            slots[prev as usize]
                .as_mut()
                .expect("prev slot is occupied")
                .set_next(next);
        }
        if next == HEAD {
            self.head_prev = prev;
        } else {
            slots[next as usize]
                .as_mut()
                .expect("next slot is occupied")
                .set_prev(prev);
        }

        e.set_prev(UNLINKED);
        e.set_next(UNLINKED);
    }

    /// Repoints the neighbours of the element now stored at `slot` after it
    /// was moved there from another slot. The element's own links are
    /// untouched; only the slots they refer to need to learn the new
    /// position.
    pub(crate) fn relink<T: Linked>(&mut self, slots: &mut [Option<T>], slot: u32) {
        let (prev, next) = {
            let e = slots[slot as usize]
                .as_ref()
                .expect("moved slot is occupied");
            (e.prev(), e.next())
        };
        if prev == HEAD {
            self.head_next = slot;
        } else {
            slots[prev as usize]
                .as_mut()
                .expect("prev slot is occupied")
                .set_next(slot);
        }
        if next == HEAD {
            self.head_prev = slot;
        } else {
            slots[next as usize]
                .as_mut()
                .expect("next slot is occupied")
                .set_prev(slot);
        }
    }

    /// Resets the list to empty. Element links are not touched; callers
    /// clear or drop the elements themselves.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.head_prev = HEAD;
        self.head_next = HEAD;
    }
}
