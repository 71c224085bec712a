use std::mem;

use tracing::trace;

use super::CircularBuffer;
use crate::utils::*;

impl<T> CircularBuffer<T> {
    pub(crate) fn empty_slots(capacity: usize) -> Box<[Option<T>]> {
        (0..capacity).map(|_| None).collect()
    }

    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity())
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.capacity())
    }

    /// Maps a logical position to its slot in `storage`.
    #[inline]
    pub(crate) fn physical_index(&self, offset: usize) -> usize {
        debug_assert!(offset < self.count);
        self.wrap_add(self.head, offset)
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    #[inline]
    pub(crate) fn is_contiguous(&self) -> bool {
        self.head + self.count <= self.capacity()
    }

    /// Rotates the storage so the oldest element sits at index 0.
    pub(crate) fn normalize(&mut self) {
        //           T   H
        //      [c d . . a b]
        //
        //       H       T
        //      [a b c d . .]
        if self.head != 0 {
            self.storage.rotate_left(self.head);
            self.head = 0;
        }
        self.tail = self.count % self.capacity();
    }

    /// Doubles the capacity. The live elements land, oldest first, at the
    /// start of the new storage whether or not they wrapped in the old one.
    pub(crate) fn grow(&mut self) {
        //           H
        //      [c d a b]
        //
        //       H       T
        //      [a b c d . . . .]
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .expect("circular buffer capacity overflow");
        let wrapped = !self.is_contiguous();

        self.normalize();
        let mut slots = mem::replace(&mut self.storage, Box::default()).into_vec();
        slots.resize_with(new_capacity, || None);
        self.storage = slots.into_boxed_slice();
        self.tail = self.count;

        trace!(old_capacity, new_capacity, wrapped, "grew circular buffer");
    }

    /// Removes the newest element.
    pub(crate) fn pop_newest(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.wrap_sub(self.tail, 1);
        self.tail = tail;
        self.count -= 1;
        self.storage[tail].take()
    }
}
