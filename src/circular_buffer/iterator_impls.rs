use super::*;
use crate::utils::wrap_add;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            ring: self.ring,
            head: self.head,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let head = self.head;
        self.head = wrap_add(head, 1, self.ring.len());
        self.remaining -= 1;
        self.ring[head].as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let idx = wrap_add(self.head, self.remaining, self.ring.len());
        self.ring[idx].as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.front.next() {
            Some(slot) => slot.as_mut(),
            None => self.back.next().and_then(Option::as_mut),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.back.next_back() {
            Some(slot) => slot.as_mut(),
            None => self.front.next_back().and_then(Option::as_mut),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.get().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.count();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_newest()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: 'a> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        // s = drain_start; e = drain_end; C = orig_count
        //
        //             s     e     C
        //      [o o o . . . o o o . .]
        //
        //             s     C
        //      [o o o o o o . . . . .]
        //
        let removed = self.drain_end - self.drain_start;
        let buffer = &mut *self.buffer;
        buffer.storage[self.drain_start..self.orig_count].rotate_left(removed);
        buffer.count = self.orig_count - removed;
        buffer.tail = buffer.wrap_add(0, buffer.count);
    }
}

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let front = self.front;
        self.front += 1;
        self.buffer.storage[front].take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.storage[self.back].take()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}
