use std::slice;

pub use odds::IndexRange as RangeArgument;
use tracing::trace;

use crate::error::{BoundsError, EmptyBufferError};
use crate::utils::*;

mod internal;
mod iterator_impls;
mod trait_impls;

/// Capacity of a buffer created with `CircularBuffer::new()` or `Default`.
pub const DEFAULT_CAPACITY: usize = 4;

/// A growable ring buffer with FIFO access.
///
/// The "default" usage of this type as a queue is to use `put` to add to the
/// queue, and `get` to remove from the queue. `extend` puts onto the back in
/// this manner, and iterating over `CircularBuffer` goes from the oldest
/// element to the newest.
///
/// # Capacity
///
/// The buffer never rejects an insert. Putting into a full buffer doubles the
/// backing array first; the live elements are moved, oldest first, to the
/// start of the new array. Capacity never shrinks, not even on `clear`.
///
/// # Threads
///
/// There is no internal synchronization. Every mutating method takes
/// `&mut self`, so sharing a buffer between threads needs an outer lock such
/// as `Mutex<CircularBuffer<T>>`.
pub struct CircularBuffer<T> {
    storage: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    count: usize,
}

/// `CircularBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [Option<T>],
    head: usize,
    remaining: usize,
}

/// `CircularBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
}

/// A by-value `CircularBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: CircularBuffer<T>,
}

/// A draining `CircularBuffer` iterator
pub struct Drain<'a, T: 'a> {
    buffer: &'a mut CircularBuffer<T>,
    drain_start: usize,
    drain_end: usize,
    orig_count: usize,
    front: usize,
    back: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty `CircularBuffer` with room for `DEFAULT_CAPACITY`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let buffer: CircularBuffer<usize> = CircularBuffer::new();
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    #[inline]
    pub fn new() -> CircularBuffer<T> {
        CircularBuffer::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `CircularBuffer` with room for `capacity` elements
    /// before the first growth.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let buffer: CircularBuffer<usize> = CircularBuffer::with_capacity(16);
    /// assert_eq!(buffer.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> CircularBuffer<T> {
        assert!(capacity > 0, "circular buffer capacity must be positive");
        CircularBuffer {
            storage: Self::empty_slots(capacity),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Return the number of elements the buffer can hold before it grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements in the `CircularBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// assert_eq!(buffer.count(), 0);
    /// buffer.put(1);
    /// assert_eq!(buffer.count(), 1);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Same as `count`.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the buffer contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends an element as the newest in the buffer.
    ///
    /// A full buffer doubles its capacity first, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::with_capacity(2);
    /// buffer.put(1);
    /// buffer.put(2);
    /// buffer.put(3);
    /// assert_eq!(buffer.capacity(), 4);
    /// assert_eq!(buffer.count(), 3);
    /// ```
    pub fn put(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        let tail = self.tail;
        self.storage[tail] = Some(element);
        self.tail = self.wrap_add(tail, 1);
        self.count += 1;
    }

    /// Removes the oldest element and returns it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyBufferError` if the buffer holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::{CircularBuffer, EmptyBufferError};
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put('a');
    /// buffer.put('b');
    /// assert_eq!(buffer.get(), Ok('a'));
    /// assert_eq!(buffer.get(), Ok('b'));
    /// assert_eq!(buffer.get(), Err(EmptyBufferError));
    /// ```
    pub fn get(&mut self) -> Result<T, EmptyBufferError> {
        if self.is_empty() {
            return Err(EmptyBufferError);
        }
        let head = self.head;
        self.head = self.wrap_add(head, 1);
        self.count -= 1;
        self.storage[head].take().ok_or(EmptyBufferError)
    }

    /// Provides a reference to the oldest element, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// assert_eq!(buffer.peek(), None);
    /// buffer.put(1);
    /// buffer.put(2);
    /// assert_eq!(buffer.peek(), Some(&1));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.element_at(0)
    }

    /// Retrieves an element by logical position.
    ///
    /// Position 0 is the oldest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put(3);
    /// buffer.put(4);
    /// buffer.put(5);
    /// assert_eq!(buffer.element_at(1), Some(&4));
    /// assert_eq!(buffer.element_at(3), None);
    /// ```
    #[inline]
    pub fn element_at(&self, index: usize) -> Option<&T> {
        if index < self.count {
            let idx = self.physical_index(index);
            self.storage[idx].as_ref()
        } else {
            None
        }
    }

    /// Retrieves an element mutably by logical position.
    ///
    /// Position 0 is the oldest element.
    #[inline]
    pub fn element_at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.count {
            let idx = self.physical_index(index);
            self.storage[idx].as_mut()
        } else {
            None
        }
    }

    /// Removes the first element, in FIFO order, that is equal to `item`.
    ///
    /// The elements after it move down to close the gap, keeping their order,
    /// and the storage is left with the oldest element at the start of the
    /// backing array. Returns whether an element was removed; when none
    /// matched the buffer is left untouched.
    ///
    /// This is `O(n)` in the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer: CircularBuffer<_> = vec![1, 2, 3, 2].into_iter().collect();
    /// assert!(buffer.remove(&2));
    /// assert_eq!(buffer.iter().collect::<Vec<_>>(), [&1, &3, &2]);
    /// assert!(!buffer.remove(&7));
    /// ```
    pub fn remove(&mut self, item: &T) -> bool
        where T: PartialEq
    {
        let position = match self.iter().position(|x| x == item) {
            Some(position) => position,
            None => return false,
        };

        // remove x at position 1 of a full, wrapped buffer:
        //
        //           H
        //      [c d a x]
        //
        // normalized, then the hole rotated to the end:
        //
        //       H     T
        //      [a c d .]
        let count = self.count;
        self.normalize();
        self.storage[position] = None;
        self.storage[position..count].rotate_left(1);
        self.count -= 1;
        self.tail = self.count;

        trace!(position, count = self.count, "removed element by value");
        true
    }

    /// Returns `true` if the buffer holds an element equal to `item`.
    ///
    /// Only live elements are compared.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put(0);
    /// buffer.put(1);
    ///
    /// assert_eq!(buffer.contains(&1), true);
    /// assert_eq!(buffer.contains(&10), false);
    ///
    /// buffer.get().unwrap();
    /// assert_eq!(buffer.contains(&0), false);
    /// ```
    pub fn contains(&self, item: &T) -> bool
        where T: PartialEq
    {
        self.iter().any(|x| x == item)
    }

    /// Clears the buffer, removing all values.
    ///
    /// Capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put(1);
    /// buffer.clear();
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.storage.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Clones the elements, oldest first, into `dest` starting at `offset`.
    ///
    /// Exactly `count()` elements are written. Nothing is written if they do
    /// not fit.
    ///
    /// # Errors
    ///
    /// Returns `BoundsError` if `dest` is shorter than `offset + count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put(7);
    /// buffer.put(8);
    ///
    /// let mut dest = [0; 4];
    /// buffer.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [0, 7, 8, 0]);
    ///
    /// assert!(buffer.copy_to(&mut dest, 3).is_err());
    /// ```
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), BoundsError>
        where T: Clone
    {
        let required = offset.checked_add(self.count).unwrap_or(usize::max_value());
        if required > dest.len() {
            return Err(BoundsError {
                required,
                available: dest.len(),
            });
        }
        for (slot, item) in dest[offset..required].iter_mut().zip(self.iter()) {
            slot.clone_from(item);
        }
        Ok(())
    }

    /// Returns an oldest-to-newest iterator.
    ///
    /// The iterator borrows the buffer, so the buffer cannot be changed while
    /// it is alive. Calling `iter` again starts over from the oldest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put(5);
    /// buffer.put(3);
    /// buffer.put(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buffer.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            ring: &self.storage,
            head: self.head,
            remaining: self.count,
        }
    }

    /// Returns an oldest-to-newest iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new();
    /// buffer.put(5);
    /// buffer.put(3);
    /// buffer.put(4);
    /// for num in buffer.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 3, &mut 1, &mut 2];
    /// assert_eq!(&buffer.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let ((front_start, front_end), (_, back_end)) =
            physical_runs(self.head, self.count, self.capacity());
        let (wrapped, rest) = self.storage.split_at_mut(front_start);
        let (front, _) = rest.split_at_mut(front_end - front_start);
        let (back, _) = wrapped.split_at_mut(back_end);
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Create a draining iterator that removes the specified range of logical
    /// positions and yields the removed items, oldest first.
    ///
    /// Note 1: The element range is removed even if the iterator is not
    /// consumed until the end.
    ///
    /// Note 2: If the `Drain` value is leaked (eg. due to mem::forget), the
    /// buffer keeps only the elements before the range.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use circbuf::CircularBuffer;
    ///
    /// let mut buffer: CircularBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// let drain1: Vec<_> = buffer.drain(2..).collect();
    /// assert_eq!(drain1, vec![3]);
    ///
    /// // A full range clears all contents
    /// let drain2: Vec<_> = buffer.drain(..).collect();
    /// assert_eq!(drain2, vec![1, 2]);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<T>
        where R: RangeArgument<usize>
    {
        let len = self.count;
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        self.normalize();
        // Only the elements before the range stay visible until the drain is
        // dropped.
        self.count = start;
        self.tail = start % self.capacity();

        Drain {
            buffer: self,
            drain_start: start,
            drain_end: end,
            orig_count: len,
            front: start,
            back: end,
        }
    }
}
