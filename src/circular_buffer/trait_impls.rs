use std::cmp::{self, Ordering};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use super::*;

impl<T> Clone for CircularBuffer<T>
    where T: Clone
{
    fn clone(&self) -> CircularBuffer<T> {
        let mut buffer = CircularBuffer::with_capacity(self.capacity());
        buffer.extend(self.iter().cloned());
        buffer
    }
}

impl<T> Default for CircularBuffer<T> {
    #[inline]
    fn default() -> CircularBuffer<T> {
        CircularBuffer::new()
    }
}

/// Two buffers are equal when they hold equal elements in the same FIFO
/// order, whatever their capacities or physical layouts.
impl<T> PartialEq for CircularBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &CircularBuffer<T>) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for CircularBuffer<T> where T: Eq {}

impl<T> PartialOrd for CircularBuffer<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &CircularBuffer<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for CircularBuffer<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &CircularBuffer<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for CircularBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.count();
        match self.element_at(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T> IndexMut<usize> for CircularBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.count();
        match self.element_at_mut(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T> iter::FromIterator<T> for CircularBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> CircularBuffer<T> {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut buffer = CircularBuffer::with_capacity(cmp::max(lower, DEFAULT_CAPACITY));
        buffer.extend(iter);
        buffer
    }
}

impl<T> IntoIterator for CircularBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `CircularBuffer` with an iterator, growing as needed.
impl<T> Extend<T> for CircularBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.put(element);
        }
    }
}

impl<'a, T> Extend<&'a T> for CircularBuffer<T>
    where T: Copy + 'a
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> fmt::Debug for CircularBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
