//! FIFO front-end over [`RingBuffer`].

use core::fmt;
use core::iter;

use crate::error::Result;
use crate::ring_buffer::{IntoIter, Iter, RingBuffer};
use crate::utils::display_list;

/// Number of slots a queue made by [`Queue::new`] starts with.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// A first-in, first-out queue.
///
/// Elements are enqueued at the back and dequeued from the front of an
/// inner [`RingBuffer`], which grows by doubling when full.
///
/// # Examples
///
/// ```
/// use ringdeque::{Error, Queue};
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
/// assert_eq!(queue.to_string(), "[a, b]");
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.peek(), Ok(&"b"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    inner: RingBuffer<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue with room for [`DEFAULT_QUEUE_CAPACITY`] elements.
    pub fn new() -> Queue<T> {
        Queue::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Queue<T> {
        Queue { inner: RingBuffer::with_capacity(capacity) }
    }

    /// Adds an element to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, element: T) {
        self.inner.push_back(element)
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// Fails with `EmptyContainer` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.inner.pop_front()
    }

    /// Provides a reference to the element that `dequeue` would return.
    ///
    /// Fails with `EmptyContainer` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.inner.peek_front()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator from the front (next to dequeue) to the back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Unwraps the underlying buffer, front of the queue first.
    pub fn into_inner(self) -> RingBuffer<T> {
        self.inner
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T> From<RingBuffer<T>> for Queue<T> {
    fn from(inner: RingBuffer<T>) -> Queue<T> {
        Queue { inner }
    }
}

impl<T> iter::FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> fmt::Debug for Queue<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T> fmt::Display for Queue<T>
    where T: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display_list(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::vec::Vec;

    #[test]
    fn fifo() {
        let mut queue = Queue::new();
        for i in 0..25 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 25);
        assert_eq!(queue.capacity(), 40);

        let out: Vec<_> = (0..25).map(|_| queue.dequeue().unwrap()).collect();
        assert_eq!(out, (0..25).collect::<Vec<_>>());
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 40);
    }

    #[test]
    fn default_capacity() {
        let queue: Queue<u8> = Queue::default();
        assert_eq!(queue.capacity(), DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn empty() {
        let mut queue: Queue<u8> = Queue::with_capacity(0);
        assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
        assert_eq!(queue.peek(), Err(Error::EmptyContainer));
        queue.enqueue(1);
        assert_eq!(queue.capacity(), 1);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn interleaved_wraps_around() {
        let mut queue = Queue::with_capacity(3);
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3);
        queue.enqueue(4);
        // wrapped, but not grown
        assert_eq!(queue.capacity(), 3);
        assert_eq!(format!("{}", queue), "[2, 3, 4]");
        assert_eq!(format!("{:?}", queue), "[2, 3, 4]");
        queue.enqueue(5);
        assert_eq!(queue.capacity(), 6);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn from_buffer() {
        let mut buf = RingBuffer::new();
        buf.push_back(2);
        buf.push_front(1);
        let mut queue = Queue::from(buf);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.clear();
        assert!(queue.is_empty());
        let collected: Queue<_> = (0..3).collect();
        assert_eq!(collected.iter().sum::<i32>(), 3);
        assert_eq!(collected.into_inner(), vec![0, 1, 2]);
    }
}
