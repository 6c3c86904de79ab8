//! LIFO front-end over [`RingBuffer`].

use core::fmt;
use core::iter;

use crate::error::Result;
use crate::ring_buffer::{Iter, RingBuffer};
use crate::utils::display_list;

/// A last-in, first-out stack.
///
/// The top of the stack is the back of an inner [`RingBuffer`]. Iteration
/// and rendering go from the bottom to the top.
///
/// # Examples
///
/// ```
/// use ringdeque::{Error, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(Error::EmptyContainer));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    inner: RingBuffer<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with no allocated slots.
    pub fn new() -> Stack<T> {
        Stack { inner: RingBuffer::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack { inner: RingBuffer::with_capacity(capacity) }
    }

    /// Pushes an element onto the top of the stack.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.inner.push_back(element)
    }

    /// Removes the top element and returns it.
    ///
    /// Fails with `EmptyContainer` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.inner.pop_back()
    }

    /// Provides a reference to the top element.
    ///
    /// Fails with `EmptyContainer` if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.inner.peek_back()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the stack holds no elements.
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

    /// Returns a bottom-to-top iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> iter::FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack { inner: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T> fmt::Debug for Stack<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T> fmt::Display for Stack<T>
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
    fn lifo() {
        let mut stack = Stack::new();
        for i in 0..9 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 9);
        assert_eq!(stack.capacity(), 16);

        let out: Vec<_> = (0..9).map(|_| stack.pop().unwrap()).collect();
        assert_eq!(out, (0..9).rev().collect::<Vec<_>>());
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert_eq!(stack.peek(), Err(Error::EmptyContainer));
        assert_eq!(stack.capacity(), 16);
    }

    #[test]
    fn render_bottom_to_top() {
        let mut stack: Stack<_> = (1..4).collect();
        assert_eq!(format!("{}", stack), "[1, 2, 3]");
        assert_eq!(format!("{:?}", stack), "[1, 2, 3]");
        stack.extend(4..6);
        assert_eq!(stack.peek(), Ok(&5));
        assert_eq!(stack.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_keeps_order_below() {
        let mut stack = Stack::with_capacity(2);
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.pop(), Ok('b'));
        stack.push('c');
        stack.push('d');
        assert_eq!(stack.capacity(), 4);
        assert_eq!(format!("{}", stack), "[a, c, d]");
    }
}
