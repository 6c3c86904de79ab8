use alloc::boxed::Box;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::slice;

pub use odds::IndexRange as RangeArgument;

use crate::error::{Error, Result};

mod internal;
mod iterator_impls;
#[cfg(feature = "serde")]
mod serde_impls;
mod trait_impls;

/// `RingBuffer` is a growable ring buffer.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto
/// the back in this manner, and iterating over `RingBuffer` goes front to back.
///
/// # Capacity
///
/// All `capacity()` slots of the backing array are usable. When an insertion
/// finds the buffer full, the array is reallocated at twice its size (or one
/// slot when it was empty) and the live elements are moved to its start, in
/// order. Capacity never shrinks: removals, `clear` and `drain` leave it alone.
///
/// # Examples
///
/// ```
/// use ringdeque::RingBuffer;
///
/// let mut buf = RingBuffer::new();
/// buf.push_back(1);
/// buf.push_back(2);
/// buf.push_front(0);
/// assert_eq!(format!("{:?}", buf), "[0, 1, 2]");
///
/// assert_eq!(buf.pop_back(), Ok(2));
/// assert_eq!(buf.pop_front(), Ok(0));
/// assert_eq!(format!("{:?}", buf), "[1]");
/// ```
pub struct RingBuffer<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
    len: usize,
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [MaybeUninit<T>],
    front: usize,
    len: usize,
}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    ring: *mut MaybeUninit<T>,
    cap: usize,
    front: usize,
    len: usize,
    marker: PhantomData<&'a mut T>,
}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}

/// A draining `RingBuffer` iterator
///
/// Created by [`RingBuffer::drain`].
pub struct Drain<'a, T: 'a> {
    deque: &'a mut RingBuffer<T>,
    // logical indices still to be yielded
    next: usize,
    end: usize,
    // where the survivors behind the range have to be moved to
    idx: usize,
    tail_start: usize,
    tail_len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with no allocated slots.
    ///
    /// The first insertion grows it to a capacity of one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let buf: RingBuffer<usize> = RingBuffer::new();
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> RingBuffer<T> {
        RingBuffer::with_capacity(0)
    }

    /// Creates an empty `RingBuffer` with room for `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::with_capacity(1);
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.capacity(), 2);
    /// buf.push_back(3);
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> RingBuffer<T> {
        RingBuffer {
            buf: Self::allocate(capacity),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Return the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut v = RingBuffer::new();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut v = RingBuffer::new();
    /// assert!(v.is_empty());
    /// v.push_front(1);
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Retrieves an element in the `RingBuffer` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// assert_eq!(buf.get(1), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.physical(index);
            unsafe { Some(self.buffer_ref(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingBuffer` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// if let Some(elem) = buf.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(buf[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.physical(index);
            unsafe { Some(self.buffer_mut(idx)) }
        } else {
            None
        }
    }

    /// Provides a reference to the front element.
    ///
    /// Fails with `EmptyContainer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new();
    /// assert_eq!(buf.peek_front(), Err(Error::EmptyContainer));
    ///
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.peek_front(), Ok(&1));
    /// ```
    #[inline]
    pub fn peek_front(&self) -> Result<&T> {
        self.get(0).ok_or(Error::EmptyContainer)
    }

    /// Provides a mutable reference to the front element.
    ///
    /// Fails with `EmptyContainer` if the buffer is empty.
    #[inline]
    pub fn peek_front_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(Error::EmptyContainer)
    }

    /// Provides a reference to the back element.
    ///
    /// Fails with `EmptyContainer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new();
    /// assert_eq!(buf.peek_back(), Err(Error::EmptyContainer));
    ///
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.peek_back(), Ok(&2));
    /// ```
    #[inline]
    pub fn peek_back(&self) -> Result<&T> {
        match self.len {
            0 => Err(Error::EmptyContainer),
            len => self.get(len - 1).ok_or(Error::EmptyContainer),
        }
    }

    /// Provides a mutable reference to the back element.
    ///
    /// Fails with `EmptyContainer` if the buffer is empty.
    #[inline]
    pub fn peek_back_mut(&mut self) -> Result<&mut T> {
        match self.len {
            0 => Err(Error::EmptyContainer),
            len => self.get_mut(len - 1).ok_or(Error::EmptyContainer),
        }
    }

    /// Adds an element to the front of the buffer, growing it first if it
    /// is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_]    => [1]
    /// 2 -(+)-> [1]    => [2, 1]       (grows to 2)
    /// 3 -(+)-> [2, 1] => [3, 2, 1, _] (grows to 4)
    /// ```
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_front(1);
    /// buf.push_front(2);
    /// buf.push_front(3);
    ///
    /// assert_eq!(buf.peek_front(), Ok(&3));
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    pub fn push_front(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        self.front = self.wrap_sub(self.front, 1);
        let front = self.front;
        unsafe { self.buffer_write(front, element) }
        self.len += 1;
    }

    /// Adds an element to the back of the buffer, growing it first if it
    /// is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_]    <-(+)- 1 => [1]
    /// [1]    <-(+)- 2 => [1, 2]       (grows to 2)
    /// [1, 2] <-(+)- 3 => [1, 2, 3, _] (grows to 4)
    /// ```
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// buf.push_back(3);
    ///
    /// assert_eq!(buf.peek_back(), Ok(&3));
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    pub fn push_back(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        let back = self.back;
        unsafe { self.buffer_write(back, element) }
        self.back = self.wrap_add(back, 1);
        self.len += 1;
    }

    /// Removes the first element and returns it.
    ///
    /// Fails with `EmptyContainer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    ///
    /// assert_eq!(buf.pop_front(), Ok(1));
    /// assert_eq!(buf.pop_front(), Ok(2));
    /// assert_eq!(buf.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let front = self.front;
        self.front = self.wrap_add(front, 1);
        self.len -= 1;
        unsafe { Ok(self.buffer_read(front)) }
    }

    /// Removes the last element and returns it.
    ///
    /// Fails with `EmptyContainer` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    ///
    /// assert_eq!(buf.pop_back(), Ok(3));
    /// assert_eq!(buf.pop_back(), Ok(1));
    /// assert_eq!(buf.pop_back(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.back = self.wrap_sub(self.back, 1);
        self.len -= 1;
        let back = self.back;
        unsafe { Ok(self.buffer_read(back)) }
    }

    /// Returns `true` if the `RingBuffer` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(0);
    /// buf.push_back(1);
    ///
    /// assert_eq!(buf.contains(&1), true);
    /// assert_eq!(buf.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &self.buf,
            front: self.front,
            len: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// for num in buf.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 3, &mut 1, &mut 2];
    /// assert_eq!(&buf.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            ring: self.buf.as_mut_ptr(),
            cap: self.buf.len(),
            front: self.front,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::with_capacity(8);
    ///
    /// buf.push_back(0);
    /// buf.push_back(1);
    /// buf.push_back(2);
    ///
    /// assert_eq!(buf.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// buf.push_front(10);
    /// buf.push_front(9);
    ///
    /// assert_eq!(buf.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (head_len, tail_len) = self.segments();
        let ptr = self.buf.as_ptr() as *const T;
        unsafe {
            (slice::from_raw_parts(ptr.add(self.front), head_len),
             slice::from_raw_parts(ptr, tail_len))
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::with_capacity(4);
    ///
    /// buf.push_back(0);
    /// buf.push_back(1);
    ///
    /// buf.push_front(10);
    /// buf.push_front(9);
    ///
    /// buf.as_mut_slices().0[0] = 42;
    /// buf.as_mut_slices().1[0] = 24;
    /// assert_eq!(buf.as_slices(), (&[42, 10][..], &[24, 1][..]));
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (head_len, tail_len) = self.segments();
        let front = self.front;
        let ptr = self.buf.as_mut_ptr() as *mut T;
        // the two segments never overlap: the head segment starts at `front`
        // and the tail segment ends before it
        unsafe {
            (slice::from_raw_parts_mut(ptr.add(front), head_len),
             slice::from_raw_parts_mut(ptr, tail_len))
        }
    }

    /// Create a draining iterator that removes the specified range in the
    /// `RingBuffer` and yields the removed items.
    ///
    /// Note 1: The element range is removed even if the iterator is not
    /// consumed until the end.
    ///
    /// Note 2: It is unspecified how many elements are removed from the buffer,
    /// if the `Drain` value is not dropped, but the borrow it holds expires
    /// (eg. due to mem::forget).
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf: RingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(vec![3].into_iter().collect::<RingBuffer<_>>(), buf.drain(2..).collect::<RingBuffer<_>>());
    /// assert_eq!(vec![1, 2].into_iter().collect::<RingBuffer<_>>(), buf);
    ///
    /// // A full range clears all contents
    /// buf.drain(..);
    /// assert!(buf.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeArgument<usize>,
    {
        let len = self.len;
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Shrink the live window to the elements in front of the range for
        // as long as the drain lives, so a leaked `Drain` only leaks.
        self.len = start;
        if self.capacity() > 0 {
            self.back = self.physical(start);
        }

        Drain {
            deque: self,
            next: start,
            end,
            idx: start,
            tail_start: end,
            tail_len: len - end,
        }
    }

    /// Clears the buffer, removing all values.
    ///
    /// The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 1);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.drain(..);
    }
}
