use alloc::boxed::Box;
use core::cmp;
use core::iter;
use core::mem::MaybeUninit;
use core::ptr;

use tracing::trace;

use super::RingBuffer;
use crate::utils::{wrap_add, wrap_sub};

impl<T> RingBuffer<T> {
    pub(super) fn allocate(capacity: usize) -> Box<[MaybeUninit<T>]> {
        iter::repeat_with(MaybeUninit::uninit).take(capacity).collect()
    }

    #[inline]
    pub(super) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity())
    }

    #[inline]
    pub(super) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.capacity())
    }

    /// Maps a logical position (0 is the front) to a slot of the backing array.
    #[inline]
    pub(super) fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.front, index)
    }

    #[inline]
    pub(super) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Lengths of the live window before and after the wrap point.
    #[inline]
    pub(super) fn segments(&self) -> (usize, usize) {
        let head_len = cmp::min(self.len, self.capacity() - self.front);
        (head_len, self.len - head_len)
    }

    #[inline]
    pub(super) unsafe fn buffer_ref(&self, offset: usize) -> &T {
        self.buf.get_unchecked(offset).assume_init_ref()
    }

    #[inline]
    pub(super) unsafe fn buffer_mut(&mut self, offset: usize) -> &mut T {
        self.buf.get_unchecked_mut(offset).assume_init_mut()
    }

    /// Moves the element out of `offset`. The slot is left logically
    /// uninitialized.
    #[inline]
    pub(super) unsafe fn buffer_read(&mut self, offset: usize) -> T {
        self.buf.get_unchecked(offset).assume_init_read()
    }

    #[inline]
    pub(super) unsafe fn buffer_write(&mut self, offset: usize, element: T) {
        self.buf.get_unchecked_mut(offset).write(element);
    }

    /// Moves one element between two distinct slots.
    #[inline]
    pub(super) unsafe fn buffer_move(&mut self, src: usize, dst: usize) {
        debug_assert!(src != dst);
        let ptr = self.buf.as_mut_ptr();
        ptr::copy_nonoverlapping(ptr.add(src), ptr.add(dst), 1);
    }

    /// Reallocates the backing array at twice its size and moves the live
    /// window to its start, so that afterwards `front == 0` and
    /// `back == len`.
    ///
    /// Only called when the buffer is full.
    pub(super) fn grow(&mut self) {
        debug_assert!(self.is_full());
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(0) => 1,
            Some(capacity) => capacity,
            None => panic!("capacity overflow"),
        };

        let mut buf = Self::allocate(new_capacity);
        let (head_len, tail_len) = self.segments();
        unsafe {
            let src = self.buf.as_ptr();
            let dst = buf.as_mut_ptr();
            ptr::copy_nonoverlapping(src.add(self.front), dst, head_len);
            ptr::copy_nonoverlapping(src, dst.add(head_len), tail_len);
        }

        // the old array only holds bitwise copies now; dropping a boxed
        // `MaybeUninit` slice never drops its contents
        self.buf = buf;
        self.front = 0;
        self.back = self.len;

        trace!(old_capacity, new_capacity, len = self.len, "ring buffer grew");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_from_zero() {
        let mut buf: RingBuffer<u32> = RingBuffer::new();
        buf.grow();
        assert_eq!(buf.capacity(), 1);
        buf.push_back(7);
        buf.grow();
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.peek_front(), Ok(&7));
    }

    #[test]
    fn grow_unwraps_window() {
        let mut buf = RingBuffer::with_capacity(3);
        buf.push_back(1);
        buf.push_back(2);
        buf.push_front(0);
        assert_eq!(buf.front, 2);
        assert_eq!(buf.segments(), (1, 2));

        buf.grow();
        assert_eq!(buf.capacity(), 6);
        assert_eq!((buf.front, buf.back, buf.len), (0, 3, 3));
        assert_eq!(buf.segments(), (3, 0));
        assert_eq!(buf, vec![0, 1, 2]);
    }

    #[test]
    fn physical_wraps() {
        let mut buf = RingBuffer::with_capacity(4);
        buf.push_back(1);
        buf.push_front(0);
        assert_eq!(buf.physical(0), 3);
        assert_eq!(buf.physical(1), 0);
        assert!(!buf.is_full());
    }

    #[test]
    #[cfg(feature = "std")]
    fn logs_growth() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut buf = RingBuffer::new();
            buf.extend(0..5);
            assert_eq!(buf.capacity(), 8);
        });
    }
}
