use super::*;
use crate::utils::wrap_add;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            front: self.front,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let front = self.front;
        self.front = wrap_add(self.front, 1, self.ring.len());
        self.len -= 1;
        unsafe { Some(self.ring.get_unchecked(front).assume_init_ref()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let back = wrap_add(self.front, self.len, self.ring.len());
        unsafe { Some(self.ring.get_unchecked(back).assume_init_ref()) }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let front = self.front;
        self.front = wrap_add(self.front, 1, self.cap);
        self.len -= 1;

        // every live slot is handed out at most once
        unsafe { Some((*self.ring.add(front)).assume_init_mut()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let back = wrap_add(self.front, self.len, self.cap);

        unsafe { Some((*self.ring.add(back)).assume_init_mut()) }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: 'a> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        let deque = &mut *self.deque;
        if deque.capacity() == 0 {
            return;
        }

        //        idx         tail_start
        // [. . . o o x x x x o o o . . .]
        //
        // Close the gap by moving the survivors behind the drained range
        // towards the front, one slot at a time.
        if self.idx != self.tail_start {
            for i in 0..self.tail_len {
                let src = deque.physical(self.tail_start + i);
                let dst = deque.physical(self.idx + i);
                unsafe { deque.buffer_move(src, dst) }
            }
        }

        deque.len = self.idx + self.tail_len;
        deque.back = deque.physical(deque.len);
    }
}

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        let idx = self.deque.physical(self.next);
        self.next += 1;
        unsafe { Some(self.deque.buffer_read(idx)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        let idx = self.deque.physical(self.end);
        unsafe { Some(self.deque.buffer_read(idx)) }
    }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}
