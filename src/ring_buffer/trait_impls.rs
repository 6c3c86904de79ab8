use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::Index;
use core::ops::IndexMut;

use super::*;
use crate::utils::display_list;

impl<T> Clone for RingBuffer<T>
    where T: Clone
{
    fn clone(&self) -> RingBuffer<T> {
        let mut buf = RingBuffer::with_capacity(self.capacity());
        buf.extend(self.iter().cloned());
        buf
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for RingBuffer<T> {
    #[inline]
    fn default() -> RingBuffer<T> {
        RingBuffer::new()
    }
}

impl<T> PartialEq for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &RingBuffer<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

impl<T> Eq for RingBuffer<T> where T: Eq {}

impl<'a, T> PartialEq<&'a [T]> for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

impl<T> PartialEq<Vec<T>> for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T> PartialOrd for RingBuffer<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &RingBuffer<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingBuffer<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &RingBuffer<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // element by element, so the split point of the live window cannot
        // leak into the hash
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T> iter::FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = RingBuffer::new();
        buf.extend(iter);
        buf
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `RingBuffer` with an iterator.
///
/// Every element is pushed onto the back; the buffer grows as needed.
impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T> Extend<&'a T> for RingBuffer<T>
    where T: Copy + 'a
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> fmt::Debug for RingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Renders the live elements front to back as `[a, b, c]`.
impl<T> fmt::Display for RingBuffer<T>
    where T: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display_list(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    /// Same contents, different physical layout.
    fn wrapped() -> RingBuffer<i32> {
        let mut buf = RingBuffer::with_capacity(8);
        buf.extend(3..6);
        for i in (0..3).rev() {
            buf.push_front(i);
        }
        buf
    }

    #[test]
    fn eq_ignores_layout() {
        let straight: RingBuffer<_> = (0..6).collect();
        let wrapped = wrapped();
        assert_ne!(straight.as_slices().0.len(), wrapped.as_slices().0.len());
        assert_eq!(straight, wrapped);
        assert_eq!(hash_of(&straight), hash_of(&wrapped));

        let mut shorter = wrapped.clone();
        shorter.pop_back().unwrap();
        assert_ne!(straight, shorter);
        assert!(shorter < straight);
    }

    #[test]
    fn clone_keeps_capacity() {
        let buf = wrapped();
        let copy = buf.clone();
        assert_eq!(copy, buf);
        assert_eq!(copy.capacity(), buf.capacity());
    }

    #[test]
    fn debug_lists_live_window_only() {
        let mut buf = RingBuffer::with_capacity(4);
        buf.extend(0..4);
        buf.pop_front().unwrap();
        buf.pop_front().unwrap();
        buf.push_back(4);
        assert_eq!(format!("{:?}", buf), "[2, 3, 4]");
        assert_eq!(format!("{:?}", RingBuffer::<u8>::new()), "[]");
    }

    #[test]
    fn display() {
        let mut buf = RingBuffer::new();
        buf.push_back("b");
        buf.push_front("a");
        buf.push_back("c");
        assert_eq!(format!("{}", buf), "[a, b, c]");
        assert_eq!(format!("{:?}", buf), r#"["a", "b", "c"]"#);
        assert_eq!(format!("{}", RingBuffer::<u8>::new()), "[]");
    }

    #[test]
    fn extend_by_ref() {
        let mut buf: RingBuffer<i32> = RingBuffer::new();
        buf.extend(&[1, 2, 3]);
        assert_eq!(buf, vec![1, 2, 3]);
    }

    #[test]
    fn into_iterator_refs() {
        let mut buf = wrapped();
        for x in &mut buf {
            *x += 1;
        }
        let mut sum = 0;
        for x in &buf {
            sum += *x;
        }
        assert_eq!(sum, 21);
    }
}
