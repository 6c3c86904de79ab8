//! A growable circular buffer with deque, queue and stack front-ends.
//!
//! [`RingBuffer`] keeps its elements in one contiguous allocation and
//! addresses them modulo the capacity, so pushing and popping at either end
//! never shifts the contents. When an insertion finds the buffer full, the
//! allocation doubles and the elements are moved to its start in order. This
//! gives `O(1)` amortized inserts and `O(1)` removals from both ends. The
//! capacity never shrinks.
//!
//! [`Queue`] (FIFO) and [`Stack`] (LIFO) are thin wrappers that expose only
//! the matching ends of the same buffer.
//!
//! Removing from or peeking into an empty container fails with
//! [`Error::EmptyContainer`] rather than producing a default value.
//!
//! # Feature Flags
//! The **ringdeque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs `alloc`
//!
//!
//! - `serde`
//!   - Optional
//!   - Implement `Serialize` and `Deserialize` for `RingBuffer` as a
//!     front-to-back sequence
//!
//! # Logging
//!
//! Growth of a buffer is reported through [`tracing`] at the `TRACE` level
//! with the old and new capacity. Nothing else is logged.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringdeque = "0.1"
//! ```
//!
//! To use it in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! ringdeque = { version = "0.1", default-features = false }
//! ```
//!
//! # Examples
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buf = RingBuffer::with_capacity(1);
//! assert_eq!(buf.capacity(), 1);
//! assert_eq!(buf.len(), 0);
//!
//! buf.push_back(1);
//! buf.push_back(2);
//! buf.push_back(3);
//! assert_eq!(buf.len(), 3);
//! assert_eq!(buf.capacity(), 4);
//!
//! assert_eq!(buf.pop_front(), Ok(1));
//! assert_eq!(buf.pop_front(), Ok(2));
//! assert_eq!(buf.pop_front(), Ok(3));
//! assert!(buf.pop_front().is_err());
//! assert_eq!(buf.capacity(), 4);
//! ```
//!
//! # Both ends
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buf = RingBuffer::new();
//!
//! buf.push_back(1);
//! buf.push_back(2);
//! buf.push_front(0);
//!
//! assert_eq!(format!("{:?}", buf), "[0, 1, 2]");
//! assert_eq!(buf.pop_back(), Ok(2));
//! assert_eq!(format!("{}", buf), "[0, 1]");
//! ```
//!
//! # Extend & Iterate
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buf = RingBuffer::new();
//!
//! buf.extend(0..5);
//!
//! let items: Vec<_> = buf.into_iter().collect();
//! assert_eq!(items, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # Queue & Stack
//! ```
//! use ringdeque::{Queue, Stack};
//!
//! let mut queue: Queue<_> = (0..3).collect();
//! queue.enqueue(3);
//! assert_eq!(queue.dequeue(), Ok(0));
//!
//! let mut stack: Stack<_> = (0..3).collect();
//! stack.push(3);
//! assert_eq!(stack.pop(), Ok(3));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

mod error;
mod queue;
mod ring_buffer;
mod stack;
mod utils;

pub use error::{Error, Result};
pub use queue::{Queue, DEFAULT_QUEUE_CAPACITY};
pub use ring_buffer::{Drain, IntoIter, Iter, IterMut, RangeArgument, RingBuffer};
pub use stack::Stack;
