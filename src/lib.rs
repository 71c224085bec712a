//! A growable ring buffer with FIFO access.
//!
//! This queue has `O(1)` amortized inserts at the back and removals from the
//! front. A full buffer doubles its backing array instead of rejecting an
//! insert or overwriting the oldest element. The contained elements are not
//! required to be copyable.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! circbuf = "0.1"
//! ```
//!
//! # Capacity
//!
//! `CircularBuffer::new()` starts with room for `DEFAULT_CAPACITY` (4)
//! elements; `CircularBuffer::with_capacity` picks another starting size.
//! Capacity only grows.
//!
//! # Threads
//!
//! The buffer does no locking of its own. It is `Send` and `Sync` whenever its
//! element type is, and every mutation goes through `&mut self`, so it has to
//! be wrapped in a lock to be shared between threads.
//!
//! # Examples
//! ```
//! use circbuf::CircularBuffer;
//!
//! let mut buffer = CircularBuffer::new();
//! assert_eq!(buffer.capacity(), 4);
//! assert_eq!(buffer.count(), 0);
//!
//! buffer.put(1);
//! buffer.put(2);
//! assert_eq!(buffer.count(), 2);
//!
//! assert_eq!(buffer.get(), Ok(1));
//! assert_eq!(buffer.get(), Ok(2));
//! assert!(buffer.get().is_err());
//! ```
//!
//! # Growth
//! ```
//! use circbuf::CircularBuffer;
//!
//! let mut buffer = CircularBuffer::new();
//! buffer.extend(0..5);
//!
//! assert_eq!(buffer.capacity(), 8);
//! assert_eq!(format!("{:?}", buffer), "[0, 1, 2, 3, 4]");
//! ```
//!
//! # Remove & Contains
//! ```
//! use circbuf::CircularBuffer;
//!
//! let mut buffer: CircularBuffer<_> = vec!["a", "b", "c"].into_iter().collect();
//!
//! assert!(buffer.remove(&"b"));
//! assert!(!buffer.contains(&"b"));
//! assert_eq!(format!("{:?}", buffer), r#"["a", "c"]"#);
//! ```
//!
//! # Copy out
//! ```
//! use circbuf::CircularBuffer;
//!
//! let buffer: CircularBuffer<_> = (1..4).collect();
//! let mut dest = vec![0; 5];
//!
//! buffer.copy_to(&mut dest, 2).unwrap();
//! assert_eq!(dest, vec![0, 0, 1, 2, 3]);
//! ```

#![deny(missing_docs)]

mod circular_buffer;
pub mod error;
mod utils;

pub use crate::circular_buffer::{CircularBuffer, Drain, IntoIter, Iter, IterMut, RangeArgument};
pub use crate::circular_buffer::DEFAULT_CAPACITY;
pub use crate::error::{BoundsError, EmptyBufferError};
