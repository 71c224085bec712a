//! Errors returned by `CircularBuffer` operations.

use thiserror::Error;

/// Error value indicating that no element was available to remove.
///
/// Returned by [`CircularBuffer::get`](crate::CircularBuffer::get).
/// Checking `count() > 0` beforehand avoids it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("buffer is empty")]
pub struct EmptyBufferError;

/// Error value indicating that a destination slice cannot hold the copied
/// elements.
///
/// Returned by [`CircularBuffer::copy_to`](crate::CircularBuffer::copy_to).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("destination too small: need {required} slots, have {available}")]
pub struct BoundsError {
    /// Length the destination needed, `offset + count`.
    /// Saturates at `usize::MAX` if that sum overflows.
    pub required: usize,
    /// Length the destination actually had.
    pub available: usize,
}
