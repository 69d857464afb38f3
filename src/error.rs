//! Error type for heap operations.

use std::fmt;

/// Error returned by the key-addressed heap operations.
///
/// Every error is locally recoverable: a rejected operation leaves the heap
/// unchanged and fully usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// No node with the requested key exists in the heap.
    KeyNotFound,
    /// The new key is greater than the key it would replace.
    KeyNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyNotFound => write!(f, "key not found in heap"),
            HeapError::KeyNotDecreased => {
                write!(f, "new key is greater than the current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}
