//! A mergeable min-priority queue: the binomial heap.
//!
//! A binomial heap is a list of heap-ordered binomial trees with at most one
//! tree per degree — the direct analogue of a binary number, with tree
//! linking as the carry. That shape bounds the root list at O(log n) trees
//! and makes the interesting operations cheap:
//!
//! - **insert**: O(log n)
//! - **find-min** / **extract-min**: O(log n)
//! - **union** of two heaps: O(log n)
//! - **decrease-key** / **delete**: O(log n) once the node is in hand;
//!   locating a node by key is O(n), since the heap keeps no key index
//!
//! Unlike a binary heap, two binomial heaps merge in logarithmic time, which
//! is what makes the structure useful as a building block for algorithms
//! that combine partial priority queues.
//!
//! Single-threaded by design: a heap exclusively owns its nodes and no
//! operation is reentrant-safe. Callers needing shared access must serialize
//! operations on a given heap themselves.
//!
//! # Example
//!
//! ```rust
//! use binomial_heap::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! for key in [10, 20, 5, 30, 15] {
//!     heap.insert(key);
//! }
//!
//! let mut other = BinomialHeap::new();
//! for key in [100, 50, 40] {
//!     other.insert(key);
//! }
//! heap.union(other);
//!
//! assert_eq!(heap.extract_min(), Some(5));
//! assert_eq!(heap.extract_min(), Some(10));
//! assert_eq!(heap.len(), 6);
//! ```

mod error;
mod heap;
mod node;

pub use error::HeapError;
pub use heap::BinomialHeap;
