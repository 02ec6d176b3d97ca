//! Pairing Heap for Rust
//!
//! This crate provides a generic priority queue built on the pairing heap: a
//! self-adjusting multiway tree whose delete-min reassembles the children of
//! the removed root with the two-pass pairing scheme.
//!
//! # Features
//!
//! - O(1) insert and peek; O(log n) amortized extract-min; o(log n) amortized decrease_key
//! - Pluggable ordering: min-heap by default, max-heap, closure or key extraction
//!   (see [`compare`])
//! - Checked handles: nodes live in a generational arena, so using a handle whose
//!   element is gone yields [`HeapError::InvalidHandle`] rather than undefined behavior
//!
//! # Example
//!
//! ```rust
//! use rust_pairing_heap::pairing::PairingHeap;
//! use rust_pairing_heap::HeapError;
//!
//! let mut heap = PairingHeap::new();
//! let handle = heap.insert(10);
//! heap.insert(20);
//! heap.decrease_key(&handle, 5).unwrap();
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.decrease_key(&handle, 7), Err(HeapError::InvalidPriority));
//! ```

pub mod compare;
pub mod pairing;
mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Compare, FnOrder, KeyOrder, MaxOrder, MinOrder};
pub use pairing::{PairingHandle, PairingHeap};
pub use traits::{DecreaseKeyHeap, Heap, HeapError};
