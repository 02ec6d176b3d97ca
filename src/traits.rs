//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait for simple heaps without `decrease_key` support
//! - [`DecreaseKeyHeap`]: Extended trait adding `decrease_key` and handle-based insertion
//!
//! Unlike the inherent methods of [`PairingHeap`](crate::pairing::PairingHeap),
//! which report misuse through [`HeapError`], the base [`Heap`] trait follows
//! the `Option`-returning shape of `std::collections::BinaryHeap`.

use std::fmt;

/// Error type for heap operations
///
/// Every variant is a caller-contract violation. Operations detect these
/// conditions before touching the structure, so a failed call leaves the heap
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The heap holds no elements (`peek_min` / `extract_min`)
    Underflow,
    /// The new value is strictly worse than the current one under the heap's ordering
    InvalidPriority,
    /// The handle is no longer valid (element was extracted or the heap was cleared)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap is empty"),
            HeapError::InvalidPriority => {
                write!(f, "new value has lower priority than the current value")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for decrease_key operations
///
/// This is an opaque type that identifies a specific element in the heap.
/// It grants no access to the element beyond what the owning heap exposes.
pub trait Handle: Copy + PartialEq + Eq + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the best element
/// - `peek` returns the best element without removing it
///
/// "Best" is decided by the heap's ordering policy; with the default
/// policy this is the minimum.
///
/// # Example
///
/// ```rust
/// use rust_pairing_heap::Heap;
/// use rust_pairing_heap::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    fn push(&mut self, item: T);

    /// Returns the best element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the best element
    fn pop(&mut self) -> Option<T>;

    /// Removes every element
    fn clear(&mut self);
}

/// Extended heap trait with `decrease_key` support
///
/// - `push_with_handle` returns a handle that can be used with `decrease_key`
/// - `decrease_key` moves an element towards the top of the heap
///
/// # Example
///
/// ```rust
/// use rust_pairing_heap::{DecreaseKeyHeap, Heap};
/// use rust_pairing_heap::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<i32> = Heap::new();
/// let handle = heap.push_with_handle(10);
/// heap.push(7);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some(&5));
/// ```
pub trait DecreaseKeyHeap<T>: Heap<T> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    fn push_with_handle(&mut self, item: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a value of equal or higher priority
    ///
    /// # Errors
    /// - `HeapError::InvalidPriority` if `item` is strictly worse than the current element
    /// - `HeapError::InvalidHandle` if the element was already removed
    fn decrease_key(&mut self, handle: &Self::Handle, item: T) -> Result<(), HeapError>;
}
