//! Pairing Heap implementation
//!
//! A pairing heap is a self-adjusting, heap-ordered multiway tree with:
//! - O(1) insert and peek
//! - O(log n) amortized extract-min
//! - o(log n) amortized decrease_key
//!
//! # Two-pass combine
//!
//! Removing the root leaves its children as a list of independent trees. They
//! are reassembled in two passes: adjacent pairs are linked left to right,
//! then the pair results are folded right to left into one tree. A single
//! left-to-right fold would also be correct but loses the amortized bound.
//!
//! # Storage
//!
//! Nodes live in a slotmap-backed arena and are addressed
//! by generational keys. A [`PairingHandle`] wraps such a key, so a handle to
//! an element that has been extracted is reported as
//! [`HeapError::InvalidHandle`] instead of aliasing another element.

use crate::compare::{Compare, FnOrder, KeyOrder, MaxOrder, MinOrder};
use crate::storage::{NodeArena, NodeKey};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use smallvec::SmallVec;
use std::fmt;

/// Handle to an element in a Pairing heap
///
/// Stays valid until its element is extracted or the heap is cleared;
/// `decrease_key` never invalidates a handle. A handle is only meaningful
/// to the heap that returned it (and to clones of that heap).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    key: NodeKey,
}

impl Handle for PairingHandle {}

/// Pairing Heap
///
/// `C` decides priority; the default [`MinOrder`] makes this a min-heap.
///
/// # Example
///
/// ```rust
/// use rust_pairing_heap::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let handle = heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.extract_min(), Ok(3));
/// ```
pub struct PairingHeap<T, C = MinOrder> {
    nodes: NodeArena<T>,
    root: Option<NodeKey>,
    cmp: C,
}

impl<T: Ord> PairingHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_comparator(MinOrder)
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MinOrder)
    }
}

impl<T: Ord> PairingHeap<T, MaxOrder> {
    /// Creates an empty max-heap
    pub fn new_max() -> Self {
        Self::with_comparator(MaxOrder)
    }
}

impl<T, F> PairingHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by a `less-than` closure
    ///
    /// ```rust
    /// use rust_pairing_heap::pairing::PairingHeap;
    ///
    /// let mut heap = PairingHeap::new_by(|a: &f64, b: &f64| a > b);
    /// heap.insert(0.5);
    /// heap.insert(2.5);
    /// assert_eq!(heap.peek_min(), Ok(&2.5));
    /// ```
    pub fn new_by(less: F) -> Self {
        Self::with_comparator(FnOrder(less))
    }
}

impl<T, K: Ord, F> PairingHeap<T, KeyOrder<F>>
where
    F: Fn(&T) -> K,
{
    /// Creates an empty heap ordered by the smallest extracted key
    pub fn new_by_key(key: F) -> Self {
        Self::with_comparator(KeyOrder(key))
    }
}

impl<T, C> PairingHeap<T, C> {
    /// Creates an empty heap using `cmp` as the ordering
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::default(),
            root: None,
            cmp,
        }
    }

    /// Creates an empty heap using `cmp`, with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            root: None,
            cmp,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the ordering policy
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the top element without removing it
    ///
    /// # Errors
    /// `HeapError::Underflow` if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.root
            .map(|root| &self.nodes[root].value)
            .ok_or(HeapError::Underflow)
    }

    /// Returns the element behind `handle`
    ///
    /// # Errors
    /// `HeapError::InvalidHandle` if the element has been removed.
    pub fn get(&self, handle: &PairingHandle) -> Result<&T, HeapError> {
        self.nodes
            .get(handle.key)
            .map(|node| &node.value)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Returns true if the element behind `handle` is still in the heap
    pub fn contains(&self, handle: &PairingHandle) -> bool {
        self.nodes.contains(handle.key)
    }

    /// Removes every element, invalidating all handles
    ///
    /// Nodes are released iteratively: the walk goes down the leftmost-child
    /// chain one level at a time and releases that level's sibling chain. The
    /// child lists hanging off non-head siblings are queued and walked the
    /// same way. A node is released only after its links have been read, and
    /// the traversal uses no recursion, so deep or wide trees cannot exhaust
    /// the call stack.
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut pending: Vec<NodeKey> = Vec::new();
        let mut level = Some(root);

        while let Some(head) = level {
            level = self.nodes[head].child;

            let mut cursor = Some(head);
            while let Some(key) = cursor {
                let Some(node) = self.nodes.free(key) else {
                    break;
                };
                cursor = node.next;
                if key != head {
                    if let Some(child) = node.child {
                        pending.push(child);
                    }
                }
            }

            if level.is_none() {
                level = pending.pop();
            }
        }

        debug_assert_eq!(self.nodes.len(), 0);
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// Inserts an element, returning a handle for later `decrease_key` calls
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, value: T) -> PairingHandle {
        let key = self.nodes.alloc(value);
        let root = match self.root {
            Some(root) => self.link(root, key),
            None => key,
        };
        self.root = Some(root);
        PairingHandle { key }
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// `HeapError::Underflow` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let root = self.root.take().ok_or(HeapError::Underflow)?;
        let node = self.nodes.free(root).ok_or(HeapError::Underflow)?;

        if let Some(first) = node.child {
            let root = self.combine_siblings(first);
            self.root = Some(root);
        }

        Ok(node.value)
    }

    /// Replaces the element behind `handle` with `value`, which must not have
    /// lower priority than the element it replaces
    ///
    /// Equal values are accepted. On error the heap is left untouched.
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element has been removed
    /// - `HeapError::InvalidPriority` if `value` is strictly worse than the current element
    ///
    /// # Time Complexity
    /// o(log n) amortized
    pub fn decrease_key(&mut self, handle: &PairingHandle, value: T) -> Result<(), HeapError> {
        let key = handle.key;
        let node = self.nodes.get(key).ok_or(HeapError::InvalidHandle)?;
        if self.cmp.less(&node.value, &value) {
            return Err(HeapError::InvalidPriority);
        }

        self.nodes[key].value = value;

        if self.root == Some(key) {
            return Ok(());
        }

        self.cut(key);
        if let Some(root) = self.root {
            let root = self.link(root, key);
            self.root = Some(root);
        }
        Ok(())
    }

    /// Drains the heap, returning its elements from top to bottom
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the heap-order and link invariants of the whole tree
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return match self.nodes.len() {
                0 => Ok(()),
                n => Err(format!("empty heap still owns {} nodes", n)),
            };
        };

        if !self.nodes[root].is_detached() {
            return Err("root is linked into a sibling list".to_string());
        }

        let mut stack = vec![root];
        let mut reached = 1;

        while let Some(key) = stack.pop() {
            let parent = self
                .nodes
                .get(key)
                .ok_or_else(|| format!("dangling key {:?}", key))?;

            let mut prev: Option<NodeKey> = None;
            let mut cursor = parent.child;
            while let Some(child_key) = cursor {
                reached += 1;
                if reached > self.nodes.len() {
                    return Err("cycle in tree links".to_string());
                }

                let child = self
                    .nodes
                    .get(child_key)
                    .ok_or_else(|| format!("dangling child key {:?}", child_key))?;

                let linked = match prev {
                    None => child.parent == Some(key) && child.prev.is_none(),
                    Some(prev) => child.parent.is_none() && child.prev == Some(prev),
                };
                if !linked {
                    return Err(format!("bad back link on {:?}", child_key));
                }
                if self.cmp.less(&child.value, &parent.value) {
                    return Err(format!("heap order violated below {:?}", key));
                }

                stack.push(child_key);
                prev = Some(child_key);
                cursor = child.next;
            }
        }

        if reached != self.nodes.len() {
            return Err(format!(
                "{} nodes reachable, {} allocated",
                reached,
                self.nodes.len()
            ));
        }
        Ok(())
    }

    /// Links two detached trees, returning the root of the result
    ///
    /// The root with lower priority becomes the new head child of the other;
    /// on a tie `a` stays on top.
    fn link(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert!(self.nodes[a].is_detached() && self.nodes[b].is_detached());

        if self.cmp.less(&self.nodes[b].value, &self.nodes[a].value) {
            self.adopt(b, a);
            b
        } else {
            self.adopt(a, b);
            a
        }
    }

    /// Pushes `child` in front of `parent`'s child list
    fn adopt(&mut self, parent: NodeKey, child: NodeKey) {
        let old_head = self.nodes[parent].child.replace(child);
        if let Some(head) = old_head {
            let head = &mut self.nodes[head];
            head.parent = None;
            head.prev = Some(child);
        }

        let child = &mut self.nodes[child];
        child.parent = Some(parent);
        child.prev = None;
        child.next = old_head;
    }

    /// Merges a sibling list into one tree using the two-pass scheme
    fn combine_siblings(&mut self, first: NodeKey) -> NodeKey {
        let mut trees: SmallVec<[NodeKey; 16]> = SmallVec::new();
        let mut cursor = Some(first);
        while let Some(key) = cursor {
            let node = &mut self.nodes[key];
            cursor = node.next.take();
            node.parent = None;
            node.prev = None;
            trees.push(key);
        }

        let count = trees.len();
        if count == 1 {
            return trees[0];
        }

        // First pass: link pairs left to right; an odd last tree stays put
        let mut i = 0;
        while i + 1 < count {
            trees[i] = self.link(trees[i], trees[i + 1]);
            i += 2;
        }

        // Second pass: fold the pair results right to left
        let mut j = if count % 2 == 1 { count - 1 } else { count - 2 };
        let mut acc = trees[j];
        while j >= 2 {
            j -= 2;
            acc = self.link(trees[j], acc);
        }
        acc
    }

    /// Detaches `key` and its subtree from its sibling list
    fn cut(&mut self, key: NodeKey) {
        let node = &mut self.nodes[key];
        let parent = node.parent.take();
        let prev = node.prev.take();
        let next = node.next.take();

        if let Some(next) = next {
            let next = &mut self.nodes[next];
            next.parent = parent;
            next.prev = prev;
        }

        if let Some(parent) = parent {
            self.nodes[parent].child = next;
        } else if let Some(prev) = prev {
            self.nodes[prev].next = next;
        }
    }
}

impl<T, C> Drop for PairingHeap<T, C> {
    fn drop(&mut self) {
        if self.root.is_some() {
            self.clear();
        }
    }
}

impl<T: Ord> Default for PairingHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone> Clone for PairingHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("len", &self.len())
            .field("top", &self.peek_min().ok())
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for PairingHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for PairingHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    fn clear(&mut self) {
        PairingHeap::clear(self)
    }
}

impl<T, C: Compare<T> + Default> DecreaseKeyHeap<T> for PairingHeap<T, C> {
    type Handle = PairingHandle;

    fn push_with_handle(&mut self, item: T) -> Self::Handle {
        self.insert(item)
    }

    fn decrease_key(&mut self, handle: &Self::Handle, item: T) -> Result<(), HeapError> {
        PairingHeap::decrease_key(self, handle, item)
    }
}
