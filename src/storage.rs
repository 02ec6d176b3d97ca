//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through generational
//! [`NodeKey`]s instead of pointers.
//!
//! # Characteristics
//! - Contiguous memory allocation (better cache locality than one box per node)
//! - Freed slots are reused by later inserts
//! - Generational keys detect stale references: once a node is removed, every
//!   key that named it stops resolving, even after its slot is reused
//!
//! # Link fields
//!
//! Children are kept in leftmost-child / right-sibling form. The back
//! reference is split in two explicit fields so that no structural test is
//! needed to interpret it:
//!
//! | node position          | `parent`      | `prev`             |
//! |------------------------|---------------|--------------------|
//! | tree root              | `None`        | `None`             |
//! | head of a child list   | `Some(owner)` | `None`             |
//! | any later sibling      | `None`        | `Some(left neighbor)` |

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational key addressing a node in a [`NodeArena`]
    pub struct NodeKey;
}

/// A single heap node and its tree links
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Owner of the child list, set only on the head child
    pub(crate) parent: Option<NodeKey>,
    /// Left neighbor, set only on non-head siblings
    pub(crate) prev: Option<NodeKey>,
    /// Head of this node's child list
    pub(crate) child: Option<NodeKey>,
    /// Right neighbor in the parent's child list
    pub(crate) next: Option<NodeKey>,
}

impl<T> Node<T> {
    fn detached(value: T) -> Self {
        Node {
            value,
            parent: None,
            prev: None,
            child: None,
            next: None,
        }
    }

    /// True if the node is not linked into any sibling list
    #[inline]
    pub(crate) fn is_detached(&self) -> bool {
        self.parent.is_none() && self.prev.is_none() && self.next.is_none()
    }
}

/// Owner of every node of one heap
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<T> NodeArena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocates a detached single-node tree
    #[inline]
    pub(crate) fn alloc(&mut self, value: T) -> NodeKey {
        self.nodes.insert(Node::detached(value))
    }

    /// Releases a node, returning its contents
    ///
    /// Returns `None` if the key no longer names a live node.
    #[inline]
    pub(crate) fn free(&mut self, key: NodeKey) -> Option<Node<T>> {
        self.nodes.remove(key)
    }

    #[inline]
    pub(crate) fn get(&self, key: NodeKey) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    #[inline]
    pub(crate) fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }
}

// Keys handed to indexing are always live tree members; a miss is a broken
// link invariant, so the slotmap panic is the right outcome.
impl<T> std::ops::Index<NodeKey> for NodeArena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, key: NodeKey) -> &Node<T> {
        &self.nodes[key]
    }
}

impl<T> std::ops::IndexMut<NodeKey> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut Node<T> {
        &mut self.nodes[key]
    }
}
