//! Node arena shared by the tree variants.
//!
//! Nodes are stored contiguously in a `Vec` and refer to their children by a
//! 32-bit index instead of a pointer. This keeps child references at 4 bytes,
//! makes the whole tree one allocation to drop (no recursive destructor), and
//! keeps siblings close together in memory.
//!
//! Slot 0 is always the root. The root is never anybody's child, so
//! [`NodeId::ROOT`] doubles as the "no child" marker in fixed-size child
//! arrays.

use std::ops::{Index, IndexMut};

/// A 32-bit index into a [`NodeArena`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// # Panics
    /// Panics if the index does not fit in 32 bits.
    #[inline]
    fn from_usize(idx: usize) -> Self {
        assert!(idx < u32::MAX as usize, "node arena index too large");
        Self(idx as u32)
    }

    #[inline]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// Growable node storage. Nodes are only ever appended.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<N> {
    nodes: Vec<N>,
}

impl<N: Default> NodeArena<N> {
    /// Create an arena holding only a default root node.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(N::default());
        Self { nodes }
    }

    /// Append a default node and return its index.
    #[inline]
    pub(crate) fn alloc(&mut self) -> NodeId {
        let id = NodeId::from_usize(self.nodes.len());
        self.nodes.push(N::default());
        id
    }
}

impl<N> NodeArena<N> {
    /// Number of nodes, root included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Bytes reserved for node slots.
    pub(crate) fn memory_usage(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<N>()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, N> {
        self.nodes.iter_mut()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }
}

impl<N> Index<NodeId> for NodeArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, id: NodeId) -> &N {
        &self.nodes[id.as_usize()]
    }
}

impl<N> IndexMut<NodeId> for NodeArena<N> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        &mut self.nodes[id.as_usize()]
    }
}
