//! The dynamic-alphabet prefix tree.

use smallvec::SmallVec;
use tracing::trace;

use crate::arena::{NodeArena, NodeId};
use crate::frozen::FrozenPrefixTree;
use crate::{Config, PrefixSet, Result};

/// Children stored inline before the list spills to the heap.
const INLINE_CHILDREN: usize = 4;

/// A node keyed by arbitrary `char`.
///
/// Children are kept sorted by character so lookups can binary search and
/// traversal yields words in lexicographic order.
#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    children: SmallVec<[(char, NodeId); INLINE_CHILDREN]>,
    terminal: bool,
}

impl Node {
    #[inline]
    fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// A prefix tree over arbitrary Unicode strings.
///
/// Supports insertion, exact-match lookup and prefix-match lookup. The tree
/// only grows: there is no removal.
///
/// ```rust
/// use prefix_trie::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// tree.insert("apple");
/// assert!(tree.contains("apple"));
/// assert!(!tree.contains("app"));
/// assert!(tree.has_prefix("app"));
/// ```
#[derive(Clone, Debug)]
pub struct PrefixTree {
    nodes: NodeArena<Node>,
    /// Number of terminal nodes.
    len: usize,
}

impl PrefixTree {
    /// Create an empty tree holding only the root.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty tree with the node arena pre-sized per `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            nodes: NodeArena::with_capacity(config.initial_capacity),
            len: 0,
        }
    }

    /// Insert `word`. Returns `true` if it was not already present.
    ///
    /// Inserting the empty string marks the root terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            let slot = self.nodes[current]
                .children
                .binary_search_by_key(&c, |&(k, _)| k);
            current = match slot {
                Ok(i) => self.nodes[current].children[i].1,
                Err(i) => {
                    let child = self.nodes.alloc();
                    self.nodes[current].children.insert(i, (c, child));
                    trace!(?c, node = child.as_usize(), "allocated node");
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|id| self.nodes[id].terminal)
    }

    /// Whether some inserted word starts with `prefix`. Always true for `""`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Follow `key` from the root.
    fn find(&self, key: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in key.chars() {
            current = self.nodes[current].child(c)?;
        }
        Some(current)
    }

    /// Number of distinct words inserted.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word (not even `""`) has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Longest inserted word that is a prefix of `text`.
    pub fn longest_prefix_of<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut current = NodeId::ROOT;
        let mut best = self.nodes[current].terminal.then_some(0);
        for (pos, c) in text.char_indices() {
            match self.nodes[current].child(c) {
                Some(next) => current = next,
                None => break,
            }
            if self.nodes[current].terminal {
                best = Some(pos + c.len_utf8());
            }
        }
        best.map(|end| &text[..end])
    }

    /// Iterate over every inserted word in lexicographic order.
    pub fn words(&self) -> Words<'_> {
        Words {
            nodes: &self.nodes,
            stack: vec![(NodeId::ROOT, String::new())],
        }
    }

    /// Iterate over every inserted word that starts with `prefix`, in
    /// lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let stack = match self.find(prefix) {
            Some(id) => vec![(id, prefix.to_owned())],
            None => Vec::new(),
        };
        Words {
            nodes: &self.nodes,
            stack,
        }
    }

    /// Approximate heap bytes held by the tree.
    pub fn memory_usage(&self) -> usize {
        let spilled: usize = self
            .nodes
            .iter()
            .filter(|n| n.children.spilled())
            .map(|n| n.children.capacity() * std::mem::size_of::<(char, NodeId)>())
            .sum();
        self.nodes.memory_usage() + spilled
    }

    /// Release spare arena and child-list capacity.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
        for node in self.nodes.iter_mut() {
            node.children.shrink_to_fit();
        }
    }

    /// Build an immutable FST snapshot of the current words.
    pub fn freeze(&self) -> Result<FrozenPrefixTree> {
        FrozenPrefixTree::from_tree(self)
    }

    /// Panic unless the arena forms a strict out-tree rooted at slot 0 with
    /// sorted child lists and `len` terminal nodes.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        let mut parents = vec![0usize; self.nodes.len()];
        let mut terminals = 0usize;
        for node in self.nodes.iter() {
            terminals += usize::from(node.terminal);
            assert!(
                node.children.windows(2).all(|w| w[0].0 < w[1].0),
                "child list must be strictly sorted"
            );
            for &(_, child) in &node.children {
                assert!(!child.is_root(), "root must never be a child");
                parents[child.as_usize()] += 1;
            }
        }
        assert_eq!(parents[0], 0);
        assert!(
            parents[1..].iter().all(|&p| p == 1),
            "every non-root node must have exactly one parent"
        );
        assert_eq!(terminals, self.len, "terminal count must match len");
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixSet for PrefixTree {
    fn insert(&mut self, word: &str) -> Result<bool> {
        Ok(PrefixTree::insert(self, word))
    }

    fn contains(&self, word: &str) -> Result<bool> {
        Ok(PrefixTree::contains(self, word))
    }

    fn has_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(PrefixTree::has_prefix(self, prefix))
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Depth-first word iterator over a [`PrefixTree`].
pub struct Words<'a> {
    nodes: &'a NodeArena<Node>,
    stack: Vec<(NodeId, String)>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((id, word)) = self.stack.pop() {
            let node = &self.nodes[id];
            for &(c, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(word.len() + c.len_utf8());
                next.push_str(&word);
                next.push(c);
                self.stack.push((child, next));
            }
            if node.terminal {
                return Some(word);
            }
        }
        None
    }
}
