//! Fixed-alphabet prefix tree over lowercase ASCII letters.
//!
//! Each node carries a 26-slot child array indexed by `c - 'a'`. Lookups are
//! a single array index per character at the cost of a fixed 104 bytes of
//! child slots per node. Input containing anything outside `'a'..='z'` is
//! rejected with [`TrieError::InvalidCharacter`] before the tree is touched.

use tracing::{trace, warn};

use crate::arena::{NodeArena, NodeId};
use crate::{Config, PrefixSet, Result, TrieError};

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

#[derive(Clone, Debug, Default)]
pub(crate) struct AlphabetNode {
    /// `NodeId::ROOT` marks an empty slot; the root is never a child.
    children: [NodeId; ALPHABET_SIZE],
    terminal: bool,
}

impl AlphabetNode {
    #[inline]
    fn child(&self, slot: usize) -> Option<NodeId> {
        let id = self.children[slot];
        (!id.is_root()).then_some(id)
    }
}

/// Check that every character of `input` is in `'a'..='z'`.
fn validate(input: &str) -> Result<()> {
    match input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_lowercase())
    {
        None => Ok(()),
        Some((position, character)) => {
            warn!(?character, position, "rejected out-of-alphabet input");
            Err(TrieError::InvalidCharacter {
                character,
                position,
            })
        }
    }
}

/// Child slots for an already validated input.
#[inline]
fn slots(input: &str) -> impl Iterator<Item = usize> + '_ {
    input.bytes().map(|b| (b - b'a') as usize)
}

/// A prefix tree restricted to lowercase ASCII letters.
///
/// ```rust
/// use prefix_trie::{AlphabetTree, TrieError};
///
/// let mut tree = AlphabetTree::new();
/// tree.insert("apple")?;
/// assert!(tree.has_prefix("app")?);
/// assert!(matches!(
///     tree.insert("Apple"),
///     Err(TrieError::InvalidCharacter { character: 'A', position: 0 })
/// ));
/// # Ok::<(), TrieError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AlphabetTree {
    nodes: NodeArena<AlphabetNode>,
    len: usize,
}

impl AlphabetTree {
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

    /// Insert `word`. Returns `Ok(true)` if it was not already present.
    ///
    /// A rejected word leaves the tree unchanged.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        validate(word)?;

        let mut current = NodeId::ROOT;
        for slot in slots(word) {
            current = match self.nodes[current].child(slot) {
                Some(next) => next,
                None => {
                    let child = self.nodes.alloc();
                    self.nodes[current].children[slot] = child;
                    trace!(slot, node = child.as_usize(), "allocated node");
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.terminal {
            return Ok(false);
        }
        node.terminal = true;
        self.len += 1;
        Ok(true)
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.find(word)?.is_some_and(|id| self.nodes[id].terminal))
    }

    /// Whether some inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(self.find(prefix)?.is_some())
    }

    fn find(&self, key: &str) -> Result<Option<NodeId>> {
        validate(key)?;
        let mut current = NodeId::ROOT;
        for slot in slots(key) {
            match self.nodes[current].child(slot) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Number of distinct words inserted.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every inserted word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = vec![(NodeId::ROOT, String::new())];
        while let Some((id, word)) = stack.pop() {
            let node = &self.nodes[id];
            for slot in (0..ALPHABET_SIZE).rev() {
                if let Some(child) = node.child(slot) {
                    let mut next = word.clone();
                    next.push((b'a' + slot as u8) as char);
                    stack.push((child, next));
                }
            }
            if node.terminal {
                out.push(word);
            }
        }
        out
    }

    /// Bytes reserved for node slots.
    pub fn memory_usage(&self) -> usize {
        self.nodes.memory_usage()
    }
}

impl Default for AlphabetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixSet for AlphabetTree {
    fn insert(&mut self, word: &str) -> Result<bool> {
        AlphabetTree::insert(self, word)
    }

    fn contains(&self, word: &str) -> Result<bool> {
        AlphabetTree::contains(self, word)
    }

    fn has_prefix(&self, prefix: &str) -> Result<bool> {
        AlphabetTree::has_prefix(self, prefix)
    }
}
