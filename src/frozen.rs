//! Immutable snapshot of a [`PrefixTree`] stored as an FST set.
//!
//! The FST (Finite State Transducer) shares both prefixes and suffixes, so a
//! frozen snapshot is typically far smaller than the arena it was built from.
//!
//! Trade-offs:
//! - Immutable once built
//! - Must be built from sorted input, which `PrefixTree::words` provides
//!   (UTF-8 byte order matches `char` order)

use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Set, SetBuilder};
use tracing::debug;

use crate::{PrefixTree, Result};

/// A read-only prefix tree backed by an FST set.
pub struct FrozenPrefixTree {
    set: Set<Vec<u8>>,
}

impl FrozenPrefixTree {
    /// Build a snapshot holding every word of `tree`.
    pub fn from_tree(tree: &PrefixTree) -> Result<Self> {
        let mut builder = SetBuilder::memory();
        for word in tree.words() {
            builder.insert(word.as_bytes())?;
        }
        let set = Set::new(builder.into_inner()?)?;
        debug!(
            words = set.len(),
            fst_bytes = set.as_fst().size(),
            nodes = tree.node_count(),
            "froze prefix tree"
        );
        Ok(Self { set })
    }

    /// Whether `word` is in the snapshot.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Whether some word of the snapshot starts with `prefix`.
    ///
    /// Walks the transducer byte by byte. Every state of a built FST reaches a
    /// final state, so surviving the walk is enough.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let fst = self.set.as_fst();
        let mut node = fst.root();
        for &b in prefix.as_bytes() {
            match node.find_input(b) {
                Some(i) => node = fst.node(node.transition(i).addr),
                None => return false,
            }
        }
        true
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the snapshot holds no words.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Bytes used by the FST.
    pub fn memory_usage(&self) -> usize {
        self.set.as_fst().size()
    }

    /// Every word in lexicographic order.
    pub fn words(&self) -> Result<Vec<String>> {
        Ok(self.set.stream().into_strs()?)
    }

    /// Every word starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let matcher = Str::new(prefix).starts_with();
        Ok(self.set.search(matcher).into_stream().into_strs()?)
    }
}

impl std::fmt::Debug for FrozenPrefixTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrozenPrefixTree")
            .field("len", &self.len())
            .field("fst_bytes", &self.memory_usage())
            .finish()
    }
}
