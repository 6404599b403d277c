//! Lock-guarded [`PrefixTree`] for use across threads.

use parking_lot::RwLock;

use crate::{Config, FrozenPrefixTree, PrefixTree, Result};

/// A [`PrefixTree`] behind a reader/writer lock.
///
/// Queries take the read lock and run concurrently with each other; an
/// insert takes the write lock and excludes everything else. Share it
/// through an `Arc`.
#[derive(Debug, Default)]
pub struct SharedPrefixTree {
    inner: RwLock<PrefixTree>,
}

impl SharedPrefixTree {
    /// Create an empty shared tree.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty shared tree with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: RwLock::new(PrefixTree::with_config(config)),
        }
    }

    /// Insert `word`. Returns `true` if it was not already present.
    pub fn insert(&self, word: &str) -> bool {
        self.inner.write().insert(word)
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    /// Whether some inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.inner.read().has_prefix(prefix)
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Words starting with `prefix`, collected under a single read lock.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.inner.read().words_with_prefix(prefix).collect()
    }

    /// Snapshot the current words.
    pub fn freeze(&self) -> Result<FrozenPrefixTree> {
        self.inner.read().freeze()
    }

    /// Unwrap the tree.
    pub fn into_inner(self) -> PrefixTree {
        self.inner.into_inner()
    }
}

impl From<PrefixTree> for SharedPrefixTree {
    fn from(tree: PrefixTree) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }
}
