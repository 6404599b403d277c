//! # prefix-trie
//!
//! A prefix tree (trie) supporting insertion, exact-match lookup and
//! prefix-match lookup over a stream of strings.
//!
//! ## Variants
//!
//! - [`PrefixTree`]: the default. Children are keyed by arbitrary `char`, so
//!   any Unicode input is accepted.
//! - [`AlphabetTree`]: children are a fixed 26-slot array for `'a'..='z'`.
//!   Out-of-alphabet input is rejected with [`TrieError::InvalidCharacter`].
//! - [`SharedPrefixTree`]: a `PrefixTree` behind a reader/writer lock.
//! - [`FrozenPrefixTree`]: an immutable FST snapshot of a `PrefixTree`.
//!
//! Both mutable variants store their nodes in an arena and link children by
//! 32-bit index. Trees only grow; there is no removal.
//!
//! Inserting the empty string marks the root terminal, so `contains("")` is
//! true only after `insert("")`. `has_prefix("")` is always true.
//!
//! ## Example
//!
//! ```rust
//! use prefix_trie::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("apple");
//! assert!(tree.contains("apple"));
//! assert!(!tree.contains("app"));
//! assert!(tree.has_prefix("app"));
//!
//! tree.insert("app");
//! assert!(tree.contains("app"));
//!
//! let completions: Vec<String> = tree.words_with_prefix("ap").collect();
//! assert_eq!(completions, vec!["app", "apple"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod alphabet;
mod arena;
mod error;
mod frozen;
pub mod script;
mod shared;
mod tree;

pub use alphabet::{AlphabetTree, ALPHABET_SIZE};
pub use error::{Result, TrieError};
pub use frozen::FrozenPrefixTree;
pub use script::{Call, Case, Script};
pub use shared::SharedPrefixTree;
pub use tree::{PrefixTree, Words};

/// Configuration shared by the tree variants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of node slots to reserve up front, root included.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

/// The insert / exact-match / prefix-match surface common to the mutable
/// tree variants.
///
/// [`PrefixTree`] never fails; [`AlphabetTree`] fails on characters outside
/// its alphabet.
pub trait PrefixSet {
    /// Insert `word`. Returns `true` if it was not already present.
    fn insert(&mut self, word: &str) -> Result<bool>;

    /// Whether `word` was inserted as a complete word.
    fn contains(&self, word: &str) -> Result<bool>;

    /// Whether some inserted word starts with `prefix`.
    fn has_prefix(&self, prefix: &str) -> Result<bool>;
}


#[cfg(test)]
mod proptests;
