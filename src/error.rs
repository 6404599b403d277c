//! Error type shared by every tree variant and the script harness.

use thiserror::Error;

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Everything that can go wrong while building, querying or scripting a trie.
#[derive(Error, Debug)]
pub enum TrieError {
    /// A character outside the fixed alphabet reached an [`AlphabetTree`](crate::AlphabetTree).
    #[error("character {character:?} at position {position} is outside the alphabet 'a'..='z'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character (not byte) index within the input.
        position: usize,
    },

    /// Building or reading the FST snapshot failed.
    #[error("FST error: {0}")]
    Fst(#[from] fst::Error),

    /// The script named an operation this harness does not know.
    #[error("unknown operation {name:?} at step {step}")]
    UnknownOperation {
        /// Index of the call in the script.
        step: usize,
        /// The name as given.
        name: String,
    },

    /// An operation received the wrong number of arguments.
    #[error("operation {name:?} at step {step} takes {expected} argument(s), got {actual}")]
    Arity {
        /// Index of the call in the script.
        step: usize,
        /// The operation name.
        name: String,
        /// Argument count the operation takes.
        expected: usize,
        /// Argument count supplied.
        actual: usize,
    },

    /// A call was issued before the tree was constructed.
    #[error("step {step} runs before the tree is constructed")]
    NotConstructed {
        /// Index of the call in the script.
        step: usize,
    },

    /// The constructor appeared more than once.
    #[error("step {step} constructs the tree a second time")]
    AlreadyConstructed {
        /// Index of the call in the script.
        step: usize,
    },

    /// Operations and arguments (or results and expectations) differ in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A call produced a result other than the expected one.
    #[error("step {step}: expected {expected:?}, got {actual:?}")]
    Mismatch {
        /// Index of the call in the script.
        step: usize,
        /// Result the script expected.
        expected: Option<bool>,
        /// Result the tree produced.
        actual: Option<bool>,
    },

    /// The script JSON could not be parsed.
    #[error("malformed script: {0}")]
    Json(#[from] serde_json::Error),
}
