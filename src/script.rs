//! Call/response harness for driving a tree through a fixed call sequence.
//!
//! A script constructs the tree once, then issues inserts and queries in
//! order. Each call yields `None` (constructor, insert) or `Some(bool)`
//! (queries), so a run lines up with the usual expected-output row:
//!
//! ```text
//! operations: ["Trie", "insert", "search", "search", "startsWith", "insert", "search"]
//! arguments:  [[],     ["apple"],["apple"],["app"],  ["app"],      ["app"],  ["app"]]
//! expected:   [null,   null,     true,     false,    true,         null,     true]
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{PrefixSet, Result, TrieError};

/// One step of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Construct the tree. Must come first, exactly once.
    Construct,
    /// Insert a word.
    Insert(String),
    /// Exact-match lookup.
    Contains(String),
    /// Prefix-match lookup.
    HasPrefix(String),
}

impl Call {
    /// Parse an operation name and its arguments.
    ///
    /// `step` is only used for error reporting.
    pub fn parse(step: usize, name: &str, mut args: Vec<String>) -> Result<Self> {
        let expected = match name {
            "Trie" | "Construct" => 0,
            "insert" | "Insert" | "search" | "Search" | "Contains" | "startsWith"
            | "StartsWith" | "HasPrefix" => 1,
            _ => {
                return Err(TrieError::UnknownOperation {
                    step,
                    name: name.to_owned(),
                })
            }
        };
        if args.len() != expected {
            return Err(TrieError::Arity {
                step,
                name: name.to_owned(),
                expected,
                actual: args.len(),
            });
        }

        Ok(match (name, args.pop()) {
            (_, None) => Call::Construct,
            ("insert" | "Insert", Some(word)) => Call::Insert(word),
            ("search" | "Search" | "Contains", Some(word)) => Call::Contains(word),
            (_, Some(prefix)) => Call::HasPrefix(prefix),
        })
    }
}

/// An ordered sequence of calls against one tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    calls: Vec<Call>,
}

impl Script {
    /// Wrap an explicit call list.
    pub fn new(calls: Vec<Call>) -> Self {
        Self { calls }
    }

    /// Parse the JSON `operations` and `arguments` arrays.
    pub fn from_json(operations: &str, arguments: &str) -> Result<Self> {
        let operations: Vec<String> = serde_json::from_str(operations)?;
        let arguments: Vec<Vec<String>> = serde_json::from_str(arguments)?;
        Self::from_parts(&operations, arguments)
    }

    fn from_parts(operations: &[String], arguments: Vec<Vec<String>>) -> Result<Self> {
        if operations.len() != arguments.len() {
            return Err(TrieError::LengthMismatch {
                left: operations.len(),
                right: arguments.len(),
            });
        }
        let calls = operations
            .iter()
            .zip(arguments)
            .enumerate()
            .map(|(step, (name, args))| Call::parse(step, name, args))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { calls })
    }

    /// The parsed calls.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Run against a fresh `T`, returning one result per call.
    pub fn run<T: PrefixSet + Default>(&self) -> Result<Vec<Option<bool>>> {
        let mut tree: Option<T> = None;
        let mut results = Vec::with_capacity(self.calls.len());

        for (step, call) in self.calls.iter().enumerate() {
            let result = match call {
                Call::Construct => {
                    if tree.is_some() {
                        return Err(TrieError::AlreadyConstructed { step });
                    }
                    tree = Some(T::default());
                    None
                }
                Call::Insert(word) => {
                    let tree = tree.as_mut().ok_or(TrieError::NotConstructed { step })?;
                    tree.insert(word)?;
                    None
                }
                Call::Contains(word) => {
                    let tree = tree.as_ref().ok_or(TrieError::NotConstructed { step })?;
                    Some(tree.contains(word)?)
                }
                Call::HasPrefix(prefix) => {
                    let tree = tree.as_ref().ok_or(TrieError::NotConstructed { step })?;
                    Some(tree.has_prefix(prefix)?)
                }
            };
            debug!(step, ?call, ?result, "script step");
            results.push(result);
        }

        Ok(results)
    }

    /// Run against a fresh `T` and compare with `expected`, failing at the
    /// first differing step.
    pub fn check<T: PrefixSet + Default>(&self, expected: &[Option<bool>]) -> Result<()> {
        if expected.len() != self.calls.len() {
            return Err(TrieError::LengthMismatch {
                left: self.calls.len(),
                right: expected.len(),
            });
        }
        let actual = self.run::<T>()?;
        for (step, (&want, &got)) in expected.iter().zip(&actual).enumerate() {
            if want != got {
                return Err(TrieError::Mismatch {
                    step,
                    expected: want,
                    actual: got,
                });
            }
        }
        info!(steps = actual.len(), "script passed");
        Ok(())
    }
}

/// A complete test case: operations, arguments and the expected results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Case {
    /// Operation names.
    pub operations: Vec<String>,
    /// One argument list per operation.
    pub arguments: Vec<Vec<String>>,
    /// One expected result per operation; `null` for construct and insert.
    pub expected: Vec<Option<bool>>,
}

impl Case {
    /// Parse a `{"operations": .., "arguments": .., "expected": ..}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the operations into a [`Script`].
    pub fn script(&self) -> Result<Script> {
        Script::from_parts(&self.operations, self.arguments.clone())
    }

    /// Run the case against a fresh `T`.
    pub fn verify<T: PrefixSet + Default>(&self) -> Result<()> {
        self.script()?.check::<T>(&self.expected)
    }
}
