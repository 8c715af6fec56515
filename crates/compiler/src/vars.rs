//! Ordered variable mapping shared between the resolver and the compiler.
//!
//! Responsibilities:
//! - Preserve first-insertion order of variable names across merges.
//! - Apply last-writer-wins semantics for repeated names.
//! - Serialize as an array of pairs so ordering survives the wire.
//!
//! Does NOT handle:
//! - Layer precedence (see `layers`).
//! - Rendering to the artifact syntax (see `artifact`).
//!
//! Invariants:
//! - Names are unique; updating an existing name keeps its original position.
//! - Iteration order is exactly first-insertion order.

use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from variable name to value.
///
/// A later `insert` for an existing name replaces the value in place; the
/// name keeps the position of its first insertion. This is how layered
/// `.env` files override each other key by key without reshuffling the
/// compiled output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet {
    entries: Vec<(String, String)>,
}

impl VariableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a set holding a single entry.
    pub fn seeded(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(name, value);
        set
    }

    /// Insert or update a variable.
    ///
    /// An existing name keeps its position; only the value changes.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of variables in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no variables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// First name that repeats an earlier entry, if any.
    ///
    /// `insert` folds repeated names, but deserialization fills `entries`
    /// directly, so a decoded wire payload must be checked before use.
    pub(crate) fn first_duplicate(&self) -> Option<&str> {
        self.entries.iter().enumerate().find_map(|(i, (name, _))| {
            self.entries[..i]
                .iter()
                .any(|(seen, _)| seen == name)
                .then_some(name.as_str())
        })
    }
}
