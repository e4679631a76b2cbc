//! Provenance tracking: which dotted paths were explicitly supplied.
//!
//! Populated once per resolution cycle and read-only afterward, except for
//! direct programmatic `mark` calls. Distinguishes "never touched" (absent)
//! from "touched but currently false-valued" (stored `false`).

use std::collections::BTreeMap;

/// Per-path explicitly-set flags, mirroring the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvenanceMap {
    entries: BTreeMap<String, bool>,
}

impl ProvenanceMap {
    /// Record whether a dotted path was explicitly supplied.
    pub fn mark(&mut self, path: impl Into<String>, set: bool) {
        self.entries.insert(path.into(), set);
    }

    /// Whether a path was explicitly supplied by any source.
    ///
    /// A section prefix (e.g. `axon`) reports `true` when any path beneath
    /// it is marked, matching a walk of the mirror tree.
    pub fn is_set(&self, path: &str) -> bool {
        if let Some(&set) = self.entries.get(path) {
            return set;
        }
        self.entries
            .iter()
            .any(|(key, &set)| set && is_child_of(key, path))
    }

    /// Iterate recorded paths and their flags, in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(key, &set)| (key.as_str(), set))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_child_of(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('.'))
}
