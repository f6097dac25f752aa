//! Command sequencing relation

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Whether `dst` may directly follow `src`
///
/// Catalogs may be edited by hand, so lowercase `y`/`n` are accepted and any
/// other symbol reads back as [`CompatibilityState::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityState {
    /// Sequencing observed or permitted
    #[serde(rename = "Y", alias = "y")]
    Allowed,
    /// Sequencing forbidden by the source text
    #[serde(rename = "N", alias = "n")]
    Forbidden,
    /// No evidence either way
    #[serde(rename = "UNKNOWN", other)]
    Unknown,
}

impl CompatibilityState {
    /// Table/CSV symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityState::Allowed => "Y",
            CompatibilityState::Forbidden => "N",
            CompatibilityState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CompatibilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse directed relation `src → {dst → state}`
///
/// Pairs never observed are absent; callers pick the display default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityMatrix(BTreeMap<String, BTreeMap<String, CompatibilityState>>);

impl CompatibilityMatrix {
    /// Empty relation
    pub fn new() -> Self {
        Self::default()
    }

    /// State recorded for `src → dst`, if any
    pub fn get(&self, src: &str, dst: &str) -> Option<CompatibilityState> {
        self.0.get(src).and_then(|row| row.get(dst)).copied()
    }

    /// Record a state for `src → dst`, replacing any previous one
    pub fn set(&mut self, src: &str, dst: &str, state: CompatibilityState) {
        self.0
            .entry(src.to_string())
            .or_default()
            .insert(dst.to_string(), state);
    }

    /// Successor map for `src`
    pub fn row(&self, src: &str) -> Option<&BTreeMap<String, CompatibilityState>> {
        self.0.get(src)
    }

    /// Iterate rows in predecessor order
    pub fn rows(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, CompatibilityState>)> {
        self.0.iter()
    }

    /// True when no pair has been recorded
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Number of recorded pairs
    pub fn pair_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Every command appearing as predecessor or successor, sorted
    pub fn command_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for (src, row) in &self.0 {
            names.insert(src.clone());
            names.extend(row.keys().cloned());
        }
        names.into_iter().collect()
    }
}

/// Matrix as attached to a requirement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityAttachment {
    /// Human-readable provenance of the matrix
    #[serde(default)]
    pub description: String,

    /// The relation itself
    #[serde(default)]
    pub matrix: CompatibilityMatrix,

    /// Display value for absent pairs; empty means unset
    #[serde(default)]
    pub default: String,
}

impl CompatibilityAttachment {
    /// True when nothing has been attached
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.matrix.is_empty() && self.default.is_empty()
    }
}
