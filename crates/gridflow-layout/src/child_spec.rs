#![forbid(unsafe_code)]

//! Per-child layout tables and their side table.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{BreakFlagTable, PercentageTable};

/// Column width, column offset and forced-break tables for one child.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ChildLayoutSpec {
    /// Column width as a percentage of the content width.
    pub width: PercentageTable,
    /// Space skipped before the column, as a percentage of the content width.
    pub offset: PercentageTable,
    /// Forced row breaks before the child.
    pub breaks: BreakFlagTable,
}

impl Default for ChildLayoutSpec {
    fn default() -> Self {
        Self {
            width: PercentageTable::default_width(),
            offset: PercentageTable::default_offset(),
            breaks: BreakFlagTable::NONE,
        }
    }
}

/// Side table of [`ChildLayoutSpec`]s keyed by child identity.
///
/// Reads through [`entry`](Self::entry) insert the default spec the first
/// time a child is seen, so later reads return the same record. Use
/// [`get`](Self::get) to look without materialising.
#[derive(Debug, Clone)]
pub struct ChildSpecs<K> {
    specs: HashMap<K, ChildLayoutSpec>,
}

impl<K> Default for ChildSpecs<K> {
    fn default() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ChildSpecs<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec for `id`, inserting the default if absent.
    pub fn entry(&mut self, id: K) -> &mut ChildLayoutSpec {
        self.specs.entry(id).or_default()
    }

    /// Spec for `id` if one has been recorded.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&ChildLayoutSpec> {
        self.specs.get(id)
    }

    /// Replace the whole spec for `id`.
    pub fn insert(&mut self, id: K, spec: ChildLayoutSpec) -> Option<ChildLayoutSpec> {
        self.specs.insert(id, spec)
    }

    /// Drop the spec of a removed child.
    pub fn remove(&mut self, id: &K) -> Option<ChildLayoutSpec> {
        self.specs.remove(id)
    }

    /// Keep only the specs whose id passes `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.specs.retain(|id, _| keep(id));
    }

    /// Whether `id` has a recorded spec.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.specs.contains_key(id)
    }

    /// Number of recorded specs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True if no spec has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
