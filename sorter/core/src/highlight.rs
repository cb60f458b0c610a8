//! Highlight Map
//!
//! A highlight tags the array indices touched by the step that was just
//! emitted. Markers are roles, not colors: the surface decides how a
//! primary or secondary index looks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Visual role of a highlighted index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// The index the algorithm is working on
    Primary,
    /// The index it was compared or exchanged with
    Secondary,
}

/// Mapping from array index to marker role, produced with each step
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Highlight {
    marks: BTreeMap<usize, Marker>,
}

impl Highlight {
    /// Empty highlight (used for the final render)
    pub fn none() -> Self {
        Self::default()
    }

    /// Two indices touched by a swap or shift
    ///
    /// When both indices are the same, the secondary role wins.
    pub fn pair(primary: usize, secondary: usize) -> Self {
        let mut marks = BTreeMap::new();
        marks.insert(primary, Marker::Primary);
        marks.insert(secondary, Marker::Secondary);
        Self { marks }
    }

    /// Every index in `lo..=hi` marked primary
    pub fn range(lo: usize, hi: usize) -> Self {
        Self {
            marks: (lo..=hi).map(|i| (i, Marker::Primary)).collect(),
        }
    }

    /// Marker at `index`, if any
    pub fn get(&self, index: usize) -> Option<Marker> {
        self.marks.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Highest highlighted index
    pub fn max_index(&self) -> Option<usize> {
        self.marks.keys().next_back().copied()
    }

    /// Iterate `(index, marker)` in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Marker)> + '_ {
        self.marks.iter().map(|(&i, &m)| (i, m))
    }
}
