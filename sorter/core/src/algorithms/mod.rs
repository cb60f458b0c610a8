//! Instrumented Sorting Algorithms
//!
//! Each algorithm is an explicit state machine that holds only indices and,
//! for the recursive algorithms, a stack of pending frames. Calling `resume`
//! runs the algorithm synchronously up to its next highlight-worthy mutation
//! and returns the highlight; `None` means the array is sorted.
//!
//! [`Machine`] is the closed set of the six machines, selected by
//! [`AlgorithmKind`] when a sequence is constructed.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::highlight::Highlight;
use crate::order::SortOrder;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// The supported sorting algorithms
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl AlgorithmKind {
    /// All algorithms in menu order
    pub const ALL: [AlgorithmKind; 6] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Machine-friendly name (as accepted by `FromStr`)
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Human-friendly label
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    /// Next algorithm in menu order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Build a fresh machine for an array of `len` elements
    pub fn machine(self, len: usize, order: SortOrder) -> Machine {
        match self {
            Self::Bubble => Machine::Bubble(BubbleSort::new(len, order)),
            Self::Insertion => Machine::Insertion(InsertionSort::new(len, order)),
            Self::Selection => Machine::Selection(SelectionSort::new(len, order)),
            Self::Merge => Machine::Merge(MergeSort::new(len, order)),
            Self::Quick => Machine::Quick(QuickSort::new(len, order)),
            Self::Heap => Machine::Heap(HeapSort::new(len, order)),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted
            .strip_suffix("sort")
            .unwrap_or(wanted.as_str())
            .trim_end_matches(['_', '-', ' ']);
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// A running algorithm of any kind
#[derive(Clone, Debug)]
pub enum Machine {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Merge(MergeSort),
    Quick(QuickSort),
    Heap(HeapSort),
}

impl Machine {
    /// Advance to the next emission point
    ///
    /// `data` must be the array the machine was built for, unchanged by
    /// anything else since the previous call.
    pub fn resume<T: PartialOrd + Clone>(&mut self, data: &mut [T]) -> Option<Highlight> {
        match self {
            Self::Bubble(m) => m.resume(data),
            Self::Insertion(m) => m.resume(data),
            Self::Selection(m) => m.resume(data),
            Self::Merge(m) => m.resume(data),
            Self::Quick(m) => m.resume(data),
            Self::Heap(m) => m.resume(data),
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Bubble(_) => AlgorithmKind::Bubble,
            Self::Insertion(_) => AlgorithmKind::Insertion,
            Self::Selection(_) => AlgorithmKind::Selection,
            Self::Merge(_) => AlgorithmKind::Merge,
            Self::Quick(_) => AlgorithmKind::Quick,
            Self::Heap(_) => AlgorithmKind::Heap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("quick".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Quick));
        assert_eq!("Heap Sort".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Heap));
        assert_eq!("merge_sort".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Merge));
        assert_eq!(
            "bogo".parse::<AlgorithmKind>(),
            Err(SortError::UnknownAlgorithm("bogo".into()))
        );
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(AlgorithmKind::Heap.next(), AlgorithmKind::Bubble);
        assert_eq!(AlgorithmKind::Bubble.previous(), AlgorithmKind::Heap);
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.next().previous(), kind);
        }
    }

    #[test]
    fn test_machine_matches_kind() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.machine(10, SortOrder::Ascending).kind(), kind);
        }
    }

    #[test]
    fn test_every_machine_sorts() {
        let input = [8u32, 3, 3, 9, 0, 5, 1, 7];
        for kind in AlgorithmKind::ALL {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut data = input;
                let mut machine = kind.machine(data.len(), order);
                while machine.resume(&mut data).is_some() {}
                assert!(order.is_ordered(&data), "{kind} {order}: {data:?}");
            }
        }
    }
}
