//! Heap Sort
//!
//! Builds a max-heap (min-heap when descending) bottom-up, then repeatedly
//! moves the root behind the shrinking heap and sifts the new root down.
//! Only sift-down swaps emit steps; a sift that finds the node already in
//! place ends without emitting. Moving the root to the end is silent.

use crate::highlight::Highlight;
use crate::order::SortOrder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Heapify internal nodes; `remaining` of them still need a sift
    Build { remaining: usize },
    /// Extract the root into `end`
    Extract { end: usize },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SiftDown {
    heap_size: usize,
    node: usize,
}

/// Resumable heap sort
#[derive(Clone, Debug)]
pub struct HeapSort {
    order: SortOrder,
    len: usize,
    phase: Phase,
    sift: Option<SiftDown>,
}

impl HeapSort {
    pub fn new(len: usize, order: SortOrder) -> Self {
        let phase = if len < 2 {
            Phase::Finished
        } else {
            Phase::Build { remaining: len / 2 }
        };
        Self {
            order,
            len,
            phase,
            sift: None,
        }
    }

    /// Run until the next sift-down swap
    pub fn resume<T: PartialOrd>(&mut self, data: &mut [T]) -> Option<Highlight> {
        loop {
            if let Some(sift) = self.sift {
                let winner = self.extreme_of_family(data, sift);
                if winner != sift.node {
                    data.swap(sift.node, winner);
                    self.sift = Some(SiftDown {
                        heap_size: sift.heap_size,
                        node: winner,
                    });
                    return Some(Highlight::pair(sift.node, winner));
                }
                self.sift = None;
            }

            match self.phase {
                Phase::Build { remaining } if remaining > 0 => {
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(SiftDown {
                        heap_size: self.len,
                        node: remaining - 1,
                    });
                }
                Phase::Build { .. } => {
                    self.phase = Phase::Extract { end: self.len - 1 };
                }
                Phase::Extract { end } if end > 0 => {
                    data.swap(0, end);
                    self.phase = Phase::Extract { end: end - 1 };
                    self.sift = Some(SiftDown {
                        heap_size: end,
                        node: 0,
                    });
                }
                Phase::Extract { .. } => {
                    self.phase = Phase::Finished;
                }
                Phase::Finished => return None,
            }
        }
    }

    /// Index of whichever of `node` and its children belongs at the root
    fn extreme_of_family<T: PartialOrd>(&self, data: &[T], sift: SiftDown) -> usize {
        let mut winner = sift.node;
        for child in [2 * sift.node + 1, 2 * sift.node + 2] {
            if child < sift.heap_size && self.order.strictly_precedes(&data[winner], &data[child])
            {
                winner = child;
            }
        }
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(data: &mut [u32], order: SortOrder) -> Vec<Highlight> {
        let mut sort = HeapSort::new(data.len(), order);
        std::iter::from_fn(|| sort.resume(data)).collect()
    }

    #[test]
    fn test_build_phase_first_swap() {
        let mut data = [1, 5, 3];
        let mut sort = HeapSort::new(data.len(), SortOrder::Ascending);

        // Root 1 loses to left child 5
        assert_eq!(sort.resume(&mut data), Some(Highlight::pair(0, 1)));
        assert_eq!(data, [5, 1, 3]);
    }

    #[test]
    fn test_sorts_both_directions() {
        let mut data = [9, 4, 7, 1, 8, 2, 2, 6];
        run(&mut data, SortOrder::Ascending);
        assert_eq!(data, [1, 2, 2, 4, 6, 7, 8, 9]);

        run(&mut data, SortOrder::Descending);
        assert_eq!(data, [9, 8, 7, 6, 4, 2, 2, 1]);
    }

    #[test]
    fn test_every_step_is_parent_child_pair() {
        let mut data: Vec<u32> = (0..32).collect();
        for h in run(&mut data, SortOrder::Ascending) {
            let idx: Vec<usize> = h.iter().map(|(i, _)| i).collect();
            assert_eq!(idx.len(), 2);
            let (parent, child) = (idx[0], idx[1]);
            assert!(child == 2 * parent + 1 || child == 2 * parent + 2);
        }
    }

    #[test]
    fn test_two_equal_values_emit_nothing() {
        let mut data = [3, 3];
        assert!(run(&mut data, SortOrder::Ascending).is_empty());
    }
}
