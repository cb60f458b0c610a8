//! Merge Sort
//!
//! Top-down merge sort with the recursion turned into an explicit task
//! stack. Sorting a range pushes its merge and then both halves, so the
//! left half is fully processed before the right half and both before the
//! merge, in the same order a recursive implementation would run them.
//!
//! A merge is atomic from the outside: it runs to completion and then emits
//! a single step highlighting the whole merged range.

use crate::highlight::Highlight;
use crate::order::SortOrder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    /// Sort `lo..=hi`
    Sort { lo: usize, hi: usize },
    /// Merge sorted runs `lo..=mid` and `mid + 1..=hi`
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Resumable merge sort
#[derive(Clone, Debug)]
pub struct MergeSort {
    order: SortOrder,
    stack: Vec<Task>,
}

impl MergeSort {
    pub fn new(len: usize, order: SortOrder) -> Self {
        let mut stack = Vec::new();
        if len > 0 {
            stack.push(Task::Sort { lo: 0, hi: len - 1 });
        }
        Self { order, stack }
    }

    /// Run until the next merge completes
    pub fn resume<T: PartialOrd + Clone>(&mut self, data: &mut [T]) -> Option<Highlight> {
        while let Some(task) = self.stack.pop() {
            match task {
                Task::Sort { lo, hi } => {
                    if lo >= hi {
                        continue;
                    }
                    let mid = lo + (hi - lo) / 2;
                    self.stack.push(Task::Merge { lo, mid, hi });
                    self.stack.push(Task::Sort { lo: mid + 1, hi });
                    self.stack.push(Task::Sort { lo, hi: mid });
                }
                Task::Merge { lo, mid, hi } => {
                    self.merge(data, lo, mid, hi);
                    return Some(Highlight::range(lo, hi));
                }
            }
        }
        None
    }

    /// Interleave both runs back into `data[lo..=hi]`, taking from the left
    /// run on ties
    fn merge<T: PartialOrd + Clone>(&self, data: &mut [T], lo: usize, mid: usize, hi: usize) {
        let left = data[lo..=mid].to_vec();
        let right = data[mid + 1..=hi].to_vec();

        let (mut i, mut j, mut k) = (0, 0, lo);
        while i < left.len() && j < right.len() {
            if self.order.precedes(&left[i], &right[j]) {
                data[k] = left[i].clone();
                i += 1;
            } else {
                data[k] = right[j].clone();
                j += 1;
            }
            k += 1;
        }

        for value in left[i..].iter().chain(&right[j..]) {
            data[k] = value.clone();
            k += 1;
        }
    }
}
