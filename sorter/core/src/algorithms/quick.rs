//! Quick Sort
//!
//! Lomuto partition around the last element of each range. Every swap made
//! during the partition scan emits a step, including swaps of an element
//! with itself. Placing the pivot after the scan is a swap that does not
//! emit; the next emitted step already shows the pivot in its final slot.

use crate::highlight::Highlight;
use crate::order::SortOrder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    /// Sort `lo..=hi`
    Range { lo: usize, hi: usize },
    /// Partition scan in progress over `lo..=hi` with pivot at `hi`
    Partition {
        lo: usize,
        hi: usize,
        /// First slot past the low region
        store: usize,
        /// Next element to compare against the pivot
        scan: usize,
    },
}

/// Resumable quick sort
#[derive(Clone, Debug)]
pub struct QuickSort {
    order: SortOrder,
    stack: Vec<Frame>,
}

impl QuickSort {
    pub fn new(len: usize, order: SortOrder) -> Self {
        let mut stack = Vec::new();
        if len > 1 {
            stack.push(Frame::Range { lo: 0, hi: len - 1 });
        }
        Self { order, stack }
    }

    /// Run until the next partition-scan swap
    pub fn resume<T: PartialOrd>(&mut self, data: &mut [T]) -> Option<Highlight> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Range { lo, hi } => {
                    if lo < hi {
                        self.stack.push(Frame::Partition {
                            lo,
                            hi,
                            store: lo,
                            scan: lo,
                        });
                    }
                }
                Frame::Partition {
                    lo,
                    hi,
                    mut store,
                    mut scan,
                } => {
                    while scan < hi {
                        let j = scan;
                        scan += 1;
                        if self.order.precedes(&data[j], &data[hi]) {
                            data.swap(store, j);
                            let swapped = store;
                            store += 1;
                            self.stack.push(Frame::Partition { lo, hi, store, scan });
                            return Some(Highlight::pair(swapped, j));
                        }
                    }

                    data.swap(store, hi);
                    let pivot = store;

                    // Right side is pushed first so the left side runs first
                    if pivot + 1 < hi {
                        self.stack.push(Frame::Range { lo: pivot + 1, hi });
                    }
                    if pivot > lo + 1 {
                        self.stack.push(Frame::Range { lo, hi: pivot - 1 });
                    }
                }
            }
        }
        None
    }
}
