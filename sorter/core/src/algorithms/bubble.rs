//! Bubble Sort
//!
//! Adjacent pairs are compared pass by pass; each pass settles one more
//! element at the end, so pass `i` only walks the first `n - 1 - i` pairs.
//! A step is emitted right after every swap.

use crate::highlight::Highlight;
use crate::order::SortOrder;

/// Resumable bubble sort
#[derive(Clone, Debug)]
pub struct BubbleSort {
    order: SortOrder,
    len: usize,
    /// Completed passes
    pass: usize,
    /// Left index of the next pair to compare
    pos: usize,
    /// Whether the current pass has swapped anything yet
    swapped: bool,
    finished: bool,
}

impl BubbleSort {
    pub fn new(len: usize, order: SortOrder) -> Self {
        Self {
            order,
            len,
            pass: 0,
            pos: 0,
            swapped: false,
            finished: len < 2,
        }
    }

    /// Run until the next swap and report the swapped pair
    pub fn resume<T: PartialOrd>(&mut self, data: &mut [T]) -> Option<Highlight> {
        while !self.finished {
            let pairs = self.len - 1 - self.pass;

            if self.pos >= pairs {
                // A swap-free pass means the prefix is already ordered
                if !self.swapped || self.pass + 1 >= self.len - 1 {
                    self.finished = true;
                    break;
                }
                self.pass += 1;
                self.pos = 0;
                self.swapped = false;
                continue;
            }

            let j = self.pos;
            self.pos += 1;

            if self.order.should_swap(&data[j], &data[j + 1]) {
                data.swap(j, j + 1);
                self.swapped = true;
                return Some(Highlight::pair(j, j + 1));
            }
        }
        None
    }
}
