//! Selection Sort
//!
//! One step per outer position: the extreme element of the unsorted suffix
//! is swapped into place, and the step is emitted even when the element is
//! already there.

use crate::highlight::Highlight;
use crate::order::SortOrder;

/// Resumable selection sort
#[derive(Clone, Debug)]
pub struct SelectionSort {
    order: SortOrder,
    len: usize,
    position: usize,
}

impl SelectionSort {
    pub fn new(len: usize, order: SortOrder) -> Self {
        Self {
            order,
            len,
            position: 0,
        }
    }

    pub fn resume<T: PartialOrd>(&mut self, data: &mut [T]) -> Option<Highlight> {
        if self.position >= self.len {
            return None;
        }

        let i = self.position;
        let mut extreme = i;
        for j in (i + 1)..self.len {
            if self.order.strictly_precedes(&data[j], &data[extreme]) {
                extreme = j;
            }
        }

        data.swap(i, extreme);
        self.position += 1;
        Some(Highlight::pair(i, extreme))
    }
}
