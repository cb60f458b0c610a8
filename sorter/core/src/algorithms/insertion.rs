//! Insertion Sort
//!
//! Each element is lifted out and shifted left one position at a time
//! while its predecessor belongs after it. A shift is a swap of the lifted
//! element with its predecessor, so no value is ever held outside the array.

use crate::highlight::Highlight;
use crate::order::SortOrder;

/// Resumable insertion sort
#[derive(Clone, Debug)]
pub struct InsertionSort {
    order: SortOrder,
    len: usize,
    /// Next element to lift
    next: usize,
    /// Current position of the lifted element, if one is being shifted
    current: Option<usize>,
}

impl InsertionSort {
    pub fn new(len: usize, order: SortOrder) -> Self {
        Self {
            order,
            len,
            next: 1,
            current: None,
        }
    }

    /// Run until the next single-position shift
    ///
    /// The highlight marks the lifted element's new slot as primary and the
    /// predecessor it displaced as secondary.
    pub fn resume<T: PartialOrd>(&mut self, data: &mut [T]) -> Option<Highlight> {
        loop {
            let j = match self.current {
                Some(j) => j,
                None => {
                    if self.next >= self.len {
                        return None;
                    }
                    let j = self.next;
                    self.next += 1;
                    self.current = Some(j);
                    j
                }
            };

            if j > 0 && self.order.strictly_precedes(&data[j], &data[j - 1]) {
                data.swap(j - 1, j);
                self.current = Some(j - 1);
                return Some(Highlight::pair(j - 1, j));
            }

            self.current = None;
        }
    }
}
