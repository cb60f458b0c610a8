//! Comparator Direction
//!
//! Every comparison made by every algorithm goes through [`SortOrder`].
//! Nothing in the algorithms module compares two values with `<` directly,
//! so flipping the order flag flips the behavior of all six algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// Target ordering for one sort invocation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

impl SortOrder {
    /// Whether `a` may come before `b` in the target order (ties allowed)
    #[inline]
    #[must_use]
    pub fn precedes<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Ascending => a <= b,
            Self::Descending => a >= b,
        }
    }

    /// Whether `a` must come before `b` in the target order
    #[inline]
    #[must_use]
    pub fn strictly_precedes<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }

    /// Whether an adjacent pair `(left, right)` is out of order
    #[inline]
    #[must_use]
    pub fn should_swap<T: PartialOrd>(self, left: &T, right: &T) -> bool {
        self.strictly_precedes(right, left)
    }

    /// Check that a slice is fully sorted in this order
    #[must_use]
    pub fn is_ordered<T: PartialOrd>(self, values: &[T]) -> bool {
        values.windows(2).all(|w| self.precedes(&w[0], &w[1]))
    }

    /// The opposite direction
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short arrow glyph for status lines
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(SortError::UnknownOrder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_predicates() {
        let order = SortOrder::Ascending;
        assert!(order.precedes(&1, &2));
        assert!(order.precedes(&2, &2));
        assert!(!order.precedes(&3, &2));

        assert!(order.strictly_precedes(&1, &2));
        assert!(!order.strictly_precedes(&2, &2));

        assert!(order.should_swap(&5, &3));
        assert!(!order.should_swap(&3, &3));
    }

    #[test]
    fn test_descending_inverts_sense() {
        let order = SortOrder::Descending;
        assert!(order.precedes(&2, &1));
        assert!(order.precedes(&2, &2));
        assert!(!order.strictly_precedes(&2, &2));
        assert!(order.should_swap(&3, &5));
        assert!(!order.should_swap(&5, &3));
    }

    #[test]
    fn test_is_ordered() {
        assert!(SortOrder::Ascending.is_ordered(&[1, 1, 2, 3]));
        assert!(!SortOrder::Ascending.is_ordered(&[2, 1]));
        assert!(SortOrder::Descending.is_ordered(&[3, 3, 1]));
        assert!(SortOrder::Descending.is_ordered::<u32>(&[]));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!(" descending ".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!(
            "sideways".parse::<SortOrder>(),
            Err(SortError::UnknownOrder("sideways".into()))
        );
        assert_eq!(SortOrder::Descending.to_string(), "descending");
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
