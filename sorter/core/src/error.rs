//! Error types for sorter-core.
//!
//! Sorting itself never fails: every algorithm is total over any array,
//! including the empty one. Errors only arise when turning user input
//! (algorithm names, order names, dataset parameters) into typed values.

use thiserror::Error;

/// Result type alias for sorter-core operations.
pub type SortResult<T> = Result<T, SortError>;

/// Errors produced while parsing or validating sort inputs
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// Algorithm name did not match any supported algorithm
    #[error("Unknown sorting algorithm '{0}' (expected one of: bubble, insertion, selection, merge, quick, heap)")]
    UnknownAlgorithm(String),

    /// Order name was neither ascending nor descending
    #[error("Unknown sort order '{0}' (expected 'ascending' or 'descending')")]
    UnknownOrder(String),

    /// Dataset shape name was not recognised
    #[error("Unknown dataset shape '{0}' (expected random, sorted, reversed or nearly-sorted)")]
    UnknownShape(String),

    /// Value range is empty
    #[error("Invalid value range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound requested
        min: u32,
        /// Upper bound requested
        max: u32,
    },
}
