//! Step contract
//!
//! A step is one `(snapshot, highlight)` pair marking a single meaningful
//! mutation. Sequences hand steps out through [`Advance`]; surfaces that
//! prefer push-style delivery implement [`StepEmitter`].

use serde::{Deserialize, Serialize};

use crate::highlight::Highlight;

/// One emitted step, borrowing the array at the moment of emission
#[derive(Debug, PartialEq)]
pub struct Step<'a, T> {
    /// Current array contents, reflecting the mutation that just happened
    pub snapshot: &'a [T],
    /// Indices touched by that mutation
    pub highlight: Highlight,
}

impl<T: Clone> Step<'_, T> {
    /// Copy this step into an owned record
    pub fn to_record(&self, index: usize) -> StepRecord<T> {
        StepRecord {
            index,
            snapshot: self.snapshot.to_vec(),
            highlight: self.highlight.clone(),
        }
    }
}

/// Result of advancing a step sequence
#[derive(Debug, PartialEq)]
pub enum Advance<'a, T> {
    /// Exactly one step was produced
    Step(Step<'a, T>),
    /// The sequence is exhausted; the array is sorted
    Done,
}

impl<T> Advance<'_, T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Owned copy of a step, suitable for traces and assertions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord<T> {
    /// Zero-based position of this step in its sequence
    pub index: usize,
    pub snapshot: Vec<T>,
    pub highlight: Highlight,
}

/// Receiver of emitted steps
pub trait StepEmitter<T> {
    /// Called once per step with the current array and its highlight
    fn emit(&mut self, snapshot: &[T], highlight: &Highlight);
}

impl<T, F> StepEmitter<T> for F
where
    F: FnMut(&[T], &Highlight),
{
    fn emit(&mut self, snapshot: &[T], highlight: &Highlight) {
        self(snapshot, highlight)
    }
}

/// Emitter that keeps every step it receives
#[derive(Clone, Debug, Default)]
pub struct Recorder<T> {
    records: Vec<StepRecord<T>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[StepRecord<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<StepRecord<T>> {
        self.records
    }
}

impl<T: Serialize> Recorder<T> {
    /// Serialize the recorded trace as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}

impl<T: Clone> StepEmitter<T> for Recorder<T> {
    fn emit(&mut self, snapshot: &[T], highlight: &Highlight) {
        let index = self.records.len();
        self.records.push(StepRecord {
            index,
            snapshot: snapshot.to_vec(),
            highlight: highlight.clone(),
        });
    }
}
