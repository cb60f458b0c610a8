//! Step Sequences
//!
//! A step sequence is the lazy execution of one algorithm over one array.
//! Its lifecycle is `Ready -> Running -> Done`: each `advance` yields at most
//! one step, and once the algorithm is exhausted every further call reports
//! `Done`.
//!
//! Two entry points share the same machinery:
//!
//! - [`run_sort`] borrows the array mutably for the sequence's lifetime, so
//!   the borrow checker rules out two sequences over one array.
//! - [`SortSession`] owns the array and at most one in-flight sequence.
//!   Starting a new sort drops the old sequence; nothing else needs cleanup.

use tracing::{debug, trace};

use crate::algorithms::{AlgorithmKind, Machine};
use crate::highlight::Highlight;
use crate::order::SortOrder;
use crate::step::{Advance, Step, StepEmitter, StepRecord};

/// Lifecycle of a step sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SequenceState {
    /// Created, nothing executed yet
    #[default]
    Ready,
    /// Suspended after at least one step
    Running,
    /// Exhausted; the array is sorted
    Done,
}

/// Progress of one algorithm run, independent of where the array lives
#[derive(Clone, Debug)]
struct Cursor {
    machine: Machine,
    order: SortOrder,
    state: SequenceState,
    steps: usize,
}

impl Cursor {
    fn new(kind: AlgorithmKind, order: SortOrder, len: usize) -> Self {
        debug!(algorithm = %kind, order = %order, len, "Starting sort sequence");
        Self {
            machine: kind.machine(len, order),
            order,
            state: SequenceState::Ready,
            steps: 0,
        }
    }

    fn next_highlight<T: PartialOrd + Clone>(&mut self, data: &mut [T]) -> Option<Highlight> {
        if self.state == SequenceState::Done {
            return None;
        }

        match self.machine.resume(data) {
            Some(highlight) => {
                self.state = SequenceState::Running;
                self.steps += 1;
                trace!(step = self.steps, marks = highlight.len(), "Sort step");
                Some(highlight)
            }
            None => {
                self.state = SequenceState::Done;
                debug!(
                    algorithm = %self.machine.kind(),
                    steps = self.steps,
                    "Sort sequence exhausted"
                );
                None
            }
        }
    }
}

/// Start a step sequence over `data`
///
/// An empty array yields an immediately exhausted sequence.
pub fn run_sort<T: PartialOrd + Clone>(
    data: &mut [T],
    kind: AlgorithmKind,
    order: SortOrder,
) -> StepSequence<'_, T> {
    StepSequence::new(data, kind, order)
}

/// A step sequence that borrows its array
#[derive(Debug)]
pub struct StepSequence<'a, T> {
    data: &'a mut [T],
    cursor: Cursor,
}

impl<'a, T: PartialOrd + Clone> StepSequence<'a, T> {
    pub fn new(data: &'a mut [T], kind: AlgorithmKind, order: SortOrder) -> Self {
        let cursor = Cursor::new(kind, order, data.len());
        Self { data, cursor }
    }

    /// Run to the next step, or report exhaustion
    pub fn advance(&mut self) -> Advance<'_, T> {
        match self.cursor.next_highlight(self.data) {
            Some(highlight) => Advance::Step(Step {
                snapshot: &*self.data,
                highlight,
            }),
            None => Advance::Done,
        }
    }

    /// Advance once and hand the step to `emitter`
    ///
    /// Returns `false` once the sequence is exhausted.
    pub fn emit_next<E: StepEmitter<T>>(&mut self, emitter: &mut E) -> bool {
        match self.cursor.next_highlight(self.data) {
            Some(highlight) => {
                emitter.emit(&*self.data, &highlight);
                true
            }
            None => false,
        }
    }

    /// Run to exhaustion, emitting every remaining step
    ///
    /// Returns the number of steps emitted by this call.
    pub fn drain_into<E: StepEmitter<T>>(&mut self, emitter: &mut E) -> usize {
        let mut emitted = 0;
        while self.emit_next(emitter) {
            emitted += 1;
        }
        emitted
    }
}

impl<T> StepSequence<'_, T> {
    pub fn state(&self) -> SequenceState {
        self.cursor.state
    }

    pub fn steps_emitted(&self) -> usize {
        self.cursor.steps
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.cursor.machine.kind()
    }

    pub fn order(&self) -> SortOrder {
        self.cursor.order
    }

    /// Current array contents
    pub fn data(&self) -> &[T] {
        &*self.data
    }
}

/// Steps as owned records, each carrying a copy of the array
impl<T: PartialOrd + Clone> Iterator for StepSequence<'_, T> {
    type Item = StepRecord<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.steps;
        let highlight = self.cursor.next_highlight(self.data)?;
        Some(StepRecord {
            index,
            snapshot: self.data.to_vec(),
            highlight,
        })
    }
}

/// Owner of the array and of at most one in-flight sequence
#[derive(Clone, Debug)]
pub struct SortSession<T> {
    data: Vec<T>,
    active: Option<Cursor>,
}

impl<T: PartialOrd + Clone> SortSession<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, active: None }
    }

    /// Begin a fresh sort from the current array contents
    ///
    /// Any in-flight sequence is dropped first.
    pub fn start(&mut self, kind: AlgorithmKind, order: SortOrder) {
        if self.is_running() {
            debug!("Restarting: dropping in-flight sort sequence");
        }
        self.active = Some(Cursor::new(kind, order, self.data.len()));
    }

    /// Advance the active sequence
    ///
    /// Without an active sequence this reports `Done`.
    pub fn advance(&mut self) -> Advance<'_, T> {
        let Some(cursor) = self.active.as_mut() else {
            return Advance::Done;
        };
        match cursor.next_highlight(&mut self.data) {
            Some(highlight) => Advance::Step(Step {
                snapshot: self.data.as_slice(),
                highlight,
            }),
            None => Advance::Done,
        }
    }

    /// Swap in new contents, dropping any in-flight sequence
    pub fn replace_data(&mut self, data: Vec<T>) {
        self.abandon();
        self.data = data;
    }
}

impl<T> SortSession<T> {
    /// Drop the in-flight sequence, leaving the array as it is
    pub fn abandon(&mut self) {
        if let Some(cursor) = self.active.take() {
            if cursor.state != SequenceState::Done {
                debug!(steps = cursor.steps, "Abandoned sort sequence");
            }
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// State of the current sequence (`Ready` when none was started)
    pub fn state(&self) -> SequenceState {
        self.active
            .as_ref()
            .map_or(SequenceState::Ready, |cursor| cursor.state)
    }

    /// Whether a sequence is started and not yet exhausted
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|cursor| cursor.state != SequenceState::Done)
    }

    pub fn steps_emitted(&self) -> usize {
        self.active.as_ref().map_or(0, |cursor| cursor.steps)
    }

    pub fn algorithm(&self) -> Option<AlgorithmKind> {
        self.active.as_ref().map(|cursor| cursor.machine.kind())
    }

    pub fn order(&self) -> Option<SortOrder> {
        self.active.as_ref().map(|cursor| cursor.order)
    }
}
