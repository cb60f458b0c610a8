//! Sorter Core - Headless Instrumented Sorting Engine for sortviz
//!
//! This crate provides the sorting engine behind the sortviz visualizer,
//! completely independent of any UI framework. Each algorithm runs as a
//! lazily advanced step sequence: every call to `advance` runs the algorithm
//! up to its next meaningful mutation and hands back the array plus a
//! highlight map, so a renderer can draw intermediate states at its own pace.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      UI Surfaces                             │
//! │   ┌──────────┐   ┌──────────────────┐   ┌────────────────┐   │
//! │   │   TUI    │   │  Headless / test │   │  Trace export  │   │
//! │   │(ratatui) │   │     drivers      │   │    (JSON)      │   │
//! │   └────┬─────┘   └────────┬─────────┘   └───────┬────────┘   │
//! │        └──────────────────┴─────────────────────┘            │
//! │                     advance() (pull)                         │
//! └────────────────────────────┼─────────────────────────────────┘
//!                              │
//! ┌────────────────────────────┼─────────────────────────────────┐
//! │                       SORTER CORE                            │
//! │   ┌────────────────────────┴───────────────────────────┐     │
//! │   │          SortSession / StepSequence                │     │
//! │   │  ┌────────┐ ┌───────────┐ ┌───────────┐            │     │
//! │   │  │ Bubble │ │ Insertion │ │ Selection │  Machine   │     │
//! │   │  ├────────┤ ├───────────┤ ├───────────┤  (enum)    │     │
//! │   │  │ Merge  │ │   Quick   │ │   Heap    │            │     │
//! │   │  └────────┘ └───────────┘ └───────────┘            │     │
//! │   └────────────────────────────────────────────────────┘     │
//! │        SortOrder · Highlight · StepEmitter · Config          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`run_sort`]: Start a [`StepSequence`] over a borrowed array
//! - [`SortSession`]: Owns the array and at most one in-flight sequence
//! - [`AlgorithmKind`]: The six supported algorithms
//! - [`SortOrder`]: Ascending/descending comparator direction
//! - [`Highlight`]: Index to [`Marker`] map emitted with every step
//!
//! # Quick Start
//!
//! ```
//! use sorter_core::{run_sort, Advance, AlgorithmKind, SortOrder};
//!
//! let mut values = vec![5, 3, 4, 1, 2];
//! let mut sequence = run_sort(&mut values, AlgorithmKind::Bubble, SortOrder::Ascending);
//!
//! while let Advance::Step(step) = sequence.advance() {
//!     // Render step.snapshot with step.highlight
//!     assert!(step.highlight.len() <= 2);
//! }
//!
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//! ```

pub mod algorithms;
pub mod config;
pub mod dataset;
pub mod error;
pub mod highlight;
pub mod order;
pub mod sequence;
pub mod step;

pub use algorithms::{AlgorithmKind, Machine};
pub use config::{ConfigError, ConfigOverrides, ConfigSource, VisualizerConfig};
pub use dataset::{DatasetShape, DatasetSpec};
pub use error::{SortError, SortResult};
pub use highlight::{Highlight, Marker};
pub use order::SortOrder;
pub use sequence::{run_sort, SequenceState, SortSession, StepSequence};
pub use step::{Advance, Recorder, Step, StepEmitter, StepRecord};
