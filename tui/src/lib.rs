//! sortviz TUI - Terminal interface for the sortviz sorting visualizer
//!
//! This crate is a thin surface over `sorter_core`: it draws the array as a
//! bar chart, lets the user choose an algorithm and order, and paces the
//! step sequence on a timer.
//!
//! # Architecture
//!
//! - **App**: Event loop and step driver
//! - **Widgets**: Bar chart rendering of a snapshot plus highlight
//! - **Theme**: Gradient and marker colors

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{App, Status};
