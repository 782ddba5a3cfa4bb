//! # Introduction
//!
//! Sortty animates sorting algorithms one array mutation at a time. Each
//! algorithm is a lazy generator of array snapshots; a playback controller
//! pulls snapshots on demand or on a timer and publishes them to a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Registry → Generator → Controller → Snapshots → TUI
//! ```
//!
//! 1. [`registry`] — maps an algorithm identifier to its generator factory
//!    and its [`registry::Descriptor`] (title, description, complexity, source).
//! 2. [`sorts`] — the generators: bubble, insertion, selection, merge, quick,
//!    heap, shell and counting sort as explicit state machines.
//! 3. [`playback`] — the [`playback::Controller`] with step, auto-play,
//!    speed and reset, driven by a cancellable [`playback::Scheduler`].
//! 4. [`snapshot`] — the value and snapshot types shared by all of the above.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Supporting modules: [`array`] (random inputs), [`config`] (command line)
//! and [`logging`] (file-backed `tracing` subscriber).

pub mod array;
pub mod config;
pub mod logging;
pub mod playback;
pub mod registry;
pub mod snapshot;
pub mod sorts;
pub mod ui;
