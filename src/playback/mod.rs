//! Playback of sorting runs
//!
//! - [`controller`]: the [`Controller`] owning the displayed array, the active
//!   generator, auto-play state and speed
//! - [`scheduler`]: cancellable recurring timers used for auto-play
//! - [`errors`]: playback error types
//!
//! # Run lifecycle
//!
//! ```text
//! Idle --step--> Running --generator exhausted--> Idle (auto-play off)
//!                   |
//!                   +--select_algorithm / reset_array--> Idle
//! ```
//!
//! The controller is an ordinary value; the UI holds it and calls its
//! operations, there is no global instance.

pub mod controller;
pub mod errors;
pub mod scheduler;

pub use controller::{Controller, PlaybackState, StepOutcome, DEFAULT_SPEED, TICK_BASE};
pub use errors::PlaybackError;
pub use scheduler::{
    Clock, IntervalScheduler, ManualClock, Scheduler, SystemClock, TimerHandle,
};
