// Playback controller: owns the displayed array and the active sorting run

use super::errors::{PlaybackError, Result};
use super::scheduler::{Scheduler, TimerHandle};
use crate::array::RandomArray;
use crate::registry::{Algorithm, Descriptor, Registry};
use crate::snapshot::{SnapshotStream, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Initial speed, in steps per tick unit
pub const DEFAULT_SPEED: u32 = 50;

/// Tick interval at speed 1; the interval at speed `s` is `TICK_BASE / s`
pub const TICK_BASE: Duration = Duration::from_millis(3000);

/// What a call to [`Controller::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No algorithm selected, nothing happened
    Idle,
    /// A new snapshot was published
    Advanced,
    /// The run was already complete; the generator was dropped and auto-play stopped
    Finished,
}

/// Copy of the observable playback state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    pub array: Vec<Value>,
    pub selected: Option<&'static str>,
    pub auto_sorting: bool,
    pub speed: u32,
    pub done: bool,
    pub steps_taken: usize,
}

/// The playback controller
///
/// Single owner of the current array and the active generator. All
/// operations are synchronous; auto-play is driven by timers armed on `S`
/// and delivered through [`Controller::run_due_ticks`].
pub struct Controller<S: Scheduler> {
    registry: Registry,
    source: RandomArray,

    /// The array currently on display
    array: Vec<Value>,

    /// Menu position of the selected algorithm
    selected: Option<usize>,

    /// Active run; created lazily on the first step
    generator: Option<SnapshotStream>,

    auto_sorting: bool,
    speed: u32,
    scheduler: S,

    /// The one armed auto-play timer
    timer: Option<TimerHandle>,

    /// Whether the last step found the run exhausted
    done: bool,

    /// Snapshots published by the current run
    steps_taken: usize,
}

impl<S: Scheduler> Controller<S> {
    /// Create a controller with a freshly generated array and nothing selected
    pub fn new(registry: Registry, mut source: RandomArray, scheduler: S) -> Self {
        let array = source.generate();
        Controller {
            registry,
            source,
            array,
            selected: None,
            generator: None,
            auto_sorting: false,
            speed: DEFAULT_SPEED,
            scheduler,
            timer: None,
            done: false,
            steps_taken: 0,
        }
    }

    // ========== Operations ==========

    /// Replace the displayed array
    ///
    /// An active run keeps its own copy and is not affected; its next
    /// snapshot will overwrite this array.
    pub fn set_array(&mut self, array: Vec<Value>) {
        debug!(len = array.len(), "array replaced");
        self.array = array;
    }

    /// Select an algorithm by identifier
    ///
    /// Discards the active run and stops auto-play. Unknown identifiers leave
    /// the state untouched and return `None`.
    pub fn select_algorithm(&mut self, id: &str) -> Option<&Descriptor> {
        let Some(index) = self.registry.position(id) else {
            warn!(id, "ignoring unknown algorithm");
            return None;
        };

        self.stop_auto_sorting();
        self.discard_run();
        self.selected = Some(index);
        info!(algorithm = id, "algorithm selected");

        self.registry
            .by_position(index)
            .map(|algorithm| &algorithm.descriptor)
    }

    /// Advance the active run by one snapshot
    pub fn step(&mut self) -> StepOutcome {
        let Some(algorithm) = self.selected().copied() else {
            return StepOutcome::Idle;
        };

        if self.generator.is_none() {
            debug!(
                algorithm = algorithm.id(),
                len = self.array.len(),
                "starting run"
            );
            self.done = false;
            self.steps_taken = 0;
            self.generator = Some(algorithm.factory.create(self.array.clone()));
        }

        match self.generator.as_mut().and_then(|generator| generator.next()) {
            Some(snapshot) => {
                self.array = snapshot;
                self.steps_taken += 1;
                debug!(step = self.steps_taken, "snapshot published");
                StepOutcome::Advanced
            }
            None => {
                info!(
                    algorithm = algorithm.id(),
                    steps = self.steps_taken,
                    "run complete"
                );
                self.generator = None;
                self.done = true;
                self.stop_auto_sorting();
                StepOutcome::Finished
            }
        }
    }

    /// Turn auto-play on; the first step happens on the first tick
    pub fn start_auto_sorting(&mut self) {
        if self.auto_sorting {
            return;
        }
        self.auto_sorting = true;
        self.arm_timer();
        info!(speed = self.speed, "auto-play started");
    }

    /// Turn auto-play off, cancelling the pending tick
    pub fn pause_auto_sorting(&mut self) {
        if self.auto_sorting {
            info!("auto-play paused");
        }
        self.stop_auto_sorting();
    }

    pub fn toggle_auto_sorting(&mut self) {
        if self.auto_sorting {
            self.pause_auto_sorting();
        } else {
            self.start_auto_sorting();
        }
    }

    /// Replace the array with a new random one, discarding the active run
    pub fn reset_array(&mut self) {
        self.stop_auto_sorting();
        self.discard_run();
        self.array = self.source.generate();
        info!(len = self.array.len(), "array reset");
    }

    /// Change the auto-play speed; a running timer is re-armed with the new interval
    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        if speed == 0 {
            warn!(speed, "rejecting speed");
            return Err(PlaybackError::InvalidSpeed(speed));
        }

        self.speed = speed;
        if self.auto_sorting {
            self.arm_timer();
        }
        debug!(speed, interval_ms = self.interval().as_millis() as u64, "speed changed");
        Ok(())
    }

    /// Deliver every due tick, taking one step per tick of the armed timer
    ///
    /// Returns the number of ticks that advanced or finished the run; ticks
    /// with no algorithm selected do nothing and are not counted.
    pub fn run_due_ticks(&mut self) -> usize {
        let mut steps = 0;
        while let Some(handle) = self.scheduler.poll() {
            if self.timer != Some(handle) {
                debug!(?handle, "dropping stale tick");
                self.scheduler.cancel(handle);
                continue;
            }
            if self.step() != StepOutcome::Idle {
                steps += 1;
            }
        }
        steps
    }

    // ========== Getter methods for UI ==========

    /// Get the displayed array
    pub fn array(&self) -> &[Value] {
        &self.array
    }

    /// Get the selected algorithm
    pub fn selected(&self) -> Option<&Algorithm> {
        self.selected.and_then(|i| self.registry.by_position(i))
    }

    /// Get the descriptor of the selected algorithm
    pub fn descriptor(&self) -> Option<&Descriptor> {
        self.selected().map(|algorithm| &algorithm.descriptor)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_auto_sorting(&self) -> bool {
        self.auto_sorting
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Tick interval for the current speed
    pub fn interval(&self) -> Duration {
        (TICK_BASE / self.speed).max(Duration::from_millis(1))
    }

    /// Check if the last step found the run complete
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Check if a run is in progress
    pub fn is_running(&self) -> bool {
        self.generator.is_some()
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            array: self.array.clone(),
            selected: self.selected().map(Algorithm::id),
            auto_sorting: self.auto_sorting,
            speed: self.speed,
            done: self.done,
            steps_taken: self.steps_taken,
        }
    }

    // ========== Internals ==========

    fn arm_timer(&mut self) {
        if let Some(old) = self.timer.take() {
            self.scheduler.cancel(old);
        }
        let interval = self.interval();
        let handle = self.scheduler.arm(interval);
        debug!(?handle, interval_ms = interval.as_millis() as u64, "timer armed");
        self.timer = Some(handle);
    }

    fn stop_auto_sorting(&mut self) {
        self.auto_sorting = false;
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            debug!(?handle, "timer cancelled");
        }
    }

    fn discard_run(&mut self) {
        if self.generator.take().is_some() {
            debug!(steps = self.steps_taken, "run discarded");
        }
        self.done = false;
        self.steps_taken = 0;
    }
}
