//! Timer scheduling for auto-play
//!
//! The controller never sleeps or reads the wall clock itself. It arms
//! recurring timers on a [`Scheduler`] and later asks which of them are due.
//! The TUI uses an [`IntervalScheduler`] over a [`SystemClock`]; tests use a
//! [`ManualClock`] to deliver ticks deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shortest interval a timer can be armed with
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Identifies one armed timer; handles are never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Source of monotonic time, measured from an arbitrary origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock based on [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same time, so a test can keep one handle while the
/// scheduler owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Recurring, cancellable timers
pub trait Scheduler {
    /// Arm a timer that first fires `interval` from now and then every `interval`
    fn arm(&mut self, interval: Duration) -> TimerHandle;

    /// Disarm a timer; cancelling an unknown or already cancelled handle is a no-op
    fn cancel(&mut self, handle: TimerHandle);

    /// Return one due timer, if any, and move its deadline forward
    fn poll(&mut self) -> Option<TimerHandle>;

    /// Number of armed timers
    fn active(&self) -> usize;

    /// Time until the earliest deadline, `None` when nothing is armed
    fn next_due_in(&self) -> Option<Duration>;
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    handle: TimerHandle,
    interval: Duration,
    deadline: Duration,
}

/// [`Scheduler`] that keeps its timers in a list and checks them against a [`Clock`]
///
/// A timer fires at most once per `poll` sweep: if the clock has moved past
/// more than one deadline, the missed ticks are dropped and the next
/// deadline is one interval after the current time.
#[derive(Debug, Clone)]
pub struct IntervalScheduler<C: Clock> {
    clock: C,
    timers: Vec<Timer>,
    next_handle: u64,
}

impl<C: Clock> IntervalScheduler<C> {
    pub fn new(clock: C) -> Self {
        IntervalScheduler {
            clock,
            timers: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Scheduler for IntervalScheduler<C> {
    fn arm(&mut self, interval: Duration) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        self.timers.push(Timer {
            handle,
            interval,
            deadline: self.clock.now() + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|timer| timer.handle != handle);
    }

    fn poll(&mut self) -> Option<TimerHandle> {
        let now = self.clock.now();

        let timer = self
            .timers
            .iter_mut()
            .filter(|timer| timer.deadline <= now)
            .min_by_key(|timer| timer.deadline)?;

        let next = timer.deadline + timer.interval;
        timer.deadline = if next > now { next } else { now + timer.interval };
        Some(timer.handle)
    }

    fn active(&self) -> usize {
        self.timers.len()
    }

    fn next_due_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers
            .iter()
            .map(|timer| timer.deadline.saturating_sub(now))
            .min()
    }
}
