//! Wall-clock budget polling.
use log::info;
use std::time::{Duration, Instant};

/// A started wall clock with a total budget.
///
/// Concrete algorithms poll it between RL sub-solver calls; nothing here
/// preempts a running call.
#[derive(Debug, Clone)]
pub struct TrainClock {
    started: Instant,
    time_limit: Duration,
}

impl TrainClock {
    /// Starts the clock with the given total budget.
    pub fn start(time_limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            time_limit,
        }
    }

    /// Time spent since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Budget left, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.time_limit.saturating_sub(self.elapsed())
    }

    /// Returns `true` once the budget is spent.
    pub fn expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

/// Yields per-iteration RL training chunks until the total budget is spent.
///
/// Each chunk is `rl_time_per_iteration` clamped to the remaining budget,
/// so the final iteration gets whatever is left. The iterator ends when the
/// budget is exhausted, which makes the training loop of a concrete
/// algorithm a plain `for` loop.
pub struct TrainSchedule {
    clock: TrainClock,
    rl_time_per_iteration: Duration,
    iteration: usize,
}

impl TrainSchedule {
    /// Starts a schedule with the given total and per-iteration budgets.
    pub fn start(time_limit: Duration, rl_time_per_iteration: Duration) -> Self {
        Self {
            clock: TrainClock::start(time_limit),
            rl_time_per_iteration,
            iteration: 0,
        }
    }

    /// The underlying clock.
    pub fn clock(&self) -> &TrainClock {
        &self.clock
    }

    /// Iterations yielded so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

impl Iterator for TrainSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let remaining = self.clock.remaining();
        if remaining.is_zero() {
            info!(
                "Training budget spent after {} iterations ({:?} elapsed)",
                self.iteration,
                self.clock.elapsed()
            );
            return None;
        }
        self.iteration += 1;
        Some(self.rl_time_per_iteration.min(remaining))
    }
}
