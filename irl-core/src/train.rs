//! Cooperative time budgeting for [`IrlAlgorithm::train`].
//!
//! A concrete algorithm's training loop looks like following:
//!
//! 1. Read `time_limit` and `rl_time_per_iteration`, for example from a
//!    [`TrainConfig`].
//! 2. Build a [`TrainSchedule`] from them.
//! 3. For each chunk yielded by the schedule:
//!     1. Build a fresh RL agent with the stored factory and train it for
//!        at most the chunk duration.
//!     2. Update the internal reward function estimate.
//! 4. The schedule stops yielding chunks once the total budget is spent.
//!
//! The budget is cooperative. The schedule is only consulted between
//! iterations, so a sub-solver call that overruns its chunk is not
//! interrupted; the overrun shows up as a shorter (or absent) next chunk.
//!
//! [`IrlAlgorithm::train`]: crate::IrlAlgorithm::train
mod config;
mod schedule;
pub use config::TrainConfig;
pub use schedule::{TrainClock, TrainSchedule};
