#![warn(missing_docs)]
//! Core abstractions for inverse reinforcement learning (IRL).
//!
//! IRL algorithms infer a reward function from expert demonstration
//! trajectories. This crate defines the contract they share, plus the two
//! numeric operations every conforming algorithm inherits unmodified:
//! discounted feature counts and tabular-policy trajectory probability.
//!
//! * [`IrlAlgorithm`] is the contract. Its abstract operations ([`train`],
//!   [`reward_function`], [`joint_prob_of_actions`]) fail with
//!   [`IrlError::NotImplemented`] unless overridden; its numeric operations
//!   ([`feature_count`], [`policy_prob_of_actions`]) are default-implemented
//!   and shared.
//! * [`IrlBase`] holds the per-instance state every algorithm is constructed
//!   with: an environment, the expert [`TrajectorySet`], an [`RlAlgFactory`]
//!   and a discount factor.
//! * [`FeatureEnv`] and [`RlAgent`] are the collaborator contracts for the
//!   environment and the RL sub-solver.
//! * [`TrainConfig`] and [`TrainSchedule`] carry the cooperative wall-clock
//!   budget of a training run.
//!
//! Trajectory collection, concrete IRL algorithms and the RL sub-solver
//! itself live outside this crate.
//!
//! [`train`]: IrlAlgorithm::train
//! [`reward_function`]: IrlAlgorithm::reward_function
//! [`joint_prob_of_actions`]: IrlAlgorithm::joint_prob_of_actions
//! [`feature_count`]: IrlAlgorithm::feature_count
//! [`policy_prob_of_actions`]: IrlAlgorithm::policy_prob_of_actions
//! [`IrlError::NotImplemented`]: error::IrlError::NotImplemented
pub mod dummy;
pub mod error;

mod base;
pub use base::{
    FeatureEnv, IrlAlgorithm, IrlBase, RlAgent, RlAlgFactory, TabularPolicy, Trajectory,
    TrajectorySet,
};

mod train;
pub use train::{TrainClock, TrainConfig, TrainSchedule};
