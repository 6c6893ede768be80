//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum IrlError {
    /// An abstract operation of [`IrlAlgorithm`](crate::IrlAlgorithm) was invoked
    /// without a concrete override.
    #[error("Operation not implemented by this algorithm: {0}")]
    NotImplemented(&'static str),

    /// A reward function estimate was requested before any training happened.
    #[error("No reward function estimate available before training")]
    Untrained,

    /// Discount factor outside the half-open interval (0, 1].
    #[error("Discount factor must be in (0, 1], got {0}")]
    InvalidDiscountFactor(f64),

    /// The state, action and feature sequences of a trajectory differ in length.
    #[error("Trajectory sequences differ in length: {states} states, {actions} actions, {features} feature vectors")]
    MisalignedTrajectory {
        /// Number of states.
        states: usize,
        /// Number of actions.
        actions: usize,
        /// Number of per-timestep feature vectors.
        features: usize,
    },

    /// A per-timestep feature vector does not match the declared dimensionality.
    #[error("Feature vector of dimensionality {found}, expected {expected}")]
    FeatureDimMismatch {
        /// Dimensionality declared by the environment.
        expected: usize,
        /// Dimensionality found in the trajectory.
        found: usize,
    },

    /// A trajectory state is absent from a tabular policy.
    #[error("State not covered by the policy: {0}")]
    StateNotInPolicy(String),

    /// A trajectory action is absent from the policy's table for its state.
    #[error("Action not covered by the policy in state {state}: {action}")]
    ActionNotInPolicy {
        /// The state whose action table was consulted.
        state: String,
        /// The missing action.
        action: String,
    },
}
