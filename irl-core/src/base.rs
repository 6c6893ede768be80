//! Core functionalities.
mod agent;
mod algorithm;
mod env;
mod policy;
mod trajectory;
pub use agent::{RlAgent, RlAlgFactory};
pub use algorithm::{IrlAlgorithm, IrlBase};
pub use env::FeatureEnv;
pub use policy::TabularPolicy;
pub use trajectory::{Trajectory, TrajectorySet};
