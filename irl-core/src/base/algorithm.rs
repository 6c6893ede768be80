//! IRL algorithm contract.
use super::{FeatureEnv, RlAlgFactory, TabularPolicy, Trajectory, TrajectorySet};
use crate::error::IrlError;
use anyhow::Result;
use log::trace;
use ndarray::Array1;
use std::{fmt::Debug, hash::Hash, time::Duration};

/// State shared by every IRL algorithm: the environment, the expert
/// demonstrations, the RL sub-solver factory and the discount factor.
///
/// Concrete algorithms embed one of these and delegate the accessor methods
/// of [`IrlAlgorithm`] to it. All fields are stored once at construction and
/// never replaced; trajectory shape is not validated here, so a malformed
/// dataset only surfaces when the numeric operations consume it.
pub struct IrlBase<E, S, A, G> {
    env: E,
    expert_trajs: TrajectorySet<S, A>,
    rl_alg_factory: RlAlgFactory<E, G>,
    gamma: f64,
}

impl<E, S, A, G> IrlBase<E, S, A, G> {
    /// Stores the environment, expert trajectories and RL agent factory.
    ///
    /// Fails with [`IrlError::InvalidDiscountFactor`] unless `gamma` is in
    /// `(0, 1]`. An empty trajectory set is accepted; it is a precondition
    /// violation only if later passed to
    /// [`IrlAlgorithm::feature_count`](super::IrlAlgorithm::feature_count).
    pub fn new(
        env: E,
        expert_trajs: TrajectorySet<S, A>,
        rl_alg_factory: RlAlgFactory<E, G>,
        gamma: f64,
    ) -> Result<Self> {
        if !(gamma > 0.0 && gamma <= 1.0) {
            return Err(IrlError::InvalidDiscountFactor(gamma).into());
        }
        Ok(Self {
            env,
            expert_trajs,
            rl_alg_factory,
            gamma,
        })
    }

    /// The environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The expert demonstration dataset.
    pub fn expert_trajs(&self) -> &TrajectorySet<S, A> {
        &self.expert_trajs
    }

    /// The discount factor.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Builds a fresh RL agent with the stored factory.
    pub fn make_rl_agent(&self) -> Result<G> {
        trace!("Building an RL agent from the factory");
        (self.rl_alg_factory)(&self.env)
    }
}

/// The contract shared by all IRL algorithms.
///
/// The three abstract operations ([`train`], [`reward_function`] and
/// [`joint_prob_of_actions`]) have default implementations that fail with
/// [`IrlError::NotImplemented`]; a conforming algorithm overrides all three.
/// The two numeric operations ([`feature_count`] and
/// [`policy_prob_of_actions`]) are shared and inherited unmodified, so every
/// algorithm agrees on them bit for bit.
///
/// [`train`]: IrlAlgorithm::train
/// [`reward_function`]: IrlAlgorithm::reward_function
/// [`joint_prob_of_actions`]: IrlAlgorithm::joint_prob_of_actions
/// [`feature_count`]: IrlAlgorithm::feature_count
/// [`policy_prob_of_actions`]: IrlAlgorithm::policy_prob_of_actions
pub trait IrlAlgorithm<E: FeatureEnv> {
    /// State representation of the environment's trajectories.
    type State: Eq + Hash + Debug;

    /// Action representation of the environment's trajectories.
    type Action: Eq + Hash + Debug;

    /// The reward function estimate produced by the algorithm. Opaque to
    /// this crate.
    type RewardFunction;

    /// The environment the algorithm was constructed with.
    fn env(&self) -> &E;

    /// The expert demonstration dataset.
    fn expert_trajs(&self) -> &TrajectorySet<Self::State, Self::Action>;

    /// The discount factor, in `(0, 1]`.
    fn gamma(&self) -> f64;

    /// Trains up to `time_limit`, improving the internal reward estimate.
    ///
    /// Implementers iterate the RL sub-solver in chunks of at most
    /// `rl_time_per_iteration`, polling the elapsed wall clock between
    /// chunks; see [`TrainSchedule`](crate::TrainSchedule) for the loop
    /// skeleton. The budget is cooperative: a single sub-solver call may
    /// overrun its chunk. Once started, training runs to the end of its
    /// iteration loop; there is no cancellation.
    fn train(&mut self, time_limit: Duration, rl_time_per_iteration: Duration) -> Result<()> {
        let _ = (time_limit, rl_time_per_iteration);
        Err(IrlError::NotImplemented("train").into())
    }

    /// Returns the current best reward function estimate.
    ///
    /// Implementers must define what is returned before [`train`] has been
    /// called: either a documented default estimate or an
    /// [`IrlError::Untrained`] failure.
    ///
    /// [`train`]: IrlAlgorithm::train
    fn reward_function(&self) -> Result<&Self::RewardFunction> {
        Err(IrlError::NotImplemented("reward_function").into())
    }

    /// Returns the joint probability of the trajectory's actions conditioned
    /// on its states, under the algorithm's probabilistic model.
    ///
    /// This is the function U of Boularias et al. (2011, p. 185). The
    /// semantics are algorithm specific; only the signature is fixed here.
    fn joint_prob_of_actions(&self, traj: &Trajectory<Self::State, Self::Action>) -> Result<f64> {
        let _ = traj;
        Err(IrlError::NotImplemented("joint_prob_of_actions").into())
    }

    /// Returns empirical discounted feature counts of the input trajectories.
    ///
    /// For each trajectory of length `T`, the timestep feature vectors are
    /// weighted by `gamma^0, gamma^1, ..., gamma^(T-1)` and summed; the
    /// per-trajectory sums are added up and divided by the number of
    /// trajectories. The result has the dimensionality declared by
    /// [`FeatureEnv::feature_dim`]. Deterministic in the input and `gamma`.
    ///
    /// `trajs` must be non-empty; dividing by a zero trajectory count yields
    /// NaN components. A zero-length trajectory contributes a zero vector.
    /// Feature dimensionality is not checked here; see
    /// [`Trajectory::check_feature_dim`].
    fn feature_count(&self, trajs: &[Trajectory<Self::State, Self::Action>]) -> Array1<f64> {
        let mut feature_sum = Array1::<f64>::zeros(self.env().feature_dim());
        for traj in trajs {
            let mut discount = 1.0;
            for features in traj.features() {
                feature_sum.scaled_add(discount, features);
                discount *= self.gamma();
            }
        }
        feature_sum / trajs.len() as f64
    }

    /// Returns the product of the policy's action probabilities along `traj`.
    ///
    /// The product over an empty trajectory is 1.0. A state or action absent
    /// from the policy table is an error and propagates; it signals that the
    /// policy does not cover the trajectory's domain and must not be
    /// conflated with a probability of 0.
    fn policy_prob_of_actions(
        &self,
        traj: &Trajectory<Self::State, Self::Action>,
        policy: &TabularPolicy<Self::State, Self::Action>,
    ) -> Result<f64> {
        let mut prob = 1.0;
        for (state, action) in traj.states().iter().zip(traj.actions()) {
            prob *= policy.prob(state, action)?;
        }
        Ok(prob)
    }
}
