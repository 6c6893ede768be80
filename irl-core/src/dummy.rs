//! This module is used for tests.
use crate::{FeatureEnv, IrlAlgorithm, IrlBase, RlAgent, TrajectorySet};
use anyhow::Result;
use ndarray::Array1;
use std::time::Duration;

/// Dummy environment declaring a feature dimensionality.
pub struct DummyFeatureEnv {
    feature_dim: usize,
}

impl DummyFeatureEnv {
    /// Constructs an environment declaring `feature_dim` features.
    pub fn new(feature_dim: usize) -> Self {
        Self { feature_dim }
    }
}

impl FeatureEnv for DummyFeatureEnv {
    fn feature_dim(&self) -> usize {
        self.feature_dim
    }
}

/// Decorator-style wrapper delegating to the wrapped environment.
pub struct WrappedEnv<E>(pub E);

impl<E: FeatureEnv> FeatureEnv for WrappedEnv<E> {
    fn feature_dim(&self) -> usize {
        self.0.feature_dim()
    }
}

/// Dummy RL agent whose training is a no-op.
pub struct DummyRlAgent;

impl<E> RlAgent<E> for DummyRlAgent {
    fn train_for(&mut self, _env: &E, _duration: Duration) -> Result<()> {
        Ok(())
    }
}

/// IRL algorithm overriding none of the abstract operations.
///
/// Used to test the shared numeric operations and the NotImplemented
/// defaults of the contract.
pub struct DummyIrl {
    base: IrlBase<DummyFeatureEnv, usize, usize, DummyRlAgent>,
}

impl DummyIrl {
    /// Constructs the dummy over a [`DummyFeatureEnv`] of `feature_dim`.
    pub fn new(
        feature_dim: usize,
        expert_trajs: TrajectorySet<usize, usize>,
        gamma: f64,
    ) -> Result<Self> {
        let base = IrlBase::new(
            DummyFeatureEnv::new(feature_dim),
            expert_trajs,
            Box::new(|_| Ok(DummyRlAgent)),
            gamma,
        )?;
        Ok(Self { base })
    }
}

impl IrlAlgorithm<DummyFeatureEnv> for DummyIrl {
    type State = usize;
    type Action = usize;
    type RewardFunction = Array1<f64>;

    fn env(&self) -> &DummyFeatureEnv {
        self.base.env()
    }

    fn expert_trajs(&self) -> &TrajectorySet<usize, usize> {
        self.base.expert_trajs()
    }

    fn gamma(&self) -> f64 {
        self.base.gamma()
    }
}
