//! Expert demonstration trajectories.
use crate::error::IrlError;
use anyhow::Result;
use ndarray::Array1;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    ops::Deref,
    path::Path,
};

/// A recorded episode: aligned sequences of states, actions and per-timestep
/// feature vectors.
///
/// All three sequences have the same length `T`. Every feature vector is
/// expected to have the same dimensionality `D`, matching the dimensionality
/// declared by the environment's [`FeatureEnv::feature_dim`]; this is not
/// checked at construction and can be validated with
/// [`Trajectory::check_feature_dim`].
///
/// Trajectories are immutable once constructed. They are produced by a
/// trajectory-collection collaborator and borrowed by IRL algorithms.
///
/// [`FeatureEnv::feature_dim`]: crate::FeatureEnv::feature_dim
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory<S, A> {
    states: Vec<S>,
    actions: Vec<A>,
    features: Vec<Array1<f64>>,
}

impl<S, A> Trajectory<S, A> {
    /// Constructs a trajectory from aligned sequences.
    ///
    /// Fails with [`IrlError::MisalignedTrajectory`] if the sequences differ
    /// in length.
    pub fn new(states: Vec<S>, actions: Vec<A>, features: Vec<Array1<f64>>) -> Result<Self> {
        if states.len() != actions.len() || states.len() != features.len() {
            return Err(IrlError::MisalignedTrajectory {
                states: states.len(),
                actions: actions.len(),
                features: features.len(),
            }
            .into());
        }
        Ok(Self {
            states,
            actions,
            features,
        })
    }

    /// The number of timesteps `T`.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` for a zero-length trajectory.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state sequence.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The action sequence.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// The per-timestep feature vectors.
    pub fn features(&self) -> &[Array1<f64>] {
        &self.features
    }

    /// Checks that every feature vector has dimensionality `dim`.
    ///
    /// Concrete algorithms call this before accumulation when they want
    /// shape mismatches surfaced as errors instead of undefined numerics.
    pub fn check_feature_dim(&self, dim: usize) -> Result<()> {
        for f in &self.features {
            if f.len() != dim {
                return Err(IrlError::FeatureDimMismatch {
                    expected: dim,
                    found: f.len(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// The demonstration dataset: an ordered collection of trajectories.
///
/// Fixed for the lifetime of one algorithm instance. Derefs to
/// `[Trajectory<S, A>]`, so the shared numeric operations take plain slices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrajectorySet<S, A>(Vec<Trajectory<S, A>>);

impl<S, A> TrajectorySet<S, A> {
    /// Wraps a collection of trajectories.
    pub fn new(trajs: Vec<Trajectory<S, A>>) -> Self {
        Self(trajs)
    }
}

impl<S, A> TrajectorySet<S, A>
where
    S: Serialize + DeserializeOwned,
    A: Serialize + DeserializeOwned,
{
    /// Loads a trajectory set from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the trajectory set as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

impl<S, A> Deref for TrajectorySet<S, A> {
    type Target = [Trajectory<S, A>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, A> From<Vec<Trajectory<S, A>>> for TrajectorySet<S, A> {
    fn from(trajs: Vec<Trajectory<S, A>>) -> Self {
        Self(trajs)
    }
}
