//! Configuration of training time budgets.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
    time::Duration,
};

/// Time budget of one [`IrlAlgorithm::train`] call.
///
/// Both budgets are wall-clock seconds. The defaults are 300 seconds of
/// total training with 30-second RL sub-solver iterations.
///
/// [`IrlAlgorithm::train`]: crate::IrlAlgorithm::train
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainConfig {
    /// Total training time in seconds.
    pub time_limit: f64,

    /// RL sub-solver training time per iteration in seconds.
    pub rl_time_per_iteration: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            time_limit: 300.0,
            rl_time_per_iteration: 30.0,
        }
    }
}

impl TrainConfig {
    /// Sets the total training time in seconds.
    pub fn time_limit(mut self, v: f64) -> Self {
        self.time_limit = v;
        self
    }

    /// Sets the RL sub-solver time per iteration in seconds.
    pub fn rl_time_per_iteration(mut self, v: f64) -> Self {
        self.rl_time_per_iteration = v;
        self
    }

    /// The total training time as a [`Duration`].
    pub fn time_limit_duration(&self) -> Duration {
        Duration::from_secs_f64(self.time_limit)
    }

    /// The per-iteration RL time as a [`Duration`].
    pub fn rl_time_per_iteration_duration(&self) -> Duration {
        Duration::from_secs_f64(self.rl_time_per_iteration)
    }

    /// Constructs [`TrainConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
