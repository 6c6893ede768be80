//! RL sub-solver collaborator.
use anyhow::Result;
use std::time::Duration;

/// An RL agent that can be trained for a bounded duration.
///
/// Concrete IRL algorithms alternate between updating their reward estimate
/// and re-solving the induced RL problem; this trait is the surface they
/// need from the sub-solver. The duration is a soft bound: the agent polls
/// it cooperatively and a single update may overrun it.
pub trait RlAgent<E> {
    /// Trains the agent for at most `duration`, softly bounded.
    fn train_for(&mut self, env: &E, duration: Duration) -> Result<()>;
}

/// A factory producing a fresh RL agent for an environment.
///
/// Supplied to [`IrlBase::new`](crate::IrlBase::new) at construction and
/// invoked once per training iteration by concrete algorithms.
pub type RlAlgFactory<E, G> = Box<dyn Fn(&E) -> Result<G>>;
