//! Tabular policy.
use crate::error::IrlError;
use anyhow::Result;
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// A policy represented as an explicit per-state action-probability table.
///
/// Two-level mapping from state to action to probability. For every state
/// present, the action probabilities are assumed to sum to 1; this is a
/// caller precondition and is not enforced here.
///
/// A lookup of a state or action absent from the table is an error, not a
/// probability of 0. A missing entry means the policy does not cover the
/// domain the trajectory was collected on, which callers need to see.
#[derive(Clone, Debug, Default)]
pub struct TabularPolicy<S, A>(HashMap<S, HashMap<A, f64>>);

impl<S, A> TabularPolicy<S, A>
where
    S: Eq + Hash + Debug,
    A: Eq + Hash + Debug,
{
    /// Constructs an empty policy table.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Sets the probability of taking `action` in `state`.
    pub fn set_prob(&mut self, state: S, action: A, prob: f64) {
        self.0.entry(state).or_insert_with(HashMap::new).insert(action, prob);
    }

    /// Looks up the probability of taking `action` in `state`.
    ///
    /// Fails with [`IrlError::StateNotInPolicy`] or
    /// [`IrlError::ActionNotInPolicy`] if the table has no entry.
    pub fn prob(&self, state: &S, action: &A) -> Result<f64> {
        let actions = self
            .0
            .get(state)
            .ok_or_else(|| IrlError::StateNotInPolicy(format!("{:?}", state)))?;
        let p = actions.get(action).ok_or_else(|| IrlError::ActionNotInPolicy {
            state: format!("{:?}", state),
            action: format!("{:?}", action),
        })?;
        Ok(*p)
    }

    /// The number of states covered by the table.
    pub fn n_states(&self) -> usize {
        self.0.len()
    }
}

impl<S, A> From<HashMap<S, HashMap<A, f64>>> for TabularPolicy<S, A> {
    fn from(table: HashMap<S, HashMap<A, f64>>) -> Self {
        Self(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrlError;

    #[test]
    fn test_lookup() -> anyhow::Result<()> {
        let mut policy = TabularPolicy::new();
        policy.set_prob(0usize, 1usize, 0.25);
        assert_eq!(policy.prob(&0, &1)?, 0.25);
        Ok(())
    }

    #[test]
    fn test_missing_state_is_an_error() {
        let policy: TabularPolicy<usize, usize> = TabularPolicy::new();
        let err = policy.prob(&7, &0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IrlError>(),
            Some(IrlError::StateNotInPolicy(_))
        ));
    }

    #[test]
    fn test_missing_action_is_an_error() {
        let mut policy = TabularPolicy::new();
        policy.set_prob(0usize, 1usize, 1.0);
        let err = policy.prob(&0, &2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IrlError>(),
            Some(IrlError::ActionNotInPolicy { .. })
        ));
    }
}
