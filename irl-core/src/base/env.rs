//! Environment collaborator.

/// An environment that exposes per-timestep feature vectors of a fixed
/// dimensionality.
///
/// IRL algorithms only need one thing from the environment: the feature
/// dimensionality `D`, used to size the zero accumulator in
/// [`IrlAlgorithm::feature_count`]. Environments are commonly stacks of
/// decorator-style wrappers around the one responsible for feature
/// extraction; a wrapper implements this trait by delegating to the wrapped
/// environment, so callers reach the feature dimensionality without knowing
/// the stack's depth.
///
/// [`IrlAlgorithm::feature_count`]: crate::IrlAlgorithm::feature_count
pub trait FeatureEnv {
    /// The fixed dimensionality `D` of per-timestep feature vectors.
    fn feature_dim(&self) -> usize;
}

impl<E: FeatureEnv + ?Sized> FeatureEnv for &E {
    fn feature_dim(&self) -> usize {
        (**self).feature_dim()
    }
}

impl<E: FeatureEnv + ?Sized> FeatureEnv for Box<E> {
    fn feature_dim(&self) -> usize {
        (**self).feature_dim()
    }
}
