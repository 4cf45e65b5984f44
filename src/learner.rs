//! Capability contracts between a fitter and its collaborators.
//!
//! The fitter consumes datasets and learners, and produces models, purely
//! through these traits. Concrete learner implementations live outside this
//! crate and are wired in through a [`LearnerCtor`].
//!
//! [`LearnerCtor`]: crate::binding::LearnerCtor

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::problem::TargetKind;

/// Error type for learner construction and fitting.
///
/// Boxed so learner implementations keep their own error enums. The fitter
/// forwards these to its caller without wrapping or translation.
pub type LearnerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A dataset a learner can fit a model to.
///
/// Only the target kind is needed for dispatch; concrete learners reach
/// their dataset type through [`Dataset::as_any`]. Datasets without a
/// target variable, or with several, are outside this contract.
pub trait Dataset {
    /// Whether the target variable is discrete or continuous.
    fn target_kind(&self) -> TargetKind;

    /// Downcasting hook so concrete learners can reach their dataset type.
    fn as_any(&self) -> &dyn Any;
}

/// A fitted model produced by a learner.
///
/// The fitter returns models exactly as its learners produce them.
pub trait Model: fmt::Debug {
    /// Downcasting hook for callers that need the concrete model type.
    fn as_any(&self) -> &dyn Any;
}

/// One preprocessing step applied to data before fitting.
///
/// The pipeline itself is external; the fitter only forwards a chain of
/// steps to the learners it constructs.
pub trait Preprocess: Send + Sync {
    /// Human readable step name.
    fn name(&self) -> &str;
}

/// An ordered, shareable chain of preprocessing steps.
#[derive(Clone, Default)]
pub struct PreprocessorChain {
    steps: Vec<Arc<dyn Preprocess>>,
}

impl PreprocessorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, returning the chain for chaining.
    pub fn with(mut self, step: Arc<dyn Preprocess>) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a step.
    pub fn push(&mut self, step: Arc<dyn Preprocess>) {
        self.steps.push(step);
    }

    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Preprocess>> {
        self.steps.iter()
    }
}

impl fmt::Debug for PreprocessorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|step| step.name()))
            .finish()
    }
}

/// A fitting strategy for one problem kind.
///
/// Learners are constructed by the fitter and then called on datasets to
/// produce models. The `use_default_preprocessors` flag is not a
/// constructor parameter; the fitter assigns it right after construction.
pub trait Learner {
    /// Human readable learner name.
    fn name(&self) -> &str;

    /// Fit a model to `data`. Errors bubble to the fitter's caller unchanged.
    fn fit(&self, data: &dyn Dataset) -> Result<Box<dyn Model>, LearnerError>;

    /// Whether this learner applies its default preprocessors.
    fn use_default_preprocessors(&self) -> bool;

    /// Toggle application of this learner's default preprocessors.
    fn set_use_default_preprocessors(&mut self, enabled: bool);

    /// Downcasting hook for callers that need learner-specific state.
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Normalize;

    impl Preprocess for Normalize {
        fn name(&self) -> &str {
            "normalize"
        }
    }

    #[test]
    fn test_chain_push_and_iter() {
        let mut chain = PreprocessorChain::new();
        assert!(chain.is_empty());

        chain.push(Arc::new(Normalize));
        assert_eq!(chain.len(), 1);

        let names: Vec<&str> = chain.iter().map(|step| step.name()).collect();
        assert_eq!(names, ["normalize"]);
    }

    #[test]
    fn test_chain_debug_lists_step_names() {
        let chain = PreprocessorChain::new().with(Arc::new(Normalize));
        assert_eq!(format!("{chain:?}"), r#"["normalize"]"#);
    }

    #[test]
    fn test_chain_clone_shares_steps() {
        let chain = PreprocessorChain::new().with(Arc::new(Normalize));
        let copy = chain.clone();
        assert!(Arc::ptr_eq(&chain.steps[0], &copy.steps[0]));
    }
}
