//! Fitter error types.

use thiserror::Error;

use crate::learner::LearnerError;
use crate::problem::ProblemKind;

/// Result type alias for fitter operations.
pub type Result<T> = std::result::Result<T, FitError>;

/// Errors surfaced by a fitter.
///
/// Everything is surfaced directly; nothing is retried or recovered.
/// Errors produced by a delegated learner pass through
/// [`FitError::Learner`] with their message unchanged.
#[derive(Debug, Error)]
pub enum FitError {
    /// A binding was declared without a learner for any problem kind.
    #[error("a learner binding must define a constructor for at least one problem kind")]
    InvalidBinding,

    /// No learner is defined for the requested problem kind — either the
    /// binding does not cover it (`Some`), or no dataset has been fitted
    /// yet and the kind is still undetermined (`None`).
    #[error("no learner defined that handles {} data", kind_label(.0))]
    UnsupportedProblemKind(Option<ProblemKind>),

    /// Error raised by a delegated learner during construction or fitting.
    #[error("{0}")]
    Learner(LearnerError),
}

fn kind_label(kind: &Option<ProblemKind>) -> &'static str {
    match kind {
        Some(kind) => kind.as_str(),
        None => "an undetermined kind of",
    }
}
