//! Learner constructor bindings.
//!
//! A fitter is declared by binding a learner constructor to each problem
//! kind it handles. Validity (at least one side bound) is enforced when the
//! binding is defined, not when a fitter is first used: the typed
//! constructors cannot express an empty binding, and
//! [`LearnerBinding::from_parts`] checks dynamically assembled ones up
//! front.

use crate::error::FitError;
use crate::learner::{Learner, LearnerError};
use crate::params::Params;
use crate::problem::ProblemKind;

/// Construction function for a concrete learner type.
///
/// Receives an already filtered parameter set: only names the constructor
/// declared in [`LearnerCtor::accepted_params`] are present.
pub type BuildFn = fn(Params) -> Result<Box<dyn Learner>, LearnerError>;

/// A named learner constructor with its declared parameter list.
#[derive(Debug, Clone, Copy)]
pub struct LearnerCtor {
    name: &'static str,
    accepted_params: &'static [&'static str],
    build: BuildFn,
}

impl LearnerCtor {
    /// Define a constructor. `const` so bindings can live in statics.
    pub const fn new(
        name: &'static str,
        accepted_params: &'static [&'static str],
        build: BuildFn,
    ) -> Self {
        Self {
            name,
            accepted_params,
            build,
        }
    }

    /// Name of the learner this constructor produces.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parameter names the constructor accepts.
    pub fn accepted_params(&self) -> &'static [&'static str] {
        self.accepted_params
    }

    /// Construct a learner from an already filtered parameter set.
    pub fn construct(&self, params: Params) -> Result<Box<dyn Learner>, LearnerError> {
        (self.build)(params)
    }
}

/// Learner constructors a fitter dispatches between, one per problem kind.
#[derive(Debug, Clone, Copy)]
pub struct LearnerBinding {
    classification: Option<LearnerCtor>,
    regression: Option<LearnerCtor>,
}

impl LearnerBinding {
    /// Bind both problem kinds.
    pub const fn new(classification: LearnerCtor, regression: LearnerCtor) -> Self {
        Self {
            classification: Some(classification),
            regression: Some(regression),
        }
    }

    /// Bind only the classification side.
    pub const fn classification_only(ctor: LearnerCtor) -> Self {
        Self {
            classification: Some(ctor),
            regression: None,
        }
    }

    /// Bind only the regression side.
    pub const fn regression_only(ctor: LearnerCtor) -> Self {
        Self {
            classification: None,
            regression: Some(ctor),
        }
    }

    /// Assemble a binding from optional sides.
    ///
    /// Fails with [`FitError::InvalidBinding`] when neither side is bound,
    /// so a misdeclared fitter is rejected where it is defined instead of
    /// surfacing as a dead dispatcher later.
    pub fn from_parts(
        classification: Option<LearnerCtor>,
        regression: Option<LearnerCtor>,
    ) -> Result<Self, FitError> {
        if classification.is_none() && regression.is_none() {
            return Err(FitError::InvalidBinding);
        }
        Ok(Self {
            classification,
            regression,
        })
    }

    /// Constructor bound to `kind`, if any.
    pub fn ctor(&self, kind: ProblemKind) -> Option<&LearnerCtor> {
        match kind {
            ProblemKind::Classification => self.classification.as_ref(),
            ProblemKind::Regression => self.regression.as_ref(),
        }
    }

    /// Whether a learner is bound for `kind`.
    pub fn supports(&self, kind: ProblemKind) -> bool {
        self.ctor(kind).is_some()
    }

    /// Problem kinds this binding has learners for.
    pub fn supported_kinds(&self) -> Vec<ProblemKind> {
        [ProblemKind::Classification, ProblemKind::Regression]
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .collect()
    }
}
