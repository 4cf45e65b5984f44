//! Problem-kind dispatch over a pair of learners.

use crate::binding::LearnerBinding;
use crate::error::{FitError, Result};
use crate::learner::{Dataset, Learner, Model, PreprocessorChain};
use crate::params::{ParamValue, Params};
use crate::problem::ProblemKind;

/// Dispatches model fitting to a classification or regression learner
/// based on the dataset's target kind.
///
/// A fitter is declared with a [`LearnerBinding`] naming the learner
/// constructor for each problem kind it handles, and one shared parameter
/// set covering the union of every bound constructor's parameters. On
/// [`Fitter::fit`] it inspects the dataset target, lazily constructs the
/// matching learner with exactly the parameters its constructor declares,
/// and delegates the fitting to it, returning the model unmodified.
///
/// Learners are cached per problem kind: repeated fits of same-kind data
/// reuse one learner instance. Fitting data of the other kind constructs
/// and caches that kind's learner and moves the active kind with it;
/// [`Fitter::learner`] always follows the most recent fit.
///
/// A fitter is not internally synchronized. The `&mut self` receivers make
/// concurrent use a compile-time error; wrap the fitter in a `Mutex` when
/// several threads must share one instance.
pub struct Fitter {
    binding: LearnerBinding,
    params: Params,
    use_default_preprocessors: bool,
    problem_kind: Option<ProblemKind>,
    learners: LearnerCache,
}

/// Per-kind cache of constructed learners. A slot is populated at most once.
#[derive(Default)]
struct LearnerCache {
    classification: Option<Box<dyn Learner>>,
    regression: Option<Box<dyn Learner>>,
}

impl LearnerCache {
    fn get(&self, kind: ProblemKind) -> Option<&dyn Learner> {
        match kind {
            ProblemKind::Classification => self.classification.as_deref(),
            ProblemKind::Regression => self.regression.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: ProblemKind) -> &mut Option<Box<dyn Learner>> {
        match kind {
            ProblemKind::Classification => &mut self.classification,
            ProblemKind::Regression => &mut self.regression,
        }
    }
}

impl Fitter {
    /// Create a fitter over `binding` with an empty parameter set.
    pub fn new(binding: LearnerBinding) -> Self {
        Self {
            binding,
            params: Params::new(),
            use_default_preprocessors: false,
            problem_kind: None,
            learners: LearnerCache::default(),
        }
    }

    /// Overlay shared learner parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params.merge(params);
        self
    }

    /// Set a single shared parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Supply a preprocessor chain.
    ///
    /// The chain is stored in the parameter set under the reserved
    /// [`PREPROCESSORS_PARAM`](crate::params::PREPROCESSORS_PARAM) slot, so
    /// every learner whose constructor accepts that name receives the same
    /// chain.
    pub fn with_preprocessors(mut self, chain: PreprocessorChain) -> Self {
        self.params.set_preprocessors(chain);
        self
    }

    /// Choose whether constructed learners apply their default
    /// preprocessors.
    pub fn with_default_preprocessors(mut self, enabled: bool) -> Self {
        self.use_default_preprocessors = enabled;
        self
    }

    /// Fit a model to `data`, dispatching on its target kind.
    ///
    /// Discrete targets select the classification learner, continuous
    /// targets the regression learner. The model comes back exactly as the
    /// learner produced it. Fails with
    /// [`FitError::UnsupportedProblemKind`] when no learner is bound for
    /// the dataset's kind; learner errors pass through as
    /// [`FitError::Learner`].
    pub fn fit(&mut self, data: &dyn Dataset) -> Result<Box<dyn Model>> {
        let kind = ProblemKind::from(data.target_kind());
        self.problem_kind = Some(kind);
        let learner = self.resolve_learner(kind)?;
        learner.fit(data).map_err(FitError::Learner)
    }

    /// The learner handling `kind`, constructed and cached on first use.
    ///
    /// Construction filters the shared parameters down to the names the
    /// constructor declares, builds the learner, and then assigns the
    /// fitter's default-preprocessor flag onto it.
    pub fn resolve_learner(&mut self, kind: ProblemKind) -> Result<&mut (dyn Learner + 'static)> {
        let ctor = self
            .binding
            .ctor(kind)
            .copied()
            .ok_or(FitError::UnsupportedProblemKind(Some(kind)))?;

        let slot = self.learners.slot_mut(kind);
        if slot.is_none() {
            let filtered = self.params.filtered(ctor.accepted_params());
            let mut learner = ctor.construct(filtered).map_err(FitError::Learner)?;
            learner.set_use_default_preprocessors(self.use_default_preprocessors);
            *slot = Some(learner);
        }
        slot.as_deref_mut()
            .ok_or(FitError::UnsupportedProblemKind(Some(kind)))
    }

    /// The learner behind the most recent [`Fitter::fit`] call.
    ///
    /// This is the pass-through surface to whichever concrete learner was
    /// dispatched to: downcast through [`Learner::as_any`] to reach fitted
    /// state or helper methods the learner exposes. Fails with
    /// [`FitError::UnsupportedProblemKind`] before any fit, while the
    /// problem kind is still undetermined.
    pub fn learner(&self) -> Result<&dyn Learner> {
        let kind = self
            .problem_kind
            .ok_or(FitError::UnsupportedProblemKind(None))?;
        self.learners
            .get(kind)
            .ok_or(FitError::UnsupportedProblemKind(Some(kind)))
    }

    /// Mutable access to the learner behind the most recent fit,
    /// constructing it first if it is not cached yet.
    pub fn learner_mut(&mut self) -> Result<&mut (dyn Learner + 'static)> {
        let kind = self
            .problem_kind
            .ok_or(FitError::UnsupportedProblemKind(None))?;
        self.resolve_learner(kind)
    }

    /// Problem kind of the most recently fitted dataset, if any.
    pub fn problem_kind(&self) -> Option<ProblemKind> {
        self.problem_kind
    }

    /// Shared parameters, the reserved preprocessor slot included.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Whether a learner is bound for `kind`.
    pub fn supports(&self, kind: ProblemKind) -> bool {
        self.binding.supports(kind)
    }

    /// Problem kinds this fitter has learners for.
    pub fn supported_kinds(&self) -> Vec<ProblemKind> {
        self.binding.supported_kinds()
    }

    /// Current default-preprocessor setting.
    pub fn use_default_preprocessors(&self) -> bool {
        self.use_default_preprocessors
    }

    /// Change the default-preprocessor setting for learners constructed
    /// after this call. Already cached learners keep their flag.
    pub fn set_use_default_preprocessors(&mut self, enabled: bool) {
        self.use_default_preprocessors = enabled;
    }
}
