//! Problem-kind dispatch for model fitting.
//!
//! One [`Fitter`] handles datasets of either target kind with a single
//! configuration. A fitter is declared by binding a learner constructor
//! per problem kind ([`LearnerBinding`]); when handed a dataset it maps
//! the dataset's target kind to classification or regression, builds the
//! matching learner with the subset of shared parameters that learner's
//! constructor declares, caches it, and delegates fitting to it. The
//! produced model, and any learner error, pass through unchanged.
//!
//! The fitting strategies themselves, the dataset representation, and the
//! preprocessing pipeline stay behind the [`Learner`], [`Dataset`], and
//! [`Preprocess`] traits; this crate only decides which learner runs and
//! with which parameters.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use ajustar::{
//!     Dataset, Fitter, Learner, LearnerBinding, LearnerCtor, LearnerError, Model, Params,
//!     ProblemKind, TargetKind,
//! };
//!
//! #[derive(Debug)]
//! struct MeanModel(f64);
//!
//! impl Model for MeanModel {
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! struct MeanLearner {
//!     defaults: bool,
//! }
//!
//! impl Learner for MeanLearner {
//!     fn name(&self) -> &str {
//!         "mean"
//!     }
//!
//!     fn fit(&self, data: &dyn Dataset) -> Result<Box<dyn Model>, LearnerError> {
//!         let values = data
//!             .as_any()
//!             .downcast_ref::<Numbers>()
//!             .ok_or("mean learner expects a Numbers dataset")?;
//!         let mean = values.0.iter().sum::<f64>() / values.0.len() as f64;
//!         Ok(Box::new(MeanModel(mean)))
//!     }
//!
//!     fn use_default_preprocessors(&self) -> bool {
//!         self.defaults
//!     }
//!
//!     fn set_use_default_preprocessors(&mut self, enabled: bool) {
//!         self.defaults = enabled;
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! struct Numbers(Vec<f64>);
//!
//! impl Dataset for Numbers {
//!     fn target_kind(&self) -> TargetKind {
//!         TargetKind::Continuous
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! fn build_mean(_params: Params) -> Result<Box<dyn Learner>, LearnerError> {
//!     Ok(Box::new(MeanLearner { defaults: false }))
//! }
//!
//! const MEAN: LearnerCtor = LearnerCtor::new("mean", &[], build_mean);
//!
//! let mut fitter = Fitter::new(LearnerBinding::regression_only(MEAN));
//! let model = fitter.fit(&Numbers(vec![1.0, 2.0, 6.0])).unwrap();
//!
//! let mean = model.as_any().downcast_ref::<MeanModel>().unwrap();
//! assert_eq!(mean.0, 3.0);
//! assert_eq!(fitter.problem_kind(), Some(ProblemKind::Regression));
//! assert_eq!(fitter.learner().unwrap().name(), "mean");
//! ```

pub mod binding;
pub mod error;
pub mod fitter;
pub mod learner;
pub mod params;
pub mod problem;

pub use binding::{BuildFn, LearnerBinding, LearnerCtor};
pub use error::{FitError, Result};
pub use fitter::Fitter;
pub use learner::{Dataset, Learner, LearnerError, Model, Preprocess, PreprocessorChain};
pub use params::{ParamValue, Params, PREPROCESSORS_PARAM};
pub use problem::{ProblemKind, TargetKind};
