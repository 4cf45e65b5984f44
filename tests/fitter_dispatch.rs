//! End-to-end dispatch through the public API.
//!
//! Wires two small but real learners (majority class, trimmed mean) into a
//! fitter and checks dispatch, parameter routing, and error surfacing the
//! way a caller would observe them.

use std::any::Any;
use std::collections::HashMap;

use ajustar::{
    Dataset, FitError, Fitter, Learner, LearnerBinding, LearnerCtor, LearnerError, Model,
    ParamValue, Params, ProblemKind, TargetKind,
};

/// Toy labeled dataset: a discrete target is a class column, a continuous
/// one a value column.
enum Table {
    Classes(Vec<u32>),
    Values(Vec<f64>),
}

impl Dataset for Table {
    fn target_kind(&self) -> TargetKind {
        match self {
            Table::Classes(_) => TargetKind::Discrete,
            Table::Values(_) => TargetKind::Continuous,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct MajorityModel {
    class: u32,
}

impl Model for MajorityModel {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Predicts the most frequent class; ties go to the smallest label.
struct MajorityLearner {
    params: Params,
    defaults: bool,
}

impl Learner for MajorityLearner {
    fn name(&self) -> &str {
        "majority"
    }

    fn fit(&self, data: &dyn Dataset) -> Result<Box<dyn Model>, LearnerError> {
        let table = data
            .as_any()
            .downcast_ref::<Table>()
            .ok_or("majority learner expects a Table dataset")?;
        let classes = match table {
            Table::Classes(classes) => classes,
            Table::Values(_) => return Err("majority learner needs a discrete target".into()),
        };

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for &class in classes {
            *counts.entry(class).or_insert(0) += 1;
        }
        let majority = counts
            .into_iter()
            .max_by_key(|&(class, count)| (count, std::cmp::Reverse(class)))
            .map(|(class, _)| class);

        match majority {
            Some(class) => Ok(Box::new(MajorityModel { class })),
            None => Err("cannot fit on an empty target column".into()),
        }
    }

    fn use_default_preprocessors(&self) -> bool {
        self.defaults
    }

    fn set_use_default_preprocessors(&mut self, enabled: bool) {
        self.defaults = enabled;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct MeanModel {
    mean: f64,
}

impl Model for MeanModel {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Predicts the trimmed mean of the target column.
struct MeanLearner {
    trim_ratio: f64,
    defaults: bool,
}

impl Learner for MeanLearner {
    fn name(&self) -> &str {
        "mean"
    }

    fn fit(&self, data: &dyn Dataset) -> Result<Box<dyn Model>, LearnerError> {
        let table = data
            .as_any()
            .downcast_ref::<Table>()
            .ok_or("mean learner expects a Table dataset")?;
        let values = match table {
            Table::Values(values) => values,
            Table::Classes(_) => return Err("mean learner needs a continuous target".into()),
        };
        if values.is_empty() {
            return Err("cannot fit on an empty target column".into());
        }

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let trim = (sorted.len() as f64 * self.trim_ratio) as usize;
        let kept = &sorted[trim..sorted.len() - trim];
        let mean = kept.iter().sum::<f64>() / kept.len() as f64;

        Ok(Box::new(MeanModel { mean }))
    }

    fn use_default_preprocessors(&self) -> bool {
        self.defaults
    }

    fn set_use_default_preprocessors(&mut self, enabled: bool) {
        self.defaults = enabled;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn build_majority(params: Params) -> Result<Box<dyn Learner>, LearnerError> {
    Ok(Box::new(MajorityLearner {
        params,
        defaults: false,
    }))
}

fn build_mean(params: Params) -> Result<Box<dyn Learner>, LearnerError> {
    let trim_ratio = params
        .get("trim_ratio")
        .and_then(ParamValue::as_float)
        .unwrap_or(0.0);
    if !(0.0..0.5).contains(&trim_ratio) {
        return Err(format!("trim_ratio must be in [0, 0.5), got {trim_ratio}").into());
    }
    Ok(Box::new(MeanLearner {
        trim_ratio,
        defaults: false,
    }))
}

const MAJORITY: LearnerCtor = LearnerCtor::new("majority", &["tie_break"], build_majority);
const MEAN: LearnerCtor = LearnerCtor::new("mean", &["trim_ratio"], build_mean);
const BINDING: LearnerBinding = LearnerBinding::new(MAJORITY, MEAN);

#[test]
fn test_classification_dataset_gets_majority_model() {
    let mut fitter = Fitter::new(BINDING);
    let model = fitter.fit(&Table::Classes(vec![0, 1, 1, 1, 2])).unwrap();

    let majority = model.as_any().downcast_ref::<MajorityModel>().unwrap();
    assert_eq!(majority.class, 1);
    assert_eq!(fitter.problem_kind(), Some(ProblemKind::Classification));
}

#[test]
fn test_regression_dataset_gets_mean_model() {
    let mut fitter = Fitter::new(BINDING);
    let model = fitter.fit(&Table::Values(vec![1.0, 2.0, 3.0, 6.0])).unwrap();

    let mean = model.as_any().downcast_ref::<MeanModel>().unwrap();
    assert_eq!(mean.mean, 3.0);
    assert_eq!(fitter.problem_kind(), Some(ProblemKind::Regression));
}

#[test]
fn test_one_fitter_serves_both_kinds_in_sequence() {
    let mut fitter = Fitter::new(BINDING);

    fitter.fit(&Table::Classes(vec![3, 3, 4])).unwrap();
    assert_eq!(fitter.learner().unwrap().name(), "majority");

    fitter.fit(&Table::Values(vec![2.0, 4.0])).unwrap();
    assert_eq!(fitter.learner().unwrap().name(), "mean");
    assert_eq!(fitter.problem_kind(), Some(ProblemKind::Regression));
}

#[test]
fn test_shared_config_routes_per_learner() {
    let mut fitter = Fitter::new(BINDING)
        .with_param("trim_ratio", 0.25)
        .with_param("tie_break", "lowest");

    // The mean learner sees trim_ratio but never tie_break: with one value
    // trimmed from each end, the mean of [1, 2, 3, 100] becomes 2.5.
    let model = fitter
        .fit(&Table::Values(vec![100.0, 1.0, 3.0, 2.0]))
        .unwrap();
    let mean = model.as_any().downcast_ref::<MeanModel>().unwrap();
    assert_eq!(mean.mean, 2.5);

    // The majority learner only recorded its own parameter.
    fitter.fit(&Table::Classes(vec![7, 7, 9])).unwrap();
    let learner = fitter.learner().unwrap();
    let recorded = &learner
        .as_any()
        .downcast_ref::<MajorityLearner>()
        .unwrap()
        .params;
    assert_eq!(
        recorded.get("tie_break"),
        Some(&ParamValue::Str("lowest".into()))
    );
    assert_eq!(recorded.get("trim_ratio"), None);
}

#[test]
fn test_classification_only_fitter_rejects_regression_data() {
    let mut fitter = Fitter::new(LearnerBinding::classification_only(MAJORITY));
    let err = fitter.fit(&Table::Values(vec![1.0, 2.0])).unwrap_err();

    assert!(matches!(
        err,
        FitError::UnsupportedProblemKind(Some(ProblemKind::Regression))
    ));
    assert_eq!(
        err.to_string(),
        "no learner defined that handles regression data"
    );
}

#[test]
fn test_learner_access_before_any_fit_fails() {
    let fitter = Fitter::new(BINDING);
    assert!(matches!(
        fitter.learner().err().unwrap(),
        FitError::UnsupportedProblemKind(None)
    ));
}

#[test]
fn test_empty_binding_is_rejected_up_front() {
    let err = LearnerBinding::from_parts(None, None).unwrap_err();
    assert!(matches!(err, FitError::InvalidBinding));
}

#[test]
fn test_bad_learner_parameter_surfaces_verbatim() {
    let mut fitter = Fitter::new(BINDING).with_param("trim_ratio", 0.9);
    let err = fitter.fit(&Table::Values(vec![1.0, 2.0])).unwrap_err();

    assert!(matches!(err, FitError::Learner(_)));
    assert_eq!(err.to_string(), "trim_ratio must be in [0, 0.5), got 0.9");
}

#[test]
fn test_empty_target_error_surfaces_verbatim() {
    let mut fitter = Fitter::new(BINDING);
    let err = fitter.fit(&Table::Values(vec![])).unwrap_err();
    assert_eq!(err.to_string(), "cannot fit on an empty target column");
}
