//! Shared learner configuration.
//!
//! A fitter is constructed with one [`Params`] set covering the union of
//! every bound learner's constructor parameters. Each learner only ever
//! sees the subset its constructor declares, via [`Params::filtered`];
//! names no learner accepts are dropped silently rather than rejected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::learner::PreprocessorChain;

/// Reserved parameter name under which a fitter stores its preprocessor
/// chain, making the chain available to every learner whose constructor
/// accepts it.
pub const PREPROCESSORS_PARAM: &str = "preprocessors";

/// A single named configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Get as float (converts int to float if needed).
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

/// Named configuration shared by all learners a fitter can construct.
///
/// The preprocessor chain is held in a distinguished slot keyed by
/// [`PREPROCESSORS_PARAM`]. It participates in name listing and filtering
/// like any other parameter but is not a [`ParamValue`], and is skipped
/// during serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Params {
    values: HashMap<String, ParamValue>,
    #[serde(skip)]
    preprocessors: Option<PreprocessorChain>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named value, returning the set for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a named value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get a value by name. The reserved preprocessor slot is not a value;
    /// use [`Params::preprocessors`] for it.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Store the preprocessor chain under the reserved slot.
    pub fn set_preprocessors(&mut self, chain: PreprocessorChain) {
        self.preprocessors = Some(chain);
    }

    /// The preprocessor chain, if one was supplied.
    pub fn preprocessors(&self) -> Option<&PreprocessorChain> {
        self.preprocessors.as_ref()
    }

    /// Whether a parameter of this name is present, the reserved slot
    /// included.
    pub fn contains(&self, name: &str) -> bool {
        if name == PREPROCESSORS_PARAM && self.preprocessors.is_some() {
            return true;
        }
        self.values.contains_key(name)
    }

    /// Number of parameters, the reserved slot included.
    pub fn len(&self) -> usize {
        self.values.len() + usize::from(self.preprocessors.is_some())
    }

    /// Check if the set holds no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parameter names, the reserved slot included.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        if self.preprocessors.is_some() {
            names.push(PREPROCESSORS_PARAM);
        }
        names
    }

    /// Overlay `other` on this set; entries in `other` win.
    pub fn merge(&mut self, other: Params) {
        self.values.extend(other.values);
        if other.preprocessors.is_some() {
            self.preprocessors = other.preprocessors;
        }
    }

    /// The subset of parameters whose names a learner constructor accepts.
    ///
    /// Names not in `accepted` are dropped silently; the preprocessor slot
    /// is kept only when `accepted` lists the reserved name.
    pub fn filtered(&self, accepted: &[&str]) -> Params {
        let values = self
            .values
            .iter()
            .filter(|(name, _)| accepted.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        let preprocessors = if accepted.contains(&PREPROCESSORS_PARAM) {
            self.preprocessors.clone()
        } else {
            None
        };
        Params {
            values,
            preprocessors,
        }
    }
}
