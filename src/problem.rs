//! Problem kinds a fitter dispatches between.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a dataset's target variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Categorical target (class labels).
    Discrete,
    /// Numeric target.
    Continuous,
}

/// Kind of prediction problem a learner handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    Classification,
    Regression,
}

impl ProblemKind {
    /// Lowercase label, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemKind::Classification => "classification",
            ProblemKind::Regression => "regression",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TargetKind> for ProblemKind {
    /// Discrete targets are classified, continuous targets regressed.
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Discrete => ProblemKind::Classification,
            TargetKind::Continuous => ProblemKind::Regression,
        }
    }
}
