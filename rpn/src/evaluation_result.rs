use crate::EvaluationError;
use serde::Serialize;

/// Result of evaluating a stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EvaluationResult {
    /// The stack reduced to a number
    Value(f64),
    /// The stack could not be reduced
    Error(EvaluationError),
}

impl EvaluationResult {
    /// Check if evaluation failed
    pub fn is_error(&self) -> bool {
        matches!(self, EvaluationResult::Error(_))
    }

    /// Get the value if present, None if evaluation failed
    pub fn value(&self) -> Option<f64> {
        match self {
            EvaluationResult::Value(v) => Some(*v),
            EvaluationResult::Error(_) => None,
        }
    }

    /// Get the error if evaluation failed, None otherwise
    pub fn error(&self) -> Option<EvaluationError> {
        match self {
            EvaluationResult::Error(e) => Some(*e),
            EvaluationResult::Value(_) => None,
        }
    }

    pub fn into_result(self) -> Result<f64, EvaluationError> {
        self.into()
    }
}

impl From<Result<f64, EvaluationError>> for EvaluationResult {
    fn from(result: Result<f64, EvaluationError>) -> Self {
        match result {
            Ok(v) => EvaluationResult::Value(v),
            Err(e) => EvaluationResult::Error(e),
        }
    }
}

impl From<EvaluationResult> for Result<f64, EvaluationError> {
    fn from(result: EvaluationResult) -> Self {
        match result {
            EvaluationResult::Value(v) => Ok(v),
            EvaluationResult::Error(e) => Err(e),
        }
    }
}
