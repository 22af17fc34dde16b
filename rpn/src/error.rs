use serde::Serialize;
use thiserror::Error;

/// Reasons a stack can fail to evaluate.
///
/// All of these are recoverable: they are reported to the caller inside an
/// [`EvaluationResult`](crate::EvaluationResult) and the stack is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationError {
    /// The whole stack is empty.
    ///
    /// Only reported by the outermost evaluation. An operator that runs out of
    /// operands reports [`EvaluationError::NotEnoughOperands`] instead.
    #[error("Empty stack")]
    EmptyStack,

    /// An operator ran out of operands while the stack was being reduced.
    #[error("Not enough operands")]
    NotEnoughOperands,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root of negative number")]
    SquareRootOfNegativeNumber,

    /// A variable on the stack has no value in the environment.
    #[error("Variable not set")]
    VariableNotSet,
}

impl EvaluationError {
    /// Stable machine-readable name, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationError::EmptyStack => "empty_stack",
            EvaluationError::NotEnoughOperands => "not_enough_operands",
            EvaluationError::DivisionByZero => "division_by_zero",
            EvaluationError::SquareRootOfNegativeNumber => "square_root_of_negative_number",
            EvaluationError::VariableNotSet => "variable_not_set",
        }
    }
}
