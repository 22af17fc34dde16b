//! Stack entries
//!
//! Everything that can sit on the calculator stack: plain numbers, named
//! constants, variables and the operators that consume them.

use crate::EvaluationError;
use std::fmt;

/// Function applied by a unary operator
pub type UnaryFn = fn(f64) -> f64;

/// Function applied by a binary operator.
///
/// Receives `(operand1, operand2)` where `operand1` is the operand nearer the
/// top of the stack.
pub type BinaryFn = fn(f64, f64) -> f64;

/// Validation run on a unary operand before the operator is applied
pub type UnaryGuard = fn(f64) -> Option<EvaluationError>;

/// Validation run on binary operands, in the same order as [`BinaryFn`]
pub type BinaryGuard = fn(f64, f64) -> Option<EvaluationError>;

/// A single entry of the calculator stack
#[derive(Debug, Clone)]
pub enum StackEntry {
    /// A directly entered number
    Literal(f64),

    /// A named value fixed when the operator table was built, e.g. π
    NamedConstant { symbol: String, value: f64 },

    /// A symbol resolved against the variable environment at evaluation time
    Variable(String),

    UnaryOp {
        symbol: String,
        operation: UnaryFn,
        guard: Option<UnaryGuard>,
    },

    BinaryOp {
        symbol: String,
        operation: BinaryFn,
        guard: Option<BinaryGuard>,
    },
}

impl StackEntry {
    /// Symbol of a constant, variable or operator; None for literals
    pub fn symbol(&self) -> Option<&str> {
        match self {
            StackEntry::Literal(_) => None,
            StackEntry::NamedConstant { symbol, .. }
            | StackEntry::Variable(symbol)
            | StackEntry::UnaryOp { symbol, .. }
            | StackEntry::BinaryOp { symbol, .. } => Some(symbol),
        }
    }

    /// True for unary and binary operators
    pub fn is_operation(&self) -> bool {
        matches!(self, StackEntry::UnaryOp { .. } | StackEntry::BinaryOp { .. })
    }

    /// True for entries that produce a value without consuming operands
    pub fn is_operand(&self) -> bool {
        !self.is_operation()
    }
}

impl fmt::Display for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEntry::Literal(value) => write!(f, "{}", value),
            StackEntry::NamedConstant { symbol, .. }
            | StackEntry::Variable(symbol)
            | StackEntry::UnaryOp { symbol, .. }
            | StackEntry::BinaryOp { symbol, .. } => f.write_str(symbol),
        }
    }
}
