//! Stack evaluation
//!
//! Reduces a stack snapshot to a single number by consuming entries from the
//! top (the end of the slice) downwards:
//! 1. Operands produce their value
//! 2. Operators take their operands from the entries below them
//! 3. Guards veto operands outside an operator's domain
//!
//! The stack itself is never modified.

use crate::entry::{BinaryFn, BinaryGuard, UnaryFn, UnaryGuard};
use crate::{EvaluationError, EvaluationResult, StackEntry, VariableEnvironment};
use tracing::debug;

/// Outcome of reducing one expression from the top of `ops`, together with
/// the entries below it that were not consumed.
pub type Reduction<'a> = (Result<f64, EvaluationError>, &'a [StackEntry]);

/// Evaluate a whole stack.
///
/// Entries left over below the topmost complete expression are ignored.
pub fn evaluate(ops: &[StackEntry], variables: &VariableEnvironment) -> EvaluationResult {
    let (result, remaining) = evaluate_ops(ops, variables);

    debug!(
        stack = ?ops.iter().map(ToString::to_string).collect::<Vec<_>>(),
        result = ?result,
        left_over = remaining.len(),
        "evaluated stack"
    );

    result.into()
}

/// Reduce the expression at the top of `ops`.
///
/// Returns [`EvaluationError::EmptyStack`] when `ops` is empty. Operators
/// re-label that as [`EvaluationError::NotEnoughOperands`] when they are
/// still waiting for an operand.
///
/// Operators waiting for operands are kept on an explicit work list, so the
/// depth of the stack is bounded by memory rather than by the thread stack.
pub fn evaluate_ops<'a>(ops: &'a [StackEntry], variables: &VariableEnvironment) -> Reduction<'a> {
    let mut pending: Vec<Pending> = Vec::new();
    let mut index = ops.len();

    loop {
        let Some(top) = index.checked_sub(1) else {
            let error = if pending.is_empty() {
                EvaluationError::EmptyStack
            } else {
                EvaluationError::NotEnoughOperands
            };
            return (Err(error), &ops[..index]);
        };
        index = top;

        let mut value = match &ops[top] {
            StackEntry::Literal(value) | StackEntry::NamedConstant { value, .. } => *value,

            StackEntry::Variable(symbol) => match variables.get(symbol) {
                Some(value) => value,
                None => return (Err(EvaluationError::VariableNotSet), &ops[..index]),
            },

            StackEntry::UnaryOp {
                operation, guard, ..
            } => {
                pending.push(Pending::Unary {
                    operation: *operation,
                    guard: *guard,
                });
                continue;
            }

            StackEntry::BinaryOp {
                operation, guard, ..
            } => {
                pending.push(Pending::Binary {
                    operation: *operation,
                    guard: *guard,
                    operand1: None,
                });
                continue;
            }
        };

        // Feed the value to the waiting operators until one needs another operand
        loop {
            match pending.pop() {
                None => return (Ok(value), &ops[..index]),

                Some(Pending::Unary { operation, guard }) => {
                    if let Some(error) = guard.and_then(|guard| guard(value)) {
                        return (Err(error), &ops[..index]);
                    }
                    value = operation(value);
                }

                Some(Pending::Binary {
                    operation,
                    guard,
                    operand1: None,
                }) => {
                    pending.push(Pending::Binary {
                        operation,
                        guard,
                        operand1: Some(value),
                    });
                    break;
                }

                Some(Pending::Binary {
                    operation,
                    guard,
                    operand1: Some(operand1),
                }) => {
                    if let Some(error) = guard.and_then(|guard| guard(operand1, value)) {
                        return (Err(error), &ops[..index]);
                    }
                    value = operation(operand1, value);
                }
            }
        }
    }
}

/// An operator still collecting its operands
enum Pending {
    Unary {
        operation: UnaryFn,
        guard: Option<UnaryGuard>,
    },
    /// `operand1` is the operand nearer the top, filled in first
    Binary {
        operation: BinaryFn,
        guard: Option<BinaryGuard>,
        operand1: Option<f64>,
    },
}

/// True when the newest entry is an operator, i.e. the last action completed
/// an operation rather than entering an operand
pub fn did_finish_operation(ops: &[StackEntry]) -> bool {
    ops.last().is_some_and(StackEntry::is_operation)
}
