//! # RPN Engine
//!
//! **A stack machine for reverse Polish notation calculators**
//!
//! Operands and operators are pushed onto a stack. The stack is evaluated to a
//! number (or a typed error) and rendered back as infix text with only the
//! parentheses that precedence requires.
//!
//! ## Quick Start
//!
//! ```rust
//! use rpn::{Calculator, EvaluationResult};
//!
//! let mut calculator = Calculator::new();
//!
//! calculator.push_literal(1.0);
//! calculator.push_literal(2.0);
//! calculator.apply_operator("+");
//! calculator.push_literal(4.0);
//! let result = calculator.apply_operator("×");
//!
//! assert_eq!(result, EvaluationResult::Value(12.0));
//! assert_eq!(calculator.describe_all(), "(1+2)×4");
//! ```
//!
//! ## Core Concepts
//!
//! ### Stack
//! Entries are literals, named constants such as `π`, variables, and unary or
//! binary operators. The newest entry is the top of the stack.
//!
//! ### Evaluation
//! Evaluation starts at the top and pulls operands from below. The operand
//! nearest the top is the *second* mathematical operand, so `7 2 −` is
//! `7−2`.
//!
//! ### Variables
//! Variables are resolved every time the stack is evaluated, so changing a
//! variable changes the result without touching the stack.

pub mod calculator;
pub mod describer;
pub mod entry;
pub mod error;
pub mod evaluation_result;
pub mod evaluator;
pub mod format;
pub mod operators;
pub mod options;
pub mod snapshot;
pub mod variables;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use calculator::{Calculator, ListenerId};
pub use describer::{describe_all, describe_one, Description};
pub use entry::StackEntry;
pub use error::EvaluationError;
pub use evaluation_result::EvaluationResult;
pub use evaluator::{did_finish_operation, evaluate};
pub use operators::OperatorTable;
pub use options::DisplayOptions;
pub use snapshot::Snapshot;
pub use variables::VariableEnvironment;

#[cfg(test)]
mod tests;
