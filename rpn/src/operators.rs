//! Operator and constant registry
//!
//! Holds the entry template for every symbol a caller can apply, and the
//! precedence of every binary operator for infix rendering.

use crate::entry::{BinaryFn, BinaryGuard, StackEntry, UnaryFn, UnaryGuard};
use crate::EvaluationError;
use std::collections::HashMap;

/// Precedence of `×` and `÷`. Lower ranks bind tighter.
pub const MULTIPLICATIVE_PRECEDENCE: u32 = 1;

/// Precedence of `+` and `−`
pub const ADDITIVE_PRECEDENCE: u32 = 2;

/// Known operators and constants, looked up by symbol.
///
/// `Default` builds the standard calculator set:
///
/// | symbol | kind     | precedence |
/// |--------|----------|------------|
/// | `×`    | binary   | 1          |
/// | `÷`    | binary   | 1          |
/// | `+`    | binary   | 2          |
/// | `−`    | binary   | 2          |
/// | `√`    | unary    |            |
/// | `sin`  | unary    |            |
/// | `cos`  | unary    |            |
/// | `±`    | unary    |            |
/// | `π`    | constant |            |
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: Vec<StackEntry>,
    index: HashMap<String, usize>,
    precedences: HashMap<String, u32>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        let mut table = Self::empty();

        table.register_binary("×", MULTIPLICATIVE_PRECEDENCE, |a, b| a * b, None);
        table.register_binary("÷", MULTIPLICATIVE_PRECEDENCE, divide, Some(guard_division));
        table.register_binary("+", ADDITIVE_PRECEDENCE, |a, b| a + b, None);
        table.register_binary("−", ADDITIVE_PRECEDENCE, subtract, None);

        table.register_unary("√", f64::sqrt, Some(guard_square_root));
        table.register_unary("sin", f64::sin, None);
        table.register_unary("cos", f64::cos, None);
        table.register_unary("±", |x| x * -1.0, None);

        table.register_constant("π", std::f64::consts::PI);

        table
    }
}

impl OperatorTable {
    /// Table with no operators or constants registered
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            precedences: HashMap::new(),
        }
    }

    pub fn register_unary(
        &mut self,
        symbol: impl Into<String>,
        operation: UnaryFn,
        guard: Option<UnaryGuard>,
    ) -> &mut Self {
        let symbol = symbol.into();
        self.precedences.remove(&symbol);
        self.insert(StackEntry::UnaryOp {
            symbol,
            operation,
            guard,
        })
    }

    /// Register a binary operator together with its precedence rank
    pub fn register_binary(
        &mut self,
        symbol: impl Into<String>,
        precedence: u32,
        operation: BinaryFn,
        guard: Option<BinaryGuard>,
    ) -> &mut Self {
        let symbol = symbol.into();
        self.precedences.insert(symbol.clone(), precedence);
        self.insert(StackEntry::BinaryOp {
            symbol,
            operation,
            guard,
        })
    }

    pub fn register_constant(&mut self, symbol: impl Into<String>, value: f64) -> &mut Self {
        let symbol = symbol.into();
        self.precedences.remove(&symbol);
        self.insert(StackEntry::NamedConstant { symbol, value })
    }

    /// Entry template for `symbol`, if registered
    pub fn get(&self, symbol: &str) -> Option<&StackEntry> {
        self.index.get(symbol).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Precedence rank of a binary operator
    pub fn precedence(&self, symbol: &str) -> Option<u32> {
        self.precedences.get(symbol).copied()
    }

    /// All registered entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &StackEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: StackEntry) -> &mut Self {
        let Some(symbol) = entry.symbol().map(str::to_string) else {
            return self;
        };

        match self.index.get(&symbol) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }
}

// Binary operations receive the operand nearest the top of the stack first,
// so the mathematically first operand is the second argument.

fn divide(divisor: f64, dividend: f64) -> f64 {
    dividend / divisor
}

fn subtract(subtrahend: f64, minuend: f64) -> f64 {
    minuend - subtrahend
}

fn guard_division(divisor: f64, _dividend: f64) -> Option<EvaluationError> {
    (divisor == 0.0).then_some(EvaluationError::DivisionByZero)
}

fn guard_square_root(operand: f64) -> Option<EvaluationError> {
    (operand < 0.0).then_some(EvaluationError::SquareRootOfNegativeNumber)
}
