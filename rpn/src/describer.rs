//! Infix rendering of a stack
//!
//! Walks the stack the same way the evaluator does, but builds text such as
//! `cos(1+(4×π))` instead of a number. Missing operands are shown as `?`, so
//! rendering never fails even when evaluation would.

use crate::format::format_number;
use crate::{DisplayOptions, OperatorTable, StackEntry};

/// Placeholder for an operand the stack does not provide
pub const MISSING_OPERAND: &str = "?";

/// Separator between independent expressions
pub const EXPRESSION_SEPARATOR: &str = ",";

/// One expression read off the top of a stack
#[derive(Debug, Clone)]
pub struct Description<'a> {
    /// Rendered expression, None when there was nothing left to render
    pub text: Option<String>,
    /// Entries below the rendered expression
    pub remaining: &'a [StackEntry],
    /// Precedence of the outermost binary operator, None for operands and
    /// unary applications
    pub precedence: Option<u32>,
}

/// Render every expression on the stack, oldest first, joined with commas.
///
/// Returns an empty string for an empty stack.
pub fn describe_all(
    ops: &[StackEntry],
    operators: &OperatorTable,
    options: &DisplayOptions,
) -> String {
    let mut descriptions = Vec::new();
    let mut remaining = ops;

    while let Description {
        text: Some(text),
        remaining: rest,
        ..
    } = describe_one(remaining, operators, options)
    {
        descriptions.push(text);
        remaining = rest;
    }

    descriptions.reverse();
    descriptions.join(EXPRESSION_SEPARATOR)
}

/// Render the expression at the top of `ops`
pub fn describe_one<'a>(
    ops: &'a [StackEntry],
    operators: &OperatorTable,
    options: &DisplayOptions,
) -> Description<'a> {
    let mut pending: Vec<Pending<'a>> = Vec::new();
    let mut index = ops.len();

    loop {
        let mut rendered = match index.checked_sub(1) {
            None => Rendered::MISSING,
            Some(top) => {
                index = top;
                match &ops[top] {
                    StackEntry::Literal(value) => Rendered::operand(format_number(*value, options)),
                    StackEntry::NamedConstant { symbol, .. } | StackEntry::Variable(symbol) => {
                        Rendered::operand(symbol.clone())
                    }
                    StackEntry::UnaryOp { symbol, .. } => {
                        pending.push(Pending::Unary { symbol });
                        continue;
                    }
                    StackEntry::BinaryOp { symbol, .. } => {
                        pending.push(Pending::Binary {
                            symbol,
                            operand1: None,
                        });
                        continue;
                    }
                }
            }
        };

        loop {
            match pending.pop() {
                None => {
                    return Description {
                        precedence: rendered.precedence,
                        text: rendered.into_text(),
                        remaining: &ops[..index],
                    }
                }

                Some(Pending::Unary { symbol }) => rendered.wrap(symbol),

                Some(Pending::Binary {
                    symbol,
                    operand1: None,
                }) => {
                    pending.push(Pending::Binary {
                        symbol,
                        operand1: Some(rendered),
                    });
                    break;
                }

                Some(Pending::Binary {
                    symbol,
                    operand1: Some(operand1),
                }) => {
                    // Unranked operators never force parentheses on their operands
                    let precedence = operators.precedence(symbol).unwrap_or(u32::MAX);

                    let mut text = rendered.parenthesized(precedence);
                    text.push_str(symbol);
                    text.push_str(&operand1.parenthesized(precedence));

                    rendered = Rendered {
                        text: Some(text),
                        wrappers: Vec::new(),
                        precedence: Some(precedence),
                    };
                }
            }
        }
    }
}

/// An operator still collecting the text of its operands
enum Pending<'a> {
    Unary {
        symbol: &'a str,
    },
    Binary {
        symbol: &'a str,
        operand1: Option<Rendered<'a>>,
    },
}

/// Text of a finished sub-expression.
///
/// Unary applications are collected in `wrappers`, innermost first, and only
/// written out when the text is needed, so long chains of them stay linear.
struct Rendered<'a> {
    text: Option<String>,
    wrappers: Vec<&'a str>,
    precedence: Option<u32>,
}

impl<'a> Rendered<'a> {
    const MISSING: Rendered<'static> = Rendered {
        text: None,
        wrappers: Vec::new(),
        precedence: None,
    };

    fn operand(text: String) -> Self {
        Self {
            text: Some(text),
            wrappers: Vec::new(),
            precedence: None,
        }
    }

    fn wrap(&mut self, symbol: &'a str) {
        self.wrappers.push(symbol);
        self.precedence = None;
    }

    fn into_text(self) -> Option<String> {
        if self.wrappers.is_empty() {
            return self.text;
        }

        let inner = self.text.as_deref().unwrap_or(MISSING_OPERAND);
        let length = inner.len() + self.wrappers.iter().map(|s| s.len() + 2).sum::<usize>();
        let mut text = String::with_capacity(length);

        for symbol in self.wrappers.iter().rev() {
            text.push_str(symbol);
            text.push('(');
        }
        text.push_str(inner);
        text.extend(std::iter::repeat(')').take(self.wrappers.len()));

        Some(text)
    }

    /// Wrapped in parentheses when it binds more loosely than its parent
    /// operator
    fn parenthesized(self, parent_precedence: u32) -> String {
        let loose = matches!(self.precedence, Some(precedence) if precedence > parent_precedence);

        match self.into_text() {
            None => MISSING_OPERAND.to_string(),
            Some(text) if loose => format!("({})", text),
            Some(text) => text,
        }
    }
}
