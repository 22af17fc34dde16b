use crate::tokens::{tokenize, SpannedToken, Token, TokenError};
use rpn::{Calculator, DisplayOptions, EvaluationResult};
use tracing::debug;

/// A calculator driven by text input
pub struct Session {
    calculator: Calculator,
}

/// Line-level commands understood by the interactive mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Clear,
    ClearVariables,
    Stack,
    Variables,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "undo" | "pop" => Some(Command::Undo),
            "clear" | "reset" => Some(Command::Clear),
            "clear-vars" => Some(Command::ClearVariables),
            "stack" => Some(Command::Stack),
            "vars" => Some(Command::Variables),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

impl Session {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            calculator: Calculator::new().with_options(options),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Set variables given as `NAME=VALUE`
    pub fn set_variables(&mut self, assignments: &[String]) -> anyhow::Result<()> {
        for assignment in assignments {
            let (name, value) = parse_assignment(assignment)?;
            self.calculator.set_variable(name, value);
        }
        Ok(())
    }

    /// Tokenize `input` and apply every token in order.
    ///
    /// The line is applied as a whole: if any token is unrecognized or a
    /// store has no value to store, the calculator is left as it was.
    pub fn feed(&mut self, input: &str) -> Result<EvaluationResult, TokenError> {
        let tokens = tokenize(input, self.calculator.operators())?;
        let depth = self.calculator.len();
        let variables = self.calculator.variables().clone();

        let result = self.apply(tokens);
        if result.is_err() {
            debug!(depth, "rolling back rejected line");
            while self.calculator.len() > depth {
                self.calculator.pop_last();
            }
            *self.calculator.variables_mut() = variables;
        }
        result
    }

    fn apply(&mut self, tokens: Vec<SpannedToken>) -> Result<EvaluationResult, TokenError> {
        let mut result = self.calculator.evaluate();

        for spanned in tokens {
            debug!(token = ?spanned.token, "applying token");
            result = match spanned.token {
                Token::Number(value) => self.calculator.push_literal(value),
                Token::Operator(symbol) => self.calculator.apply_operator(&symbol),
                Token::Variable(symbol) => self.calculator.push_variable(symbol),
                Token::Store(symbol) => match self.calculator.evaluate() {
                    EvaluationResult::Value(value) => self.calculator.set_variable(symbol, value),
                    EvaluationResult::Error(error) => {
                        return Err(TokenError {
                            message: format!("Cannot store into {}: {}", symbol, error),
                            span: spanned.span,
                            suggestion: None,
                        })
                    }
                },
            };
        }

        Ok(result)
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Undo => {
                self.calculator.pop_last();
            }
            Command::Clear => self.calculator.reset(),
            Command::ClearVariables => self.calculator.reset_variables(),
            Command::Stack | Command::Variables | Command::Quit => {}
        }
    }
}

fn parse_assignment(assignment: &str) -> anyhow::Result<(&str, f64)> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid variable '{}': expected NAME=VALUE", assignment))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Invalid variable '{}': name is empty", assignment);
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow::anyhow!("Invalid value for variable '{}': {}", name, value))?;
    Ok((name, value))
}
