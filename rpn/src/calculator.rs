use crate::describer::describe_all;
use crate::evaluator::{did_finish_operation, evaluate};
use crate::{
    DisplayOptions, EvaluationResult, OperatorTable, Snapshot, StackEntry, VariableEnvironment,
};
use std::fmt;
use tracing::trace;

/// Handle returned by [`Calculator::on_change`], used to unregister a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// The RPN stack machine.
///
/// Owns the stack, the operator table and the variable environment. Every
/// call that changes the stack returns the freshly evaluated result, and
/// registered listeners are told about the change before the call returns.
pub struct Calculator {
    stack: Vec<StackEntry>,
    operators: OperatorTable,
    variables: VariableEnvironment,
    options: DisplayOptions,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_operators(OperatorTable::default())
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("stack", &self.stack)
            .field("variables", &self.variables)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Calculator {
    /// Calculator with the standard operator set
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with a custom operator table
    pub fn with_operators(operators: OperatorTable) -> Self {
        Self {
            stack: Vec::new(),
            operators,
            variables: VariableEnvironment::new(),
            options: DisplayOptions::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Replace the number formatting used by descriptions
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn is_operator(&self, symbol: &str) -> bool {
        self.operators.contains(symbol)
    }

    pub fn push_literal(&mut self, value: f64) -> EvaluationResult {
        self.push(StackEntry::Literal(value))
    }

    /// Push a variable. Whether it has a value is only checked on evaluation.
    pub fn push_variable(&mut self, symbol: impl Into<String>) -> EvaluationResult {
        self.push(StackEntry::Variable(symbol.into()))
    }

    /// Push the operator or constant registered under `symbol`.
    ///
    /// Unknown symbols leave the stack untouched.
    pub fn apply_operator(&mut self, symbol: &str) -> EvaluationResult {
        match self.operators.get(symbol).cloned() {
            Some(entry) => self.push(entry),
            None => {
                trace!(symbol, "ignoring unknown operator");
                self.evaluate()
            }
        }
    }

    /// Remove the newest entry, if any
    pub fn pop_last(&mut self) -> EvaluationResult {
        if self.stack.pop().is_some() {
            self.notify();
        }
        self.evaluate()
    }

    /// Clear the stack. Variables are kept.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.notify();
    }

    pub fn reset_variables(&mut self) {
        self.variables.clear();
        self.notify();
    }

    /// Evaluate the current stack without changing it
    pub fn evaluate(&self) -> EvaluationResult {
        evaluate(&self.stack, &self.variables)
    }

    /// Infix rendering of the stack, independent expressions joined by `,`
    pub fn describe_all(&self) -> String {
        describe_all(&self.stack, &self.operators, &self.options)
    }

    pub fn did_finish_operation(&self) -> bool {
        did_finish_operation(&self.stack)
    }

    /// Display form of every entry, oldest first
    pub fn history(&self) -> Vec<String> {
        self.stack.iter().map(ToString::to_string).collect()
    }

    pub fn stack(&self) -> &[StackEntry] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn variables(&self) -> &VariableEnvironment {
        &self.variables
    }

    /// Direct access to the variables. Listeners are not notified of changes
    /// made through this reference; use [`Calculator::set_variable`] for that.
    pub fn variables_mut(&mut self) -> &mut VariableEnvironment {
        &mut self.variables
    }

    /// Store a variable value and re-evaluate the stack with it
    pub fn set_variable(&mut self, symbol: impl Into<String>, value: f64) -> EvaluationResult {
        self.variables.set(symbol, value);
        self.notify();
        self.evaluate()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            history: self.history(),
            description: self.describe_all(),
            finished: self.did_finish_operation(),
            result: self.evaluate(),
            variables: self
                .variables
                .iter()
                .map(|(symbol, value)| (symbol.to_string(), value))
                .collect(),
        }
    }

    /// Register a listener called with a fresh snapshot after every change
    pub fn on_change(&mut self, listener: impl FnMut(&Snapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        let listener: Listener = Box::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn push(&mut self, entry: StackEntry) -> EvaluationResult {
        self.stack.push(entry);
        self.notify();
        self.evaluate()
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        trace!(listeners = self.listeners.len(), "notifying stack change");
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
