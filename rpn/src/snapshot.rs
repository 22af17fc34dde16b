use crate::EvaluationResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Read-only view of a calculator at one point in time
///
/// Handed to change listeners and serialized for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Display form of every stack entry, oldest first
    pub history: Vec<String>,
    /// Infix rendering of the stack
    pub description: String,
    /// Whether the newest entry is an operator
    pub finished: bool,
    pub result: EvaluationResult,
    pub variables: BTreeMap<String, f64>,
}

impl Snapshot {
    /// Description as shown on an expression display: `=` is appended once
    /// the last entry completed an operation
    pub fn display_expression(&self) -> String {
        if self.finished {
            format!("{} =", self.description)
        } else {
            self.description.clone()
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
