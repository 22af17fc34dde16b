use std::collections::HashMap;

/// Values of user-settable variables (the calculator's memory slots).
///
/// Variables on the stack are looked up here every time the stack is
/// evaluated, so changing a value is reflected by the next evaluation without
/// touching the stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableEnvironment {
    values: HashMap<String, f64>,
}

impl VariableEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied()
    }

    /// Set a variable, returning its previous value
    pub fn set(&mut self, symbol: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(symbol.into(), value)
    }

    pub fn remove(&mut self, symbol: &str) -> Option<f64> {
        self.values.remove(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for VariableEnvironment {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, f64)> for VariableEnvironment {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
