/// How numbers are rendered in stack descriptions
///
/// The defaults render the shortest text that reads back as the same `f64`,
/// without digit grouping, so descriptions stay unambiguous next to the `,`
/// that separates independent expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Round to at most this many fraction digits, dropping trailing zeros.
    /// None keeps the shortest round-trip form.
    pub max_fraction_digits: Option<usize>,

    /// Separator inserted between groups of three integer digits. A digit,
    /// `.` or `,` would make descriptions ambiguous.
    pub grouping_separator: Option<char>,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = Some(separator);
        self
    }
}
