use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use rpn::format::format_number;
use rpn::{
    DisplayOptions, EvaluationResult, OperatorTable, Snapshot, StackEntry, VariableEnvironment,
};

pub struct Formatter {
    options: DisplayOptions,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}

impl Formatter {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    pub fn format_result(&self, result: &EvaluationResult) -> String {
        match result {
            EvaluationResult::Value(value) => format_number(*value, &self.options),
            EvaluationResult::Error(error) => error.to_string(),
        }
    }

    /// Expression line (when there is one) followed by the result line
    pub fn format_display(&self, snapshot: &Snapshot, raw: bool) -> String {
        let mut output = String::new();

        if !raw && !snapshot.description.is_empty() {
            output.push_str(&snapshot.display_expression());
            output.push('\n');
        }
        output.push_str(&self.format_result(&snapshot.result));
        output.push('\n');

        output
    }

    pub fn format_stack(&self, entries: &[StackEntry]) -> String {
        if entries.is_empty() {
            return "Stack is empty\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Entry").set_alignment(CellAlignment::Left),
        ]));

        // Newest entry is the top of the stack and gets level 1
        for (level, entry) in entries.iter().rev().enumerate() {
            let text = match entry {
                StackEntry::Literal(value) => format_number(*value, &self.options),
                other => other.to_string(),
            };
            table.add_row(Row::from(vec![
                Cell::new(level + 1).set_alignment(CellAlignment::Right),
                Cell::new(text),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_variables(&self, variables: &VariableEnvironment) -> String {
        if variables.is_empty() {
            return "No variables set\n".to_string();
        }

        let mut sorted: Vec<(&str, f64)> = variables.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["Variable", "Value"]));
        for (name, value) in sorted {
            table.add_row(Row::from(vec![
                name.to_string(),
                format_number(value, &self.options),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_operators(&self, operators: &OperatorTable) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["Symbol", "Kind", "Details"]));

        for entry in operators.iter() {
            let symbol = entry.symbol().unwrap_or_default();
            let (kind, details) = match entry {
                StackEntry::BinaryOp { .. } => (
                    "binary",
                    operators
                        .precedence(symbol)
                        .map(|p| format!("precedence {}", p))
                        .unwrap_or_default(),
                ),
                StackEntry::UnaryOp { .. } => ("unary", String::new()),
                StackEntry::NamedConstant { value, .. } => (
                    "constant",
                    format!("value {}", format_number(*value, &self.options)),
                ),
                StackEntry::Literal(_) | StackEntry::Variable(_) => continue,
            };
            table.add_row(Row::from(vec![symbol.to_string(), kind.to_string(), details]));
        }

        format!("{}\n", table)
    }
}
