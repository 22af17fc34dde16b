use crate::tokens::TokenError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io::IsTerminal;

/// Format a TokenError against its input with terminal diagnostics using Ariadne
pub fn format_error(error: &TokenError, source_id: &str, source_text: &str) -> String {
    let mut output = Vec::new();
    let color = std::io::stderr().is_terminal();

    let mut report = Report::build(ReportKind::Error, source_id, error.span.start)
        .with_config(Config::default().with_color(color))
        .with_message(&error.message)
        .with_label(
            Label::new((source_id, error.span.clone()))
                .with_message("here")
                .with_color(Color::Red),
        );

    if let Some(suggestion) = &error.suggestion {
        report = report.with_help(suggestion);
    }

    match report
        .finish()
        .write((source_id, Source::from(source_text)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("Error: {}", error)
        }
    }
}
