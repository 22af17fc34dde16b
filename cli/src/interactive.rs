use crate::error_formatter::format_error;
use crate::formatter::Formatter;
use crate::session::{Command, Session};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

const SOURCE_ID: &str = "<stdin>";

/// Read lines from `input` until it ends or `quit` is entered.
///
/// Every line is either a command or a sequence of tokens. The display is
/// written to `output` after each line; rejected input is reported on stderr
/// and leaves the calculator unchanged.
pub fn run_interactive(
    session: &mut Session,
    formatter: &Formatter,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    info!("Starting interactive session");

    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(&line) {
            match command {
                Command::Quit => break,
                Command::Stack => {
                    write!(output, "{}", formatter.format_stack(session.calculator().stack()))?
                }
                Command::Variables => write!(
                    output,
                    "{}",
                    formatter.format_variables(session.calculator().variables())
                )?,
                other => {
                    session.run_command(other);
                    write!(
                        output,
                        "{}",
                        formatter.format_display(&session.calculator().snapshot(), false)
                    )?;
                }
            }
        } else {
            match session.feed(&line) {
                Ok(_) => write!(
                    output,
                    "{}",
                    formatter.format_display(&session.calculator().snapshot(), false)
                )?,
                Err(error) => eprint!("{}", format_error(&error, SOURCE_ID, &line)),
            }
        }

        output.flush()?;
    }

    Ok(())
}
