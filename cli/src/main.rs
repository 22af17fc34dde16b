mod error_formatter;
mod formatter;
mod interactive;
mod session;
mod tokens;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use rpn::{DisplayOptions, OperatorTable};
use session::Session;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tokens::TokenError;

#[derive(Parser)]
#[command(name = "rpn")]
#[command(about = "A reverse Polish notation calculator.")]
#[command(
    long_about = "Evaluates reverse Polish notation and shows the equivalent infix expression.\nOperands and operators are entered in postfix order: `1 2 + 3 ×` is (1+2)×3."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate tokens and display the expression and its result
    ///
    /// Tokens are numbers, operators (× ÷ + − √ sin cos ± π, or * / - sqrt neg pi),
    /// variable names, and →NAME (or >NAME) to store the current value.
    /// Options must come before the tokens.
    Eval {
        /// Tokens to evaluate, in postfix order
        ///
        /// Examples:
        ///   1 2 +          - 1+2
        ///   7 M + sqrt     - √(7+M)
        ///   4 →M M M ×     - store 4 in M, then M×M
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
        /// Read tokens from a file (evaluated before command-line tokens)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
        /// Variables to set before evaluating (format: NAME=VALUE)
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
        /// Output the full calculator state as JSON
        #[arg(long)]
        json: bool,
        /// Output the result only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Read tokens line by line from stdin
    ///
    /// Besides tokens, a line can be one of the commands:
    /// undo (or pop), clear (or reset), clear-vars, stack, vars, quit (or exit).
    /// A line consisting of just a command word is always the command, so a
    /// variable with one of these names has to share its line with other
    /// tokens, e.g. `stack 1 ×`.
    Repl {
        /// Variables to set before starting (format: NAME=VALUE)
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// List the available operators and constants
    Operators,
}

#[derive(Args)]
struct DisplayArgs {
    /// Round displayed numbers to at most this many fraction digits
    #[arg(short = 'p', long, value_name = "DIGITS")]
    precision: Option<usize>,
    /// Group integer digits in threes with this separator (not a digit, `.` or `,`)
    #[arg(
        short = 'g',
        long,
        value_name = "SEPARATOR",
        value_parser = parse_grouping_separator
    )]
    grouping: Option<char>,
}

/// A separator must not read as part of a number or as the `,` between
/// expressions
fn parse_grouping_separator(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    let (Some(separator), None) = (chars.next(), chars.next()) else {
        return Err("expected a single character".to_string());
    };

    if separator.is_ascii_digit() || separator == '.' || separator == ',' {
        return Err(format!(
            "'{}' is ambiguous next to numbers and the ',' between expressions",
            separator
        ));
    }
    Ok(separator)
}

impl DisplayArgs {
    fn options(&self) -> DisplayOptions {
        DisplayOptions {
            max_fraction_digits: self.precision,
            grouping_separator: self.grouping,
        }
    }
}

/// Rejected input together with the text it refers to
#[derive(Debug)]
struct InputError {
    error: TokenError,
    source_id: String,
    source_text: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.error, self.source_id)
    }
}

impl std::error::Error for InputError {}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Eval {
            tokens,
            file,
            vars,
            json,
            raw,
            display,
        } => eval_command(tokens, file.as_deref(), vars, display, *json, *raw),
        Commands::Repl { vars, display } => repl_command(vars, display),
        Commands::Operators => operators_command(),
    };

    if let Err(e) = result {
        // Point at the offending token when the input was rejected
        if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprint!(
                "{}",
                error_formatter::format_error(
                    &input_err.error,
                    &input_err.source_id,
                    &input_err.source_text
                )
            );
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpn=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn eval_command(
    tokens: &[String],
    file: Option<&Path>,
    vars: &[String],
    display: &DisplayArgs,
    json: bool,
    raw: bool,
) -> Result<()> {
    let options = display.options();
    let mut session = Session::new(options.clone());
    session.set_variables(vars)?;

    let (source_id, input) = match file {
        Some(path) => {
            let mut text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if !tokens.is_empty() {
                text.push('\n');
                text.push_str(&tokens.join(" "));
            }
            (path.display().to_string(), text)
        }
        None => ("<args>".to_string(), tokens.join(" ")),
    };

    if let Err(error) = session.feed(&input) {
        return Err(InputError {
            error,
            source_id,
            source_text: input,
        }
        .into());
    }

    let snapshot = session.calculator().snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", Formatter::new(options).format_display(&snapshot, raw));
    }

    Ok(())
}

fn repl_command(vars: &[String], display: &DisplayArgs) -> Result<()> {
    let options = display.options();
    let mut session = Session::new(options.clone());
    session.set_variables(vars)?;

    let stdin = std::io::stdin();
    interactive::run_interactive(
        &mut session,
        &Formatter::new(options),
        stdin.lock(),
        std::io::stdout(),
    )
}

fn operators_command() -> Result<()> {
    let formatter = Formatter::default();
    print!("{}", formatter.format_operators(&OperatorTable::default()));
    Ok(())
}
