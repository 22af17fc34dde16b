use rpn::OperatorTable;
use std::fmt;
use std::ops::Range;

/// ASCII spellings accepted for the calculator's symbols
const ALIASES: [(&str, &str); 6] = [
    ("*", "×"),
    ("/", "÷"),
    ("-", "−"),
    ("sqrt", "√"),
    ("neg", "±"),
    ("pi", "π"),
];

const STORE_PREFIXES: [char; 2] = ['→', '>'];

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(String),
    Variable(String),
    /// Store the current value into a variable
    Store(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    /// Character offsets into the tokenized input
    pub span: Range<usize>,
}

/// Input that could not be turned into tokens or applied
#[derive(Debug, Clone, PartialEq)]
pub struct TokenError {
    pub message: String,
    pub span: Range<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        write!(f, " at column {}", self.span.start + 1)
    }
}

impl std::error::Error for TokenError {}

/// Split `input` on whitespace and classify every word
pub fn tokenize(input: &str, operators: &OperatorTable) -> Result<Vec<SpannedToken>, TokenError> {
    words(input)
        .map(|(word, span)| {
            classify(word, operators)
                .map(|token| SpannedToken {
                    token,
                    span: span.clone(),
                })
                .ok_or_else(|| TokenError {
                    message: format!("Unrecognized token '{}'", word),
                    span,
                    suggestion: Some(
                        "use a number, an operator, a variable name or →NAME".to_string(),
                    ),
                })
        })
        .collect()
}

fn classify(word: &str, operators: &OperatorTable) -> Option<Token> {
    let symbol = ALIASES
        .iter()
        .find(|(alias, _)| *alias == word)
        .map_or(word, |(_, symbol)| symbol);

    if operators.contains(symbol) {
        return Some(Token::Operator(symbol.to_string()));
    }
    if let Some(value) = parse_number(word) {
        return Some(Token::Number(value));
    }
    if let Some(name) = word.strip_prefix(STORE_PREFIXES) {
        return is_identifier(name).then(|| Token::Store(name.to_string()));
    }
    is_identifier(word).then(|| Token::Variable(word.to_string()))
}

/// Decimal numbers only; `inf` and `NaN` are variable names here
fn parse_number(word: &str) -> Option<f64> {
    let numeric = word
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    let has_digit = word.chars().any(|c| c.is_ascii_digit());

    if numeric && has_digit {
        word.parse().ok()
    } else {
        None
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whitespace-separated words with their character spans
fn words(input: &str) -> impl Iterator<Item = (&str, Range<usize>)> {
    let mut words = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (char_index, (byte_index, c)) in input.char_indices().enumerate() {
        match (c.is_whitespace(), start) {
            (true, Some((byte_start, char_start))) => {
                words.push((&input[byte_start..byte_index], char_start..char_index));
                start = None;
            }
            (false, None) => start = Some((byte_index, char_index)),
            _ => {}
        }
    }
    if let Some((byte_start, char_start)) = start {
        let word = &input[byte_start..];
        words.push((word, char_start..char_start + word.chars().count()));
    }

    words.into_iter()
}
