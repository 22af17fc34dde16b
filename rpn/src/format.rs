//! Number formatting for descriptions

use crate::DisplayOptions;

/// Format a number according to `options`.
///
/// Non-finite values are rendered as `inf`, `-inf` and `NaN`.
pub fn format_number(value: f64, options: &DisplayOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = match options.max_fraction_digits {
        Some(digits) => trim_fraction(&format!("{:.*}", digits, value)),
        None => value.to_string(),
    };

    match options.grouping_separator {
        Some(separator) => group_digits(&formatted, separator),
        None => formatted,
    }
}

/// Drop trailing zeros of the fraction, and the point itself if nothing is left.
/// Rounding can produce `-0`, which is reported as `0`.
fn trim_fraction(formatted: &str) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Insert `separator` between groups of three digits of the integer part
fn group_digits(formatted: &str, separator: char) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}
