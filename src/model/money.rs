//! Numeric parsing for free-form metric text.
//!
//! Amount conventions:
//! - `.` is the decimal separator and `,` groups thousands (`1,200,000.50`)
//! - currency prefixes and codes are ignored (`US$`, `KES`, `€`)
//! - a magnitude word directly after the number multiplies it:
//!   `k`/`thousand`, `m`/`mn`/`million`, `b`/`bn`/`billion`
//!   (so `US$1.2m` and `US$1,200,000` parse to the same value)
//! - a `-` immediately before the first digit makes the amount negative
//!
//! Anything that does not reduce to a finite number yields `None`, which
//! callers treat as "not contributing" rather than as zero.

/// Parse a bare number such as `"11"`, `"-3.5"` or `"1,250"`.
pub fn parse_plain_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+'))
    {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a percentage such as `"40%"` or `"40"` into `40.0`.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_plain_number(number)
}

/// Parse a currency amount out of free-form text.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let negative = text[..start].trim_end().ends_with('-');

    let rest = &text[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(rest.len());
    let digits: String = rest[..end]
        .trim_end_matches('.')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = digits.parse::<f64>().ok()?;

    let suffix: String = rest[end..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    let amount = value * magnitude(&suffix);
    let amount = if negative { -amount } else { amount };

    Some(amount).filter(|v| v.is_finite())
}

fn magnitude(suffix: &str) -> f64 {
    match suffix {
        "k" | "thousand" => 1_000.0,
        "m" | "mn" | "mil" | "million" => 1_000_000.0,
        "b" | "bn" | "billion" => 1_000_000_000.0,
        _ => 1.0,
    }
}
