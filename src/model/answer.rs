use serde::{Deserialize, Serialize};

/// Decoded meaning of a free-text metric value.
///
/// Source data answers yes/no style questions in prose ("In place",
/// "Yes", "Not reported"). The text is normalized once so extractors match on
/// variants instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    InPlace,
    No,
    NotReported,
    /// Anything else: numbers, descriptions, statuses
    Other,
}

impl Answer {
    pub fn decode(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "" | "not reported" | "n/a" | "na" | "not disclosed" | "not available" => {
                Answer::NotReported
            }
            "yes" | "y" | "true" => Answer::Yes,
            "in place" => Answer::InPlace,
            "no" | "n" | "false" | "not in place" | "none in place" => Answer::No,
            _ => Answer::Other,
        }
    }

    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }

    pub fn is_in_place(self) -> bool {
        self == Answer::InPlace
    }
}

/// Lowercase, collapse whitespace, drop surrounding punctuation.
pub(crate) fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || (c.is_ascii_punctuation() && c != '%'));
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exact_sentinels() {
        assert_eq!(Answer::decode("Yes"), Answer::Yes);
        assert_eq!(Answer::decode("In place"), Answer::InPlace);
        assert_eq!(Answer::decode("No"), Answer::No);
        assert_eq!(Answer::decode("Not reported"), Answer::NotReported);
    }

    #[test]
    fn test_decode_tolerates_case_and_punctuation() {
        assert_eq!(Answer::decode("  YES. "), Answer::Yes);
        assert_eq!(Answer::decode("in  Place"), Answer::InPlace);
        assert_eq!(Answer::decode("Not Reported."), Answer::NotReported);
    }

    #[test]
    fn test_decode_blank_is_not_reported() {
        assert_eq!(Answer::decode(""), Answer::NotReported);
        assert_eq!(Answer::decode("   "), Answer::NotReported);
    }

    #[test]
    fn test_decode_other_text() {
        assert_eq!(Answer::decode("40%"), Answer::Other);
        assert_eq!(Answer::decode("Partial alignment"), Answer::Other);
        assert_eq!(Answer::decode("Yesterday"), Answer::Other);
    }

    #[test]
    fn test_normalize_keeps_percent() {
        assert_eq!(normalize(" 40% "), "40%");
        assert_eq!(normalize("Fully  Disclosed."), "fully disclosed");
    }
}
