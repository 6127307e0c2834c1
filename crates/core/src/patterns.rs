use lazy_static::lazy_static;
use regex::Regex;

/// Default delimiter: `;`, `,`, `/` or newline, with surrounding whitespace.
pub const DEFAULT_DELIMITER_PATTERN: &str = r"\s*(?:;|,|/|\n)\s*";

lazy_static! {
    // Numeric patterns start on a word boundary so digits inside
    // alphanumeric codes ("M3", "i7") never match.
    pub(crate) static ref NUMBER_UNIT: Regex =
        Regex::new(r"\b\d+(?:\.\d+)?\s*[A-Za-z%/µ°]+\b").unwrap();
    pub(crate) static ref NUMBER: Regex = Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap();

    pub(crate) static ref SPACED_NUMBERS: Regex =
        Regex::new(r"\b\d+(?:\.\d+)?\s+\d+(?:\.\d+)?\b").unwrap();

    // Separator patterns
    pub(crate) static ref WIDE_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    pub(crate) static ref EXPLICIT_DELIMITER: Regex = Regex::new(r";|,|/|\n").unwrap();
    pub(crate) static ref DEFAULT_DELIMITER: Regex =
        Regex::new(DEFAULT_DELIMITER_PATTERN).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_unit_skips_model_codes() {
        let found: Vec<&str> = NUMBER_UNIT
            .find_iter("Apple M3 Max (16 cores)")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["16 cores"]);
    }

    #[test]
    fn test_number_unit_symbols() {
        let found: Vec<&str> = NUMBER_UNIT
            .find_iter("12.5 µs 40 °C 3 kg/m")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["12.5 µs", "40 °C", "3 kg/m"]);
    }

    #[test]
    fn test_number_is_word_bounded() {
        let found: Vec<&str> = NUMBER
            .find_iter("M3 Max 16 1.5")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["16", "1.5"]);
    }

    #[test]
    fn test_spaced_numbers_skip_model_codes() {
        assert!(SPACED_NUMBERS.is_match("1.27 1.34"));
        assert!(SPACED_NUMBERS.is_match("4 16"));
        assert!(!SPACED_NUMBERS.is_match("Apple M3 16 GB"));
        assert!(!SPACED_NUMBERS.is_match("Intel i7 12700"));
    }

    #[test]
    fn test_default_delimiter_split() {
        let parts: Vec<&str> = DEFAULT_DELIMITER.split("a ; b,c /d\ne").collect();
        assert_eq!(parts, vec!["a", "b", "c", "d", "e"]);
    }
}
