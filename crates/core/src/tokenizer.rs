//! Cell tokenization.
//!
//! A [`Tokenizer`] turns one cell into an ordered list of trimmed, non-empty
//! tokens. Plain mode splits on a delimiter pattern. Smart mode first tries
//! the [`SMART_MATCHERS`] in order and only falls back to the delimiter when
//! none of them finds at least two values.

use crate::error::Result;
use crate::patterns::{DEFAULT_DELIMITER, NUMBER, NUMBER_UNIT, WIDE_SPACE};
use cellsplit_table::CellValue;
use regex::Regex;

/// A smart-mode extraction strategy.
///
/// `extract` returns `None` unless it is confident the text holds at least
/// two separate values.
pub trait TokenMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str) -> Option<Vec<String>>;
}

/// Numbers followed by a unit, e.g. `"177 s 167 s"`.
///
/// A unit must end on a word boundary, so one ending in a symbol such as
/// `%` or `°` never matches on its own. `"50% 60%"` then falls through to
/// [`BareNumberMatcher`] and loses the `%`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberUnitMatcher;

/// Standalone integers or decimals, e.g. `"1.27 1.34"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareNumberMatcher;

/// Values visually separated by runs of two or more whitespace characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideSpaceMatcher;

impl TokenMatcher for NumberUnitMatcher {
    fn name(&self) -> &'static str {
        "number_unit"
    }

    fn extract(&self, text: &str) -> Option<Vec<String>> {
        at_least_two(NUMBER_UNIT.find_iter(text).map(|m| m.as_str()))
    }
}

impl TokenMatcher for BareNumberMatcher {
    fn name(&self) -> &'static str {
        "bare_number"
    }

    fn extract(&self, text: &str) -> Option<Vec<String>> {
        at_least_two(NUMBER.find_iter(text).map(|m| m.as_str()))
    }
}

impl TokenMatcher for WideSpaceMatcher {
    fn name(&self) -> &'static str {
        "wide_space"
    }

    fn extract(&self, text: &str) -> Option<Vec<String>> {
        if !WIDE_SPACE.is_match(text) {
            return None;
        }
        at_least_two(WIDE_SPACE.split(text))
    }
}

/// Smart-mode strategies in priority order.
pub static SMART_MATCHERS: &[&dyn TokenMatcher] =
    &[&NumberUnitMatcher, &BareNumberMatcher, &WideSpaceMatcher];

fn clean<'a, I>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn at_least_two<'a, I>(pieces: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens = clean(pieces);
    (tokens.len() > 1).then_some(tokens)
}

/// Splits cells into tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiter: Regex,
    smart: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.clone(),
            smart: false,
        }
    }
}

impl Tokenizer {
    /// Compile a tokenizer for `pattern`. Fails if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str, smart: bool) -> Result<Self> {
        Ok(Self {
            delimiter: Regex::new(pattern)?,
            smart,
        })
    }

    /// Tokenize a cell.
    ///
    /// Null and blank cells give no tokens. A list cell is only trimmed and
    /// stripped of empty items, so tokenizing twice changes nothing.
    #[must_use]
    pub fn tokenize(&self, cell: &CellValue) -> Vec<String> {
        match cell {
            CellValue::Null => Vec::new(),
            CellValue::List(items) => clean(items.iter().map(String::as_str)),
            CellValue::String(s) => self.tokenize_str(s),
        }
    }

    /// Tokenize raw cell text.
    #[must_use]
    pub fn tokenize_str(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        if self.smart {
            for matcher in SMART_MATCHERS {
                if let Some(tokens) = matcher.extract(text) {
                    tracing::trace!(matcher = matcher.name(), count = tokens.len(), "smart split");
                    return tokens;
                }
            }
        }

        clean(self.delimiter.split(text))
    }
}
