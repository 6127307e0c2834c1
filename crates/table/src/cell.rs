use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when a list cell is shown as a single string.
pub const LIST_DISPLAY_SEPARATOR: &str = "; ";

/// Represents a cell value in a dataset
///
/// Cells extracted from documents are either text or missing. `List` only
/// appears while a column is being split: it holds the tokens of one cell
/// until the row is exploded back into scalar cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    String(String),
    List(Vec<String>),
}

impl CellValue {
    /// Build a list cell from anything yielding strings.
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CellValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if the value holds a token list
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, CellValue::List(_))
    }

    /// Borrow the text of a string cell
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the tokens of a list cell
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CellValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        self.to_string()
    }

    /// Parse raw cell text. Blank text is treated as a missing value.
    #[must_use]
    pub fn parse(s: &str) -> CellValue {
        if s.trim().is_empty() {
            CellValue::Null
        } else {
            CellValue::String(s.to_string())
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::List(items) => write!(f, "{}", items.join(LIST_DISPLAY_SEPARATOR)),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::String(i.to_string())
    }
}

impl From<Vec<String>> for CellValue {
    fn from(items: Vec<String>) -> Self {
        CellValue::List(items)
    }
}

impl From<Vec<&str>> for CellValue {
    fn from(items: Vec<&str>) -> Self {
        CellValue::list(items)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
