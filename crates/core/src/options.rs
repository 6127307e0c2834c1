use crate::error::{Result, SplitError};
use crate::patterns::DEFAULT_DELIMITER_PATTERN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How split columns are turned back into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandMode {
    /// Every combination of the target columns' tokens, one column at a time.
    #[default]
    Cartesian,
    /// Tokens aligned by position across the target columns.
    Pairwise,
}

impl ExpandMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExpandMode::Cartesian => "cartesian",
            ExpandMode::Pairwise => "pairwise",
        }
    }
}

impl FromStr for ExpandMode {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" => Ok(ExpandMode::Cartesian),
            "pairwise" => Ok(ExpandMode::Pairwise),
            _ => Err(SplitError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for ExpandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for splitting and exploding multi-value columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Regular expression used for delimiter splitting.
    pub delimiter: String,
    pub mode: ExpandMode,
    /// Prefer number/unit extraction over delimiter splitting.
    pub smart: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER_PATTERN.to_string(),
            mode: ExpandMode::Cartesian,
            smart: false,
        }
    }
}

impl SplitOptions {
    /// Parse options from a JSON fragment. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ExpandMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_smart(mut self, smart: bool) -> Self {
        self.smart = smart;
        self
    }

    #[must_use]
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}
