use crate::patterns::{EXPLICIT_DELIMITER, NUMBER_UNIT, SPACED_NUMBERS, WIDE_SPACE};
use cellsplit_table::Dataset;
use std::fmt;

/// The heuristic that marked a cell as holding several values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiValueSignal {
    /// `;`, `,`, `/` or a newline.
    ExplicitDelimiter,
    /// More than one number followed by a unit.
    RepeatedNumberUnit,
    /// Two numbers separated by whitespace.
    SpacedNumbers,
    /// Two or more consecutive whitespace characters.
    WideSpace,
}

impl MultiValueSignal {
    /// Checked in this order for every cell.
    pub const ALL: [MultiValueSignal; 4] = [
        MultiValueSignal::ExplicitDelimiter,
        MultiValueSignal::RepeatedNumberUnit,
        MultiValueSignal::SpacedNumbers,
        MultiValueSignal::WideSpace,
    ];

    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        match self {
            MultiValueSignal::ExplicitDelimiter => EXPLICIT_DELIMITER.is_match(text),
            MultiValueSignal::RepeatedNumberUnit => NUMBER_UNIT.find_iter(text).nth(1).is_some(),
            MultiValueSignal::SpacedNumbers => SPACED_NUMBERS.is_match(text),
            MultiValueSignal::WideSpace => WIDE_SPACE.is_match(text),
        }
    }

    /// First signal raised by `text`, if any.
    #[must_use]
    pub fn scan(text: &str) -> Option<MultiValueSignal> {
        Self::ALL.into_iter().find(|signal| signal.matches(text))
    }
}

impl fmt::Display for MultiValueSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MultiValueSignal::ExplicitDelimiter => "explicit delimiter",
            MultiValueSignal::RepeatedNumberUnit => "repeated number+unit",
            MultiValueSignal::SpacedNumbers => "space-separated numbers",
            MultiValueSignal::WideSpace => "wide whitespace",
        };
        f.write_str(name)
    }
}

/// A column flagged as multi-valued, with the first cell that gave it away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedColumn {
    pub column: String,
    pub row: usize,
    pub signal: MultiValueSignal,
}

/// Scan every column and report the ones that look multi-valued.
///
/// Null cells are skipped. Scanning a column stops at its first matching
/// cell. Results follow the dataset's column order.
#[must_use]
pub fn detect_multivalue_signals(dataset: &Dataset) -> Vec<DetectedColumn> {
    let mut detected = Vec::new();

    for (col, name) in dataset.columns().iter().enumerate() {
        let hit = dataset
            .rows()
            .enumerate()
            .filter(|(_, row)| !row[col].is_null())
            .find_map(|(row, cells)| {
                MultiValueSignal::scan(&cells[col].to_string()).map(|signal| (row, signal))
            });

        if let Some((row, signal)) = hit {
            tracing::debug!(column = %name, row, %signal, "multi-value column detected");
            detected.push(DetectedColumn {
                column: name.clone(),
                row,
                signal,
            });
        }
    }

    detected
}

/// Names of the columns that likely contain multiple values per cell.
///
/// Alphanumeric codes are not mistaken for values, so a cell such as
/// `"Apple M3 Max (16 cores)"` does not flag its column.
#[must_use]
pub fn detect_multivalue_columns(dataset: &Dataset) -> Vec<String> {
    detect_multivalue_signals(dataset)
        .into_iter()
        .map(|detected| detected.column)
        .collect()
}
