use cellsplit_table::TableError;
use thiserror::Error;

/// Errors raised while detecting or splitting multi-value columns
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Invalid expansion mode '{0}': expected 'cartesian' or 'pairwise'")]
    InvalidMode(String),

    #[error("Columns not found in dataset: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Unequal numbers of items across columns for row {row}: {}", format_lengths(.lengths))]
    MisalignedRow {
        row: usize,
        lengths: Vec<(String, usize)>,
    },

    #[error("Invalid delimiter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid split options: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Dataset error: {0}")]
    Table(#[from] TableError),
}

fn format_lengths(lengths: &[(String, usize)]) -> String {
    lengths
        .iter()
        .map(|(column, len)| format!("{column}={len}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misaligned_row_message() {
        let err = SplitError::MisalignedRow {
            row: 3,
            lengths: vec![("A".to_string(), 2), ("B".to_string(), 1)],
        };
        assert_eq!(
            err.to_string(),
            "Unequal numbers of items across columns for row 3: A=2, B=1"
        );
    }

    #[test]
    fn test_missing_columns_message() {
        let err = SplitError::MissingColumns {
            columns: vec!["X".to_string(), "Y".to_string()],
        };
        assert_eq!(err.to_string(), "Columns not found in dataset: X, Y");
    }
}
