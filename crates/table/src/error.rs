use thiserror::Error;

/// Errors that can occur during dataset operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Duplicate column name: {name}")]
    DuplicateColumnName { name: String },

    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Row index out of bounds: {index} (dataset has {count} rows)")]
    RowIndexOutOfBounds { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
