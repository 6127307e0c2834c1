use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("No tables found in markdown")]
    NoTablesFound,

    #[error("Invalid table structure")]
    InvalidTable,

    #[error("Dataset error: {0}")]
    Table(#[from] cellsplit_table::TableError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
