//! Markdown tables in and out of cellsplit datasets.
//!
//! Document converters commonly hand tables over as GitHub-flavoured
//! markdown. The header row becomes the dataset's column names and each body
//! row becomes a dataset row; blank cells become `Null`.

pub mod error;
mod render;
mod table;

use cellsplit_table::{CellValue, Dataset};
use error::{MarkdownError, Result};

pub use render::to_markdown;
pub use table::{MarkdownOptions, MarkdownTable, MarkdownTables};

/// Extract the first table of a markdown string as a Dataset.
pub fn dataset_from_markdown(markdown: &str) -> Result<Dataset> {
    datasets_from_markdown(markdown)?
        .into_iter()
        .next()
        .ok_or(MarkdownError::NoTablesFound)
}

/// Extract all tables from a markdown string as Datasets.
pub fn datasets_from_markdown(markdown: &str) -> Result<Vec<Dataset>> {
    datasets_from_markdown_with_options(markdown, MarkdownOptions::default())
}

/// Extract all tables from a markdown string with options.
pub fn datasets_from_markdown_with_options(
    markdown: &str,
    options: MarkdownOptions,
) -> Result<Vec<Dataset>> {
    let tables = MarkdownTables::from_markdown_with_options(markdown, options)?;
    let datasets = tables
        .tables
        .iter()
        .map(MarkdownTable::to_dataset)
        .collect::<Result<Vec<_>>>()?;

    if datasets.is_empty() {
        Err(MarkdownError::NoTablesFound)
    } else {
        Ok(datasets)
    }
}

/// Convert a markdown table to a Dataset.
///
/// Blank header cells are named `column_<n>` (1-based position).
fn table_to_dataset(table: &MarkdownTable) -> Result<Dataset> {
    let columns = table.headers.iter().enumerate().map(|(i, name)| {
        let name = name.trim();
        if name.is_empty() {
            format!("column_{}", i + 1)
        } else {
            name.to_string()
        }
    });

    let mut dataset = Dataset::new(columns)?;
    for row in &table.rows {
        let row_values: Vec<CellValue> = row.iter().map(|s| to_cell_value(s)).collect();
        dataset.row_append(row_values)?;
    }

    Ok(dataset)
}

fn to_cell_value(text: &str) -> CellValue {
    CellValue::parse(text.trim())
}

impl MarkdownTable {
    pub fn to_dataset(&self) -> Result<Dataset> {
        table_to_dataset(self)
    }
}
