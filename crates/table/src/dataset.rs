use crate::cell::CellValue;
use crate::error::{Result, TableError};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A table of named columns and row-major cells.
///
/// Every row has exactly one cell per column. Column names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Create an empty dataset with the given column names
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut column_index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if column_index.insert(name.clone(), i).is_some() {
                return Err(TableError::DuplicateColumnName { name: name.clone() });
            }
        }

        Ok(Dataset {
            columns,
            column_index,
            rows: Vec::new(),
        })
    }

    /// Create a dataset from column names and a 2D vector of values
    pub fn from_rows<I, S, T>(columns: I, rows: Vec<Vec<T>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: Into<CellValue>,
    {
        let mut dataset = Dataset::new(columns)?;
        dataset.rows.reserve(rows.len());
        for row in rows {
            dataset.row_append(row)?;
        }
        Ok(dataset)
    }

    /// Create a dataset from `(name, values)` pairs, one pair per column.
    ///
    /// # Example
    /// ```
    /// use cellsplit_table::Dataset;
    ///
    /// let dataset = Dataset::from_columns([
    ///     ("TTS", vec!["177 s 167 s", "103 s 92 s"]),
    ///     ("Pages/s", vec!["1.27 1.34", "0.94 1.57"]),
    /// ])
    /// .unwrap();
    /// assert_eq!(dataset.row_count(), 2);
    /// assert_eq!(dataset.col_count(), 2);
    /// ```
    pub fn from_columns<I, S, T>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<CellValue>,
    {
        let (names, values): (Vec<S>, Vec<Vec<T>>) = columns.into_iter().unzip();
        let mut dataset = Dataset::new(names)?;

        let height = values.first().map_or(0, Vec::len);
        if let Some(bad) = values.iter().find(|col| col.len() != height) {
            return Err(TableError::LengthMismatch {
                expected: height,
                actual: bad.len(),
            });
        }

        let mut iters: Vec<_> = values.into_iter().map(Vec::into_iter).collect();
        for _ in 0..height {
            let row: Vec<CellValue> = iters
                .iter_mut()
                .map(|col| col.next().map(Into::into).unwrap_or_default())
                .collect();
            dataset.rows.push(row);
        }

        Ok(dataset)
    }

    /// Create a dataset from a list of records.
    ///
    /// Column order is taken from the first record. Keys missing from a later
    /// record become `Null`; keys that the first record lacks are an error.
    pub fn from_records(records: Vec<IndexMap<String, CellValue>>) -> Result<Self> {
        let Some(first) = records.first() else {
            return Ok(Dataset::default());
        };

        let mut dataset = Dataset::new(first.keys().cloned())?;
        for mut record in records {
            let mut row = Vec::with_capacity(dataset.columns.len());
            for name in &dataset.columns {
                row.push(record.shift_remove(name).unwrap_or_default());
            }
            if let Some(name) = record.keys().next() {
                return Err(TableError::ColumnNotFound { name: name.clone() });
            }
            dataset.rows.push(row);
        }

        Ok(dataset)
    }

    /// Convert to a list of records, preserving column order in each record
    #[must_use]
    pub fn to_records(&self) -> Vec<IndexMap<String, CellValue>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Build a dataset with the same columns and the given rows
    pub fn with_rows(&self, rows: Vec<Vec<CellValue>>) -> Result<Dataset> {
        if let Some(bad) = rows.iter().find(|row| row.len() != self.columns.len()) {
            return Err(TableError::LengthMismatch {
                expected: self.columns.len(),
                actual: bad.len(),
            });
        }

        Ok(Dataset {
            columns: self.columns.clone(),
            column_index: self.column_index.clone(),
            rows,
        })
    }

    /// Get the column names in order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Check whether a column exists
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    /// Resolve a column name to its position
    pub fn column_index_by_name(&self, name: &str) -> Result<usize> {
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the dataset has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Result<&[CellValue]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(TableError::RowIndexOutOfBounds {
                index,
                count: self.rows.len(),
            })
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get a cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Result<&CellValue> {
        let col = self.column_index_by_name(column)?;
        Ok(&self.row(row)?[col])
    }

    /// Get all values of a column by name
    pub fn column_by_name(&self, name: &str) -> Result<Vec<&CellValue>> {
        let col = self.column_index_by_name(name)?;
        Ok(self.rows.iter().map(|row| &row[col]).collect())
    }

    /// Append a row; its width must match the column count
    pub fn row_append<T: Into<CellValue>>(&mut self, data: Vec<T>) -> Result<()> {
        if data.len() != self.columns.len() {
            return Err(TableError::LengthMismatch {
                expected: self.columns.len(),
                actual: data.len(),
            });
        }
        self.rows.push(data.into_iter().map(Into::into).collect());
        Ok(())
    }

    /// Apply a function to every cell of a column by name
    pub fn column_map_by_name<F>(&mut self, name: &str, f: F) -> Result<()>
    where
        F: Fn(&CellValue) -> CellValue,
    {
        let col = self.column_index_by_name(name)?;
        for row in &mut self.rows {
            row[col] = f(&row[col]);
        }
        Ok(())
    }

    /// Expand list cells of `column` into one row per item.
    ///
    /// Sub-rows replace their source row in item order, with the other cells
    /// cloned. A row holding an empty list is dropped. Rows whose cell is a
    /// scalar are kept as they are.
    pub fn explode(self, column: &str) -> Result<Dataset> {
        let col = self.column_index_by_name(column)?;
        let Dataset {
            columns,
            column_index,
            rows,
        } = self;

        let before = rows.len();
        let mut exploded = Vec::with_capacity(before);
        for mut row in rows {
            match std::mem::take(&mut row[col]) {
                CellValue::List(items) => {
                    for item in items {
                        let mut sub_row = row.clone();
                        sub_row[col] = CellValue::String(item);
                        exploded.push(sub_row);
                    }
                }
                scalar => {
                    row[col] = scalar;
                    exploded.push(row);
                }
            }
        }

        tracing::trace!(column, before, after = exploded.len(), "exploded column");

        Ok(Dataset {
            columns,
            column_index,
            rows: exploded,
        })
    }
}
