use crate::error::{Result, SplitError};
use crate::options::{ExpandMode, SplitOptions};
use crate::tokenizer::Tokenizer;
use cellsplit_table::{CellValue, Dataset};

/// Split multi-value columns and expand rows.
///
/// Each cell of the target `columns` is tokenized with the delimiter and
/// smart setting in `options`, then rows are expanded according to
/// `options.mode`:
///
/// - [`ExpandMode::Cartesian`] explodes the columns one after another, in the
///   order given, producing every combination of their tokens. The first
///   column varies slowest. A row with no tokens in any target column is
///   dropped.
/// - [`ExpandMode::Pairwise`] zips the columns' tokens by position. Every
///   target column of a row must yield the same number of tokens, otherwise
///   [`SplitError::MisalignedRow`] is returned. Rows with no tokens at all are
///   dropped.
///
/// The input is left untouched and a new dataset with the same columns is
/// returned.
///
/// # Example
/// ```
/// use cellsplit_core::{split_and_explode, ExpandMode, SplitOptions};
/// use cellsplit_table::Dataset;
///
/// let dataset = Dataset::from_columns([("A", vec!["1;2"]), ("B", vec!["a;b"])]).unwrap();
/// let options = SplitOptions::default().with_mode(ExpandMode::Pairwise);
///
/// let out = split_and_explode(&dataset, &["A", "B"], &options).unwrap();
/// assert_eq!(out.row_count(), 2);
/// assert_eq!(out.get(1, "A").unwrap().as_str(), "2");
/// assert_eq!(out.get(1, "B").unwrap().as_str(), "b");
/// ```
pub fn split_and_explode<S: AsRef<str>>(
    dataset: &Dataset,
    columns: &[S],
    options: &SplitOptions,
) -> Result<Dataset> {
    let targets = resolve_columns(dataset, columns)?;
    let tokenizer = Tokenizer::new(&options.delimiter, options.smart)?;

    tracing::debug!(
        mode = %options.mode,
        smart = options.smart,
        columns = ?targets.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        rows = dataset.row_count(),
        "splitting columns"
    );

    let expanded = match options.mode {
        ExpandMode::Cartesian => explode_cartesian(dataset, &targets, &tokenizer)?,
        ExpandMode::Pairwise => explode_pairwise(dataset, &targets, &tokenizer)?,
    };

    tracing::debug!(
        before = dataset.row_count(),
        after = expanded.row_count(),
        "expanded rows"
    );

    Ok(expanded)
}

/// Look up target columns, keeping the first occurrence of repeated names.
fn resolve_columns<'a, S: AsRef<str>>(
    dataset: &Dataset,
    columns: &'a [S],
) -> Result<Vec<(&'a str, usize)>> {
    let missing: Vec<String> = columns
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !dataset.has_column(name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(SplitError::MissingColumns { columns: missing });
    }

    let mut targets: Vec<(&str, usize)> = Vec::with_capacity(columns.len());
    for name in columns.iter().map(|name| name.as_ref()) {
        if targets.iter().all(|(seen, _)| *seen != name) {
            targets.push((name, dataset.column_index_by_name(name)?));
        }
    }
    Ok(targets)
}

fn explode_cartesian(
    dataset: &Dataset,
    targets: &[(&str, usize)],
    tokenizer: &Tokenizer,
) -> Result<Dataset> {
    let mut working = dataset.clone();
    for (name, _) in targets {
        working.column_map_by_name(name, |cell| CellValue::List(tokenizer.tokenize(cell)))?;
    }

    for (name, _) in targets {
        working = working.explode(name)?;
    }
    Ok(working)
}

fn explode_pairwise(
    dataset: &Dataset,
    targets: &[(&str, usize)],
    tokenizer: &Tokenizer,
) -> Result<Dataset> {
    let mut rows = Vec::with_capacity(dataset.row_count());

    for (row_index, row) in dataset.rows().enumerate() {
        let tokens: Vec<Vec<String>> = targets
            .iter()
            .map(|(_, col)| tokenizer.tokenize(&row[*col]))
            .collect();

        let width = tokens.first().map_or(1, Vec::len);
        if tokens.iter().any(|t| t.len() != width) {
            return Err(SplitError::MisalignedRow {
                row: row_index,
                lengths: targets
                    .iter()
                    .zip(&tokens)
                    .map(|((name, _), t)| ((*name).to_string(), t.len()))
                    .collect(),
            });
        }

        let mut columns: Vec<_> = tokens.into_iter().map(Vec::into_iter).collect();
        for _ in 0..width {
            let mut sub_row = row.to_vec();
            for ((_, col), values) in targets.iter().zip(columns.iter_mut()) {
                if let Some(value) = values.next() {
                    sub_row[*col] = CellValue::String(value);
                }
            }
            rows.push(sub_row);
        }
    }

    Ok(dataset.with_rows(rows)?)
}
