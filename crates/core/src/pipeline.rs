use crate::detector::detect_multivalue_columns;
use crate::error::Result;
use crate::explode::split_and_explode;
use crate::options::SplitOptions;
use cellsplit_table::Dataset;

/// Detect multi-value columns and expand them in one pass.
///
/// When no column is flagged the dataset is returned as is. Extracted tables
/// usually want [`ExpandMode::Pairwise`](crate::ExpandMode::Pairwise) with
/// `smart` enabled, so that merged cells such as `"177 s 167 s"` and
/// `"1.27 1.34"` line up row by row.
pub fn expand_detected(dataset: &Dataset, options: &SplitOptions) -> Result<Dataset> {
    let columns = detect_multivalue_columns(dataset);
    if columns.is_empty() {
        tracing::debug!("no multi-valued columns detected; table unchanged");
        return Ok(dataset.clone());
    }

    split_and_explode(dataset, &columns, options)
}
