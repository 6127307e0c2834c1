//! Dataset types for cellsplit
//!
//! A [`Dataset`] is an ordered list of rows over a fixed set of uniquely named
//! columns, the shape in which tables arrive from a document extraction
//! pipeline. Cells are [`CellValue`]s: text, missing, or a transient token list
//! produced while a column is being split.
//!
//! # Examples
//!
//! ```
//! use cellsplit_table::{CellValue, Dataset};
//!
//! let mut dataset = Dataset::new(["CPU", "TTS"]).unwrap();
//! dataset
//!     .row_append(vec!["Apple M3 Max (16 cores)", "177 s 167 s"])
//!     .unwrap();
//!
//! assert_eq!(dataset.row_count(), 1);
//! assert_eq!(
//!     dataset.get(0, "TTS").unwrap(),
//!     &CellValue::from("177 s 167 s")
//! );
//! ```
//!
//! ## Exploding list cells
//!
//! ```
//! use cellsplit_table::{CellValue, Dataset};
//!
//! let dataset = Dataset::from_rows(
//!     ["A"],
//!     vec![vec![CellValue::list(["x", "y"])], vec![CellValue::from("z")]],
//! )
//! .unwrap();
//!
//! let exploded = dataset.explode("A").unwrap();
//! assert_eq!(exploded.row_count(), 3);
//! ```

mod cell;
mod dataset;
mod error;

/// Re-export cell value type.
pub use cell::{CellValue, LIST_DISPLAY_SEPARATOR};
/// Re-export dataset type.
pub use dataset::Dataset;
/// Re-export dataset error types.
pub use error::{Result, TableError};
