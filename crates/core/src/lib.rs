//! Multi-value column detection and expansion for extracted tables
//!
//! Tables pulled out of PDFs often merge several values into one cell, for
//! example `"177 s 167 s"` for two timings. This crate finds such columns and
//! splits them back into one value per row.
//!
//! - [`detect_multivalue_columns`] flags columns whose cells look multi-valued.
//! - [`split_and_explode`] tokenizes target columns and expands rows, either
//!   as a cross product ([`ExpandMode::Cartesian`]) or aligned by position
//!   ([`ExpandMode::Pairwise`]).
//! - [`expand_detected`] chains the two.
//!
//! # Examples
//!
//! ```
//! use cellsplit_core::{detect_multivalue_columns, split_and_explode, ExpandMode, SplitOptions};
//! use cellsplit_table::Dataset;
//!
//! let table = Dataset::from_columns([
//!     ("CPU", vec!["Apple M3 Max (16 cores)"]),
//!     ("TTS", vec!["177 s 167 s"]),
//!     ("Pages/s", vec!["1.27 1.34"]),
//! ])
//! .unwrap();
//!
//! let columns = detect_multivalue_columns(&table);
//! assert_eq!(columns, vec!["TTS", "Pages/s"]);
//!
//! let options = SplitOptions::default()
//!     .with_mode(ExpandMode::Pairwise)
//!     .with_smart(true);
//! let expanded = split_and_explode(&table, &columns, &options).unwrap();
//! assert_eq!(expanded.row_count(), 2);
//! assert_eq!(expanded.get(1, "TTS").unwrap().as_str(), "167 s");
//! ```

pub mod detector;
pub mod error;
pub mod explode;
pub mod options;
mod patterns;
pub mod pipeline;
pub mod tokenizer;

pub use detector::{
    detect_multivalue_columns, detect_multivalue_signals, DetectedColumn, MultiValueSignal,
};
pub use error::{Result, SplitError};
pub use explode::split_and_explode;
pub use options::{ExpandMode, SplitOptions};
pub use patterns::DEFAULT_DELIMITER_PATTERN;
pub use pipeline::expand_detected;
pub use tokenizer::{
    BareNumberMatcher, NumberUnitMatcher, TokenMatcher, Tokenizer, WideSpaceMatcher,
    SMART_MATCHERS,
};
