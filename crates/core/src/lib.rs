#![deny(missing_docs)]
//! Textkit core: line break conversion, case conversion, and line sorting.

/// Multi-style case conversion.
pub mod case;
/// Core error types.
pub mod error;
/// Line break normalization and conversion.
pub mod line_breaks;
/// Request types and the dispatch entry point.
pub mod process;
/// Multi-mode line sorting.
pub mod sort;

pub use case::{CaseStyle, convert_case, convert_case_with};
pub use error::{ProcessError, TextUtilityError};
pub use line_breaks::{LineBreakStyle, convert_line_breaks};
pub use process::{Operation, TextUtilityRequest, process_text, process_text_with};
pub use sort::{LineSortStyle, sort_lines, sort_lines_with};
