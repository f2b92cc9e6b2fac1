use crate::process::Operation;
use thiserror::Error;

/// Errors produced while validating or dispatching a text utility request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextUtilityError {
    /// An operation was explicitly requested without its matching style parameter.
    ///
    /// Defaults never cover this case: they apply only when the caller omitted
    /// the operation itself.
    #[error("{} is required for {}", .operation.parameter_name(), .operation.label())]
    MissingParameter {
        /// The operation that was requested.
        operation: Operation,
    },
    /// The operation tag does not match any recognized variant.
    #[error("Unknown operation: {value}")]
    UnknownOperation {
        /// The offending operation tag.
        value: String,
    },
    /// The line break style tag does not match any recognized variant.
    #[error("Unknown line break type: {value}")]
    UnknownLineBreakStyle {
        /// The offending style tag.
        value: String,
    },
    /// The case style tag does not match any recognized variant.
    #[error("Unknown case type: {value}")]
    UnknownCaseStyle {
        /// The offending style tag.
        value: String,
    },
    /// The sort style tag does not match any recognized variant.
    #[error("Unknown sort type: {value}")]
    UnknownSortStyle {
        /// The offending style tag.
        value: String,
    },
}

/// Top-level error returned by [`crate::process_text`].
///
/// Wraps the underlying cause with a stable prefix while preserving the inner
/// message verbatim, so callers can match on either layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("text processing failed: {0}")]
pub struct ProcessError(#[from] pub TextUtilityError);
