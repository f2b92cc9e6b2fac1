use crate::case::{CaseStyle, convert_case_with};
use crate::error::{ProcessError, TextUtilityError};
use crate::line_breaks::{LineBreakStyle, convert_line_breaks};
use crate::sort::{LineSortStyle, sort_lines_with};
use rand::Rng;
use std::str::FromStr;

/// Transform selected by a [`TextUtilityRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Rewrite line endings to a target style.
    LineBreakConversion,
    /// Re-case the text.
    CaseConversion,
    /// Reorder the text's lines.
    LineSorting,
}

impl Operation {
    /// Human-readable name used in error messages.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Operation::LineBreakConversion => "line break conversion",
            Operation::CaseConversion => "case conversion",
            Operation::LineSorting => "line sorting",
        }
    }

    /// Name of the style parameter the operation requires.
    pub(crate) fn parameter_name(self) -> &'static str {
        match self {
            Operation::LineBreakConversion => "Line break type",
            Operation::CaseConversion => "Case type",
            Operation::LineSorting => "Sort type",
        }
    }
}

impl FromStr for Operation {
    type Err = TextUtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line-break-conversion" => Ok(Self::LineBreakConversion),
            "case-conversion" => Ok(Self::CaseConversion),
            "line-sorting" => Ok(Self::LineSorting),
            other => Err(TextUtilityError::UnknownOperation {
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration accepted by [`process_text`].
///
/// An omitted `operation` falls back to case conversion with the `lower`
/// style. An explicitly set `operation` requires its matching style field;
/// no default ever stands in for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextUtilityRequest {
    /// Transform to apply; `None` selects the default case conversion.
    pub operation: Option<Operation>,
    /// Target style for line break conversion.
    pub line_break_style: Option<LineBreakStyle>,
    /// Style for case conversion.
    pub case_style: Option<CaseStyle>,
    /// Style for line sorting.
    pub line_sort_style: Option<LineSortStyle>,
}

/// Dispatches `text` to the transform the request selects.
///
/// Randomized styles draw from the thread-local RNG; use
/// [`process_text_with`] to supply a seeded source instead.
pub fn process_text(text: &str, request: &TextUtilityRequest) -> Result<String, ProcessError> {
    process_text_with(text, request, &mut rand::thread_rng())
}

/// Dispatches `text` to the transform the request selects, using the given
/// RNG for the randomized styles.
///
/// Empty input returns an empty string immediately, before any parameter
/// validation. Every failure is wrapped as a [`ProcessError`] with the
/// underlying message preserved verbatim.
pub fn process_text_with<R: Rng>(
    text: &str,
    request: &TextUtilityRequest,
    rng: &mut R,
) -> Result<String, ProcessError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let output = match request.operation {
        // No explicit operation: default to case conversion, honoring a
        // supplied case style and defaulting the style itself to lower.
        None => convert_case_with(
            text,
            request.case_style.unwrap_or(CaseStyle::Lower),
            rng,
        ),
        Some(operation @ Operation::LineBreakConversion) => {
            let style = request
                .line_break_style
                .ok_or(TextUtilityError::MissingParameter { operation })?;
            convert_line_breaks(text, style)
        }
        Some(operation @ Operation::CaseConversion) => {
            let style = request
                .case_style
                .ok_or(TextUtilityError::MissingParameter { operation })?;
            convert_case_with(text, style, rng)
        }
        Some(operation @ Operation::LineSorting) => {
            let style = request
                .line_sort_style
                .ok_or(TextUtilityError::MissingParameter { operation })?;
            sort_lines_with(text, style, rng)
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_lowercases() {
        let out = process_text("Hello World", &TextUtilityRequest::default()).unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn omitted_operation_honors_a_supplied_case_style() {
        let request = TextUtilityRequest {
            case_style: Some(CaseStyle::Upper),
            ..Default::default()
        };
        assert_eq!(process_text("hello", &request).unwrap(), "HELLO");
    }

    #[test]
    fn dispatches_line_break_conversion() {
        let request = TextUtilityRequest {
            operation: Some(Operation::LineBreakConversion),
            line_break_style: Some(LineBreakStyle::Crlf),
            ..Default::default()
        };
        assert_eq!(process_text("a\nb", &request).unwrap(), "a\r\nb");
    }

    #[test]
    fn dispatches_case_conversion() {
        let request = TextUtilityRequest {
            operation: Some(Operation::CaseConversion),
            case_style: Some(CaseStyle::Camel),
            ..Default::default()
        };
        assert_eq!(process_text("hello world test", &request).unwrap(), "helloWorldTest");
    }

    #[test]
    fn dispatches_line_sorting() {
        let request = TextUtilityRequest {
            operation: Some(Operation::LineSorting),
            line_sort_style: Some(LineSortStyle::Alphabetize),
            ..Default::default()
        };
        assert_eq!(
            process_text("zebra\napple\nbanana\ncherry", &request).unwrap(),
            "apple\nbanana\ncherry\nzebra"
        );
    }

    #[test]
    fn explicit_operation_requires_its_parameter() {
        let request = TextUtilityRequest {
            operation: Some(Operation::LineSorting),
            // A case style is present but irrelevant to the chosen operation.
            case_style: Some(CaseStyle::Lower),
            ..Default::default()
        };
        let err = process_text("test", &request).unwrap_err();
        assert!(
            err.to_string().contains("Sort type is required for line sorting"),
            "unexpected message: {err}"
        );
        assert_eq!(
            err.0,
            TextUtilityError::MissingParameter {
                operation: Operation::LineSorting
            }
        );
    }

    #[test]
    fn missing_case_style_fails_rather_than_defaulting() {
        let request = TextUtilityRequest {
            operation: Some(Operation::CaseConversion),
            ..Default::default()
        };
        let err = process_text("test", &request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "text processing failed: Case type is required for case conversion"
        );
    }

    #[test]
    fn missing_line_break_style_fails() {
        let request = TextUtilityRequest {
            operation: Some(Operation::LineBreakConversion),
            ..Default::default()
        };
        let err = process_text("test", &request).unwrap_err();
        assert!(err.to_string().contains("Line break type is required"));
    }

    #[test]
    fn empty_text_short_circuits_before_validation() {
        // Even a request missing its required parameter must not fail.
        let request = TextUtilityRequest {
            operation: Some(Operation::LineSorting),
            ..Default::default()
        };
        assert_eq!(process_text("", &request).unwrap(), "");
        assert_eq!(process_text("", &TextUtilityRequest::default()).unwrap(), "");
    }

    #[test]
    fn parses_operation_tags() {
        assert_eq!(
            "line-break-conversion".parse::<Operation>().unwrap(),
            Operation::LineBreakConversion
        );
        assert_eq!(
            "case-conversion".parse::<Operation>().unwrap(),
            Operation::CaseConversion
        );
        assert_eq!("line-sorting".parse::<Operation>().unwrap(), Operation::LineSorting);
        let err = "base64-encode".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: base64-encode");
    }
}
