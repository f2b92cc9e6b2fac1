//! NAPI-exposed data structures.

use napi_derive::napi;

/// Options passed to the text processing functions.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct TextUtilityConfig {
    /// Transform to apply: "line-break-conversion", "case-conversion", or
    /// "line-sorting". Omitting it selects lowercase case conversion.
    pub operation: Option<String>,
    /// Target line break style ("lf" or "crlf"). Required when `operation`
    /// is "line-break-conversion".
    pub line_break_type: Option<String>,
    /// Case style tag ("lower", "camel", "snake", …). Required when
    /// `operation` is "case-conversion".
    pub case_type: Option<String>,
    /// Sort style tag ("alphabetize", "reverse", "randomize", …). Required
    /// when `operation` is "line-sorting".
    pub sort_type: Option<String>,
}
