use crate::error::TextUtilityError;
use std::str::FromStr;

/// Target newline sequence emitted by [`convert_line_breaks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreakStyle {
    /// Unix-style bare `\n`.
    Lf,
    /// Windows-style `\r\n`.
    Crlf,
}

impl FromStr for LineBreakStyle {
    type Err = TextUtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            other => Err(TextUtilityError::UnknownLineBreakStyle {
                value: other.to_string(),
            }),
        }
    }
}

/// Rewrites every line break in `text` to the requested style.
///
/// All three source styles (`\r\n`, bare `\r`, bare `\n`) are normalized to
/// bare `\n` first, then re-emitted. Line break count is preserved exactly:
/// no trailing break is added and none is dropped. Text without line breaks
/// passes through unchanged.
pub fn convert_line_breaks(text: &str, style: LineBreakStyle) -> String {
    let normalized = normalize_line_breaks(text);
    match style {
        LineBreakStyle::Lf => normalized,
        LineBreakStyle::Crlf => normalized.replace('\n', "\r\n"),
    }
}

/// Collapses `\r\n` and bare `\r` to the canonical bare `\n` form.
fn normalize_line_breaks(text: &str) -> String {
    // CRLF pairs first so the bare-\r pass cannot split one in two.
    text.replace("\r\n", "\n").replace('\r', "\n")
}
