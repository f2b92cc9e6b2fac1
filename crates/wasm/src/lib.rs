use std::str::FromStr;
use textkit_core::{
    CaseStyle, LineBreakStyle, LineSortStyle, Operation, ProcessError, TextUtilityError,
    TextUtilityRequest,
};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Config
// ============================================================================

/// Configuration accepted by the WASM process function.
/// Mirrors the NAPI `TextUtilityConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmTextUtilityConfig {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default, alias = "lineBreakType")]
    pub line_break_type: Option<String>,
    #[serde(default, alias = "caseType")]
    pub case_type: Option<String>,
    #[serde(default, alias = "sortType")]
    pub sort_type: Option<String>,
}

fn parse_config(config: JsValue) -> WasmTextUtilityConfig {
    if config.is_undefined() || config.is_null() {
        return WasmTextUtilityConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

/// Resolves the string-spelled tags of a config into a typed request.
/// Unrecognized tags are rejected here, before any dispatching happens.
fn build_request(cfg: &WasmTextUtilityConfig) -> Result<TextUtilityRequest, TextUtilityError> {
    Ok(TextUtilityRequest {
        operation: cfg
            .operation
            .as_deref()
            .map(Operation::from_str)
            .transpose()?,
        line_break_style: cfg
            .line_break_type
            .as_deref()
            .map(LineBreakStyle::from_str)
            .transpose()?,
        case_style: cfg.case_type.as_deref().map(CaseStyle::from_str).transpose()?,
        line_sort_style: cfg
            .sort_type
            .as_deref()
            .map(LineSortStyle::from_str)
            .transpose()?,
    })
}

// ============================================================================
// Process API
// ============================================================================

/// Applies the transform selected by `config` to `text`.
///
/// `config` is an optional JavaScript object:
/// - `operation`: `"line-break-conversion"`, `"case-conversion"`, or
///   `"line-sorting"`; omitting it selects lowercase case conversion
/// - `lineBreakType`: `"lf"` or `"crlf"` (required for line break conversion)
/// - `caseType`: case style tag (required for case conversion)
/// - `sortType`: sort style tag (required for line sorting)
///
/// An explicitly chosen operation whose matching style is missing throws;
/// empty input returns an empty string without validating anything.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { processText } from './textkit_wasm';
///
/// processText("Hello World", { operation: "case-conversion", caseType: "kebab" });
/// // => "hello-world"
/// ```
#[wasm_bindgen(js_name = processText)]
pub fn process_text(text: &str, config: JsValue) -> Result<String, JsError> {
    let cfg = parse_config(config);
    let request =
        build_request(&cfg).map_err(|e| JsError::new(&ProcessError::from(e).to_string()))?;
    textkit_core::process_text(text, &request).map_err(|e| JsError::new(&e.to_string()))
}

/// Rewrites every line break in `text` to the given style (`"lf"` or `"crlf"`).
#[wasm_bindgen(js_name = convertLineBreaks)]
pub fn convert_line_breaks(text: &str, line_break_type: &str) -> Result<String, JsError> {
    let style = LineBreakStyle::from_str(line_break_type).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(textkit_core::convert_line_breaks(text, style))
}

/// Converts `text` to the given case style (`"lower"`, `"camel"`, `"snake"`, …).
#[wasm_bindgen(js_name = convertCase)]
pub fn convert_case(text: &str, case_type: &str) -> Result<String, JsError> {
    let style = CaseStyle::from_str(case_type).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(textkit_core::convert_case(text, style))
}

/// Reorders the lines of `text` by the given sort style (`"alphabetize"`, …).
#[wasm_bindgen(js_name = sortLines)]
pub fn sort_lines(text: &str, sort_type: &str) -> Result<String, JsError> {
    let style = LineSortStyle::from_str(sort_type).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(textkit_core::sort_lines(text, style))
}
