#![deny(missing_docs)]
//! Node.js bindings that surface textkit's Rust implementation.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::str::FromStr;
use textkit_core::{
    CaseStyle, LineBreakStyle, LineSortStyle, Operation, ProcessError, TextUtilityError,
    TextUtilityRequest,
};

/// Batch processing types and functions.
pub mod batch;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
pub use types::*;

/// Resolves the string-spelled tags of a config into a typed request.
/// Unrecognized tags are rejected here, before any dispatching happens.
fn build_request(
    config: Option<&TextUtilityConfig>,
) -> std::result::Result<TextUtilityRequest, ProcessError> {
    let Some(config) = config else {
        return Ok(TextUtilityRequest::default());
    };
    let request = TextUtilityRequest {
        operation: config
            .operation
            .as_deref()
            .map(Operation::from_str)
            .transpose()?,
        line_break_style: config
            .line_break_type
            .as_deref()
            .map(LineBreakStyle::from_str)
            .transpose()?,
        case_style: config
            .case_type
            .as_deref()
            .map(CaseStyle::from_str)
            .transpose()?,
        line_sort_style: config
            .sort_type
            .as_deref()
            .map(LineSortStyle::from_str)
            .transpose()?,
    };
    Ok(request)
}

/// Maps request validation and dispatch errors onto NAPI statuses. All of
/// them are caller bugs rather than runtime conditions.
fn invalid_request(err: ProcessError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

fn invalid_tag(err: TextUtilityError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// Applies the transform selected by `config` to `text`.
///
/// Omitting `config` (or its `operation` field) selects lowercase case
/// conversion. An explicitly chosen operation whose matching style field is
/// missing throws; empty input returns an empty string without validating
/// anything.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { processText } = require('textkit-napi');
///
/// processText("Hello World", { operation: "case-conversion", caseType: "kebab" });
/// // => "hello-world"
/// ```
#[napi(js_name = "processText")]
pub fn process_text(text: String, config: Option<TextUtilityConfig>) -> napi::Result<String> {
    let request = build_request(config.as_ref()).map_err(invalid_request)?;
    textkit_core::process_text(&text, &request).map_err(invalid_request)
}

/// Rewrites every line break in `text` to the given style ("lf" or "crlf").
#[napi(js_name = "convertLineBreaks")]
pub fn convert_line_breaks(text: String, line_break_type: String) -> napi::Result<String> {
    let style = LineBreakStyle::from_str(&line_break_type).map_err(invalid_tag)?;
    Ok(textkit_core::convert_line_breaks(&text, style))
}

/// Converts `text` to the given case style ("lower", "camel", "snake", …).
#[napi(js_name = "convertCase")]
pub fn convert_case(text: String, case_type: String) -> napi::Result<String> {
    let style = CaseStyle::from_str(&case_type).map_err(invalid_tag)?;
    Ok(textkit_core::convert_case(&text, style))
}

/// Reorders the lines of `text` by the given sort style ("alphabetize", …).
#[napi(js_name = "sortLines")]
pub fn sort_lines(text: String, sort_type: String) -> napi::Result<String> {
    let style = LineSortStyle::from_str(&sort_type).map_err(invalid_tag)?;
    Ok(textkit_core::sort_lines(&text, style))
}

/// Transforms multiple texts in parallel using Rayon.
///
/// The configured transform is applied to every input concurrently,
/// leveraging all available CPU cores (or a specified maximum). Unknown
/// operation or style tags fail the whole call; per-input failures are
/// reported item by item and counted in the statistics.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transformBatch } = require('textkit-napi');
///
/// const inputs = [
///   { id: 'title', source: 'hello world' },
///   { id: 'slug', source: 'Another Entry' },
/// ];
///
/// const result = transformBatch(inputs, {
///   config: { operation: 'case-conversion', caseType: 'kebab' },
/// });
/// console.log(`Processed ${result.stats.total} texts in ${result.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "transformBatch")]
pub fn transform_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let request = build_request(opts.config.as_ref()).map_err(invalid_request)?;

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match textkit_core::process_text(&input.source, &request) {
            Ok(output) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(output),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        // Process all inputs regardless of errors
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}
