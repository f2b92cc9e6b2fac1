//! Batch processing types for parallel text transformation.

use crate::types::TextUtilityConfig;
use napi_derive::napi;

/// Input for batch processing - a single text to transform.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier echoed back with the result.
    pub id: String,
    /// Text content to transform.
    pub source: String,
}

/// Result for a single text in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Transformed text (present on success).
    pub result: Option<String>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of texts processed.
    pub total: u32,
    /// Number of successful transformations.
    pub succeeded: u32,
    /// Number of failed transformations.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Transform configuration applied to every input.
    pub config: Option<TextUtilityConfig>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results for each input.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
