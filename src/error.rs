//! Error types for the glossary toolchain.
//!
//! One enum per concern:
//!
//! - [`SourceError`] - dataset file and header problems
//! - [`TranslateError`] - DeepL provider boundary
//! - [`RunError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Dataset Source Errors
// =============================================================================

/// Errors loading or rewriting the glossary CSV.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source file does not exist.
    #[error("CSV file not found at: {0}")]
    NotFound(String),

    /// Failed to read or write the file.
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV library rejected the file.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON artifact serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File has no header row at all.
    #[error("CSV file is empty")]
    Empty,

    /// Header set differs from the expected schema.
    #[error("CSV headers mismatch. Missing: [{}]. Unexpected: [{}]",
            missing.join(", "), unexpected.join(", "))]
    HeaderMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

// =============================================================================
// Translation Provider Errors
// =============================================================================

/// Errors from the DeepL client.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Missing API key.
    #[error("Missing DEEPL_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed (network, timeout).
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// Non-2xx response from the provider.
    #[error("DeepL API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// 2xx response whose body lacks `translations[0].text`.
    #[error("Unexpected DeepL response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Run Errors (top-level)
// =============================================================================

/// Top-level errors for one validation or translation run.
///
/// This is the main error type returned by [`crate::validate::run_validation`]
/// and [`crate::translate::run_backfill`].
#[derive(Debug, Error)]
pub enum RunError {
    /// Dataset source error.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Translation provider error.
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for dataset operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Result type for run-level operations.
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // SourceError -> RunError
        let src_err = SourceError::Empty;
        let run_err: RunError = src_err.into();
        assert!(run_err.to_string().contains("empty"));

        // TranslateError -> RunError
        let tr_err = TranslateError::MissingApiKey;
        let run_err: RunError = tr_err.into();
        assert!(run_err.to_string().contains("DEEPL_API_KEY"));
    }

    #[test]
    fn test_header_mismatch_lists_both_sides() {
        let err = SourceError::HeaderMismatch {
            missing: vec!["term_es".into(), "level".into()],
            unexpected: vec!["notes".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("term_es, level"));
        assert!(msg.contains("notes"));
    }

    #[test]
    fn test_api_error_format() {
        let err = TranslateError::ApiError {
            status: 456,
            body: "Quota exceeded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("456"));
        assert!(msg.contains("Quota exceeded"));
    }
}
