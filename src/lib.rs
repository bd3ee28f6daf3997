//! # Glossaria - bilingual glossary validation and translation
//!
//! Glossaria maintains a bilingual (ES/EN) AI glossary stored in a single
//! CSV file and produces validated rows, per-language JSON artifacts for
//! the web frontend, and DeepL-powered back-fill of missing English
//! fields.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ glossary.csv│────▶│  Validator  │────▶│ diagnostics      │
//! │ (16 columns)│     │ (schema+row)│     │ (errors/warnings)│
//! └─────┬───────┘     └─────────────┘     └──────────────────┘
//!       │             ┌─────────────┐     ┌──────────────────┐
//!       ├────────────▶│  Back-fill  │────▶│ glossary.csv     │
//!       │             │  (DeepL)    │     │ (rewritten)      │
//!       │             └─────────────┘     └──────────────────┘
//!       │             ┌─────────────┐     ┌──────────────────┐
//!       └────────────▶│   Export    │────▶│ glossary.{es,en} │
//!                     │ (projection)│     │ .json            │
//!                     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use glossaria::validate::run_validation;
//! use std::path::Path;
//!
//! let report = run_validation(Path::new("data/glossary.csv"))?;
//! println!("{} errors", report.diagnostics.error_count());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`schema`] - Column set, closed enumerations, bounds, patterns
//! - [`models`] - Domain models (GlossaryRow, GlossaryEntry)
//! - [`dataset`] - CSV load/rewrite with header validation
//! - [`validate`] - Row validation engine and runner
//! - [`translate`] - DeepL back-fill engine
//! - [`export`] - Per-language JSON projection

// Core modules
pub mod error;
pub mod schema;

// Models
pub mod models;

// Dataset I/O
pub mod dataset;

// Validation
pub mod validate;

// Translation
pub mod translate;

// JSON export
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{RunError, SourceError, TranslateError};

// =============================================================================
// Re-exports - Schema
// =============================================================================

pub use schema::{Level, Section, Status, EXPECTED_HEADERS};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{GlossaryEntry, GlossaryRow, Language};

// =============================================================================
// Re-exports - Dataset
// =============================================================================

pub use dataset::{validate_headers, Dataset};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validate::{
    run_validation, validate_rows, Diagnostic, Diagnostics, RowValidator, Severity,
    ValidationReport,
};

// =============================================================================
// Re-exports - Translation
// =============================================================================

pub use translate::{
    backfill_rows, run_backfill, run_backfill_with, BackfillOutcome, BackfillReport, ContentField,
    DeeplClient, Translator,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{export_json, project_entries, ExportReport, ProjectedEntries};
