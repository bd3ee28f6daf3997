//! Loading and rewriting the glossary CSV.
//!
//! The on-disk parsing/serialization mechanics are delegated to the `csv`
//! crate; this module adds the glossary-specific parts: header-set
//! validation against the registry, whole-file load into [`GlossaryRow`]s,
//! and a writer that replays the file's original column order.

use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::error::{SourceError, SourceResult};
use crate::models::GlossaryRow;
use crate::schema::EXPECTED_HEADERS;

/// The whole dataset, held in memory for the duration of one run.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names exactly as they appear in the file.
    pub headers: Vec<String>,
    /// All rows, in file order.
    pub rows: Vec<GlossaryRow>,
}

impl Dataset {
    /// Load the dataset wholesale from `path`.
    ///
    /// Pre-flight failures (missing file, empty file, header mismatch)
    /// abort before any row is parsed.
    pub fn load(path: &Path) -> SourceResult<Self> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_path(path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(SourceError::Empty);
        }

        validate_headers(&headers)?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: GlossaryRow = record?;
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Rewrite the dataset wholesale to `path`, preserving the column
    /// order captured at load time.
    pub fn save(&self, path: &Path) -> SourceResult<()> {
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            let record: Vec<&str> = self
                .headers
                .iter()
                .map(|h| row.field(h).unwrap_or(""))
                .collect();
            writer.write_record(&record)?;
        }
        writer.flush().map_err(SourceError::Io)?;

        Ok(())
    }
}

/// Compare the file's header set against the expected schema.
///
/// Order-insensitive: any expected-but-absent or present-but-unexpected
/// column is fatal, and both full lists are reported at once.
pub fn validate_headers(headers: &[String]) -> SourceResult<()> {
    let missing: Vec<String> = EXPECTED_HEADERS
        .iter()
        .filter(|expected| !headers.iter().any(|h| h == *expected))
        .map(|h| h.to_string())
        .collect();

    let unexpected: Vec<String> = headers
        .iter()
        .filter(|h| !EXPECTED_HEADERS.contains(&h.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(SourceError::HeaderMismatch {
            missing,
            unexpected,
        })
    }
}
