//! Per-language JSON projection for the web frontend.
//!
//! Produces `glossary.es.json` and `glossary.en.json`: the Spanish array
//! carries every row, the English array only rows with a non-blank
//! `term_en`.

use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::{RunResult, SourceError};
use crate::models::{GlossaryEntry, GlossaryRow, Language};
use crate::schema::{Level, Section, Status};

/// The two projected arrays.
#[derive(Debug, Clone, Default)]
pub struct ProjectedEntries {
    pub es: Vec<GlossaryEntry>,
    pub en: Vec<GlossaryEntry>,
}

/// Project rows into the per-language arrays.
///
/// Rows are expected to have passed validation; a row whose enums do not
/// parse is skipped rather than exported half-typed.
pub fn project_entries(rows: &[GlossaryRow]) -> ProjectedEntries {
    let mut projected = ProjectedEntries::default();

    for row in rows {
        let (Some(section), Some(level), Some(status)) = (
            Section::parse(&row.section),
            Level::parse(&row.level),
            Status::parse(&row.status),
        ) else {
            continue;
        };

        let entry = |language: Language, term: &str, short: &str, long: &str, example: &str| {
            GlossaryEntry {
                id: row.id.clone(),
                section,
                tags: row.split_tags(),
                level,
                status,
                version: row.version_or_default(),
                created_at: row.created_at.clone(),
                updated_at: row.updated_at.clone(),
                language,
                term: term.to_string(),
                short: short.to_string(),
                long: long.to_string(),
                example: example.to_string(),
            }
        };

        projected.es.push(entry(
            Language::Es,
            &row.term_es,
            &row.short_es,
            &row.long_es,
            &row.example_es,
        ));

        if !row.term_en.trim().is_empty() {
            projected.en.push(entry(
                Language::En,
                &row.term_en,
                &row.short_en,
                &row.long_en,
                &row.example_en,
            ));
        }
    }

    projected
}

/// Paths of the two written artifacts.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub es_path: PathBuf,
    pub en_path: PathBuf,
    pub es_count: usize,
    pub en_count: usize,
}

/// Load the dataset and write both JSON artifacts into `output_dir`,
/// creating the directory if needed.
pub fn export_json(csv_path: &Path, output_dir: &Path) -> RunResult<ExportReport> {
    let dataset = Dataset::load(csv_path)?;
    let projected = project_entries(&dataset.rows);

    std::fs::create_dir_all(output_dir).map_err(SourceError::Io)?;

    let es_path = output_dir.join("glossary.es.json");
    let en_path = output_dir.join("glossary.en.json");

    write_pretty(&es_path, &projected.es)?;
    write_pretty(&en_path, &projected.en)?;

    Ok(ExportReport {
        es_path,
        en_path,
        es_count: projected.es.len(),
        en_count: projected.en.len(),
    })
}

fn write_pretty(path: &Path, entries: &[GlossaryEntry]) -> Result<(), SourceError> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json).map_err(SourceError::Io)
}
