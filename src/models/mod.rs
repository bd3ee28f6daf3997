//! Domain models for the glossary toolchain.
//!
//! - [`GlossaryRow`] - one raw CSV record spanning both languages
//! - [`Language`] - the two publication languages
//! - [`GlossaryEntry`] - one per-language object in the exported JSON
//!
//! Rows stay raw strings until validated: the enum boundary sits at the
//! validation rules, not at ingestion.

use serde::{Deserialize, Serialize};

use crate::schema::{Level, Section, Status};

// =============================================================================
// Glossary Row (raw CSV record)
// =============================================================================

/// One glossary entry as read from the CSV, all fields raw strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryRow {
    pub id: String,
    pub section: String,
    /// Semicolon-separated tag list, kept as a single cell.
    pub tags: String,
    pub level: String,
    pub status: String,
    pub version: String,
    pub created_at: String,
    pub updated_at: String,
    pub term_es: String,
    pub short_es: String,
    pub long_es: String,
    pub example_es: String,
    pub term_en: String,
    pub short_en: String,
    pub long_en: String,
    pub example_en: String,
}

impl GlossaryRow {
    /// Split the tags cell into individual tags, dropping empties.
    pub fn split_tags(&self) -> Vec<String> {
        self.tags
            .split(';')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Parse the version cell, defaulting to 1 when absent or unparsable.
    pub fn version_or_default(&self) -> u32 {
        self.version.trim().parse().unwrap_or(1)
    }

    /// True when at least one of the four English fields is blank.
    pub fn missing_english(&self) -> bool {
        self.term_en.trim().is_empty()
            || self.short_en.trim().is_empty()
            || self.long_en.trim().is_empty()
            || self.example_en.trim().is_empty()
    }

    /// Look up a field by its CSV column name.
    ///
    /// Used by the writer to replay the file's original column order.
    pub fn field(&self, column: &str) -> Option<&str> {
        match column {
            "id" => Some(&self.id),
            "section" => Some(&self.section),
            "tags" => Some(&self.tags),
            "level" => Some(&self.level),
            "status" => Some(&self.status),
            "version" => Some(&self.version),
            "created_at" => Some(&self.created_at),
            "updated_at" => Some(&self.updated_at),
            "term_es" => Some(&self.term_es),
            "short_es" => Some(&self.short_es),
            "long_es" => Some(&self.long_es),
            "example_es" => Some(&self.example_es),
            "term_en" => Some(&self.term_en),
            "short_en" => Some(&self.short_en),
            "long_en" => Some(&self.long_en),
            "example_en" => Some(&self.example_en),
            _ => None,
        }
    }
}

// =============================================================================
// Language
// =============================================================================

/// Publication language of an exported entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Language {
    /// Lowercase code as it appears in the JSON artifacts.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Upper-case code for the translation provider.
    pub fn provider_code(&self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::En => "EN",
        }
    }
}

// =============================================================================
// Glossary Entry (JSON projection)
// =============================================================================

/// One object in `glossary.<lang>.json`, consumed by the web frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlossaryEntry {
    pub id: String,
    pub section: Section,
    pub tags: Vec<String>,
    pub level: Level,
    pub status: Status,
    pub version: u32,
    pub created_at: String,
    pub updated_at: String,
    pub language: Language,
    pub term: String,
    pub short: String,
    pub long: String,
    pub example: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EXPECTED_HEADERS;

    fn sample_row() -> GlossaryRow {
        GlossaryRow {
            id: "red_neuronal".into(),
            section: "fundamentos".into(),
            tags: "deep-learning; redes ;".into(),
            level: "basic".into(),
            status: "active".into(),
            version: "2".into(),
            created_at: "2024-01-15".into(),
            updated_at: "2024-03-01".into(),
            term_es: "Red neuronal".into(),
            short_es: "Modelo inspirado en el cerebro.".into(),
            long_es: "Un modelo de aprendizaje compuesto por capas de nodos.".into(),
            example_es: "Una red neuronal clasifica correos.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_split_tags_trims_and_drops_empties() {
        let row = sample_row();
        assert_eq!(row.split_tags(), vec!["deep-learning", "redes"]);

        let empty = GlossaryRow::default();
        assert!(empty.split_tags().is_empty());
    }

    #[test]
    fn test_version_defaults_to_one() {
        let mut row = sample_row();
        assert_eq!(row.version_or_default(), 2);

        row.version = String::new();
        assert_eq!(row.version_or_default(), 1);

        row.version = "dos".into();
        assert_eq!(row.version_or_default(), 1);
    }

    #[test]
    fn test_missing_english() {
        let mut row = sample_row();
        assert!(row.missing_english());

        row.term_en = "Neural network".into();
        row.short_en = "A brain-inspired model.".into();
        row.long_en = "A learning model made of layered nodes.".into();
        row.example_en = "A neural network sorts email.".into();
        assert!(!row.missing_english());

        row.long_en = "   ".into();
        assert!(row.missing_english());
    }

    #[test]
    fn test_field_covers_every_column() {
        let row = sample_row();
        for column in EXPECTED_HEADERS {
            assert!(row.field(column).is_some(), "no accessor for {column}");
        }
        assert!(row.field("notes").is_none());
    }
}
