//! Schema and rule registry for the glossary dataset.
//!
//! Static definitions only: the expected column set, the three closed
//! enumerations ([`Section`], [`Level`], [`Status`]), the length bounds,
//! and the id/tag/date patterns. No behavior beyond parsing and listing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The 16 CSV columns, in canonical order.
pub const EXPECTED_HEADERS: [&str; 16] = [
    "id",
    "section",
    "tags",
    "level",
    "status",
    "version",
    "created_at",
    "updated_at",
    "term_es",
    "short_es",
    "long_es",
    "example_es",
    "term_en",
    "short_en",
    "long_en",
    "example_en",
];

// =============================================================================
// Length bounds
// =============================================================================

/// Minimum length for short/long definitions (shorter is a warning).
pub const MIN_DEFINITION_LENGTH: usize = 10;
/// Maximum length for long definitions.
pub const MAX_DEFINITION_LENGTH: usize = 1000;
/// Maximum length for terms.
pub const MAX_TERM_LENGTH: usize = 100;
/// Maximum length for short definitions.
pub const MAX_SHORT_LENGTH: usize = 250;

/// Maximum number of tags before a warning.
pub const MAX_TAG_COUNT: usize = 10;
/// Maximum length of a single tag.
pub const MAX_TAG_LENGTH: usize = 30;

// =============================================================================
// Patterns
// =============================================================================

/// Pattern for entry ids: lowercase, digits, underscores.
pub static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").expect("invalid id pattern"));

/// Pattern for tags: lowercase, digits, hyphens, underscores.
pub static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("invalid tag pattern"));

/// Pattern for `created_at` / `updated_at`: YYYY-MM-DD.
pub static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid date pattern"));

// =============================================================================
// Section
// =============================================================================

/// Topic category of a glossary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Section {
    /// Core concepts.
    #[serde(rename = "fundamentos")]
    Fundamentos,
    /// Models and architectures.
    #[serde(rename = "modelos_arquitecturas")]
    ModelosArquitecturas,
    /// Techniques and processes.
    #[serde(rename = "tecnicas_procesos")]
    TecnicasProcesos,
    /// Applications and tooling.
    #[serde(rename = "aplicaciones_herramientas")]
    AplicacionesHerramientas,
    /// Ethics and regulation.
    #[serde(rename = "etica_regulacion")]
    EticaRegulacion,
}

impl Section {
    /// Parse a section from its raw CSV value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fundamentos" => Some(Self::Fundamentos),
            "modelos_arquitecturas" => Some(Self::ModelosArquitecturas),
            "tecnicas_procesos" => Some(Self::TecnicasProcesos),
            "aplicaciones_herramientas" => Some(Self::AplicacionesHerramientas),
            "etica_regulacion" => Some(Self::EticaRegulacion),
            _ => None,
        }
    }

    /// Raw CSV value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fundamentos => "fundamentos",
            Self::ModelosArquitecturas => "modelos_arquitecturas",
            Self::TecnicasProcesos => "tecnicas_procesos",
            Self::AplicacionesHerramientas => "aplicaciones_herramientas",
            Self::EticaRegulacion => "etica_regulacion",
        }
    }

    /// All allowed values, for diagnostic messages.
    pub fn allowed() -> &'static [&'static str] {
        &[
            "fundamentos",
            "modelos_arquitecturas",
            "tecnicas_procesos",
            "aplicaciones_herramientas",
            "etica_regulacion",
        ]
    }
}

// =============================================================================
// Level
// =============================================================================

/// Difficulty level of a glossary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(Self::Basic),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn allowed() -> &'static [&'static str] {
        &["basic", "intermediate", "advanced"]
    }
}

// =============================================================================
// Status
// =============================================================================

/// Editorial status of a glossary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    /// Published and current.
    #[serde(rename = "active")]
    Active,
    /// Flagged for editorial review.
    #[serde(rename = "to-review")]
    ToReview,
    /// Kept for history, no longer current.
    #[serde(rename = "deprecated")]
    Deprecated,
}

impl Status {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "to-review" => Some(Self::ToReview),
            "deprecated" => Some(Self::Deprecated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::ToReview => "to-review",
            Self::Deprecated => "deprecated",
        }
    }

    pub fn allowed() -> &'static [&'static str] {
        &["active", "to-review", "deprecated"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_roundtrip() {
        for raw in Section::allowed() {
            let section = Section::parse(raw).unwrap();
            assert_eq!(section.as_str(), *raw);
        }
        assert_eq!(Section::parse("cocina"), None);
    }

    #[test]
    fn test_level_roundtrip() {
        assert_eq!(Level::parse("basic"), Some(Level::Basic));
        assert_eq!(Level::Advanced.as_str(), "advanced");
        assert_eq!(Level::parse("expert"), None);
        // Parsing is exact: no case folding.
        assert_eq!(Level::parse("Basic"), None);
    }

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(Status::parse("to-review"), Some(Status::ToReview));
        assert_eq!(Status::ToReview.as_str(), "to-review");
        assert_eq!(Status::parse("archived"), None);
    }

    #[test]
    fn test_patterns() {
        assert!(ID_PATTERN.is_match("red_neuronal_2"));
        assert!(!ID_PATTERN.is_match("Red-Neuronal"));
        assert!(!ID_PATTERN.is_match(""));

        assert!(TAG_PATTERN.is_match("deep-learning"));
        assert!(!TAG_PATTERN.is_match("Deep Learning"));

        assert!(DATE_PATTERN.is_match("2024-03-01"));
        assert!(!DATE_PATTERN.is_match("01/03/2024"));
        assert!(!DATE_PATTERN.is_match("2024-3-1"));
    }

    #[test]
    fn test_expected_headers_shape() {
        assert_eq!(EXPECTED_HEADERS.len(), 16);
        assert_eq!(EXPECTED_HEADERS[0], "id");
        assert_eq!(EXPECTED_HEADERS[15], "example_en");
    }
}
