//! Row-level validation of the glossary dataset.
//!
//! Every rule is evaluated independently (no short-circuit within a row)
//! and produces classified [`Diagnostic`]s: errors invalidate the dataset,
//! warnings are quality signals that never fail the run. Diagnostics are
//! collected for the whole run and decided on once, so a contributor sees
//! the complete picture in a single pass.
//!
//! Rule order within a row: id → section → level → status → dates →
//! ES content → tags → EN content → active-completeness check.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::RunResult;
use crate::models::GlossaryRow;
use crate::schema::{
    Level, Section, Status, DATE_PATTERN, ID_PATTERN, MAX_DEFINITION_LENGTH, MAX_SHORT_LENGTH,
    MAX_TAG_COUNT, MAX_TAG_LENGTH, MAX_TERM_LENGTH, MIN_DEFINITION_LENGTH, TAG_PATTERN,
};

// =============================================================================
// Diagnostics
// =============================================================================

/// Severity of one diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One classified validation message. Row number and field are embedded
/// in the message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Accumulator for one validation run.
///
/// Passed through the row checks instead of raising on first failure,
/// preserving the "report everything, fail once" contract.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    /// All diagnostics in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Row Validator
// =============================================================================

/// Which length regime a content field falls under.
#[derive(Debug, Clone, Copy)]
enum ContentKind {
    /// ≤100 chars, no minimum.
    Term,
    /// 10–250 chars.
    Short,
    /// 10–1000 chars.
    Long,
}

/// Validates rows one at a time, tracking cross-row invariants
/// (id uniqueness) for the duration of one run.
#[derive(Debug, Default)]
pub struct RowValidator {
    seen_ids: HashSet<String>,
}

impl RowValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate one row at its 1-based file position (the first data row
    /// is 2, offset by the header line), appending diagnostics to `diags`.
    pub fn validate_row(&mut self, row: &GlossaryRow, row_num: usize, diags: &mut Diagnostics) {
        let id = &row.id;

        // id: empty, pattern, duplicate. A row with an unusable id still
        // goes through every later check with the raw value for context.
        if id.is_empty() {
            diags.error(format!("Row {row_num}: id is empty."));
        } else {
            if !ID_PATTERN.is_match(id) {
                diags.error(format!(
                    "Row {row_num}: id \"{id}\" is invalid. Use lowercase, digits, and underscores only."
                ));
            }
            if self.seen_ids.contains(id) {
                diags.error(format!("Row {row_num}: duplicate id \"{id}\"."));
            }
            self.seen_ids.insert(id.clone());
        }

        // Closed enumerations.
        if Section::parse(&row.section).is_none() {
            diags.error(format!(
                "Row {row_num} (id={id}): section \"{}\" is not one of {}.",
                row.section,
                Section::allowed().join(", ")
            ));
        }
        if Level::parse(&row.level).is_none() {
            diags.error(format!(
                "Row {row_num} (id={id}): level \"{}\" is not one of {}.",
                row.level,
                Level::allowed().join(", ")
            ));
        }
        if Status::parse(&row.status).is_none() {
            diags.error(format!(
                "Row {row_num} (id={id}): status \"{}\" is not one of {}.",
                row.status,
                Status::allowed().join(", ")
            ));
        }

        // Dates: empty and format are independent checks; an empty value
        // does not also trigger the format check.
        for (field, value) in [("created_at", &row.created_at), ("updated_at", &row.updated_at)] {
            if value.is_empty() {
                diags.error(format!("Row {row_num} (id={id}): {field} is empty."));
            } else if !DATE_PATTERN.is_match(value) {
                diags.error(format!(
                    "Row {row_num} (id={id}): {field} \"{value}\" is not in YYYY-MM-DD format."
                ));
            }
        }

        // Spanish content: mandatory, with length bounds.
        check_content(diags, row_num, id, "term_es", &row.term_es, ContentKind::Term, true);
        check_content(diags, row_num, id, "short_es", &row.short_es, ContentKind::Short, true);
        check_content(diags, row_num, id, "long_es", &row.long_es, ContentKind::Long, true);

        // Tags: only evaluated when the raw cell is non-empty.
        if !row.tags.trim().is_empty() {
            let tags = row.split_tags();
            for tag in &tags {
                if !TAG_PATTERN.is_match(tag) {
                    diags.warning(format!(
                        "Row {row_num} (id={id}): tag \"{tag}\" contains invalid characters. \
                         Use lowercase, digits, hyphens and underscores only."
                    ));
                }
                if tag.chars().count() > MAX_TAG_LENGTH {
                    diags.warning(format!(
                        "Row {row_num} (id={id}): tag \"{tag}\" is too long ({} > {MAX_TAG_LENGTH}).",
                        tag.chars().count()
                    ));
                }
            }
            if tags.len() > MAX_TAG_COUNT {
                diags.warning(format!(
                    "Row {row_num} (id={id}): too many tags ({} > {MAX_TAG_COUNT}).",
                    tags.len()
                ));
            }
        }

        // English content: same bounds, only when present; absence alone
        // is not flagged here.
        check_content(diags, row_num, id, "term_en", &row.term_en, ContentKind::Term, false);
        check_content(diags, row_num, id, "short_en", &row.short_en, ContentKind::Short, false);
        check_content(diags, row_num, id, "long_en", &row.long_en, ContentKind::Long, false);

        // Published rows should be fully bilingual.
        if row.status == Status::Active.as_str() && row.missing_english() {
            diags.warning(format!(
                "Row {row_num} (id={id}): status=active but some EN fields are empty."
            ));
        }
    }
}

/// Length checks for one content field.
///
/// Blank required fields are an error and end that field's evaluation;
/// blank optional fields produce nothing. Boundary-exact lengths produce
/// neither a warning nor an error.
fn check_content(
    diags: &mut Diagnostics,
    row_num: usize,
    id: &str,
    field: &str,
    value: &str,
    kind: ContentKind,
    required: bool,
) {
    let value = value.trim();
    if value.is_empty() {
        if required {
            diags.error(format!(
                "Row {row_num} (id={id}): required ES field \"{field}\" is empty."
            ));
        }
        return;
    }

    let len = value.chars().count();
    match kind {
        ContentKind::Term => {
            if len > MAX_TERM_LENGTH {
                diags.error(format!(
                    "Row {row_num} (id={id}): {field} is too long ({len} > {MAX_TERM_LENGTH})."
                ));
            }
        }
        ContentKind::Short => {
            if len < MIN_DEFINITION_LENGTH {
                diags.warning(format!(
                    "Row {row_num} (id={id}): {field} is very short ({len} < {MIN_DEFINITION_LENGTH})."
                ));
            }
            if len > MAX_SHORT_LENGTH {
                diags.error(format!(
                    "Row {row_num} (id={id}): {field} is too long ({len} > {MAX_SHORT_LENGTH})."
                ));
            }
        }
        ContentKind::Long => {
            if len < MIN_DEFINITION_LENGTH {
                diags.warning(format!(
                    "Row {row_num} (id={id}): {field} is very short ({len} < {MIN_DEFINITION_LENGTH})."
                ));
            }
            if len > MAX_DEFINITION_LENGTH {
                diags.error(format!(
                    "Row {row_num} (id={id}): {field} is too long ({len} > {MAX_DEFINITION_LENGTH})."
                ));
            }
        }
    }
}

// =============================================================================
// Validation Runner
// =============================================================================

/// Outcome of one full validation run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub total_rows: usize,
    pub diagnostics: Diagnostics,
}

impl ValidationReport {
    /// Warnings alone do not fail the run.
    pub fn passed(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Validate every row of an already-loaded dataset.
pub fn validate_rows(rows: &[GlossaryRow]) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let mut validator = RowValidator::new();

    for (index, row) in rows.iter().enumerate() {
        // +1 for the header line, +1 for 1-based numbering.
        validator.validate_row(row, index + 2, &mut diags);
    }

    diags
}

/// Full validation run against the persisted source: load (fatal on a
/// missing file or header mismatch), then validate all rows.
pub fn run_validation(path: &Path) -> RunResult<ValidationReport> {
    let dataset = Dataset::load(path)?;
    let diagnostics = validate_rows(&dataset.rows);

    Ok(ValidationReport {
        total_rows: dataset.rows.len(),
        diagnostics,
    })
}
