//! Machine-translation back-fill of missing English fields.
//!
//! Scans rows for blank EN fields, translates the corresponding ES source
//! through DeepL (one request per field, sequential, in row order), merges
//! the results in place, and rewrites the CSV only when something changed.
//! Any provider failure aborts the whole run before the rewrite, leaving
//! the source file untouched.
//!
//! The merge logic is generic over [`Translator`] so it can be unit-tested
//! without a live network call.

use std::env;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::dataset::Dataset;
use crate::error::{RunResult, TranslateError, TranslateResult};
use crate::models::{GlossaryRow, Language};

/// Default public endpoint, overridable via `DEEPL_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.deepl.com/v2/translate";

/// Explicit per-call timeout; there is no retry, one failed call aborts.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Translator trait
// =============================================================================

/// A translation backend. The production implementation is
/// [`DeeplClient`]; tests inject fakes.
pub trait Translator {
    /// Translate `text` from `source` to `target`.
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> impl std::future::Future<Output = TranslateResult<String>>;
}

// =============================================================================
// Content fields
// =============================================================================

/// The four translatable content fields, iterated uniformly so the
/// "skip if no source" and "count if attempted" rules live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    Term,
    Short,
    Long,
    Example,
}

impl ContentField {
    pub const ALL: [Self; 4] = [Self::Term, Self::Short, Self::Long, Self::Example];

    /// The Spanish source cell.
    pub fn source<'a>(&self, row: &'a GlossaryRow) -> &'a str {
        match self {
            Self::Term => &row.term_es,
            Self::Short => &row.short_es,
            Self::Long => &row.long_es,
            Self::Example => &row.example_es,
        }
    }

    /// The English target cell.
    pub fn target<'a>(&self, row: &'a GlossaryRow) -> &'a str {
        match self {
            Self::Term => &row.term_en,
            Self::Short => &row.short_en,
            Self::Long => &row.long_en,
            Self::Example => &row.example_en,
        }
    }

    pub fn set_target(&self, row: &mut GlossaryRow, value: String) {
        match self {
            Self::Term => row.term_en = value,
            Self::Short => row.short_en = value,
            Self::Long => row.long_en = value,
            Self::Example => row.example_en = value,
        }
    }
}

// =============================================================================
// Back-fill merge
// =============================================================================

/// Outcome of one back-fill pass over the in-memory rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillOutcome {
    /// Rows that needed back-fill. A row counts even when every attempted
    /// field had a blank ES source and nothing was written (kept as-is
    /// from the original tool).
    pub updated_rows: usize,
    /// Individual fields actually translated.
    pub translated_fields: usize,
}

/// Merge translations into `rows` in place.
///
/// For each row with at least one blank EN field, every blank EN field
/// whose ES source is non-empty gets one ES→EN translation (trimmed
/// before assignment); fields with a blank source are silently skipped.
/// The first provider error aborts immediately.
pub async fn backfill_rows<T: Translator>(
    rows: &mut [GlossaryRow],
    translator: &T,
) -> TranslateResult<BackfillOutcome> {
    let mut outcome = BackfillOutcome::default();

    for row in rows.iter_mut() {
        if !row.missing_english() {
            continue;
        }

        for field in ContentField::ALL {
            if !field.target(row).trim().is_empty() {
                continue;
            }
            let source = field.source(row).trim().to_string();
            if source.is_empty() {
                continue;
            }

            let translated = translator
                .translate(&source, Language::Es, Language::En)
                .await?;
            field.set_target(row, translated.trim().to_string());
            outcome.translated_fields += 1;
        }

        outcome.updated_rows += 1;
    }

    Ok(outcome)
}

// =============================================================================
// DeepL client
// =============================================================================

/// DeepL response body: `{"translations":[{"text": "..."}]}`.
#[derive(Debug, Deserialize)]
struct DeeplResponse {
    #[serde(default)]
    translations: Vec<DeeplTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeeplTranslation {
    text: String,
}

/// DeepL API client.
pub struct DeeplClient {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl DeeplClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: String) -> TranslateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TranslateError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            client,
        })
    }

    /// Create a client from `DEEPL_API_KEY` / `DEEPL_API_URL`.
    pub fn from_env() -> TranslateResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = env::var("DEEPL_API_KEY").map_err(|_| TranslateError::MissingApiKey)?;
        let mut client = Self::new(api_key)?;
        if let Ok(url) = env::var("DEEPL_API_URL") {
            client.api_url = url;
        }
        Ok(client)
    }

    /// Override the endpoint URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

impl Translator for DeeplClient {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> TranslateResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let preview: String = trimmed.chars().take(60).collect();
        eprintln!("   🌐 Translating \"{preview}...\"");

        let params = [
            ("auth_key", self.api_key.as_str()),
            ("text", trimmed),
            ("source_lang", source.provider_code()),
            ("target_lang", target.provider_code()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| TranslateError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(TranslateError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: DeeplResponse = serde_json::from_str(&body)
            .map_err(|_| TranslateError::InvalidResponse(body.clone()))?;

        let translated = parsed
            .translations
            .into_iter()
            .next()
            .ok_or(TranslateError::InvalidResponse(body))?;

        Ok(translated.text.trim().to_string())
    }
}

// =============================================================================
// Back-fill runner
// =============================================================================

/// Outcome of one full back-fill run against the persisted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillReport {
    pub updated_rows: usize,
    pub translated_fields: usize,
    /// Whether the CSV was rewritten (false for the no-op run).
    pub rewritten: bool,
}

/// Back-fill `path` with an injected translator: load, merge, and rewrite
/// the whole file (original column order) only when rows were updated.
pub async fn run_backfill_with<T: Translator>(
    path: &Path,
    translator: &T,
) -> RunResult<BackfillReport> {
    let mut dataset = Dataset::load(path)?;

    let outcome = backfill_rows(&mut dataset.rows, translator).await?;

    let rewritten = outcome.updated_rows > 0;
    if rewritten {
        dataset.save(path)?;
    }

    Ok(BackfillReport {
        updated_rows: outcome.updated_rows,
        translated_fields: outcome.translated_fields,
        rewritten,
    })
}

/// Full back-fill run against DeepL. The credential is checked before the
/// source file is read.
pub async fn run_backfill(path: &Path) -> RunResult<BackfillReport> {
    let client = DeeplClient::from_env()?;
    run_backfill_with(path, &client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every request and answers with a canned text.
    struct FakeTranslator {
        reply: String,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl FakeTranslator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.into(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translator for FakeTranslator {
        async fn translate(
            &self,
            text: &str,
            source: Language,
            target: Language,
        ) -> TranslateResult<String> {
            self.calls.borrow_mut().push((
                text.to_string(),
                source.provider_code().to_string(),
                target.provider_code().to_string(),
            ));
            Ok(self.reply.clone())
        }
    }

    /// Fails every request with a provider 500.
    struct FailingTranslator;

    impl Translator for FailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _source: Language,
            _target: Language,
        ) -> TranslateResult<String> {
            Err(TranslateError::ApiError {
                status: 500,
                body: "internal error".into(),
            })
        }
    }

    fn row_missing_term_en() -> GlossaryRow {
        GlossaryRow {
            id: "modelo".into(),
            term_es: "Modelo".into(),
            short_es: "Representación de un proceso.".into(),
            long_es: "Una representación matemática de un proceso real.".into(),
            example_es: "El modelo predice ventas.".into(),
            short_en: "A representation of a process.".into(),
            long_en: "A mathematical representation of a real process.".into(),
            example_en: "The model forecasts sales.".into(),
            ..Default::default()
        }
    }

    fn complete_row() -> GlossaryRow {
        let mut row = row_missing_term_en();
        row.term_en = "Model".into();
        row
    }

    #[tokio::test]
    async fn test_backfill_translates_and_trims() {
        let translator = FakeTranslator::new("Model ");
        let mut rows = vec![row_missing_term_en()];

        let outcome = backfill_rows(&mut rows, &translator).await.unwrap();

        assert_eq!(rows[0].term_en, "Model");
        assert_eq!(outcome.updated_rows, 1);
        assert_eq!(outcome.translated_fields, 1);

        let calls = translator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("Modelo".to_string(), "ES".to_string(), "EN".to_string()));
    }

    #[tokio::test]
    async fn test_complete_rows_pass_through_untouched() {
        let translator = FakeTranslator::new("should not be used");
        let mut rows = vec![complete_row()];

        let outcome = backfill_rows(&mut rows, &translator).await.unwrap();

        assert_eq!(outcome, BackfillOutcome::default());
        assert!(translator.calls.borrow().is_empty());
        assert_eq!(rows[0], complete_row());
    }

    #[tokio::test]
    async fn test_blank_source_is_silently_skipped() {
        let translator = FakeTranslator::new("ignored");
        let mut row = row_missing_term_en();
        row.term_es = String::new();
        let mut rows = vec![row];

        let outcome = backfill_rows(&mut rows, &translator).await.unwrap();

        assert!(translator.calls.borrow().is_empty());
        assert_eq!(rows[0].term_en, "");
        assert_eq!(outcome.translated_fields, 0);
        // Known quirk kept from the original tool: the row still counts
        // as updated because it needed back-fill.
        assert_eq!(outcome.updated_rows, 1);
    }

    #[tokio::test]
    async fn test_provider_failure_aborts() {
        let mut rows = vec![row_missing_term_en()];
        let err = backfill_rows(&mut rows, &FailingTranslator)
            .await
            .unwrap_err();

        assert!(matches!(err, TranslateError::ApiError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_multiple_missing_fields_one_call_each() {
        let translator = FakeTranslator::new("translated");
        let mut rows = vec![GlossaryRow {
            id: "llm".into(),
            term_es: "LLM".into(),
            short_es: "Modelo grande de lenguaje.".into(),
            long_es: "Un modelo entrenado con grandes volúmenes de texto.".into(),
            example_es: String::new(),
            ..Default::default()
        }];

        let outcome = backfill_rows(&mut rows, &translator).await.unwrap();

        // term, short, long translated; example skipped (blank source).
        assert_eq!(outcome.translated_fields, 3);
        assert_eq!(outcome.updated_rows, 1);
        assert_eq!(translator.calls.borrow().len(), 3);
        assert_eq!(rows[0].term_en, "translated");
        assert_eq!(rows[0].example_en, "");
    }

    mod runner {
        use super::*;
        use std::io::Write;
        use tempfile::NamedTempFile;

        const HEADER_LINE: &str = "id,section,tags,level,status,version,created_at,updated_at,\
term_es,short_es,long_es,example_es,term_en,short_en,long_en,example_en";

        fn glossary_file(rows: &[&str]) -> NamedTempFile {
            let mut file = NamedTempFile::new().unwrap();
            writeln!(file, "{HEADER_LINE}").unwrap();
            for row in rows {
                writeln!(file, "{row}").unwrap();
            }
            file.flush().unwrap();
            file
        }

        #[tokio::test]
        async fn test_noop_run_does_not_rewrite() {
            let file = glossary_file(&[
                "llm,fundamentos,,basic,active,1,2024-01-01,2024-01-02,\
                 LLM,Modelo grande.,Un modelo de texto.,Ejemplo.,\
                 LLM,Large model.,A text model.,Example.",
            ]);
            let before = std::fs::read(file.path()).unwrap();

            let translator = FakeTranslator::new("unused");
            let report = run_backfill_with(file.path(), &translator).await.unwrap();

            assert!(!report.rewritten);
            assert_eq!(report.updated_rows, 0);
            assert_eq!(std::fs::read(file.path()).unwrap(), before);
        }

        #[tokio::test]
        async fn test_failed_call_leaves_file_untouched() {
            let file = glossary_file(&[
                "llm,fundamentos,,basic,active,1,2024-01-01,2024-01-02,\
                 LLM,Modelo grande.,Un modelo de texto.,Ejemplo.,,,,",
            ]);
            let before = std::fs::read(file.path()).unwrap();

            let err = run_backfill_with(file.path(), &FailingTranslator)
                .await
                .unwrap_err();

            assert!(err.to_string().contains("500"));
            assert_eq!(std::fs::read(file.path()).unwrap(), before);
        }

        #[tokio::test]
        async fn test_backfill_rewrites_whole_file() {
            let file = glossary_file(&[
                "llm,fundamentos,,basic,active,1,2024-01-01,2024-01-02,\
                 LLM,Modelo grande.,Un modelo de texto.,Ejemplo.,,,,",
                "ia,fundamentos,,basic,active,1,2024-01-01,2024-01-02,\
                 IA,Inteligencia artificial.,Sistemas que aprenden.,Ejemplo.,\
                 AI,Artificial intelligence.,Systems that learn.,Example.",
            ]);

            let translator = FakeTranslator::new("filled");
            let report = run_backfill_with(file.path(), &translator).await.unwrap();

            assert!(report.rewritten);
            assert_eq!(report.updated_rows, 1);
            assert_eq!(report.translated_fields, 4);

            let rewritten = Dataset::load(file.path()).unwrap();
            assert_eq!(rewritten.rows.len(), 2);
            assert_eq!(rewritten.rows[0].term_en, "filled");
            // The untouched row survives the rewrite intact.
            assert_eq!(rewritten.rows[1].term_en, "AI");
        }
    }
}
