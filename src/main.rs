//! Glossaria CLI - validate, translate, and export the glossary CSV
//!
//! # Commands
//!
//! ```bash
//! glossaria validate data/glossary.csv           # Schema + row validation
//! glossaria translate data/glossary.csv          # DeepL back-fill of EN fields
//! glossaria export data/glossary.csv -o web/public/data
//! ```
//!
//! Exit status is non-zero when validation finds errors (warnings alone
//! pass), when the source file or credential is missing, or when any
//! translation call fails.

use clap::{Parser, Subcommand};
use glossaria::{export_json, run_backfill, run_validation};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "glossaria")]
#[command(about = "Bilingual glossary toolkit: CSV validation, DeepL back-fill, JSON export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the glossary CSV (headers, rows, cross-row invariants)
    Validate {
        /// Glossary CSV file
        #[arg(default_value = "data/glossary.csv")]
        input: PathBuf,
    },

    /// Fill missing English fields via the DeepL API and rewrite the CSV
    Translate {
        /// Glossary CSV file
        #[arg(default_value = "data/glossary.csv")]
        input: PathBuf,
    },

    /// Generate per-language JSON artifacts for the web frontend
    Export {
        /// Glossary CSV file
        #[arg(default_value = "data/glossary.csv")]
        input: PathBuf,

        /// Output directory for glossary.es.json / glossary.en.json
        #[arg(short, long, default_value = "web/public/data")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Translate { input } => cmd_translate(&input).await,
        Commands::Export { input, output } => cmd_export(&input, &output),
    }
}

fn cmd_validate(input: &std::path::Path) -> ExitCode {
    let report = match run_validation(input) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    if report.diagnostics.warning_count() > 0 {
        eprintln!("⚠️  Warnings:");
        for warning in report.diagnostics.warnings() {
            eprintln!("  - {warning}");
        }
    }

    if report.diagnostics.has_errors() {
        eprintln!("❌ Errors:");
        for error in report.diagnostics.errors() {
            eprintln!("  - {error}");
        }
        return ExitCode::FAILURE;
    }

    eprintln!("✅ CSV validation passed ({} rows).", report.total_rows);
    ExitCode::SUCCESS
}

async fn cmd_translate(input: &std::path::Path) -> ExitCode {
    match run_backfill(input).await {
        Ok(report) if !report.rewritten => {
            eprintln!("✅ No missing EN fields found. Nothing to translate.");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            eprintln!(
                "✅ Translation done. Rows updated: {} ({} fields).",
                report.updated_rows, report.translated_fields
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_export(input: &std::path::Path, output: &std::path::Path) -> ExitCode {
    match export_json(input, output) {
        Ok(report) => {
            eprintln!("✅ Generated: {} ({} entries)", report.es_path.display(), report.es_count);
            eprintln!("✅ Generated: {} ({} entries)", report.en_path.display(), report.en_count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
