//! fOS Lint - Command line entry point
//!
//! Lints JSON markup documents and prints diagnostics. Exit status is 0
//! when every document is clean, 1 when anything was reported and 2 when
//! linting could not run.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fos_lint::{load_document, LintConfig, LintReport, Linter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fos-lint", version, about = "Accessibility lint for component markup")]
struct Cli {
    /// JSON markup documents to lint
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON rule configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("fos-lint: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Lint every file; `Ok(true)` when nothing was reported
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => LintConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => LintConfig::default(),
    };

    let documents = cli
        .files
        .iter()
        .map(|path| load_document(path).with_context(|| format!("Failed to load {}", path.display())))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let linter = Linter::new(&config);
    let reports = linter.lint_documents(&documents);
    tracing::info!("Linted {} documents", reports.len());

    match cli.format {
        Format::Text => print_text(&reports),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?
        ),
    }

    Ok(reports.iter().all(LintReport::is_clean))
}

fn print_text(reports: &[LintReport]) {
    let mut problems = 0;
    for report in reports {
        for diagnostic in &report.diagnostics {
            println!("{}", diagnostic);
        }
        for failure in &report.failures {
            println!(
                "{}: <{}> {}: rule failed: {}",
                report.source.as_deref().unwrap_or("<input>"),
                failure.tag,
                failure.rule,
                failure.error
            );
        }
        problems += report.diagnostics.len() + report.failures.len();
    }

    let elements: usize = reports.iter().map(|r| r.elements_checked).sum();
    println!(
        "{} problem(s) in {} file(s), {} element(s) checked",
        problems,
        reports.len(),
        elements
    );
}
