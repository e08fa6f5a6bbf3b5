//! Bulk session import command handler.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use termbridge_core::config::{HostEnvironment, Settings, StaticDefaults};
use termbridge_core::error::ImportError;
use termbridge_core::import::{
    Delimiter, ImportEngine, ImportOptions, ImportReport, ReportDestination, ReportWriter,
};
use termbridge_core::session::{DirSessionStore, InMemorySessionStore, SessionStore};

use crate::cli::TargetOsArg;
use crate::error::CliError;

use super::create_config_manager;

/// Parameters for the import command.
pub struct ImportParams {
    /// The host data file.
    pub file: PathBuf,
    /// Explicit delimiter override, `NONE` accepted.
    pub delimiter: Option<String>,
    /// Session store root override.
    pub store_dir: Option<PathBuf>,
    /// Report directory override.
    pub report_dir: Option<PathBuf>,
    /// Target host application major version override.
    pub target_version: Option<u32>,
    /// Target operating environment override.
    pub target_os: Option<TargetOsArg>,
    /// Overwrite existing session paths.
    pub overwrite: bool,
    /// Validate without writing session records.
    pub dry_run: bool,
}

/// Import sessions command handler
pub fn cmd_import(
    config_path: Option<&Path>,
    params: &ImportParams,
    quiet: bool,
) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;
    let mut settings = manager
        .load()
        .map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(version) = params.target_version {
        settings.target_major_version = version;
    }
    if let Some(os) = params.target_os {
        settings.target_windows = Some(os.windows_like());
    }

    let environment = HostEnvironment::from_settings(&settings);
    let defaults = StaticDefaults::new(settings.fallback_protocol);
    let options = ImportOptions {
        overwrite_existing: params.overwrite || settings.overwrite_existing,
    };

    let mut delimiter = initial_delimiter(params, &settings);

    let mut memory_store;
    let mut dir_store;
    let store: &mut dyn SessionStore = if params.dry_run {
        memory_store = InMemorySessionStore::new();
        &mut memory_store
    } else {
        let root = params
            .store_dir
            .clone()
            .unwrap_or_else(|| manager.config_dir().join("sessions"));
        dir_store = DirSessionStore::new(root);
        &mut dir_store
    };

    let report = loop {
        let mut engine = ImportEngine::new(&mut *store, &defaults, environment, options);
        let report = engine
            .run_file(&params.file, delimiter.clone())
            .map_err(|e| CliError::Import(e.to_string()))?;
        // The delimiter prompt only makes sense when the operator did not
        // pin one on the command line
        let needs_prompt = params.delimiter.is_none()
            && matches!(report.fatal(), Some(ImportError::MissingDelimiter(_)));
        if !needs_prompt {
            break report;
        }
        let answer = prompt_for_delimiter(&delimiter.display_name())?;
        delimiter = Delimiter::resolve_override(&answer, &settings.delimiter);
    };

    let summary = report.render();
    if params.dry_run {
        if !quiet {
            println!("{summary}");
        }
    } else {
        deliver_report(&summary, params.report_dir.as_deref(), quiet);
    }

    if !quiet {
        println!(
            "Sessions created: {} from {} data lines ({} rejected)",
            report.sessions_created(),
            report.lines_processed(),
            report.rejections().len()
        );
    }

    finish(&report)
}

/// Builds the delimiter for the first run attempt.
fn initial_delimiter(params: &ImportParams, settings: &Settings) -> Delimiter {
    params.delimiter.as_ref().map_or_else(
        || Delimiter::Text(settings.delimiter.clone()),
        |input| Delimiter::resolve_override(input, &settings.delimiter),
    )
}

/// Asks the operator for the file's delimiter, mirroring the prompt the
/// host application's import script showed.
fn prompt_for_delimiter(shown: &str) -> Result<String, CliError> {
    eprintln!(
        "Delimiter character [{shown}] was not found in the header line of your data file."
    );
    eprint!("What is the delimiter (field separator) your file is using? Enter NONE if your data file only has a single field: ");
    std::io::stderr().flush().ok();
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_string();
    if answer.is_empty() {
        return Err(CliError::Import(
            "cannot continue without a field delimiter".to_string(),
        ));
    }
    Ok(answer)
}

/// Writes the summary through the fallback chain and tells the operator
/// where it went.
fn deliver_report(summary: &str, report_dir: Option<&Path>, quiet: bool) {
    let writer = report_dir.map_or_else(ReportWriter::with_default_locations, |dir| {
        ReportWriter::with_locations(vec![dir.to_path_buf()])
    });
    match writer.write(summary) {
        ReportDestination::File(path) => {
            if !quiet {
                println!("Summary report written to {}", path.display());
            }
        }
        ReportDestination::Handoff(text) => {
            // No destination was writable; the report goes to stdout so the
            // operator still sees what happened
            println!("{text}");
        }
    }
}

/// Maps the final report onto the command result.
fn finish(report: &ImportReport) -> Result<(), CliError> {
    match report.fatal() {
        Some(fatal) => Err(CliError::ImportAborted(fatal.to_string())),
        None => Ok(()),
    }
}
