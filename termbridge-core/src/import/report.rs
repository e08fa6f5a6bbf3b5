//! Batch result accumulation and summary rendering.
//!
//! Nothing is ever discarded mid-run: every created path and every rejected
//! line is kept in line order until the final render. Rejected lines are
//! preserved verbatim, prefixed by the header line, so the block can be
//! saved to a new file and resubmitted after correction.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::error::ImportError;
use crate::models::SessionPath;

use super::record::LineRejection;

/// Per-line result of an import run.
#[derive(Debug)]
pub enum ImportOutcome {
    /// The line produced a session at this path.
    Created(SessionPath),
    /// The line was rejected; the run continued.
    Rejected(LineRejection),
}

/// Accumulated results of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    header_line: Option<String>,
    outcomes: Vec<ImportOutcome>,
    data_lines: usize,
    elapsed: Duration,
    fatal: Option<ImportError>,
}

impl ImportReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the header line for the resubmission block.
    pub fn set_header_line(&mut self, header: impl Into<String>) {
        self.header_line = Some(header.into());
    }

    /// Counts one data line as processed.
    pub fn count_data_line(&mut self) {
        self.data_lines += 1;
    }

    /// Records a created session.
    pub fn record_created(&mut self, path: SessionPath) {
        self.outcomes.push(ImportOutcome::Created(path));
    }

    /// Records a rejected line.
    pub fn record_rejected(&mut self, rejection: LineRejection) {
        self.outcomes.push(ImportOutcome::Rejected(rejection));
    }

    /// Records the fatal error that aborted the run.
    pub fn set_fatal(&mut self, error: ImportError) {
        self.fatal = Some(error);
    }

    /// Records the wall-clock duration of the run.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Returns the number of data lines processed (header excluded).
    #[must_use]
    pub fn lines_processed(&self) -> usize {
        self.data_lines
    }

    /// Returns the number of sessions created.
    #[must_use]
    pub fn sessions_created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImportOutcome::Created(_)))
            .count()
    }

    /// Returns the created session paths, in creation order.
    #[must_use]
    pub fn created_paths(&self) -> Vec<&SessionPath> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ImportOutcome::Created(path) => Some(path),
                ImportOutcome::Rejected(_) => None,
            })
            .collect()
    }

    /// Returns the rejections, in line order.
    #[must_use]
    pub fn rejections(&self) -> Vec<&LineRejection> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ImportOutcome::Rejected(rejection) => Some(rejection),
                ImportOutcome::Created(_) => None,
            })
            .collect()
    }

    /// Returns the rejected lines verbatim, for resubmission.
    #[must_use]
    pub fn rejected_lines(&self) -> Vec<&str> {
        self.rejections()
            .into_iter()
            .map(|r| r.line.as_str())
            .collect()
    }

    /// Returns all outcomes in line order.
    #[must_use]
    pub fn outcomes(&self) -> &[ImportOutcome] {
        &self.outcomes
    }

    /// Returns the fatal error, when the run was aborted.
    #[must_use]
    pub fn fatal(&self) -> Option<&ImportError> {
        self.fatal.as_ref()
    }

    /// Returns true when the run was aborted by a fatal error.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.fatal.is_some()
    }

    /// Returns true if any line was rejected or the run was aborted.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.is_aborted() || !self.rejections().is_empty()
    }

    /// Formatted error messages, one per rejection reason, in line order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for rejection in self.rejections() {
            for reason in &rejection.reasons {
                let shown = if rejection.line.trim().is_empty() {
                    "[Empty Line]"
                } else {
                    rejection.line.as_str()
                };
                messages.push(format!(
                    "Error: {reason} on line #{:04}: {shown}",
                    rejection.line_number
                ));
            }
        }
        messages
    }

    /// Renders the multi-paragraph plain-text summary.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::new();
        let rule_minor = "-".repeat(70);
        let rule_major = "=".repeat(70);

        if let Some(fatal) = &self.fatal {
            let _ = writeln!(text, "Import aborted: {fatal}");
            let _ = writeln!(text, "{rule_minor}");
        }

        let rejected = self.rejected_lines();
        if !rejected.is_empty() {
            let _ = writeln!(
                text,
                "The following lines from the data file were *not* imported for various \
                 reasons detailed below:"
            );
            let _ = writeln!(text, "{rule_major}");
            if let Some(header) = &self.header_line {
                let _ = writeln!(text, "{header}");
            }
            for line in &rejected {
                let _ = writeln!(text, "{line}");
            }
            let _ = writeln!(text, "{rule_minor}");
            let _ = writeln!(
                text,
                "Fix the above lines to resolve the issues and save the fixed lines to a \
                 new file. You can then run the import again for these skipped sessions.\n"
            );
        }

        let errors = self.error_messages();
        if errors.is_empty() && !self.is_aborted() {
            let _ = writeln!(
                text,
                "No errors/warnings encountered from the import operation.\n"
            );
        } else if !errors.is_empty() {
            let _ = writeln!(text, "Errors/warnings from this operation include:");
            for message in &errors {
                let _ = writeln!(text, "{message}");
            }
            let _ = writeln!(text, "{rule_minor}\n");
        }

        let _ = writeln!(
            text,
            "Import operation completed in {:.3} seconds.",
            self.elapsed.as_secs_f64()
        );
        let _ = writeln!(text, "{rule_minor}");
        if self.sessions_created() > 0 {
            let _ = writeln!(text, "Number of sessions created: {}\n", self.sessions_created());
            for path in self.created_paths() {
                let _ = writeln!(text, "    {path}");
            }
        } else {
            let _ = writeln!(
                text,
                "No sessions were created from {} lines of data.",
                self.lines_processed()
            );
        }

        text
    }
}

/// Where a report ended up.
#[derive(Debug, PartialEq, Eq)]
pub enum ReportDestination {
    /// The summary was written to this file.
    File(PathBuf),
    /// No destination was writable; the caller receives the summary text
    /// directly and decides how to surface it.
    Handoff(String),
}

/// Writes report summaries through a fallback chain of directories.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    locations: Vec<PathBuf>,
}

impl ReportWriter {
    /// Creates a writer with an explicit list of candidate directories,
    /// tried in order.
    #[must_use]
    pub fn with_locations(locations: Vec<PathBuf>) -> Self {
        Self { locations }
    }

    /// Creates a writer over the default chain: documents, desktop, then
    /// the tool's configuration directory.
    #[must_use]
    pub fn with_default_locations() -> Self {
        let mut locations = Vec::new();
        if let Some(dir) = dirs::document_dir() {
            locations.push(dir);
        }
        if let Some(dir) = dirs::desktop_dir() {
            locations.push(dir);
        }
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("termbridge"));
        }
        Self { locations }
    }

    /// Writes the summary to the first writable destination, degrading to
    /// an in-memory handoff when none is writable.
    #[must_use]
    pub fn write(&self, summary: &str) -> ReportDestination {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let file_name = format!("termbridge-import-log-{stamp}.txt");
        for dir in &self.locations {
            let path = dir.join(&file_name);
            match std::fs::write(&path, summary) {
                Ok(()) => return ReportDestination::File(path),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "report destination not writable");
                }
            }
        }
        ReportDestination::Handoff(summary.to_string())
    }
}
