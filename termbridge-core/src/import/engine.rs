//! The import run: state machine, duplicate handling, collaborator calls.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{DefaultSessionSource, HostEnvironment};
use crate::error::ImportError;
use crate::models::{SessionPath, SessionRecord};
use crate::session::SessionStore;

use super::record::{LineRejection, RecordNormalizer};
use super::report::ImportReport;
use super::schema::{Delimiter, FieldSchema};

/// Phase of an import run.
///
/// A run moves `AwaitingHeader → Processing → Reporting → Done`; a fatal
/// configuration error moves it to `Aborted` immediately, from either of
/// the first two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The header line has not been read yet.
    AwaitingHeader,
    /// Data lines are being processed.
    Processing,
    /// All lines consumed; the summary is being produced.
    Reporting,
    /// The run completed.
    Done,
    /// A fatal error ended the run early.
    Aborted,
}

/// Options controlling one import run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Replace records at already-existing paths instead of creating
    /// timestamp-suffixed siblings.
    pub overwrite_existing: bool,
}

/// Drives a whole import run against a session store.
pub struct ImportEngine<'a> {
    store: &'a mut dyn SessionStore,
    defaults: &'a dyn DefaultSessionSource,
    environment: HostEnvironment,
    options: ImportOptions,
}

impl<'a> ImportEngine<'a> {
    /// Creates an engine over a store and the default-session collaborator.
    pub fn new(
        store: &'a mut dyn SessionStore,
        defaults: &'a dyn DefaultSessionSource,
        environment: HostEnvironment,
        options: ImportOptions,
    ) -> Self {
        Self {
            store,
            defaults,
            environment,
            options,
        }
    }

    /// Runs an import over a file.
    ///
    /// The file handle lives only for the duration of the line iteration
    /// and is closed on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error only when the file cannot be opened; everything
    /// after that point is recorded in the returned report.
    pub fn run_file(&mut self, path: &Path, delimiter: Delimiter) -> Result<ImportReport, ImportError> {
        let file = File::open(path)?;
        info!(path = %path.display(), "starting import");
        Ok(self.run_reader(BufReader::new(file), delimiter))
    }

    /// Runs an import over any line source.
    ///
    /// Never fails: fatal errors abort the run and are carried inside the
    /// returned report alongside everything accumulated up to that point.
    pub fn run_reader<R: BufRead>(&mut self, reader: R, delimiter: Delimiter) -> ImportReport {
        let start = Instant::now();
        let mut report = ImportReport::new();
        let mut state = RunState::AwaitingHeader;
        let mut schema: Option<FieldSchema> = None;
        let mut created: HashSet<String> = HashSet::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = match line_result {
                Ok(line) => line.trim_end_matches('\r').to_string(),
                Err(e) => {
                    report.set_fatal(e.into());
                    state = RunState::Aborted;
                    break;
                }
            };

            match state {
                RunState::AwaitingHeader => {
                    match FieldSchema::parse(&line, delimiter.clone(), self.defaults) {
                        Ok(parsed) => {
                            report.set_header_line(line.as_str());
                            schema = Some(parsed);
                            state = RunState::Processing;
                        }
                        Err(e) => {
                            warn!(error = %e, "header rejected, aborting run");
                            report.set_fatal(e);
                            state = RunState::Aborted;
                        }
                    }
                }
                RunState::Processing => {
                    debug!(line = line_number, "processing data line");
                    report.count_data_line();
                    let Some(schema) = schema.as_ref() else {
                        break;
                    };
                    let normalizer = RecordNormalizer::new(schema, self.environment);
                    match normalizer.normalize(&line) {
                        Ok(record) => match self.import_record(&record, &mut created) {
                            Ok(path) => report.record_created(path),
                            Err(fatal) => {
                                warn!(error = %fatal, "fatal store error, aborting run");
                                report.set_fatal(fatal);
                                state = RunState::Aborted;
                            }
                        },
                        Err(reasons) => {
                            report.record_rejected(LineRejection {
                                line_number,
                                line,
                                reasons,
                            });
                        }
                    }
                }
                RunState::Reporting | RunState::Done | RunState::Aborted => break,
            }

            if state == RunState::Aborted {
                break;
            }
        }

        if state != RunState::Aborted {
            state = RunState::Reporting;
        }
        report.set_elapsed(start.elapsed());
        if state == RunState::Reporting {
            info!(
                created = report.sessions_created(),
                rejected = report.rejections().len(),
                "import complete"
            );
        }

        report
    }

    /// Persists one normalized record, verifying the store honored the
    /// requested protocol.
    fn import_record(
        &mut self,
        record: &SessionRecord,
        created: &mut HashSet<String>,
    ) -> Result<SessionPath, ImportError> {
        let base = SessionPath::new(record.folder.as_deref(), &record.session_name);
        let path = self.resolve_unique_path(base, created);
        let stored = self.store.create(&path, record)?;
        if stored != record.protocol {
            return Err(ImportError::ProtocolMismatch {
                path: path.to_string(),
                expected: record.protocol.to_string(),
                actual: stored.to_string(),
            });
        }
        created.insert(path.as_str().to_string());
        Ok(path)
    }

    /// Resolves a unique path for a new record.
    ///
    /// Collisions against the store *and* against paths created earlier in
    /// this run both get a timestamp suffix; same-second collisions get an
    /// additional counter. With `overwrite_existing` the base path is used
    /// as-is.
    fn resolve_unique_path(&self, base: SessionPath, created: &HashSet<String>) -> SessionPath {
        let collides =
            |candidate: &SessionPath| created.contains(candidate.as_str()) || self.store.exists(candidate);

        if self.options.overwrite_existing || !collides(&base) {
            return base;
        }

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let stamped = base.with_suffix(&format!(" (import_{stamp})"));
        if !collides(&stamped) {
            debug!(path = %stamped, "duplicate path, using timestamped sibling");
            return stamped;
        }
        let mut counter = 2usize;
        loop {
            let candidate = base.with_suffix(&format!(" (import_{stamp}_{counter})"));
            if !collides(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}
