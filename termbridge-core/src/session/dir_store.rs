//! Directory-backed session store.
//!
//! Persists one INI-style file per session path under a root directory,
//! mirroring how the host application lays its session tree out on disk.
//! Folder components become subdirectories; the session name becomes the
//! file name with an `.ini` extension.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::{Protocol, SessionPath, SessionRecord};

use super::store::SessionStore;

/// File extension for persisted session records.
pub const SESSION_FILE_EXTENSION: &str = "ini";

/// Session store writing one file per session under a root directory.
#[derive(Debug, Clone)]
pub struct DirSessionStore {
    root: PathBuf,
}

impl DirSessionStore {
    /// Creates a store rooted at the given directory. The directory is
    /// created lazily on the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a session path to a file path under the root.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] for empty paths or segments that
    /// would escape the root.
    fn file_path(&self, path: &SessionPath) -> Result<PathBuf, StoreError> {
        let mut file = self.root.clone();
        let mut segments = path.as_str().split('/').peekable();
        if path.as_str().is_empty() {
            return Err(StoreError::InvalidPath(path.as_str().to_string()));
        }
        while let Some(segment) = segments.next() {
            let segment = segment.trim();
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(StoreError::InvalidPath(path.as_str().to_string()));
            }
            let sanitized = Self::sanitize_segment(segment);
            if segments.peek().is_some() {
                file.push(sanitized);
            } else {
                file.push(format!("{sanitized}.{SESSION_FILE_EXTENSION}"));
            }
        }
        Ok(file)
    }

    /// Replaces characters that are unsafe in file names.
    fn sanitize_segment(segment: &str) -> String {
        segment
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || " .-_()".contains(c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Renders a record as the INI-style session file content.
    fn render_record(record: &SessionRecord) -> String {
        let mut output = String::new();
        output.push_str("[session]\n");
        let _ = writeln!(output, "name={}", record.session_name);
        let _ = writeln!(output, "protocol={}", record.protocol);
        let _ = writeln!(output, "hostname={}", record.hostname);
        let _ = writeln!(output, "port={}", record.effective_port());
        if let Some(username) = record.qualified_username() {
            let _ = writeln!(output, "username={username}");
        }
        if let Some(ref emulation) = record.emulation {
            let _ = writeln!(output, "emulation={emulation}");
        }
        for line in &record.description {
            let _ = writeln!(output, "description={line}");
        }
        if let Some(ref script) = record.logon_script {
            let _ = writeln!(output, "logon_script={script}");
        }
        output
    }

    /// Reads the protocol back out of a session file, for post-create
    /// verification.
    fn read_protocol(path: &Path) -> Option<Protocol> {
        let content = fs::read_to_string(path).ok()?;
        content
            .lines()
            .find_map(|line| line.strip_prefix("protocol="))
            .and_then(Protocol::from_name)
    }
}

impl SessionStore for DirSessionStore {
    fn exists(&self, path: &SessionPath) -> bool {
        self.file_path(path).is_ok_and(|file| file.exists())
    }

    fn create(
        &mut self,
        path: &SessionPath,
        record: &SessionRecord,
    ) -> Result<Protocol, StoreError> {
        let file = self.file_path(path)?;
        let io_error = |source| StoreError::Io {
            path: path.as_str().to_string(),
            source,
        };
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(&io_error)?;
        }
        fs::write(&file, Self::render_record(record)).map_err(&io_error)?;
        debug!(path = %file.display(), "session record written");
        Ok(Self::read_protocol(&file).unwrap_or(record.protocol))
    }
}
