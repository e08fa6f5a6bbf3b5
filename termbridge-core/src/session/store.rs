//! Session store trait and the in-memory implementation.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::models::{Protocol, SessionPath, SessionRecord};

/// Persists normalized session records under unique paths.
///
/// The host application's configuration tree is behind this seam. `create`
/// returns the protocol the store actually recorded so the importer can
/// verify it was honored (a mismatch aborts the run).
pub trait SessionStore {
    /// Returns true if a record already exists at the given path.
    fn exists(&self, path: &SessionPath) -> bool;

    /// Creates (or overwrites) a record at the given path.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the path cannot be represented or the
    /// record cannot be persisted.
    fn create(
        &mut self,
        path: &SessionPath,
        record: &SessionRecord,
    ) -> Result<Protocol, StoreError>;
}

/// In-memory session store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    records: HashMap<String, SessionRecord>,
    forced_protocol: Option<Protocol>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `create` report this protocol regardless of the record,
    /// simulating a store that does not honor the requested protocol.
    #[must_use]
    pub fn with_forced_protocol(mut self, protocol: Protocol) -> Self {
        self.forced_protocol = Some(protocol);
        self
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record stored at a path, if any.
    #[must_use]
    pub fn get(&self, path: &SessionPath) -> Option<&SessionRecord> {
        self.records.get(path.as_str())
    }

    /// Seeds the store with an existing record, for duplicate-handling
    /// tests.
    pub fn insert(&mut self, path: SessionPath, record: SessionRecord) {
        self.records.insert(path.as_str().to_string(), record);
    }
}

impl SessionStore for InMemorySessionStore {
    fn exists(&self, path: &SessionPath) -> bool {
        self.records.contains_key(path.as_str())
    }

    fn create(
        &mut self,
        path: &SessionPath,
        record: &SessionRecord,
    ) -> Result<Protocol, StoreError> {
        self.records
            .insert(path.as_str().to_string(), record.clone());
        Ok(self.forced_protocol.unwrap_or(record.protocol))
    }
}
