//! Bulk session import from delimited text files.
//!
//! The first line of an import file is a header designating the meaning of
//! every column (with optional `name=value` default annotations); every
//! following line describes one session. The pipeline is a single
//! synchronous pass:
//!
//! 1. [`FieldSchema::parse`] turns the header into an immutable schema.
//! 2. [`RecordNormalizer`] turns each data line into a validated
//!    [`SessionRecord`](crate::models::SessionRecord) or a
//!    [`LineRejection`] carrying every problem found on the line.
//! 3. [`ImportEngine`] resolves a unique session path per record, calls the
//!    [`SessionStore`](crate::session::SessionStore) collaborator, and
//!    accumulates everything into an [`ImportReport`].
//!
//! Rejected lines never stop the run; only header configuration errors and
//! a store that does not honor the requested protocol are fatal.

mod engine;
mod names;
mod record;
mod report;
mod schema;

pub use engine::{ImportEngine, ImportOptions, RunState};
pub use names::{DISALLOWED_CHARS, NameKind, NameValidator, NameViolation, RESERVED_NAMES};
pub use record::{LineRejection, RdpGateDenial, RecordNormalizer, RejectReason};
pub use report::{ImportOutcome, ImportReport, ReportDestination, ReportWriter};
pub use schema::{Delimiter, FieldKind, FieldSchema, SUPPORTED_FIELDS};
