//! Core data structures shared across the import pipeline and exporters.

mod protocol;
mod record;

pub use protocol::{Emulation, Protocol, ProtocolToken, VT320_MIN_MAJOR_VERSION};
pub use record::{SessionPath, SessionRecord};
